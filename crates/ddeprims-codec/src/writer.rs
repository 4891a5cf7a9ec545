use crate::error::Result;
use crate::field::encode_field;

/// Writes consecutive string fields into a borrowed, fixed-size buffer.
#[derive(Debug)]
pub struct FieldWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> FieldWriter<'a> {
    /// Create a writer positioned at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self::at(buf, 0)
    }

    /// Create a writer positioned at `offset`.
    pub fn at(buf: &'a mut [u8], offset: usize) -> Self {
        Self { buf, pos: offset }
    }

    /// Encode `value` at the cursor and advance past it.
    ///
    /// On error nothing is written and the cursor stays put.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.pos = encode_field(self.buf, self.pos, value)?;
        Ok(())
    }

    /// Current cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the cursor.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// The bytes written so far, from the start of the buffer.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos.min(self.buf.len())]
    }
}
