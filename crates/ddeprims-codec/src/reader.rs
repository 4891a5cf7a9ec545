use crate::error::Result;
use crate::field::decode_field;

/// Reads consecutive string fields out of a borrowed buffer.
///
/// Carries the cursor between calls. A failed read leaves the cursor where
/// it was, so the caller can report the offending offset.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    /// Create a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self::at(buf, 0)
    }

    /// Create a reader positioned at `offset`.
    pub fn at(buf: &'a [u8], offset: usize) -> Self {
        Self { buf, pos: offset }
    }

    /// Read the next field and advance past it.
    pub fn read_string(&mut self) -> Result<String> {
        let (value, next) = decode_field(self.buf, self.pos)?;
        self.pos = next;
        Ok(value)
    }

    /// Read fields until the buffer is exhausted.
    ///
    /// Fails on the first malformed field, including a starting offset past
    /// the end of the buffer.
    pub fn read_to_end(&mut self) -> Result<Vec<String>> {
        let mut values = Vec::new();
        while !self.is_exhausted() {
            values.push(self.read_string()?);
        }
        Ok(values)
    }

    /// Current cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the cursor.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// True once the cursor sits exactly at the end of the buffer.
    ///
    /// A cursor past the end is not exhausted: the next read reports it as a
    /// truncated header.
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Borrow the underlying buffer.
    pub fn get_ref(&self) -> &'a [u8] {
        self.buf
    }
}
