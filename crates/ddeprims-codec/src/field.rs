use bytes::{Buf, BufMut, BytesMut};
use tracing::trace;

use crate::error::{CodecError, Malformed, Result};

/// Size of the little-endian length header in front of every field.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Terminator byte closing every field's text. Counted in the length header.
pub const TERMINATOR: u8 = 0x00;

/// Wire size of `value` encoded as a field (header + text + terminator).
pub fn field_size(value: &str) -> usize {
    LENGTH_PREFIX_SIZE + value.len() + 1
}

/// Decode the string field starting at `offset`.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────────────────────┐
/// │ Length L     │ Text (L bytes, UTF-8)        │
/// │ (4B LE)      │ last byte is 0x00            │
/// └──────────────┴──────────────────────────────┘
/// ```
///
/// Returns the text without its terminator and the offset just past the
/// field. Invalid UTF-8 is replaced with U+FFFD rather than rejected.
pub fn decode_field(buf: &[u8], offset: usize) -> Result<(String, usize)> {
    trace!(offset, len = buf.len(), "decoding string field");

    let available = buf.len().saturating_sub(offset);
    if available < LENGTH_PREFIX_SIZE {
        return Err(CodecError::MalformedInput {
            offset,
            kind: Malformed::TruncatedHeader { available },
        });
    }

    let declared = (&buf[offset..]).get_u32_le();
    let remaining = available - LENGTH_PREFIX_SIZE;
    if remaining < declared as usize {
        return Err(CodecError::MalformedInput {
            offset,
            kind: Malformed::TruncatedText {
                declared,
                available: remaining,
            },
        });
    }

    let start = offset + LENGTH_PREFIX_SIZE;
    let end = start + declared as usize;
    // A zero length has no terminator to strip.
    let text_end = end.saturating_sub(1).max(start);
    let value = String::from_utf8_lossy(&buf[start..text_end]).into_owned();

    Ok((value, end))
}

/// Encode `value` as a string field at `offset`, returning the first unused
/// offset.
///
/// Space is checked up front: on error the buffer is left untouched.
pub fn encode_field(buf: &mut [u8], offset: usize, value: &str) -> Result<usize> {
    trace!(offset, len = buf.len(), value, "encoding string field");

    let declared = declared_len(value)?;
    let needed = offset.saturating_add(field_size(value));
    if buf.len() < needed {
        return Err(CodecError::InsufficientSpace {
            needed,
            available: buf.len(),
        });
    }

    let mut dst = &mut buf[offset..needed];
    dst.put_u32_le(declared);
    dst.put_slice(value.as_bytes());
    dst.put_u8(TERMINATOR);

    Ok(needed)
}

/// Append `value` as a string field to a growable buffer.
pub fn put_field(dst: &mut BytesMut, value: &str) -> Result<()> {
    let declared = declared_len(value)?;
    dst.reserve(field_size(value));
    dst.put_u32_le(declared);
    dst.put_slice(value.as_bytes());
    dst.put_u8(TERMINATOR);
    Ok(())
}

fn declared_len(value: &str) -> Result<u32> {
    let max = u32::MAX as usize - 1;
    if value.len() > max {
        return Err(CodecError::FieldTooLarge {
            size: value.len(),
            max,
        });
    }
    Ok(value.len() as u32 + 1)
}
