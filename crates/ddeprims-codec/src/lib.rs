//! Wire codecs for legacy DDE data exchange.
//!
//! Two layers live here:
//! - String fields: a 4-byte little-endian length followed by UTF-8 text
//!   whose last byte is a NUL terminator counted in the length.
//! - Clipboard formats: per-format text encoding rules for values carried
//!   in a data buffer (`CF_TEXT`, `CF_UNICODETEXT`, opaque passthrough).
//!
//! Every function is pure over the buffer it is handed. Sequencing access to
//! a shared buffer is the caller's job.

pub mod clipboard;
pub mod error;
pub mod field;
pub mod format;
pub mod reader;
pub mod writer;

pub use clipboard::{format_by_name, format_name, CF_TEXT, CF_UNICODETEXT};
pub use encoding_rs::Encoding;
pub use error::{CodecError, Malformed, Result};
pub use field::{decode_field, encode_field, field_size, put_field, LENGTH_PREFIX_SIZE};
pub use format::{
    decode_format, encode_format, DataFormat, FormatCodec, FormatConfig, FormatValue,
};
pub use reader::FieldReader;
pub use writer::FieldWriter;
