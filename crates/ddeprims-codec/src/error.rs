/// Why a field could not be read from a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    /// Fewer than four bytes remain for the length header.
    #[error("insufficient bytes for length header ({available} available)")]
    TruncatedHeader { available: usize },

    /// The declared length runs past the end of the buffer.
    #[error("incomplete string (declared {declared} bytes, {available} available)")]
    TruncatedText { declared: u32, available: usize },
}

/// Errors that can occur during field and format encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The buffer is too short for a declared or required field.
    #[error("malformed field at offset {offset}: {kind}")]
    MalformedInput { offset: usize, kind: Malformed },

    /// The destination buffer cannot hold the encoded field.
    #[error("not enough space for field ({needed} bytes needed, {available} available)")]
    InsufficientSpace { needed: usize, available: usize },

    /// No encoding rule exists for the requested clipboard format.
    #[error("unsupported data format {0}")]
    UnsupportedFormat(u32),

    /// The field length does not fit in the 32-bit length header.
    #[error("field too large ({size} bytes, max {max})")]
    FieldTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, CodecError>;
