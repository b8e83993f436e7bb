use thiserror::Error;

/// Errors produced while decoding bencode.
///
/// Every variant carries the byte offset at which decoding stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("invalid integer at offset {offset}")]
    InvalidInteger { offset: usize },

    #[error("invalid string length at offset {offset}")]
    InvalidLength { offset: usize },

    #[error("invalid bencode data at {offset}: unexpected byte 0x{byte:02x}")]
    InvalidLeadByte { offset: usize, byte: u8 },

    #[error("duplicate dictionary key at offset {offset}")]
    DuplicateKey { offset: usize },

    #[error("nesting too deep at offset {offset}")]
    NestingTooDeep { offset: usize },

    #[error("trailing data after value at offset {offset}")]
    TrailingData { offset: usize },
}

impl DecodeError {
    /// Byte offset into the input where the error was detected.
    pub fn offset(&self) -> usize {
        match *self {
            DecodeError::UnexpectedEnd { offset }
            | DecodeError::InvalidInteger { offset }
            | DecodeError::InvalidLength { offset }
            | DecodeError::InvalidLeadByte { offset, .. }
            | DecodeError::DuplicateKey { offset }
            | DecodeError::NestingTooDeep { offset }
            | DecodeError::TrailingData { offset } => offset,
        }
    }
}

/// Errors produced while encoding bencode.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The input has no bencode representation (floats, booleans, unit, `None`).
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),

    #[error("dictionary keys must be byte strings")]
    NonByteStringKey,

    #[error("{0}")]
    Custom(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
