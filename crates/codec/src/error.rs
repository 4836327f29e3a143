use thiserror::Error;

/// The byte content does not follow the expected layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Truncated header: expected {expected} bytes, found {found}")]
    TruncatedHeader { expected: usize, found: usize },
    #[error("Truncated body: header declares {declared} elements, only {found} present")]
    TruncatedBody { declared: usize, found: usize },
    #[error("Invalid length: element count {0} is negative")]
    InvalidLength(i32),
    #[error("Element count {declared} exceeds the configured limit of {limit}")]
    TooLarge { declared: usize, limit: usize },
    #[error("{0} trailing bytes after the last element")]
    TrailingBytes(usize),
    #[error("Bad magic: {0:02x?}")]
    BadMagic([u8; 4]),
    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(u8),
    #[error("Unknown byte order flag: {0}")]
    UnknownByteOrder(u8),
}

/// Error type for codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
    #[error("Sequence of {len} elements does not fit in a 32-bit count")]
    TooLong { len: usize },
}

impl CodecError {
    /// True when the input bytes were malformed, as opposed to the
    /// environment failing underneath the codec.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Format(e) => Some(e),
            _ => None,
        }
    }
}
