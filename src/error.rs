//! Error types for bit vector operations.

use thiserror::Error;

/// Error variants for bit vector operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A vector was requested with a bit width of zero.
    #[error("bit width must be at least 1")]
    InvalidSize,

    /// A logical bit position at or beyond the declared width was addressed.
    #[error("position out of range: {position} >= {size}")]
    OutOfRange {
        /// The rejected position.
        position: usize,
        /// The declared width of the vector.
        size: usize,
    },

    /// A binary logic operation was attempted between vectors of different widths.
    #[error("size mismatch: {left} != {right}")]
    SizeMismatch {
        /// Width of the left operand.
        left: usize,
        /// Width of the right operand.
        right: usize,
    },

    /// A character other than `'0'` or `'1'` appeared in a binary-digit string.
    #[error("unknown character {0:?} in binary string")]
    UnknownCharacter(char),

    /// An I/O error occurred while reading a token from a stream.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for bit vector operations.
pub type Result<T> = std::result::Result<T, Error>;
