use thiserror::Error;

// Unified error type for linvec

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LvError {
    #[error("vector dimension must be non-negative, given: {0}")]
    NegativeDimension(i64),
    #[error("index {index} out of bounds for dimension {size}")]
    IndexOutOfBounds { index: usize, size: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unsupported option: {0}")]
    Unsupported(String),
}
