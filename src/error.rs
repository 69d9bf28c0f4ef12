use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelError {
    #[error("Missing point count header")]
    MissingCount,

    #[error("Invalid point count: {0:?}")]
    InvalidCount(String),

    #[error("Invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    #[error("Truncated input: expected {expected} points, found {found}")]
    TruncatedInput { expected: u64, found: u64 },

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KernelError>;
