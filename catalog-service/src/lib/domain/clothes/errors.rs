use thiserror::Error;

/// Error for Color parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Unknown color: {0}")]
    Unknown(String),
}

/// Error for Size parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SizeError {
    #[error("Unknown size: {0}")]
    Unknown(String),
}

/// Top-level error for catalog operations
#[derive(Debug, Clone, Error)]
pub enum ClothesError {
    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ColorError),

    #[error("Invalid size: {0}")]
    InvalidSize(#[from] SizeError),

    #[error("Clothes not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
