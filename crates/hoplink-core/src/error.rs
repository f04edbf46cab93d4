use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store serialization failed: {0}")]
    Serialization(String),
    #[error("store value is invalid: {0}")]
    InvalidData(String),
    #[error("store initialization failed: {0}")]
    Initialization(String),
    #[error("store operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("invalid token: {0}")]
    InvalidToken(String),
}

#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("url must not be empty")]
    EmptyUrl,
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
