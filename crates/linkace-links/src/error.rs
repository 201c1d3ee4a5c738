use linkace_core::{CoreError, LinkId, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinkServiceError>;

#[derive(Debug, Clone, Error)]
pub enum LinkServiceError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("link not found: {0}")]
    NotFound(LinkId),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<CoreError> for LinkServiceError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidUrl(message) => Self::InvalidUrl(message),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

impl From<StorageError> for LinkServiceError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other.to_string()),
        }
    }
}
