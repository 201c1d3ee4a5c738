use crate::link::LinkId;
use thiserror::Error;

/// Errors related to the core link domain.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid link status code: {0}")]
    InvalidStatus(u8),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("link not found: {0}")]
    NotFound(LinkId),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    #[error("settings backend unavailable: {0}")]
    Unavailable(String),
    #[error("settings lookup failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, Error)]
pub enum ArchiveError {
    #[error("archive queue is closed")]
    QueueClosed,
    #[error("archive submission failed: {0}")]
    Submission(String),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
}
