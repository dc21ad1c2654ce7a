use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the domain, storage, and configuration layers.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Corrupt data: {0}")]
    CorruptData(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::StorageUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::CorruptData(err.to_string())
    }
}
