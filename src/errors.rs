use thiserror::Error;

/// Error type that captures persistence failures from site backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("`{0}` not found")]
    NotFound(String),
    #[error("{0}")]
    Invalid(String),
}

impl StoreError {
    /// True when the failure is an absent row rather than a broken backend.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Error type for user-correctable editing failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("{0}")]
    Validation(String),
    #[error("Failed to save. Please try again.")]
    SaveFailed,
}
