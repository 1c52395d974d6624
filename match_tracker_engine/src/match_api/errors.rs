use thiserror::Error;

use crate::{db_types::ValidationError, traits::StorageError};

#[derive(Debug, Clone, Error)]
pub enum MatchApiError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Match {0} not found")]
    MatchNotFound(i64),
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for MatchApiError {
    fn from(e: StorageError) -> Self {
        MatchApiError::StorageError(e.to_string())
    }
}

impl From<ValidationError> for MatchApiError {
    fn from(e: ValidationError) -> Self {
        MatchApiError::ValidationError(e.0)
    }
}
