//! Shared error types for the recipe explorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid catalog record: missing {field}")]
    InvalidRecord { field: String },

    #[error("Deserialization failed: {message}")]
    DeserializationError { message: String },
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        SharedError::DeserializationError {
            message: err.to_string(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
