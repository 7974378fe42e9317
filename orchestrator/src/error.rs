//! Orchestrator-specific error types

use thiserror::Error;
use catalog::CatalogError;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("No recent search at position {position}")]
    InvalidSelection { position: usize },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl OrchestratorError {
    pub fn config(field: impl Into<String>) -> Self {
        OrchestratorError::ConfigurationError { field: field.into() }
    }
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
