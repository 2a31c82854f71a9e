//! Error types for the engine

use thiserror::Error;

/// Errors raised by the engine and its loaders
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Could not parse {field} from {value:?}")]
    Parse { field: String, value: String },

    #[error("Unknown threshold name: {0}")]
    UnknownThreshold(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Standard result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
