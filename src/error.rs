//! Error types for the condition engine

use thiserror::Error;

/// Main error type for the condition engine
#[derive(Error, Debug)]
pub enum ConditionError {
    #[error("Unrecognized condition expression: {0}")]
    UnrecognizedExpression(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the condition engine
pub type Result<T> = std::result::Result<T, ConditionError>;
