use thiserror::Error;

/// Error type for the configuration and front-end surfaces of Stepwise.
///
/// The search itself never fails: collapsed steps and exhausted budgets are
/// ordinary outcomes. Errors only arise while building or loading a search.
#[derive(Error, Debug)]
pub enum SwError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown objective: {name}")]
    UnknownObjective { name: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Stepwise operations
pub type SwResult<T> = Result<T, SwError>;

/// Macro for creating validation errors
#[macro_export]
macro_rules! validation_error {
    ($($arg:tt)*) => {
        $crate::SwError::Validation(format!($($arg)*))
    };
}

/// Macro for creating configuration errors
#[macro_export]
macro_rules! config_error {
    ($($arg:tt)*) => {
        $crate::SwError::Config(format!($($arg)*))
    };
}
