//! Error types for the ct-app service layer.

use thiserror::Error;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for front-ends.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unit not found: {0}")]
    UnitNotFound(String),

    #[error("Alert not found: {0}")]
    AlertNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Monitor is not running")]
    NotRunning,
}

/// Result type for ct-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<ct_store::StoreError> for AppError {
    fn from(err: ct_store::StoreError) -> Self {
        match err {
            ct_store::StoreError::UnitNotFound(id) => AppError::UnitNotFound(id.to_string()),
            ct_store::StoreError::AlertNotFound(id) => AppError::AlertNotFound(id.to_string()),
            ct_store::StoreError::InvalidInput { what } => AppError::InvalidInput(what.to_string()),
        }
    }
}
