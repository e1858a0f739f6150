//! Error types for store commands.

use ct_core::{AlertId, UnitId};
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by store commands.
///
/// None of these are fatal: the process keeps ticking after any of them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("Unit not found: {0}")]
    UnitNotFound(UnitId),

    #[error("Alert not found: {0}")]
    AlertNotFound(AlertId),

    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },
}

impl From<ct_core::CoreError> for StoreError {
    fn from(e: ct_core::CoreError) -> Self {
        match e {
            ct_core::CoreError::NonFinite { what, .. } => StoreError::InvalidInput { what },
            ct_core::CoreError::InvalidArg { what } => StoreError::InvalidInput { what },
            ct_core::CoreError::Invariant { what } => StoreError::InvalidInput { what },
        }
    }
}
