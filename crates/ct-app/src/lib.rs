//! Shared application service layer for coldtrace.
//!
//! This crate provides a unified interface for front-ends (CLI today),
//! centralizing monitor construction, the scheduler lifecycle, and the
//! query/command boundary surface.

pub mod config;
pub mod error;
pub mod monitor;

// Re-export key types for convenience
pub use config::MonitorConfig;
pub use error::{AppError, AppResult};
pub use monitor::Monitor;
