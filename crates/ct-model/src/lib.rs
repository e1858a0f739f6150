//! ct-model: domain types for the coldtrace monitoring core.
//!
//! Provides:
//! - sensor readings and the bounded per-unit reading history
//! - monitored units and their status state machine states
//! - the append-only alert record
//! - monitor settings with field-by-field validated patching
//! - the seed fleet the monitor starts with

pub mod alert;
pub mod history;
pub mod reading;
pub mod seed;
pub mod settings;
pub mod unit;

// Re-exports for public API
pub use alert::{Alert, AlertSeverity};
pub use history::{ReadingHistory, HISTORY_CAPACITY};
pub use reading::SensorReading;
pub use seed::seed_fleet;
pub use settings::{MonitorSettings, SettingsPatch};
pub use unit::{MonitoredUnit, UnitStatus};
