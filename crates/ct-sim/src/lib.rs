//! ct-sim: the telemetry simulation and violation-alerting core.
//!
//! Provides:
//! - the per-tick physical-state update (engine)
//! - the consecutive-violation tracker and the status state machine it drives
//! - alert lifecycle logic: edge-triggered raise, cooling-gated resolution,
//!   the manual shock contract
//! - the pure batch transform one scheduler tick applies to the whole fleet
//!
//! Everything here is a pure function of its inputs plus the injected noise
//! source; there is no clock, no scheduler, and no shared state, which is
//! what makes the core independently testable.

pub mod alerts;
pub mod engine;
pub mod noise;
pub mod tick;
pub mod tracker;

// Re-exports for public API
pub use alerts::{apply_shock, evaluate_tick, AlertEffect, TickEvaluation};
pub use engine::next_reading;
pub use noise::{NoiseSource, SeededNoise, ZeroNoise};
pub use tick::{advance_fleet, TickOutcome};
pub use tracker::{derive_status, is_violation, ViolationTracker};
