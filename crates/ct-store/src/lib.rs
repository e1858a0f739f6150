//! ct-store: the authoritative state of the monitor.
//!
//! Owns the unit collection, the append-only alert log, and the settings,
//! and funnels every mutation (the scheduler's tick and all manual commands)
//! through a single serialization point. External collaborators only ever
//! see clone-out snapshots.

pub mod error;
pub mod scheduler;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use scheduler::TickDriver;
pub use store::StateStore;
