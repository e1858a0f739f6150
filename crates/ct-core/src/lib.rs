//! ct-core: stable foundation for coldtrace.
//!
//! Contains:
//! - ids (unit and alert identifiers)
//! - error (shared error types)
//! - numeric (float helpers shared by the simulation core)
//! - clock (injectable monotonic wall-clock source)

pub mod clock;
pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, CoreResult};
pub use ids::*;
pub use numeric::*;
