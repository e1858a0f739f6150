use serde::{Deserialize, Serialize};

/// One telemetry sample from a unit's sensors.
///
/// Immutable once produced: the engine (or a manual command) builds a new
/// reading each tick and appends it; nothing ever edits a stored reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Sample time, epoch milliseconds.
    pub timestamp_ms: i64,
    /// Temperature in degrees Celsius, rounded to 2 decimals.
    pub temperature_c: f64,
    /// Relative humidity in percent, clamped to [20, 90], rounded to 2 decimals.
    pub humidity_pct: f64,
    /// Set only by the manual shock command, never by the physical model.
    pub shock_detected: bool,
}

impl SensorReading {
    pub fn new(timestamp_ms: i64, temperature_c: f64, humidity_pct: f64) -> Self {
        Self {
            timestamp_ms,
            temperature_c,
            humidity_pct,
            shock_detected: false,
        }
    }

    /// Copy of this reading re-stamped as a shock event.
    pub fn as_shock(&self, timestamp_ms: i64) -> Self {
        Self {
            timestamp_ms,
            shock_detected: true,
            ..*self
        }
    }
}
