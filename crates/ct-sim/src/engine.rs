//! Per-tick physical-state update.

use ct_core::round2;
use ct_model::{MonitorSettings, MonitoredUnit, SensorReading};

use crate::noise::NoiseSource;

/// How fast active cooling pulls temperature down, degrees C per tick.
const COOLING_RATE_C: f64 = 0.5;
/// Fraction of the distance to the set-point covered per tick when drifting.
const DRIFT_FRACTION: f64 = 0.1;
/// Symmetric temperature noise half-range, degrees C.
const TEMP_NOISE_C: f64 = 0.1;
/// Symmetric humidity noise half-range, percent.
const HUMIDITY_NOISE_PCT: f64 = 0.5;

/// Compute a unit's next reading.
///
/// Pure function of its inputs plus one noise draw per channel; total, with
/// no failure path (all inputs are pre-validated).
///
/// - cooling active: temperature steps down by [`COOLING_RATE_C`] toward
///   `temp_min + 1`, clamped so it never undershoots that floor;
/// - otherwise: temperature drifts 10% of the way to the set-point plus
///   noise in +/-0.1 degrees C;
/// - humidity wanders by +/-0.5, clamped to [20, 90];
/// - both channels rounded to 2 decimals;
/// - `shock_detected` is never set from this path (manual command only).
pub fn next_reading(
    unit: &MonitoredUnit,
    settings: &MonitorSettings,
    now_ms: i64,
    noise: &mut dyn NoiseSource,
) -> SensorReading {
    let prev = &unit.current_reading;

    let temperature_c = if unit.cooling_active {
        (prev.temperature_c - COOLING_RATE_C).max(settings.temp_min_c + 1.0)
    } else {
        let drift = (unit.target_temperature_c - prev.temperature_c) * DRIFT_FRACTION;
        prev.temperature_c + drift + noise.symmetric(TEMP_NOISE_C)
    };

    let humidity_pct = (prev.humidity_pct + noise.symmetric(HUMIDITY_NOISE_PCT)).clamp(20.0, 90.0);

    SensorReading::new(now_ms, round2(temperature_c), round2(humidity_pct))
}
