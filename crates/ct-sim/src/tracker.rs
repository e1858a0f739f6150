//! Consecutive-violation tracking and status derivation.

use std::collections::HashMap;

use ct_core::UnitId;
use ct_model::{MonitorSettings, SensorReading, UnitStatus};
use tracing::error;

/// A reading violates when its temperature falls outside the safe band.
pub fn is_violation(reading: &SensorReading, settings: &MonitorSettings) -> bool {
    reading.temperature_c > settings.temp_max_c || reading.temperature_c < settings.temp_min_c
}

/// Status is a total function of the counter vs. the trigger threshold:
/// no hysteresis, exact boundary values map deterministically.
///
/// - `counter == 0` -> Stable
/// - `0 < counter < trigger` -> AtRisk
/// - `counter >= trigger` -> Critical
pub fn derive_status(counter: u32, trigger: u32) -> UnitStatus {
    if counter == 0 {
        UnitStatus::Stable
    } else if counter < trigger {
        UnitStatus::AtRisk
    } else {
        UnitStatus::Critical
    }
}

/// Per-unit consecutive-violation counters.
///
/// Counters live outside the unit records and are private to the
/// store/tracker pairing; external callers only ever see the derived status.
#[derive(Debug, Clone, Default)]
pub struct ViolationTracker {
    counters: HashMap<UnitId, u32>,
}

impl ViolationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one reading into the counter for `unit_id` and derive the status.
    ///
    /// The counter increments on a violating reading and resets to 0 on the
    /// first non-violating one. Total: a bad trigger is clamped (and logged)
    /// rather than faulting the tick.
    pub fn observe(
        &mut self,
        unit_id: &UnitId,
        reading: &SensorReading,
        settings: &MonitorSettings,
    ) -> (u32, UnitStatus) {
        let counter = self.counters.entry(unit_id.clone()).or_insert(0);
        if is_violation(reading, settings) {
            *counter += 1;
        } else {
            *counter = 0;
        }
        let counter = *counter;

        // Settings validation keeps the trigger >= 1; seeing 0 here means an
        // internal invariant broke somewhere upstream.
        let trigger = settings.consecutive_violations_trigger;
        let trigger = if trigger == 0 {
            error!(unit = %unit_id, "violation trigger is 0, clamping to 1");
            1
        } else {
            trigger
        };

        (counter, derive_status(counter, trigger))
    }

    /// Current counter for a unit (0 if never observed).
    pub fn counter(&self, unit_id: &UnitId) -> u32 {
        self.counters.get(unit_id).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn settings() -> MonitorSettings {
        MonitorSettings::default() // band [2, 8], trigger 3
    }

    fn reading(temp: f64) -> SensorReading {
        SensorReading::new(0, temp, 45.0)
    }

    #[test]
    fn boundary_temperatures_are_not_violations() {
        let s = settings();
        assert!(!is_violation(&reading(2.0), &s));
        assert!(!is_violation(&reading(8.0), &s));
        assert!(is_violation(&reading(8.01), &s));
        assert!(is_violation(&reading(1.99), &s));
    }

    #[test]
    fn counter_increments_and_resets() {
        let mut tracker = ViolationTracker::new();
        let s = settings();
        let id = UnitId::new("BX-1001");

        assert_eq!(tracker.observe(&id, &reading(9.0), &s), (1, UnitStatus::AtRisk));
        assert_eq!(tracker.observe(&id, &reading(9.0), &s), (2, UnitStatus::AtRisk));
        assert_eq!(tracker.observe(&id, &reading(9.0), &s), (3, UnitStatus::Critical));
        assert_eq!(tracker.observe(&id, &reading(5.0), &s), (0, UnitStatus::Stable));
        assert_eq!(tracker.counter(&id), 0);
    }

    #[test]
    fn counters_are_independent_per_unit() {
        let mut tracker = ViolationTracker::new();
        let s = settings();
        let a = UnitId::new("BX-1001");
        let b = UnitId::new("BX-1002");

        tracker.observe(&a, &reading(9.0), &s);
        tracker.observe(&a, &reading(9.0), &s);
        tracker.observe(&b, &reading(9.0), &s);
        assert_eq!(tracker.counter(&a), 2);
        assert_eq!(tracker.counter(&b), 1);
    }

    #[test]
    fn zero_trigger_is_clamped_not_fatal() {
        let mut tracker = ViolationTracker::new();
        let mut s = settings();
        s.consecutive_violations_trigger = 0;
        let id = UnitId::new("BX-1001");
        let (counter, status) = tracker.observe(&id, &reading(9.0), &s);
        assert_eq!(counter, 1);
        assert_eq!(status, UnitStatus::Critical);
    }

    proptest! {
        // status <-> counter relation is total and exact at the boundaries
        #[test]
        fn status_counter_relation(counter in 0u32..10_000, trigger in 1u32..10_000) {
            let status = derive_status(counter, trigger);
            prop_assert_eq!(status == UnitStatus::Critical, counter >= trigger);
            prop_assert_eq!(status == UnitStatus::AtRisk, counter > 0 && counter < trigger);
            prop_assert_eq!(status == UnitStatus::Stable, counter == 0);
        }
    }
}
