//! The pure batch transform one scheduler tick applies to the fleet.

use ct_model::{MonitorSettings, MonitoredUnit};

use crate::alerts::{evaluate_tick, AlertEffect};
use crate::engine::next_reading;
use crate::noise::NoiseSource;
use crate::tracker::ViolationTracker;

/// Result of advancing the whole fleet by one tick: the replacement unit
/// collection plus the alert-log mutations to apply with it, as one
/// indivisible update.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub units: Vec<MonitoredUnit>,
    pub effects: Vec<AlertEffect>,
}

/// Advance every unit by one tick: engine -> tracker -> alert evaluation.
///
/// Pure transform over the collection (old snapshot in, new snapshot out);
/// the caller applies the outcome atomically. Total: no per-unit failure can
/// abort processing of the remaining units.
pub fn advance_fleet(
    units: &[MonitoredUnit],
    tracker: &mut ViolationTracker,
    settings: &MonitorSettings,
    now_ms: i64,
    noise: &mut dyn NoiseSource,
) -> TickOutcome {
    let mut next_units = Vec::with_capacity(units.len());
    let mut effects = Vec::new();

    for unit in units {
        let reading = next_reading(unit, settings, now_ms, noise);
        let (counter, new_status) = tracker.observe(&unit.id, &reading, settings);
        let eval = evaluate_tick(unit, &reading, counter, new_status, settings, now_ms);

        let mut updated = unit.clone();
        updated.current_reading = reading;
        updated.history.push(reading);
        updated.status = new_status;
        updated.cooling_active = eval.cooling_active;

        next_units.push(updated);
        effects.extend(eval.effects);
    }

    TickOutcome {
        units: next_units,
        effects,
    }
}
