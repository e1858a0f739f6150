//! Alert lifecycle logic: edge-triggered creation, cooling-gated resolution,
//! and the manual shock contract.

use ct_core::UnitId;
use ct_model::{Alert, MonitorSettings, MonitoredUnit, SensorReading, UnitStatus};

use crate::tracker::is_violation;

/// One alert-log mutation produced by the tick or a command.
///
/// The store applies effects; this crate only decides them.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertEffect {
    /// Append a new active alert (newest-first on the consumer side).
    Raise(Alert),
    /// Resolve every currently-active alert belonging to the unit.
    ResolveAllFor(UnitId),
}

/// Outcome of the per-unit alert evaluation on the tick path.
#[derive(Debug, Clone, PartialEq)]
pub struct TickEvaluation {
    /// Corrective-action flag to carry into the updated unit.
    pub cooling_active: bool,
    pub effects: Vec<AlertEffect>,
}

/// Evaluate the tick-path alert rules for one unit.
///
/// - Escalation is edge-triggered: exactly one Critical alert on the
///   Stable/AtRisk -> Critical transition, none while the unit stays
///   Critical. Critical always engages cooling.
/// - De-escalation: cooling active and the counter back at 0 clears cooling
///   and resolves every open alert for the unit. This is the only automatic
///   resolution path.
/// - AtRisk is silent: it neither raises nor resolves anything.
pub fn evaluate_tick(
    unit: &MonitoredUnit,
    reading: &SensorReading,
    counter: u32,
    new_status: UnitStatus,
    settings: &MonitorSettings,
    now_ms: i64,
) -> TickEvaluation {
    let mut cooling_active = unit.cooling_active;
    let mut effects = Vec::new();

    if new_status == UnitStatus::Critical {
        cooling_active = true;
        if unit.status != UnitStatus::Critical {
            effects.push(AlertEffect::Raise(Alert::critical(
                unit.id.clone(),
                unit.name.clone(),
                now_ms,
                format!(
                    "CRITICAL: Temp deviation ({}°C) sustained for {}s.",
                    reading.temperature_c, counter
                ),
            )));
        }
    }

    if cooling_active && !is_violation(reading, settings) && counter == 0 {
        cooling_active = false;
        effects.push(AlertEffect::ResolveAllFor(unit.id.clone()));
    }

    TickEvaluation {
        cooling_active,
        effects,
    }
}

/// Apply the manual shock command to one unit.
///
/// The current reading is re-recorded with `shock_detected = true` at `now`.
/// If the unit is already AtRisk or Critical the shock escalates it: status
/// forced Critical, cooling engaged, and a new alert raised unconditionally
/// (never deduplicated against open alerts). On a Stable unit only the
/// reading is recorded.
pub fn apply_shock(unit: &MonitoredUnit, now_ms: i64) -> (MonitoredUnit, Option<Alert>) {
    let shock_reading = unit.current_reading.as_shock(now_ms);

    let mut updated = unit.clone();
    updated.current_reading = shock_reading;
    updated.history.push(shock_reading);

    match unit.status {
        UnitStatus::AtRisk | UnitStatus::Critical => {
            updated.status = UnitStatus::Critical;
            updated.cooling_active = true;
            let alert = Alert::critical(
                unit.id.clone(),
                unit.name.clone(),
                now_ms,
                "CRITICAL: Shock detected during temperature excursion!",
            );
            (updated, Some(alert))
        }
        UnitStatus::Stable => (updated, None),
    }
}
