//! The single serialization point for fleet, alerts, and settings.

use std::sync::{Arc, Mutex};

use ct_core::{ensure_finite, AlertId, Clock, UnitId};
use ct_model::{Alert, MonitorSettings, MonitoredUnit, SettingsPatch};
use ct_sim::{advance_fleet, apply_shock, AlertEffect, NoiseSource, ViolationTracker};
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};

struct Inner {
    fleet: Vec<MonitoredUnit>,
    /// Append-only alert log, newest-first.
    alerts: Vec<Alert>,
    settings: MonitorSettings,
    tracker: ViolationTracker,
    noise: Box<dyn NoiseSource + Send>,
}

/// Authoritative store for the monitored fleet.
///
/// One mutex guards all state, so the scheduler's tick and every manual
/// command are mutually exclusive by construction and no reader ever
/// observes a partially-updated fleet.
pub struct StateStore {
    inner: Mutex<Inner>,
    clock: Arc<dyn Clock>,
}

impl StateStore {
    pub fn new(
        fleet: Vec<MonitoredUnit>,
        settings: MonitorSettings,
        clock: Arc<dyn Clock>,
        noise: Box<dyn NoiseSource + Send>,
    ) -> Self {
        Self {
            inner: Mutex::new(Inner {
                fleet,
                alerts: Vec::new(),
                settings,
                tracker: ViolationTracker::new(),
                noise,
            }),
            clock,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a panic inside a tick or command; the state
        // itself is still a consistent snapshot (ticks apply atomically).
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    // --- queries (clone-out snapshots) ---

    pub fn fleet_snapshot(&self) -> Vec<MonitoredUnit> {
        self.lock().fleet.clone()
    }

    pub fn alerts_snapshot(&self) -> Vec<Alert> {
        self.lock().alerts.clone()
    }

    pub fn settings(&self) -> MonitorSettings {
        self.lock().settings
    }

    // --- tick ---

    /// Advance the whole fleet by one tick and apply the result as one
    /// indivisible update.
    pub fn tick(&self) {
        let now_ms = self.clock.now_ms();
        let mut guard = self.lock();
        let inner = &mut *guard;

        let outcome = advance_fleet(
            &inner.fleet,
            &mut inner.tracker,
            &inner.settings,
            now_ms,
            inner.noise.as_mut(),
        );

        inner.fleet = outcome.units;
        for effect in outcome.effects {
            apply_effect(&mut inner.alerts, effect, now_ms);
        }
    }

    // --- commands ---

    /// Overwrite a unit's set-point. Takes effect on the next tick's drift
    /// calculation; no immediate recompute, no alert side effects.
    pub fn set_target_temperature(&self, unit_id: &UnitId, value_c: f64) -> StoreResult<()> {
        ensure_finite(value_c, "target temperature")?;
        let mut inner = self.lock();
        let unit = find_unit_mut(&mut inner.fleet, unit_id)?;
        unit.target_temperature_c = value_c;
        Ok(())
    }

    /// Inject a manual shock event. Returns the raised alert's id when the
    /// shock escalated the unit.
    pub fn trigger_shock(&self, unit_id: &UnitId) -> StoreResult<Option<AlertId>> {
        let now_ms = self.clock.now_ms();
        let mut inner = self.lock();
        let unit = find_unit_mut(&mut inner.fleet, unit_id)?;

        let (updated, alert) = apply_shock(unit, now_ms);
        *unit = updated;

        Ok(alert.map(|alert| {
            let id = alert.id.clone();
            warn!(unit = %unit_id, alert = %id, "shock escalation alert raised");
            inner.alerts.insert(0, alert);
            id
        }))
    }

    /// Manually acknowledge one alert: marks exactly that alert inactive,
    /// independent of the owning unit's counter or status.
    pub fn reset_alert(&self, alert_id: &AlertId) -> StoreResult<()> {
        let now_ms = self.clock.now_ms();
        let mut inner = self.lock();
        let alert = inner
            .alerts
            .iter_mut()
            .find(|a| &a.id == alert_id)
            .ok_or_else(|| StoreError::AlertNotFound(alert_id.clone()))?;
        alert.resolve(now_ms);
        Ok(())
    }

    /// Merge a settings patch field-by-field and return the settings now in
    /// force. Invalid fields are dropped; valid fields in the same patch
    /// still apply.
    pub fn update_settings(&self, patch: &SettingsPatch) -> MonitorSettings {
        let mut inner = self.lock();
        inner.settings.apply_patch(patch);
        inner.settings
    }
}

fn find_unit_mut<'a>(
    fleet: &'a mut [MonitoredUnit],
    unit_id: &UnitId,
) -> StoreResult<&'a mut MonitoredUnit> {
    fleet
        .iter_mut()
        .find(|u| &u.id == unit_id)
        .ok_or_else(|| StoreError::UnitNotFound(unit_id.clone()))
}

fn apply_effect(alerts: &mut Vec<Alert>, effect: AlertEffect, now_ms: i64) {
    match effect {
        AlertEffect::Raise(alert) => {
            warn!(unit = %alert.unit_id, alert = %alert.id, message = %alert.message, "alert raised");
            alerts.insert(0, alert);
        }
        AlertEffect::ResolveAllFor(unit_id) => {
            for alert in alerts.iter_mut().filter(|a| a.unit_id == unit_id && a.active) {
                info!(unit = %unit_id, alert = %alert.id, "alert auto-resolved");
                alert.resolve(now_ms);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::ManualClock;
    use ct_model::{seed_fleet, SensorReading, UnitStatus};
    use ct_sim::ZeroNoise;

    fn store_with(fleet: Vec<MonitoredUnit>, settings: MonitorSettings) -> (StateStore, ManualClock) {
        let clock = ManualClock::new(0);
        let store = StateStore::new(fleet, settings, Arc::new(clock.clone()), Box::new(ZeroNoise));
        (store, clock)
    }

    fn hot_unit(id: &str) -> MonitoredUnit {
        MonitoredUnit::new(
            id,
            "Hot Unit",
            "BATCH-0001",
            "Placebo",
            9.0,
            SensorReading::new(0, 9.0, 45.0),
        )
    }

    #[test]
    fn set_target_rejects_unknown_unit_and_nan() {
        let (store, _clock) = store_with(seed_fleet(0), MonitorSettings::default());
        let unknown = UnitId::new("BX-0000");
        assert_eq!(
            store.set_target_temperature(&unknown, 5.0),
            Err(StoreError::UnitNotFound(unknown))
        );
        let known = UnitId::new("BX-1001");
        assert!(store.set_target_temperature(&known, f64::NAN).is_err());
        // prior value untouched
        let fleet = store.fleet_snapshot();
        assert_eq!(fleet[0].target_temperature_c, 5.0);
    }

    #[test]
    fn set_target_takes_effect_next_tick() {
        let (store, clock) = store_with(seed_fleet(0), MonitorSettings::default());
        let id = UnitId::new("BX-1001");
        store.set_target_temperature(&id, 7.0).unwrap();
        // no immediate recompute
        assert_eq!(store.fleet_snapshot()[0].current_reading.temperature_c, 5.0);
        clock.advance_ms(1_000);
        store.tick();
        // drifted 10% of the way from 5.0 to 7.0
        assert_eq!(store.fleet_snapshot()[0].current_reading.temperature_c, 5.2);
    }

    #[test]
    fn tick_escalates_and_dedups() {
        let (store, clock) = store_with(vec![hot_unit("BX-HOT")], MonitorSettings::default());
        for _ in 0..3 {
            clock.advance_ms(1_000);
            store.tick();
        }
        let fleet = store.fleet_snapshot();
        assert_eq!(fleet[0].status, UnitStatus::Critical);
        assert_eq!(store.alerts_snapshot().len(), 1);

        // further critical ticks must not add alerts (cooling holds the unit
        // near the band floor; even if it recovers, nothing new is raised)
        clock.advance_ms(1_000);
        store.tick();
        assert_eq!(store.alerts_snapshot().len(), 1);
    }

    #[test]
    fn recovery_resolves_every_open_alert() {
        let (store, clock) = store_with(vec![hot_unit("BX-HOT")], MonitorSettings::default());
        // escalate, then shock while critical for a second open alert
        for _ in 0..3 {
            clock.advance_ms(1_000);
            store.tick();
        }
        let id = UnitId::new("BX-HOT");
        store.trigger_shock(&id).unwrap();
        assert_eq!(store.alerts_snapshot().len(), 2);
        assert!(store.alerts_snapshot().iter().all(|a| a.active));

        // keep the set-point in band so the unit stays recovered afterwards
        store.set_target_temperature(&id, 5.0).unwrap();
        // cooling pulls 9.0 back inside [2, 8]; run until recovered
        for _ in 0..10 {
            clock.advance_ms(1_000);
            store.tick();
        }
        let alerts = store.alerts_snapshot();
        assert_eq!(alerts.len(), 2);
        for alert in &alerts {
            assert!(!alert.active);
            assert!(alert.resolved_at_ms.unwrap() >= alert.timestamp_ms);
        }
        assert!(!store.fleet_snapshot()[0].cooling_active);
    }

    #[test]
    fn shock_on_stable_unit_is_silent() {
        let (store, _clock) = store_with(seed_fleet(0), MonitorSettings::default());
        let id = UnitId::new("BX-1002");
        let raised = store.trigger_shock(&id).unwrap();
        assert!(raised.is_none());
        assert!(store.alerts_snapshot().is_empty());
        let unit = &store.fleet_snapshot()[1];
        assert_eq!(unit.status, UnitStatus::Stable);
        assert_eq!(unit.history.len(), 1);
        assert!(unit.current_reading.shock_detected);
    }

    #[test]
    fn shock_is_never_deduplicated() {
        let (store, clock) = store_with(vec![hot_unit("BX-HOT")], MonitorSettings::default());
        for _ in 0..3 {
            clock.advance_ms(1_000);
            store.tick();
        }
        assert_eq!(store.alerts_snapshot().len(), 1);
        let id = UnitId::new("BX-HOT");
        let first = store.trigger_shock(&id).unwrap();
        let second = store.trigger_shock(&id).unwrap();
        assert!(first.is_some());
        assert!(second.is_some());
        assert_eq!(store.alerts_snapshot().len(), 3);
    }

    #[test]
    fn reset_alert_is_orthogonal_to_status() {
        let (store, clock) = store_with(vec![hot_unit("BX-HOT")], MonitorSettings::default());
        for _ in 0..3 {
            clock.advance_ms(1_000);
            store.tick();
        }
        let alert_id = store.alerts_snapshot()[0].id.clone();
        clock.advance_ms(500);
        store.reset_alert(&alert_id).unwrap();

        let alerts = store.alerts_snapshot();
        assert!(!alerts[0].active);
        assert_eq!(alerts[0].resolved_at_ms, Some(3_500));
        // unit is still critical; acknowledging the alert changed nothing else
        assert_eq!(store.fleet_snapshot()[0].status, UnitStatus::Critical);

        let missing = AlertId::new("ALT-nope");
        assert_eq!(
            store.reset_alert(&missing),
            Err(StoreError::AlertNotFound(missing))
        );
    }

    #[test]
    fn alerts_are_newest_first() {
        let (store, clock) = store_with(vec![hot_unit("BX-HOT")], MonitorSettings::default());
        for _ in 0..3 {
            clock.advance_ms(1_000);
            store.tick();
        }
        clock.advance_ms(1_000);
        let id = UnitId::new("BX-HOT");
        store.trigger_shock(&id).unwrap();

        let alerts = store.alerts_snapshot();
        assert_eq!(alerts.len(), 2);
        assert!(alerts[0].timestamp_ms >= alerts[1].timestamp_ms);
        assert!(alerts[0].message.contains("Shock"));
    }

    #[test]
    fn update_settings_merges_per_field() {
        let (store, _clock) = store_with(seed_fleet(0), MonitorSettings::default());
        let applied = store.update_settings(&SettingsPatch {
            temp_max_c: Some(f64::NAN),
            consecutive_violations_trigger: Some(5),
            ..Default::default()
        });
        assert_eq!(applied.temp_max_c, 8.0);
        assert_eq!(applied.consecutive_violations_trigger, 5);
        assert_eq!(store.settings(), applied);
    }
}
