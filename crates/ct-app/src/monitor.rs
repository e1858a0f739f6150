//! Monitor facade: owns the store and the scheduler lifecycle, and exposes
//! the full boundary surface (snapshots plus the four commands).

use std::sync::Arc;

use ct_core::{AlertId, Clock, SystemClock, UnitId};
use ct_model::{seed_fleet, Alert, MonitorSettings, MonitoredUnit, SettingsPatch};
use ct_sim::SeededNoise;
use ct_store::{StateStore, TickDriver};

use crate::config::MonitorConfig;
use crate::error::AppResult;

pub struct Monitor {
    store: Arc<StateStore>,
    config: MonitorConfig,
    driver: Option<TickDriver>,
}

impl Monitor {
    /// Build a monitor over the seed fleet, not yet ticking.
    pub fn new(config: MonitorConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self::with_parts(config, clock, None)
    }

    /// Build with an injected clock and/or fleet (tests, fixtures).
    pub fn with_parts(
        config: MonitorConfig,
        clock: Arc<dyn Clock>,
        fleet: Option<Vec<MonitoredUnit>>,
    ) -> Self {
        let noise = match config.seed {
            Some(seed) => SeededNoise::new(seed),
            None => SeededNoise::from_entropy(),
        };
        let fleet = fleet.unwrap_or_else(|| seed_fleet(clock.now_ms()));
        let store = Arc::new(StateStore::new(
            fleet,
            config.settings,
            clock,
            Box::new(noise),
        ));
        Self {
            store,
            config,
            driver: None,
        }
    }

    /// Start the fixed-period scheduler. Idempotent.
    pub fn start(&mut self) {
        if self.driver.is_none() {
            self.driver = Some(TickDriver::start(
                self.store.clone(),
                self.config.tick_period(),
            ));
        }
    }

    /// Stop scheduling. The in-flight tick, if any, completes first.
    pub fn stop(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.stop();
        }
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_some()
    }

    /// Run one tick synchronously (headless simulation, tests).
    pub fn tick_once(&self) {
        self.store.tick();
    }

    // --- queries ---

    pub fn units(&self) -> Vec<MonitoredUnit> {
        self.store.fleet_snapshot()
    }

    /// Alerts, newest-first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.store.alerts_snapshot()
    }

    pub fn settings(&self) -> MonitorSettings {
        self.store.settings()
    }

    // --- commands ---

    pub fn set_target_temperature(&self, unit_id: &UnitId, value_c: f64) -> AppResult<()> {
        Ok(self.store.set_target_temperature(unit_id, value_c)?)
    }

    pub fn trigger_shock(&self, unit_id: &UnitId) -> AppResult<Option<AlertId>> {
        Ok(self.store.trigger_shock(unit_id)?)
    }

    pub fn reset_alert(&self, alert_id: &AlertId) -> AppResult<()> {
        Ok(self.store.reset_alert(alert_id)?)
    }

    pub fn update_settings(&self, patch: &SettingsPatch) -> MonitorSettings {
        self.store.update_settings(patch)
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monitor_starts_with_seed_fleet() {
        let monitor = Monitor::new(MonitorConfig::default());
        let units = monitor.units();
        assert_eq!(units.len(), 4);
        assert!(monitor.alerts().is_empty());
        assert!(!monitor.is_running());
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut monitor = Monitor::new(MonitorConfig {
            tick_period_ms: 10,
            ..Default::default()
        });
        monitor.start();
        monitor.start();
        assert!(monitor.is_running());
        monitor.stop();
        monitor.stop();
        assert!(!monitor.is_running());
    }

    #[test]
    fn seeded_monitors_tick_identically() {
        let config = MonitorConfig {
            seed: Some(1234),
            ..Default::default()
        };
        let clock = Arc::new(ct_core::ManualClock::new(0));
        let a = Monitor::with_parts(config.clone(), clock.clone(), None);
        let b = Monitor::with_parts(config, clock.clone(), None);
        for _ in 0..25 {
            clock.advance_ms(1_000);
            a.tick_once();
            b.tick_once();
        }
        assert_eq!(a.units(), b.units());
    }
}
