use std::time::Duration;

use ct_model::MonitorSettings;
use serde::{Deserialize, Serialize};

/// Monitor construction options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Scheduler period, milliseconds.
    pub tick_period_ms: u64,
    /// Fixed noise seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Initial thresholds.
    pub settings: MonitorSettings,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 1_000,
            seed: None,
            settings: MonitorSettings::default(),
        }
    }
}

impl MonitorConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }
}
