//! Monitor thresholds and their validated patch merge.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Thresholds read by the simulation engine and the violation tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonitorSettings {
    /// Lower bound of the safe temperature band (degrees Celsius).
    pub temp_min_c: f64,
    /// Upper bound of the safe temperature band (degrees Celsius).
    pub temp_max_c: f64,
    /// Reserved: carried and validated but not read by the tracker yet.
    pub humidity_max_pct: f64,
    /// How many violating readings in a row escalate a unit to Critical.
    pub consecutive_violations_trigger: u32,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            temp_min_c: 2.0,
            temp_max_c: 8.0,
            humidity_max_pct: 60.0,
            consecutive_violations_trigger: 3,
        }
    }
}

/// Partial settings update. Each present field is validated independently;
/// invalid fields are dropped from the merge, valid ones still apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub temp_min_c: Option<f64>,
    pub temp_max_c: Option<f64>,
    pub humidity_max_pct: Option<f64>,
    pub consecutive_violations_trigger: Option<u32>,
}

impl MonitorSettings {
    /// Merge a patch field-by-field.
    ///
    /// Threshold fields must be finite; the trigger must be >= 1. A rejected
    /// field leaves the previous value intact and is logged, never fatal.
    pub fn apply_patch(&mut self, patch: &SettingsPatch) {
        if let Some(v) = patch.temp_min_c {
            if v.is_finite() {
                self.temp_min_c = v;
            } else {
                warn!(field = "temp_min_c", value = v, "rejected non-finite settings field");
            }
        }
        if let Some(v) = patch.temp_max_c {
            if v.is_finite() {
                self.temp_max_c = v;
            } else {
                warn!(field = "temp_max_c", value = v, "rejected non-finite settings field");
            }
        }
        if let Some(v) = patch.humidity_max_pct {
            if v.is_finite() {
                self.humidity_max_pct = v;
            } else {
                warn!(field = "humidity_max_pct", value = v, "rejected non-finite settings field");
            }
        }
        if let Some(v) = patch.consecutive_violations_trigger {
            if v >= 1 {
                self.consecutive_violations_trigger = v;
            } else {
                warn!(field = "consecutive_violations_trigger", "rejected zero trigger");
            }
        }
    }
}
