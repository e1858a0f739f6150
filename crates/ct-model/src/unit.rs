use ct_core::UnitId;
use serde::{Deserialize, Serialize};

use crate::history::ReadingHistory;
use crate::reading::SensorReading;

/// Risk status of a monitored unit, derived each tick from the
/// consecutive-violation counter (see the tracker in ct-sim).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitStatus {
    Stable,
    AtRisk,
    Critical,
}

impl UnitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStatus::Stable => "Stable",
            UnitStatus::AtRisk => "At Risk",
            UnitStatus::Critical => "Critical",
        }
    }
}

/// A tracked shipment unit and its current physical/alerting state.
///
/// Owned exclusively by the state store; mutated only inside a tick or a
/// command handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoredUnit {
    pub id: UnitId,
    pub name: String,
    pub batch_number: String,
    pub drug_name: String,
    pub current_reading: SensorReading,
    pub history: ReadingHistory,
    pub status: UnitStatus,
    /// Set-point the environment drifts toward when cooling is off.
    pub target_temperature_c: f64,
    /// Automatic corrective action: while set, temperature is pulled down
    /// toward the bottom of the safe band.
    pub cooling_active: bool,
}

impl MonitoredUnit {
    /// New unit starting Stable with an empty history.
    pub fn new(
        id: impl Into<UnitId>,
        name: impl Into<String>,
        batch_number: impl Into<String>,
        drug_name: impl Into<String>,
        target_temperature_c: f64,
        initial_reading: SensorReading,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            batch_number: batch_number.into(),
            drug_name: drug_name.into(),
            current_reading: initial_reading,
            history: ReadingHistory::new(),
            status: UnitStatus::Stable,
            target_temperature_c,
            cooling_active: false,
        }
    }
}
