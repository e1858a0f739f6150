use ct_core::{AlertId, UnitId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// One alert record.
///
/// Alerts are append-only: never deleted, only marked inactive with a
/// resolution timestamp. Consumers see them newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub unit_id: UnitId,
    pub unit_name: String,
    pub timestamp_ms: i64,
    pub message: String,
    pub severity: AlertSeverity,
    pub active: bool,
    pub resolved_at_ms: Option<i64>,
}

impl Alert {
    pub fn critical(
        unit_id: UnitId,
        unit_name: impl Into<String>,
        timestamp_ms: i64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: AlertId::generate(),
            unit_id,
            unit_name: unit_name.into(),
            timestamp_ms,
            message: message.into(),
            severity: AlertSeverity::Critical,
            active: true,
            resolved_at_ms: None,
        }
    }

    /// Mark the alert inactive. Idempotent: resolving an already-resolved
    /// alert keeps the original resolution timestamp.
    pub fn resolve(&mut self, now_ms: i64) {
        if self.active {
            self.active = false;
            self.resolved_at_ms = Some(now_ms);
        }
    }
}
