use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::reading::SensorReading;

/// Maximum number of readings retained per unit.
pub const HISTORY_CAPACITY: usize = 50;

/// Bounded, chronologically ordered sequence of readings.
///
/// Appending beyond [`HISTORY_CAPACITY`] evicts the oldest reading first;
/// order is preserved regardless of how many ticks have run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingHistory {
    readings: VecDeque<SensorReading>,
}

impl ReadingHistory {
    pub fn new() -> Self {
        Self {
            readings: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    pub fn push(&mut self, reading: SensorReading) {
        if self.readings.len() == HISTORY_CAPACITY {
            self.readings.pop_front();
        }
        self.readings.push_back(reading);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn latest(&self) -> Option<&SensorReading> {
        self.readings.back()
    }

    pub fn oldest(&self) -> Option<&SensorReading> {
        self.readings.front()
    }

    /// Oldest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &SensorReading> {
        self.readings.iter()
    }
}
