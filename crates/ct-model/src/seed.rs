//! Seed fleet the monitor starts with.

use crate::reading::SensorReading;
use crate::unit::MonitoredUnit;

/// The four demo shipment units, each starting Stable at its target
/// temperature with an empty history.
pub fn seed_fleet(now_ms: i64) -> Vec<MonitoredUnit> {
    vec![
        MonitoredUnit::new(
            "BX-1001",
            "Pfizer-BioNTech Alpha",
            "BATCH-8821",
            "Comirnaty Variant",
            5.0,
            SensorReading::new(now_ms, 5.0, 45.0),
        ),
        MonitoredUnit::new(
            "BX-1002",
            "Moderna Spikevax Delta",
            "BATCH-9932",
            "Spikevax",
            4.2,
            SensorReading::new(now_ms, 4.2, 50.0),
        ),
        MonitoredUnit::new(
            "BX-1003",
            "Insulin Glargine Transport",
            "BATCH-7711",
            "Lantus Solostar",
            6.5,
            SensorReading::new(now_ms, 6.5, 40.0),
        ),
        MonitoredUnit::new(
            "BX-1004",
            "Flu Vaccine Quadrivalent",
            "BATCH-3321",
            "Fluarix",
            3.0,
            SensorReading::new(now_ms, 3.0, 35.0),
        ),
    ]
}
