//! Test utilities for building synthetic lap tables
//!
//! Shared by the inline unit tests and the aggregation benchmarks. Real
//! sessions come from the upstream source; these builders produce tables
//! with the same shape for deterministic tests.

#![cfg(any(test, feature = "benchmark"))]

use std::time::Duration;

use crate::types::{Compound, LapRecord, TrackStatus};

/// Builder for one synthetic [`LapRecord`].
#[derive(Debug, Clone)]
pub struct LapBuilder {
    record: LapRecord,
}

impl LapBuilder {
    pub fn time_s(mut self, seconds: f64) -> Self {
        self.record.lap_time = Some(Duration::from_secs_f64(seconds));
        self
    }

    pub fn untimed(mut self) -> Self {
        self.record.lap_time = None;
        self
    }

    pub fn position(mut self, position: u32) -> Self {
        self.record.position = Some(position);
        self
    }

    pub fn stint(mut self, stint: u32) -> Self {
        self.record.stint = stint;
        self
    }

    pub fn compound(mut self, compound: Compound) -> Self {
        self.record.compound = compound;
        self
    }

    pub fn status(mut self, status: TrackStatus) -> Self {
        self.record.track_status = status;
        self
    }

    pub fn team(mut self, team: &str) -> Self {
        self.record.team = team.to_string();
        self
    }

    pub fn build(self) -> LapRecord {
        self.record
    }
}

/// Start a lap record with sensible defaults: timed at 80s, first stint on
/// mediums, clear track.
pub fn lap(driver: &str, lap_number: u32) -> LapBuilder {
    LapBuilder {
        record: LapRecord {
            driver: driver.to_string(),
            team: "Test Racing".to_string(),
            lap_number,
            lap_time: Some(Duration::from_secs(80)),
            position: None,
            stint: 1,
            compound: Compound::Medium,
            track_status: TrackStatus::clear(),
        },
    }
}

/// One timed lap with everything else defaulted.
pub fn timed_lap(driver: &str, lap_number: u32, seconds: f64) -> LapRecord {
    lap(driver, lap_number).time_s(seconds).build()
}

/// A plausible race lap table: `lap_count` laps per driver with a tyre
/// change (stint 1 softs, stint 2 hards) at the given lap.
pub fn race_laps(drivers: &[&str], lap_count: u32, pit_lap: u32) -> Vec<LapRecord> {
    let mut laps = Vec::new();
    for number in 1..=lap_count {
        for (slot, driver) in drivers.iter().enumerate() {
            let (stint, compound) =
                if number <= pit_lap { (1, Compound::Soft) } else { (2, Compound::Hard) };
            let record = lap(driver, number)
                .time_s(78.0 + slot as f64 * 0.3 + (number % 5) as f64 * 0.1)
                .position(slot as u32 + 1)
                .stint(stint)
                .compound(compound)
                .build();
            laps.push(record);
        }
    }
    laps
}
