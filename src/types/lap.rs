//! Per-lap timing records and tyre compounds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::TrackStatus;

/// Driver identifier, the three-letter abbreviation used by the upstream
/// timing data ("VER", "LEC").
pub type DriverId = String;

/// Tyre rubber specification for one stint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compound {
    Soft,
    Medium,
    Hard,
    Intermediate,
    Wet,
    Unknown,
}

impl Compound {
    /// Parse the upstream compound column, which is upper-case and may be
    /// missing for laps where tyre data was not recorded.
    pub fn from_upstream(name: &str) -> Self {
        match name {
            "SOFT" => Compound::Soft,
            "MEDIUM" => Compound::Medium,
            "HARD" => Compound::Hard,
            "INTERMEDIATE" => Compound::Intermediate,
            "WET" => Compound::Wet,
            _ => Compound::Unknown,
        }
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Compound::Soft => "Soft",
            Compound::Medium => "Medium",
            Compound::Hard => "Hard",
            Compound::Intermediate => "Intermediate",
            Compound::Wet => "Wet",
            Compound::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// One completed (driver, lap number) entry from the session lap table.
///
/// `lap_time` is `None` for incomplete or invalidated laps; `position` is
/// `None` where no running order applies (qualifying, retired before the
/// line). `track_status` is decoded from the upstream code string when the
/// record is built, so consumers never re-parse strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    pub driver: DriverId,
    pub team: String,
    /// 1-based lap number.
    pub lap_number: u32,
    pub lap_time: Option<Duration>,
    pub position: Option<u32>,
    /// Stint identifier; non-decreasing per driver, +1 at each tyre change.
    pub stint: u32,
    pub compound: Compound,
    pub track_status: TrackStatus,
}

impl LapRecord {
    /// Whether this lap carries a valid time.
    pub fn is_timed(&self) -> bool {
        self.lap_time.is_some()
    }
}
