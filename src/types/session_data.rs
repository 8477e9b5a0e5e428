//! Loaded session dataset

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Result, SessionError};

use super::{DriverId, LapRecord, LoadMode, SessionKey, TelemetrySample, WeatherSample};

/// Final classification entry, ordered by finishing position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub driver: DriverId,
    pub position: u32,
    /// Upstream status string ("Finished", "+1 Lap", "Retired").
    pub status: String,
}

/// The result of loading a [`SessionKey`] at a given [`LoadMode`].
///
/// Immutable once produced by the loader; a cache hit returns data equal to
/// a fresh fetch at the same key and mode, modulo upstream updates within
/// the cache TTL. Which optional sections are populated depends on `mode`:
/// `weather` requires at least `WithWeather`, per-lap `telemetry` requires
/// `Full`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub key: SessionKey,
    pub mode: LoadMode,
    /// Lap table ordered by (driver first appearance, lap number).
    pub laps: Vec<LapRecord>,
    /// Drivers present in the session, in first-seen order.
    pub drivers: Vec<DriverId>,
    /// Weather samples by lap; empty below `WithWeather` mode.
    pub weather: Vec<WeatherSample>,
    /// Final classification; empty until the session completes.
    pub results: Vec<SessionResult>,
    /// Per-(driver, lap) telemetry traces; empty below `Full` mode.
    telemetry: HashMap<(DriverId, u32), Vec<TelemetrySample>>,
}

impl SessionData {
    pub fn new(
        key: SessionKey,
        mode: LoadMode,
        laps: Vec<LapRecord>,
        weather: Vec<WeatherSample>,
        results: Vec<SessionResult>,
        telemetry: HashMap<(DriverId, u32), Vec<TelemetrySample>>,
    ) -> Self {
        let mut drivers = Vec::new();
        for lap in &laps {
            if !drivers.contains(&lap.driver) {
                drivers.push(lap.driver.clone());
            }
        }
        Self { key, mode, laps, drivers, weather, results, telemetry }
    }

    /// All laps for one driver, in lap-number order.
    pub fn driver_laps(&self, driver: &str) -> Vec<&LapRecord> {
        self.laps.iter().filter(|lap| lap.driver == driver).collect()
    }

    /// Highest lap number completed by anyone, 0 for an empty table.
    pub fn total_laps(&self) -> u32 {
        self.laps.iter().map(|lap| lap.lap_number).max().unwrap_or(0)
    }

    /// Telemetry trace for one lap of one driver.
    ///
    /// A missing trace is a per-lap condition, not a session-level fault:
    /// a lap under red flag can lack valid samples even at `Full` mode.
    /// Callers plotting several drivers must degrade per lap rather than
    /// abort the sibling traces.
    pub fn lap_telemetry(&self, driver: &str, lap: u32) -> Result<&[TelemetrySample]> {
        self.telemetry
            .get(&(driver.to_string(), lap))
            .map(Vec::as_slice)
            .ok_or_else(|| SessionError::telemetry_unavailable(driver, lap))
    }

    /// Whether any telemetry traces were recorded at all.
    pub fn has_telemetry(&self) -> bool {
        !self.telemetry.is_empty()
    }
}
