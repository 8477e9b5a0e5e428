//! Per-lap telemetry channels and weather samples

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One telemetry sample within a lap, indexed by distance.
///
/// `distance_m` is monotonically non-decreasing within one lap's sequence
/// and serves as the common x-axis for cross-driver comparison plots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub distance_m: f32,
    pub speed_kmh: f32,
    /// Throttle application, 0-100.
    pub throttle_pct: f32,
    /// Brake application; upstream reports either a boolean or a pressure
    /// fraction depending on season, normalized here to 0.0-1.0.
    pub brake: f32,
    pub gear: i8,
    /// Time since the start of the lap.
    pub time: Duration,
}

/// One weather sample, indexed by lap number.
///
/// Present only when the session was loaded at `WithWeather` or `Full`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub lap_number: u32,
    pub air_temp_c: f32,
    pub track_temp_c: f32,
    pub humidity_pct: f32,
    pub rainfall: bool,
    pub wind_speed_ms: f32,
}
