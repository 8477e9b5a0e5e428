//! Shared helpers for integration tests: a scripted upstream source with
//! fetch-count instrumentation, and synthetic session builders.

// Each integration test binary compiles its own copy of this module and
// uses a different subset of it.
#![allow(dead_code)]

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::bail;
use paddock::{
    Compound, LapRecord, LoadMode, SessionData, SessionKey, SessionResult, SessionSource,
    TelemetrySample, TrackStatus, WeatherSample,
};

/// Install a fmt subscriber once so `RUST_LOG=paddock=debug` shows loader
/// cache activity while debugging a test.
pub fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub const SCHEDULE_2023: &[&str] = &[
    "Bahrain Grand Prix",
    "Saudi Arabian Grand Prix",
    "Australian Grand Prix",
    "Monaco Grand Prix",
    "Spanish Grand Prix",
];

pub fn lap(
    driver: &str,
    lap_number: u32,
    stint: u32,
    compound: Compound,
    seconds: f64,
    position: u32,
) -> LapRecord {
    LapRecord {
        driver: driver.to_string(),
        team: "Test Racing".to_string(),
        lap_number,
        lap_time: Some(Duration::from_secs_f64(seconds)),
        position: Some(position),
        stint,
        compound,
        track_status: TrackStatus::clear(),
    }
}

/// A 20-lap, two-driver race: VER pits on lap 14 (soft to hard), LEC runs
/// mediums throughout.
pub fn monaco_laps() -> Vec<LapRecord> {
    let mut laps = Vec::new();
    for number in 1..=20u32 {
        let (stint, compound) = if number <= 14 { (1, Compound::Soft) } else { (2, Compound::Hard) };
        laps.push(lap("VER", number, stint, compound, 74.5 + (number % 3) as f64 * 0.2, 1));
        laps.push(lap("LEC", number, 1, Compound::Medium, 74.9 + (number % 4) as f64 * 0.2, 2));
    }
    laps
}

/// Scripted stand-in for the upstream archive client. Counts fetches so
/// tests can verify cache behaviour, and can be told to stall or fail.
pub struct ScriptedSource {
    pub seasons: RangeInclusive<i32>,
    pub session_fetches: Arc<AtomicUsize>,
    pub schedule_fetches: Arc<AtomicUsize>,
    pub fetch_delay: Option<Duration>,
    pub fail_with: Option<String>,
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self {
            seasons: 2018..=2025,
            session_fetches: Arc::new(AtomicUsize::new(0)),
            schedule_fetches: Arc::new(AtomicUsize::new(0)),
            fetch_delay: None,
            fail_with: None,
        }
    }
}

impl ScriptedSource {
    pub fn counters(&self) -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        (Arc::clone(&self.session_fetches), Arc::clone(&self.schedule_fetches))
    }
}

#[async_trait::async_trait]
impl SessionSource for ScriptedSource {
    async fn fetch_session(
        &self,
        key: &SessionKey,
        mode: LoadMode,
    ) -> anyhow::Result<SessionData> {
        self.session_fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(reason) = &self.fail_with {
            bail!("{reason}");
        }

        let laps = monaco_laps();

        let weather = if mode.weather() {
            (1..=20u32)
                .map(|lap_number| WeatherSample {
                    lap_number,
                    air_temp_c: 24.0,
                    track_temp_c: 41.0,
                    humidity_pct: 60.0,
                    rainfall: lap_number >= 18,
                    wind_speed_ms: 2.5,
                })
                .collect()
        } else {
            Vec::new()
        };

        let mut telemetry = HashMap::new();
        if mode.telemetry() {
            for record in &laps {
                // Lap 7 has no valid trace, as happens under a red flag.
                if record.lap_number == 7 {
                    continue;
                }
                let samples: Vec<TelemetrySample> = (0..10u64)
                    .map(|i| TelemetrySample {
                        distance_m: i as f32 * 330.0,
                        speed_kmh: 120.0 + i as f32 * 12.0,
                        throttle_pct: 80.0,
                        brake: 0.0,
                        gear: 5,
                        time: Duration::from_millis(i * 7400 / 10),
                    })
                    .collect();
                telemetry.insert((record.driver.clone(), record.lap_number), samples);
            }
        }

        let results = vec![
            SessionResult { driver: "VER".to_string(), position: 1, status: "Finished".to_string() },
            SessionResult { driver: "LEC".to_string(), position: 2, status: "Finished".to_string() },
        ];

        Ok(SessionData::new(key.clone(), mode, laps, weather, results, telemetry))
    }

    async fn schedule(&self, _year: i32) -> anyhow::Result<Vec<String>> {
        self.schedule_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(SCHEDULE_2023.iter().map(|s| s.to_string()).collect())
    }

    fn supported_seasons(&self) -> RangeInclusive<i32> {
        self.seasons.clone()
    }
}
