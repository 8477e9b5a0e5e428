//! Stint and lap aggregation
//!
//! Pure derivations over a session's lap table: tyre stint segments,
//! fastest laps, quicklap selection, race position traces, and
//! track-status flag spans. Nothing here holds state; every function is a
//! plain function of its inputs, recomputed per render because the work is
//! cheap next to the upstream fetch.
//!
//! An empty filtered lap set is a normal outcome (the driver retired
//! before the selected range) and yields an empty result, never an error.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{Compound, DriverId, LapRecord, TrackFlag, WeatherSample};

use super::filters::LapFilter;

/// Quicklap threshold used by the lap-time view: keep laps no slower than
/// 107% of the median.
pub const QUICKLAP_THRESHOLD: f64 = 1.07;

/// A maximal run of consecutive laps by one driver on one set of tyres.
///
/// Derived, not stored: recomputed from the lap table on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stint {
    pub driver: DriverId,
    /// Stint identifier from the lap table; non-decreasing per driver.
    pub number: u32,
    pub compound: Compound,
    pub start_lap: u32,
    /// Inclusive.
    pub end_lap: u32,
    /// Count of laps in this (possibly filtered) run.
    pub length: u32,
}

/// Policy knobs for [`stints`].
///
/// The source dashboards disagree on what to do when a lap-range filter
/// cuts a stint into non-contiguous sub-runs, so the choice is explicit
/// here. The default reports each sub-run separately with its own length,
/// which is what most variants do; `merge_gaps` instead merges sub-runs
/// that share `(stint, compound)` and are separated only by filtered-out
/// laps, with `length` the sum of kept laps.
#[derive(Debug, Clone, Copy, Default)]
pub struct StintOptions {
    pub merge_gaps: bool,
}

/// Derive tyre stints from a lap table.
///
/// Laps are filtered first, then grouped per driver (first-seen order) into
/// consecutive runs sharing the same `(stint, compound)`. No attempt is
/// made to reconstruct laps outside the filter: a stint's reported length
/// covers kept laps only.
pub fn stints(laps: &[LapRecord], filter: &LapFilter, options: StintOptions) -> Vec<Stint> {
    let kept = filter.apply(laps);
    if kept.is_empty() {
        debug!("no laps match the stint filter");
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut by_driver: HashMap<&str, Vec<&LapRecord>> = HashMap::new();
    for lap in kept {
        let entry = by_driver.entry(lap.driver.as_str()).or_default();
        if entry.is_empty() {
            order.push(lap.driver.as_str());
        }
        entry.push(lap);
    }

    let mut result = Vec::new();
    for driver in order {
        let mut driver_laps = by_driver.remove(driver).unwrap_or_default();
        driver_laps.sort_by_key(|lap| lap.lap_number);

        let mut runs: Vec<Stint> = Vec::new();
        for lap in driver_laps {
            match runs.last_mut() {
                Some(run)
                    if run.number == lap.stint
                        && run.compound == lap.compound
                        && (options.merge_gaps || lap.lap_number == run.end_lap + 1) =>
                {
                    run.end_lap = lap.lap_number;
                    run.length += 1;
                }
                _ => runs.push(Stint {
                    driver: driver.to_string(),
                    number: lap.stint,
                    compound: lap.compound,
                    start_lap: lap.lap_number,
                    end_lap: lap.lap_number,
                    length: 1,
                }),
            }
        }
        result.extend(runs);
    }
    result
}

/// The lap with the minimal valid time, or `None` when no lap is timed.
pub fn fastest<'a, I>(laps: I) -> Option<&'a LapRecord>
where
    I: IntoIterator<Item = &'a LapRecord>,
{
    laps.into_iter()
        .filter_map(|lap| lap.lap_time.map(|time| (time, lap)))
        .min_by_key(|(time, _)| *time)
        .map(|(_, lap)| lap)
}

/// Each driver's fastest lap, in the drivers' first-seen order.
///
/// Drivers without a single timed lap are omitted; one driver's missing
/// data never blocks the others (the telemetry comparison view plots
/// whichever fastest laps exist).
pub fn fastest_by_driver<'a>(laps: &'a [LapRecord]) -> Vec<(DriverId, &'a LapRecord)> {
    let mut order: Vec<&str> = Vec::new();
    for lap in laps {
        if !order.contains(&lap.driver.as_str()) {
            order.push(lap.driver.as_str());
        }
    }
    order
        .into_iter()
        .filter_map(|driver| {
            fastest(laps.iter().filter(|lap| lap.driver == driver))
                .map(|lap| (driver.to_string(), lap))
        })
        .collect()
}

/// Keep laps no slower than `threshold` times the median valid lap time
/// of the given slice.
///
/// Pass a single driver's laps to mirror the upstream quicklap picker used
/// by the lap-time progression view. Untimed laps never qualify.
pub fn quicklaps<'a>(laps: &'a [LapRecord], threshold: f64) -> Vec<&'a LapRecord> {
    let mut timed: Vec<Duration> = laps.iter().filter_map(|lap| lap.lap_time).collect();
    if timed.is_empty() {
        return Vec::new();
    }
    timed.sort();
    let median = if timed.len() % 2 == 1 {
        timed[timed.len() / 2].as_secs_f64()
    } else {
        let upper = timed.len() / 2;
        (timed[upper - 1].as_secs_f64() + timed[upper].as_secs_f64()) / 2.0
    };
    let cutoff = median * threshold;

    laps.iter()
        .filter(|lap| lap.lap_time.is_some_and(|t| t.as_secs_f64() <= cutoff))
        .collect()
}

/// Per-driver running-order series for the race-position view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionTrace {
    pub driver: DriverId,
    /// `(lap_number, position)` points; laps without a classified position
    /// are skipped.
    pub points: Vec<(u32, u32)>,
}

/// Position-by-lap series per driver, in first-seen order.
///
/// Drivers whose filtered laps carry no position at all are omitted, the
/// same way the dashboards skip drivers with no lap data.
pub fn position_trace(laps: &[LapRecord], filter: &LapFilter) -> Vec<PositionTrace> {
    let kept = filter.apply(laps);

    let mut order: Vec<&str> = Vec::new();
    let mut points: HashMap<&str, Vec<(u32, u32)>> = HashMap::new();
    for lap in kept {
        let series = points.entry(lap.driver.as_str()).or_insert_with(|| {
            order.push(lap.driver.as_str());
            Vec::new()
        });
        if let Some(position) = lap.position {
            series.push((lap.lap_number, position));
        }
    }

    order
        .into_iter()
        .filter_map(|driver| {
            let mut series = points.remove(driver).unwrap_or_default();
            if series.is_empty() {
                return None;
            }
            series.sort_by_key(|(lap, _)| *lap);
            Some(PositionTrace { driver: driver.to_string(), points: series })
        })
        .collect()
}

/// One lap rendered under a neutralization flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSpan {
    pub lap: u32,
    pub flag: TrackFlag,
}

/// The dominant neutralization flag per lap number, ascending.
///
/// Track status is track-wide, so the first record seen for each lap
/// number stands in for the whole field. Each lap still exposes its full
/// flag set through [`crate::TrackStatus`]; the precedence collapse to one
/// flag per lap exists for single-colour chart spans.
pub fn flag_spans(laps: &[LapRecord], filter: &LapFilter) -> Vec<FlagSpan> {
    let mut first_per_lap: HashMap<u32, &LapRecord> = HashMap::new();
    for lap in filter.apply(laps) {
        first_per_lap.entry(lap.lap_number).or_insert(lap);
    }

    let mut spans: Vec<FlagSpan> = first_per_lap
        .into_iter()
        .filter_map(|(number, lap)| {
            lap.track_status.dominant().map(|flag| FlagSpan { lap: number, flag })
        })
        .collect();
    spans.sort_by_key(|span| span.lap);
    spans
}

/// Lap numbers with recorded rainfall within an inclusive range, for the
/// rain overlay on the tyre-strategy view.
pub fn rain_laps(weather: &[WeatherSample], min_lap: u32, max_lap: u32) -> Vec<u32> {
    let mut laps: Vec<u32> = weather
        .iter()
        .filter(|sample| {
            sample.rainfall && sample.lap_number >= min_lap && sample.lap_number <= max_lap
        })
        .map(|sample| sample.lap_number)
        .collect();
    laps.sort_unstable();
    laps.dedup();
    laps
}
