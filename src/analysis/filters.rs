//! Typed lap-table predicates
//!
//! Replaces ad-hoc boolean masks over the raw table with an explicit,
//! composable filter: restrict to a driver set, restrict to an inclusive
//! lap-number range, or both. An empty match is a normal outcome (a driver
//! retired before the selected range), never an error.

use std::collections::HashSet;

use crate::types::LapRecord;

/// Composable filter over a lap table.
///
/// An unset dimension matches everything, so `LapFilter::default()` keeps
/// every lap.
#[derive(Debug, Clone, Default)]
pub struct LapFilter {
    drivers: Option<HashSet<String>>,
    lap_range: Option<(u32, u32)>,
}

impl LapFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only laps by the given drivers.
    pub fn drivers<I, D>(mut self, drivers: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<String>,
    {
        self.drivers = Some(drivers.into_iter().map(Into::into).collect());
        self
    }

    /// Keep only laps with `min_lap <= lap_number <= max_lap`.
    pub fn lap_range(mut self, min_lap: u32, max_lap: u32) -> Self {
        self.lap_range = Some((min_lap, max_lap));
        self
    }

    /// Whether one record passes the filter.
    pub fn matches(&self, lap: &LapRecord) -> bool {
        if let Some(drivers) = &self.drivers
            && !drivers.contains(&lap.driver)
        {
            return false;
        }
        if let Some((min_lap, max_lap)) = self.lap_range
            && (lap.lap_number < min_lap || lap.lap_number > max_lap)
        {
            return false;
        }
        true
    }

    /// Apply the filter, preserving table order.
    pub fn apply<'a>(&self, laps: &'a [LapRecord]) -> Vec<&'a LapRecord> {
        laps.iter().filter(|lap| self.matches(lap)).collect()
    }
}
