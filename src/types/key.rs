//! Session identification and load-mode types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of on-track session within a race weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    Race,
    Qualifying,
    Practice1,
    Practice2,
    Practice3,
}

impl SessionKind {
    /// Short upstream session code ("R", "Q", "FP1"..).
    pub fn code(&self) -> &'static str {
        match self {
            SessionKind::Race => "R",
            SessionKind::Qualifying => "Q",
            SessionKind::Practice1 => "FP1",
            SessionKind::Practice2 => "FP2",
            SessionKind::Practice3 => "FP3",
        }
    }

    /// Whether cross-driver positions are meaningful for this session.
    ///
    /// Only races carry a per-lap running order; qualifying and practice
    /// positions in the lap table are not comparable across drivers.
    pub fn has_running_order(&self) -> bool {
        matches!(self, SessionKind::Race)
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SessionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(SessionKind::Race),
            "Q" => Ok(SessionKind::Qualifying),
            "FP1" => Ok(SessionKind::Practice1),
            "FP2" => Ok(SessionKind::Practice2),
            "FP3" => Ok(SessionKind::Practice3),
            other => Err(format!("unknown session code '{other}'")),
        }
    }
}

/// Identifies one real-world session. Immutable once constructed.
///
/// `event` is the caller-supplied event name and may be a partial match
/// ("monaco"); the loader resolves it against the season schedule before
/// using it as part of a cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    pub year: i32,
    pub event: String,
    pub kind: SessionKind,
}

impl SessionKey {
    pub fn new(year: i32, event: impl Into<String>, kind: SessionKind) -> Self {
        Self { year, event: event.into(), kind }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.event, self.kind)
    }
}

/// How much of a session to fetch, strictly ordered by fetch cost.
///
/// `Basic` is lap timing only and returns in seconds; `Full` adds per-lap
/// telemetry channels and can take tens of seconds upstream. A cache entry
/// recorded at one mode is never served for a request at another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoadMode {
    Basic,
    WithWeather,
    Full,
}

impl LoadMode {
    /// Whether per-lap telemetry channels are fetched at this mode.
    pub fn telemetry(&self) -> bool {
        matches!(self, LoadMode::Full)
    }

    /// Whether per-lap weather samples are fetched at this mode.
    pub fn weather(&self) -> bool {
        matches!(self, LoadMode::WithWeather | LoadMode::Full)
    }
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoadMode::Basic => "basic",
            LoadMode::WithWeather => "with-weather",
            LoadMode::Full => "full",
        };
        f.write_str(label)
    }
}
