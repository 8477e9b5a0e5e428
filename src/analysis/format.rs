//! Lap time and delta rendering
//!
//! Chart labels and summary tables render missing values as the literal
//! "N/A" rather than erroring, since untimed laps are a normal part of any
//! session.

use std::time::Duration;

/// Rendered value for a missing time or delta.
pub const NOT_AVAILABLE: &str = "N/A";

/// Render a lap or session time as `HH:MM:SS.mmm`; `None` renders "N/A".
pub fn format_time(time: Option<Duration>) -> String {
    match time {
        Some(time) => {
            let total_secs = time.as_secs();
            let hours = total_secs / 3600;
            let minutes = (total_secs % 3600) / 60;
            let seconds = total_secs % 60;
            let millis = time.subsec_millis();
            format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Render a gap to a reference lap as `+S.mmms`; `None` renders "N/A".
///
/// Deltas are sub-minute in the common case, so there is no HH:MM part;
/// larger gaps just show more second digits.
pub fn format_delta(delta: Option<Duration>) -> String {
    match delta {
        Some(delta) => format!("+{}.{:03}s", delta.as_secs(), delta.subsec_millis()),
        None => NOT_AVAILABLE.to_string(),
    }
}
