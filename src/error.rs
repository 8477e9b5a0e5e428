//! Error types for session loading and lap analysis.
//!
//! All errors implement the `std::error::Error` trait and carry structured
//! context. The taxonomy separates loader-level failures, which abort the
//! current render and must be shown to the user, from per-lap conditions
//! like [`SessionError::TelemetryUnavailable`] that callers handle locally.
//!
//! ## Retry
//!
//! The loader never retries on its own; retry policy belongs to the caller.
//! Use [`SessionError::is_retryable`] to decide whether re-invoking `load`
//! can help:
//!
//! ```rust
//! use paddock::SessionError;
//!
//! let error = SessionError::load_failed("connection reset by upstream");
//! if error.is_retryable() {
//!     println!("Can retry this operation");
//! }
//! ```

use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for session operations.
pub type Result<T, E = SessionError> = std::result::Result<T, E>;

/// Main error type for session loading and analysis.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SessionError {
    #[error("season {year} is outside upstream coverage ({}..={})", supported.start(), supported.end())]
    UnsupportedSeason { year: i32, supported: RangeInclusive<i32> },

    #[error("event '{event}' does not resolve to a scheduled {year} round")]
    UnknownEvent { year: i32, event: String },

    #[error("session data fetch failed: {reason}")]
    LoadFailure {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("upstream fetch timed out after {duration:?}")]
    Timeout { duration: Duration },

    #[error("no telemetry recorded for driver {driver} on lap {lap}")]
    TelemetryUnavailable { driver: String, lap: u32 },
}

impl SessionError {
    /// Returns whether this error is potentially recoverable through retry.
    ///
    /// Season and event resolution failures are caused by the request itself,
    /// so retrying the identical call cannot succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SessionError::LoadFailure { .. } => true,
            SessionError::Timeout { .. } => true,
            SessionError::UnsupportedSeason { .. } => false,
            SessionError::UnknownEvent { .. } => false,
            SessionError::TelemetryUnavailable { .. } => false,
        }
    }

    /// Returns whether this error aborts the whole render, as opposed to a
    /// per-lap condition consumers degrade around.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SessionError::TelemetryUnavailable { .. })
    }

    /// Helper constructor for unsupported-season errors.
    pub fn unsupported_season(year: i32, supported: RangeInclusive<i32>) -> Self {
        SessionError::UnsupportedSeason { year, supported }
    }

    /// Helper constructor for unknown-event errors.
    pub fn unknown_event(year: i32, event: impl Into<String>) -> Self {
        SessionError::UnknownEvent { year, event: event.into() }
    }

    /// Helper constructor for load failures without an underlying cause.
    pub fn load_failed(reason: impl Into<String>) -> Self {
        SessionError::LoadFailure { reason: reason.into(), source: None }
    }

    /// Helper constructor for load failures with the upstream cause chained.
    pub fn load_failed_with_source(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        SessionError::LoadFailure { reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for per-lap missing telemetry.
    pub fn telemetry_unavailable(driver: impl Into<String>, lap: u32) -> Self {
        SessionError::TelemetryUnavailable { driver: driver.into(), lap }
    }
}

impl From<anyhow::Error> for SessionError {
    fn from(err: anyhow::Error) -> Self {
        let reason = err.to_string();
        SessionError::LoadFailure { reason, source: Some(err.into()) }
    }
}
