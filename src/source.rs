//! Source trait for upstream session data
//!
//! The upstream motorsport-data service is an external collaborator, not
//! reimplemented here. This trait is the boundary: the loader talks to a
//! `SessionSource` and owns caching, season/event validation, and fetch
//! timeouts on top of it.

use std::ops::RangeInclusive;

use crate::types::{LoadMode, SessionData, SessionKey};

/// Trait for upstream session data sources
///
/// Implementations wrap an HTTP/archive client for the timing data service.
/// Errors are reported through `anyhow` at this boundary; the loader wraps
/// them into its own taxonomy with the cause chained.
#[async_trait::async_trait]
pub trait SessionSource: Send + Sync + 'static {
    /// Fetch a session dataset at the requested mode.
    ///
    /// `key.event` has already been resolved to a canonical schedule name
    /// by the loader. The call may block for a duration proportional to
    /// the mode: sub-second for `Basic`, tens of seconds for `Full`.
    async fn fetch_session(&self, key: &SessionKey, mode: LoadMode)
    -> anyhow::Result<SessionData>;

    /// Event names for one season, in calendar order.
    async fn schedule(&self, year: i32) -> anyhow::Result<Vec<String>>;

    /// Inclusive range of seasons the upstream archive covers.
    fn supported_seasons(&self) -> RangeInclusive<i32>;
}
