//! Session cache loader
//!
//! Resolves a `(year, event, session kind)` triple to a session dataset at
//! a chosen [`LoadMode`], fetching from the upstream source only when no
//! live cache entry exists. The cache key includes the mode: a request at a
//! higher mode is never served from an entry recorded at a lower one, and
//! there is no upgrade-by-union of partial entries.
//!
//! Fetches run under a deadline. The upstream protocol has no timeout of
//! its own and a hung fetch would otherwise block the render loop forever.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cache::{DEFAULT_TTL, TtlCache};
use crate::error::{Result, SessionError};
use crate::source::SessionSource;
use crate::types::{LoadMode, SessionData, SessionKey, SessionKind};

/// Upper bound on one upstream fetch; `Full` loads take tens of seconds.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(90);

/// Seasons kept in the schedule-lookup cache.
const SCHEDULE_CACHE_CAPACITY: usize = 8;

/// Loader tuning knobs.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Cache entry time-to-live, measured from insertion.
    pub ttl: Duration,
    /// Optional bound on cached session count; `None` is unbounded.
    pub capacity: Option<usize>,
    /// Deadline for one upstream fetch.
    pub fetch_timeout: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL, capacity: None, fetch_timeout: DEFAULT_FETCH_TIMEOUT }
    }
}

/// Fully resolved cache key: canonical event name plus requested mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    year: i32,
    event: String,
    kind: SessionKind,
    mode: LoadMode,
}

/// Session cache loader over a pluggable upstream source.
///
/// Process-local and in-memory. Renders are serialized by the caller's
/// event loop, so the internal locks are uncontended; they exist so the
/// loader can be shared behind an `Arc` without further ceremony. The lock
/// is never held across an upstream fetch, which means two overlapping
/// loads of the same key would both fetch - accepted for this
/// one-render-at-a-time design.
pub struct SessionLoader<S: SessionSource> {
    source: S,
    config: LoaderConfig,
    sessions: Mutex<TtlCache<CacheKey, Arc<SessionData>>>,
    schedules: Mutex<TtlCache<i32, Arc<Vec<String>>>>,
}

impl<S: SessionSource> SessionLoader<S> {
    /// Create a loader with default TTL and fetch timeout.
    pub fn new(source: S) -> Self {
        Self::with_config(source, LoaderConfig::default())
    }

    /// Create a loader with explicit configuration.
    pub fn with_config(source: S, config: LoaderConfig) -> Self {
        let sessions = match config.capacity {
            Some(capacity) => TtlCache::with_capacity(config.ttl, capacity),
            None => TtlCache::new(config.ttl),
        };
        let schedules = TtlCache::with_capacity(config.ttl, SCHEDULE_CACHE_CAPACITY);
        Self { source, config, sessions: Mutex::new(sessions), schedules: Mutex::new(schedules) }
    }

    /// Load a session, from cache when possible.
    ///
    /// Validates the season against upstream coverage, resolves the event
    /// name against the (cached) season schedule, then returns the cached
    /// dataset or fetches one under the configured deadline.
    ///
    /// # Errors
    ///
    /// - [`SessionError::UnsupportedSeason`] when the year is outside
    ///   upstream coverage
    /// - [`SessionError::UnknownEvent`] when the event resolves to no
    ///   scheduled round
    /// - [`SessionError::Timeout`] when the fetch deadline elapses
    /// - [`SessionError::LoadFailure`] for other upstream errors, with the
    ///   cause chained
    pub async fn load(&self, key: &SessionKey, mode: LoadMode) -> Result<Arc<SessionData>> {
        let supported = self.source.supported_seasons();
        if !supported.contains(&key.year) {
            return Err(SessionError::unsupported_season(key.year, supported));
        }

        let event = self.resolve_event(key.year, &key.event).await?;
        let cache_key = CacheKey { year: key.year, event: event.clone(), kind: key.kind, mode };

        if let Some(hit) = self.sessions.lock().expect("session cache poisoned").get(&cache_key) {
            debug!(session = %key, %mode, "serving session from cache");
            return Ok(hit);
        }

        let resolved = SessionKey::new(key.year, event, key.kind);
        info!(session = %resolved, %mode, "fetching session from upstream");
        let data = self.fetch_with_deadline(&resolved, mode).await?;
        let data = Arc::new(data);

        self.sessions
            .lock()
            .expect("session cache poisoned")
            .insert(cache_key, Arc::clone(&data));
        Ok(data)
    }

    /// Event names for one season, in calendar order, cached under the
    /// same TTL policy as sessions with a small capacity bound.
    pub async fn schedule(&self, year: i32) -> Result<Arc<Vec<String>>> {
        let supported = self.source.supported_seasons();
        if !supported.contains(&year) {
            return Err(SessionError::unsupported_season(year, supported));
        }

        if let Some(hit) = self.schedules.lock().expect("schedule cache poisoned").get(&year) {
            debug!(year, "serving schedule from cache");
            return Ok(hit);
        }

        info!(year, "fetching schedule from upstream");
        let deadline = self.config.fetch_timeout;
        let fetched = tokio::time::timeout(deadline, self.source.schedule(year))
            .await
            .map_err(|_| {
                warn!(year, ?deadline, "schedule fetch timed out");
                SessionError::Timeout { duration: deadline }
            })?
            .map_err(SessionError::from)?;

        let schedule = Arc::new(fetched);
        self.schedules
            .lock()
            .expect("schedule cache poisoned")
            .insert(year, Arc::clone(&schedule));
        Ok(schedule)
    }

    /// Drop the cache entry for one `(key, mode)` pair, forcing the next
    /// load to fetch. The event name is resolved the same way `load`
    /// resolves it, so the caller can pass the same partial name.
    pub async fn invalidate(&self, key: &SessionKey, mode: LoadMode) -> Result<()> {
        let event = self.resolve_event(key.year, &key.event).await?;
        let cache_key = CacheKey { year: key.year, event, kind: key.kind, mode };
        self.sessions.lock().expect("session cache poisoned").invalidate(&cache_key);
        Ok(())
    }

    /// Drop every cached session and schedule.
    pub fn clear_cache(&self) {
        self.sessions.lock().expect("session cache poisoned").clear();
        self.schedules.lock().expect("schedule cache poisoned").clear();
    }

    /// Resolve a possibly partial event name against the season schedule.
    ///
    /// Case-insensitive substring match, first calendar match wins, which
    /// mirrors the upstream service's own fuzzy lookup closely enough for
    /// a deterministic cache key.
    async fn resolve_event(&self, year: i32, event: &str) -> Result<String> {
        let schedule = self.schedule(year).await?;
        let needle = event.trim().to_lowercase();
        if needle.is_empty() {
            return Err(SessionError::unknown_event(year, event));
        }
        schedule
            .iter()
            .find(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .ok_or_else(|| SessionError::unknown_event(year, event))
    }

    async fn fetch_with_deadline(&self, key: &SessionKey, mode: LoadMode) -> Result<SessionData> {
        let deadline = self.config.fetch_timeout;
        match tokio::time::timeout(deadline, self.source.fetch_session(key, mode)).await {
            Ok(Ok(data)) => Ok(data),
            Ok(Err(err)) => Err(err.into()),
            Err(_) => {
                warn!(session = %key, ?deadline, "upstream fetch timed out");
                Err(SessionError::Timeout { duration: deadline })
            }
        }
    }
}
