//! Type-safe Rust library for Formula 1 session data and lap analysis.
//!
//! Paddock loads historical session datasets through a pluggable upstream
//! source, memoizes them with a TTL cache, and derives the aggregates race
//! dashboards render: tyre stints, fastest laps, position traces, and
//! track-status flag spans.
//!
//! # Features
//!
//! - **Session loading**: `(year, event, session kind)` resolution with
//!   three load modes trading completeness for latency
//! - **Caching**: TTL-based memoization keyed by session and mode, with
//!   explicit invalidation
//! - **Analysis**: pure, independently testable lap-table derivations
//! - **Typed flags**: track status decoded once into a set-of-flags type
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paddock::{LapFilter, LoadMode, Paddock, SessionKey, SessionKind, StintOptions};
//! # use paddock::{SessionData, SessionSource};
//! # use std::ops::RangeInclusive;
//! # struct ArchiveClient;
//! # #[async_trait::async_trait]
//! # impl SessionSource for ArchiveClient {
//! #     async fn fetch_session(&self, _key: &SessionKey, _mode: LoadMode) -> anyhow::Result<SessionData> { unimplemented!() }
//! #     async fn schedule(&self, _year: i32) -> anyhow::Result<Vec<String>> { unimplemented!() }
//! #     fn supported_seasons(&self) -> RangeInclusive<i32> { 2018..=2025 }
//! # }
//!
//! #[tokio::main]
//! async fn main() -> paddock::Result<()> {
//!     let loader = Paddock::loader(ArchiveClient);
//!
//!     let key = SessionKey::new(2023, "Monaco", SessionKind::Race);
//!     let session = loader.load(&key, LoadMode::Basic).await?;
//!
//!     let filter = LapFilter::new().drivers(["VER", "LEC"]).lap_range(1, 10);
//!     let stints = paddock::stints(&session.laps, &filter, StintOptions::default());
//!     for stint in stints {
//!         println!("{} laps {}-{} on {}", stint.driver, stint.start_lap, stint.end_lap, stint.compound);
//!     }
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Loading pipeline
pub mod cache;
pub mod loader;
pub mod source;

// Lap-table derivations
pub mod analysis;

// Core exports
pub use analysis::*;
pub use error::*;
pub use types::*;

pub use cache::TtlCache;
pub use loader::{LoaderConfig, SessionLoader};
pub use source::SessionSource;

/// Unified entry point for constructing session loaders.
///
/// # Example
///
/// ```rust,ignore
/// let loader = Paddock::loader(archive_client);
/// let session = loader.load(&key, LoadMode::Basic).await?;
/// ```
pub struct Paddock;

impl Paddock {
    /// Create a session loader with default TTL and fetch timeout over the
    /// given upstream source.
    pub fn loader<S: SessionSource>(source: S) -> SessionLoader<S> {
        SessionLoader::new(source)
    }

    /// Create a session loader with explicit configuration.
    pub fn loader_with_config<S: SessionSource>(
        source: S,
        config: LoaderConfig,
    ) -> SessionLoader<S> {
        SessionLoader::with_config(source, config)
    }
}
