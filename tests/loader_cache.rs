//! Loader and cache behaviour against a scripted upstream source.

mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use common::ScriptedSource;
use paddock::{LoadMode, LoaderConfig, Paddock, SessionError, SessionKey, SessionKind};

fn monaco() -> SessionKey {
    SessionKey::new(2023, "Monaco", SessionKind::Race)
}

#[tokio::test]
async fn second_load_within_ttl_hits_the_cache() {
    common::init_tracing();
    let source = ScriptedSource::default();
    let (session_fetches, _) = source.counters();
    let loader = Paddock::loader(source);

    let first = loader.load(&monaco(), LoadMode::Basic).await.unwrap();
    let second = loader.load(&monaco(), LoadMode::Basic).await.unwrap();

    assert_eq!(session_fetches.load(Ordering::SeqCst), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
}

#[tokio::test]
async fn partial_event_names_resolve_to_the_same_entry() {
    let source = ScriptedSource::default();
    let (session_fetches, _) = source.counters();
    let loader = Paddock::loader(source);

    loader.load(&monaco(), LoadMode::Basic).await.unwrap();
    let via_partial = loader
        .load(&SessionKey::new(2023, "monaco", SessionKind::Race), LoadMode::Basic)
        .await
        .unwrap();

    assert_eq!(session_fetches.load(Ordering::SeqCst), 1);
    assert_eq!(via_partial.key.event, "Monaco Grand Prix");
}

#[tokio::test]
async fn higher_mode_is_never_served_from_a_lower_entry() {
    let source = ScriptedSource::default();
    let (session_fetches, _) = source.counters();
    let loader = Paddock::loader(source);

    let basic = loader.load(&monaco(), LoadMode::Basic).await.unwrap();
    let full = loader.load(&monaco(), LoadMode::Full).await.unwrap();

    assert_eq!(session_fetches.load(Ordering::SeqCst), 2);
    assert_eq!(basic.mode, LoadMode::Basic);
    assert_eq!(full.mode, LoadMode::Full);
    assert!(!basic.has_telemetry());
    assert!(full.has_telemetry());

    // And the lower mode keeps its own entry rather than borrowing the
    // richer one.
    let basic_again = loader.load(&monaco(), LoadMode::Basic).await.unwrap();
    assert_eq!(session_fetches.load(Ordering::SeqCst), 2);
    assert!(Arc::ptr_eq(&basic, &basic_again));
}

#[tokio::test]
async fn expired_entries_are_refetched() {
    let source = ScriptedSource::default();
    let (session_fetches, _) = source.counters();
    let config = LoaderConfig { ttl: Duration::ZERO, ..LoaderConfig::default() };
    let loader = Paddock::loader_with_config(source, config);

    loader.load(&monaco(), LoadMode::Basic).await.unwrap();
    loader.load(&monaco(), LoadMode::Basic).await.unwrap();

    assert_eq!(session_fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn invalidate_forces_a_fresh_fetch() {
    let source = ScriptedSource::default();
    let (session_fetches, _) = source.counters();
    let loader = Paddock::loader(source);

    loader.load(&monaco(), LoadMode::Basic).await.unwrap();
    loader.invalidate(&monaco(), LoadMode::Basic).await.unwrap();
    loader.load(&monaco(), LoadMode::Basic).await.unwrap();

    assert_eq!(session_fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn schedule_is_cached_alongside_sessions() {
    let source = ScriptedSource::default();
    let (_, schedule_fetches) = source.counters();
    let loader = Paddock::loader(source);

    let schedule = loader.schedule(2023).await.unwrap();
    assert_eq!(schedule.len(), common::SCHEDULE_2023.len());

    // Event resolution inside load reuses the cached schedule.
    loader.load(&monaco(), LoadMode::Basic).await.unwrap();
    loader.schedule(2023).await.unwrap();

    assert_eq!(schedule_fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unsupported_season_is_rejected_before_fetching() {
    let source = ScriptedSource::default();
    let (session_fetches, schedule_fetches) = source.counters();
    let loader = Paddock::loader(source);

    let err = loader
        .load(&SessionKey::new(1994, "Monaco", SessionKind::Race), LoadMode::Basic)
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::UnsupportedSeason { year: 1994, .. }));
    assert!(!err.is_retryable());
    assert_eq!(session_fetches.load(Ordering::SeqCst), 0);
    assert_eq!(schedule_fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unresolvable_event_is_rejected() {
    let source = ScriptedSource::default();
    let (session_fetches, _) = source.counters();
    let loader = Paddock::loader(source);

    let err = loader
        .load(&SessionKey::new(2023, "Atlantis", SessionKind::Race), LoadMode::Basic)
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::UnknownEvent { .. }));
    assert_eq!(err.to_string(), "event 'Atlantis' does not resolve to a scheduled 2023 round");
    assert_eq!(session_fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn upstream_failure_surfaces_with_cause() {
    let source = ScriptedSource {
        fail_with: Some("502 from timing service".to_string()),
        ..ScriptedSource::default()
    };
    let loader = Paddock::loader(source);

    let err = loader.load(&monaco(), LoadMode::Basic).await.unwrap_err();
    match &err {
        SessionError::LoadFailure { reason, source } => {
            assert_eq!(reason, "502 from timing service");
            assert!(source.is_some());
        }
        other => panic!("expected LoadFailure, got {other:?}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn slow_fetch_times_out() {
    let source = ScriptedSource {
        fetch_delay: Some(Duration::from_millis(200)),
        ..ScriptedSource::default()
    };
    let config =
        LoaderConfig { fetch_timeout: Duration::from_millis(20), ..LoaderConfig::default() };
    let loader = Paddock::loader_with_config(source, config);

    let err = loader.load(&monaco(), LoadMode::Basic).await.unwrap_err();
    assert!(matches!(err, SessionError::Timeout { .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn clear_cache_drops_sessions_and_schedules() {
    let source = ScriptedSource::default();
    let (session_fetches, schedule_fetches) = source.counters();
    let loader = Paddock::loader(source);

    loader.load(&monaco(), LoadMode::Basic).await.unwrap();
    loader.clear_cache();
    loader.load(&monaco(), LoadMode::Basic).await.unwrap();

    assert_eq!(session_fetches.load(Ordering::SeqCst), 2);
    assert_eq!(schedule_fetches.load(Ordering::SeqCst), 2);
}
