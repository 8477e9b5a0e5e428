//! TTL cache for loaded sessions and schedules
//!
//! An explicit cache object rather than a process-wide singleton: the owner
//! constructs it with its TTL and capacity and can invalidate entries. Expiry
//! is lazy - an expired entry is treated as absent at the next lookup, with
//! no background sweep. The access pattern is one render at a time, so
//! capacity eviction is recency-unaware: any excess entry may be dropped.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Default entry time-to-live, one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

/// In-memory cache with per-entry TTL and optional capacity bound.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    entries: HashMap<K, Entry<V>>,
    ttl: Duration,
    capacity: Option<usize>,
}

impl<K: Eq + Hash + Clone, V: Clone> TtlCache<K, V> {
    /// Create a cache with the given TTL and no capacity bound.
    pub fn new(ttl: Duration) -> Self {
        Self { entries: HashMap::new(), ttl, capacity: None }
    }

    /// Create a cache with the given TTL and a maximum entry count.
    pub fn with_capacity(ttl: Duration, capacity: usize) -> Self {
        Self { entries: HashMap::new(), ttl, capacity: Some(capacity) }
    }

    /// Look up a live entry. Expired entries are removed and reported absent.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.inserted_at.elapsed() >= self.ttl,
            None => return None,
        };
        if expired {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Insert a value, evicting an arbitrary entry if over capacity.
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key.clone(), Entry { value, inserted_at: Instant::now() });

        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity {
                // Arbitrary victim other than the fresh insert; exact
                // eviction order is not required for this low-volume,
                // single-process cache.
                let victim = self.entries.keys().find(|k| **k != key).cloned();
                match victim {
                    Some(k) => self.entries.remove(&k),
                    None => break,
                };
            }
        }
    }

    /// Drop one entry.
    pub fn invalidate(&mut self, key: &K) {
        self.entries.remove(key);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries currently stored, including not-yet-collected
    /// expired ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
