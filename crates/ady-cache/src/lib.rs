//! Keyed memoizing cache with idle expiry.
//!
//! [`IdleCache`] maps a key to a lazily computed value. An entry that has not
//! been read for the configured idle period is dropped on the next eviction
//! pass. Values must be pure functions of their keys: eviction only costs a
//! recomputation, never a different answer.
//!
//! Two threads missing on the same key may both run the compute closure. The
//! first value to land wins and both callers observe it.

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use hashbrown::HashMap;
use hashbrown::hash_map::Entry as MapEntry;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;
use serde::Serialize;
use tracing::{debug, trace};

/// Default idle period before an entry becomes evictable.
pub const DEFAULT_IDLE: Duration = Duration::from_secs(30 * 60);

/// Misses between opportunistic eviction passes.
const EVICT_EVERY: u64 = 64;

struct Entry<V> {
    value: V,
    /// Nanoseconds since the cache origin at the last read or write.
    last_access: AtomicU64,
}

/// Counters for one cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub len: usize,
}

/// A memoizing map whose entries expire after a period without access.
pub struct IdleCache<K, V> {
    name: &'static str,
    idle: Duration,
    clock: Arc<dyn Clock>,
    origin: Instant,
    entries: RwLock<HashMap<K, Entry<V>, FxBuildHasher>>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl<K, V> IdleCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache using the system clock.
    pub fn new(name: &'static str, idle: Duration) -> Self {
        Self::with_clock(name, idle, Arc::new(SystemClock))
    }

    pub fn with_clock(name: &'static str, idle: Duration, clock: Arc<dyn Clock>) -> Self {
        let origin = clock.now();
        Self {
            name,
            idle,
            clock,
            origin,
            entries: RwLock::new(HashMap::with_hasher(FxBuildHasher)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn idle(&self) -> Duration {
        self.idle
    }

    fn stamp(&self) -> u64 {
        self.clock
            .now()
            .saturating_duration_since(self.origin)
            .as_nanos() as u64
    }

    fn is_expired(&self, entry: &Entry<V>, now: u64) -> bool {
        let last = entry.last_access.load(Ordering::Relaxed);
        now.saturating_sub(last) >= self.idle.as_nanos() as u64
    }

    /// Return the cached value for `key`, computing it on a miss.
    ///
    /// A failed computation is not cached; the next call tries again.
    pub fn get_or_try_insert_with<E, F>(&self, key: &K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let now = self.stamp();
        {
            let entries = self.entries.read();
            if let Some(entry) = entries.get(key) {
                if !self.is_expired(entry, now) {
                    entry.last_access.store(now, Ordering::Relaxed);
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    return Ok(entry.value.clone());
                }
            }
        }

        let misses = self.misses.fetch_add(1, Ordering::Relaxed) + 1;
        trace!(cache = self.name, "miss");
        let value = compute()?;

        let now = self.stamp();
        let mut entries = self.entries.write();
        let stored = match entries.entry(key.clone()) {
            MapEntry::Occupied(mut occupied) => {
                if self.is_expired(occupied.get(), now) {
                    occupied.get_mut().value = value;
                }
                let entry = occupied.get();
                entry.last_access.store(now, Ordering::Relaxed);
                entry.value.clone()
            }
            MapEntry::Vacant(vacant) => {
                vacant.insert(Entry {
                    value: value.clone(),
                    last_access: AtomicU64::new(now),
                });
                value
            }
        };
        if misses % EVICT_EVERY == 0 {
            self.evict_locked(&mut entries, now);
        }
        Ok(stored)
    }

    /// Infallible variant of [`get_or_try_insert_with`](Self::get_or_try_insert_with).
    pub fn get_or_insert_with<F>(&self, key: &K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self.get_or_try_insert_with::<std::convert::Infallible, _>(key, || Ok(compute())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Read without computing. Refreshes the idle timer on a hit.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.stamp();
        let entries = self.entries.read();
        let entry = entries.get(key).filter(|e| !self.is_expired(e, now))?;
        entry.last_access.store(now, Ordering::Relaxed);
        self.hits.fetch_add(1, Ordering::Relaxed);
        Some(entry.value.clone())
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        let now = self.stamp();
        self.entries
            .read()
            .get(key)
            .is_some_and(|e| !self.is_expired(e, now))
    }

    pub fn invalidate(&self, key: &K) -> Option<V> {
        self.entries.write().remove(key).map(|e| e.value)
    }

    pub fn invalidate_all(&self) {
        self.entries.write().clear();
    }

    /// Drop every entry idle for at least the configured period.
    ///
    /// Returns the number of entries removed.
    pub fn evict_expired(&self) -> usize {
        let now = self.stamp();
        let mut entries = self.entries.write();
        self.evict_locked(&mut entries, now)
    }

    fn evict_locked(&self, entries: &mut HashMap<K, Entry<V>, FxBuildHasher>, now: u64) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| !self.is_expired(entry, now));
        let removed = before - entries.len();
        if removed > 0 {
            self.evictions.fetch_add(removed as u64, Ordering::Relaxed);
            debug!(cache = self.name, removed, "evicted idle entries");
        }
        removed
    }

    /// Number of stored entries, including ones awaiting eviction.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            len: self.len(),
        }
    }
}

impl<K, V> fmt::Debug for IdleCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdleCache")
            .field("name", &self.name)
            .field("idle", &self.idle)
            .field("len", &self.entries.read().len())
            .finish_non_exhaustive()
    }
}
