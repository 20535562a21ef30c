//! Short-lived cache of successful response bodies.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use lru::LruCache;
use tokio::time::Instant;

/// How long a cached response stays fresh.
pub const CACHE_FRESHNESS: Duration = Duration::from_secs(5 * 60);

/// Upper bound on distinct cached responses.
pub const CACHE_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
struct CacheEntry {
    body: Vec<u8>,
    stored_at: Instant,
}

/// Bounded LRU cache of response bodies keyed by request URL.
///
/// Entries older than [`CACHE_FRESHNESS`] are treated as absent and dropped
/// on access; the LRU bound caps memory for the process lifetime. Owned by
/// one client instance; never shared across instances.
#[derive(Debug)]
pub struct ResponseCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
}

impl ResponseCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(CACHE_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the body cached under `key` if it is still fresh.
    ///
    /// A hit refreshes the entry's LRU position. A stale entry is evicted
    /// and reported as a miss.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Vec<u8>> {
        let mut entries = self.lock();

        let hit = match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() <= CACHE_FRESHNESS => {
                Some(entry.body.clone())
            }
            Some(_) => None,
            None => return None,
        };

        if hit.is_none() {
            entries.pop(key);
        }
        hit
    }

    /// Store `body` under `key` with the current instant.
    ///
    /// Overwrites any previous entry for the key; may evict the least
    /// recently used entry when the cache is at capacity.
    pub fn store(&self, key: impl Into<String>, body: Vec<u8>) {
        let entry = CacheEntry {
            body,
            stored_at: Instant::now(),
        };
        self.lock().put(key.into(), entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
