use std::time::Duration;

use bytes::Bytes;
use dashmap::DashMap;
use tokio::time::Instant;
use tracing::debug;

use crate::entry::CacheEntry;

/// Concurrent key -> bytes store with a fixed TTL.
///
/// Each operation is individually atomic with respect to the underlying
/// map. The get-then-put sequence used by callers on a miss is not: two
/// tasks can both miss the same key and both read the file. Entries are
/// immutable, so the result is duplicated work, never a torn value
/// (last writer wins).
#[derive(Debug)]
pub struct TtlCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl TtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Look up `key`, evicting it as a side effect when it has expired.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(Instant::now()) => {
                return Some(entry.data().clone());
            }
            Some(_) => true,
            None => false,
        };

        // The shard guard is dropped by now, so removal cannot deadlock.
        if expired {
            debug!(target: "statik::cache", %key, "Evicting expired entry");
            self.entries.remove(key);
        }
        None
    }

    /// Insert or replace the entry for `key` with a fresh expiry.
    pub fn put(&self, key: &str, data: Bytes) {
        let entry = CacheEntry::new(data, Instant::now() + self.ttl);
        self.entries.insert(key.to_string(), entry);
    }

    /// Presence check. Shares the lazy-eviction side effect of [`get`],
    /// so it is not a pure predicate.
    ///
    /// [`get`]: TtlCache::get
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Drop every entry, expired or not.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
