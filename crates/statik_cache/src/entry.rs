use bytes::Bytes;
use tokio::time::Instant;

/// In-memory cache entry with an absolute expiry.
///
/// Both fields are fixed at construction; replacing the whole entry is the
/// only way to update a key.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    data: Bytes,
    expires_at: Instant,
}

impl CacheEntry {
    pub(crate) fn new(data: Bytes, expires_at: Instant) -> Self {
        Self { data, expires_at }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now > self.expires_at
    }
}
