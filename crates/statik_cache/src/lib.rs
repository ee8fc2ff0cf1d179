//! TTL cache shared across worker tasks.
//!
//! Expiry is enforced lazily on the read path; there is no sweeper task.
//! Memory growth is bounded by the set of distinct ever-requested paths.

mod entry;
mod store;

pub use entry::CacheEntry;
pub use store::TtlCache;
