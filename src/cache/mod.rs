// Cache module for project freshness data.
// Persists GitHub freshness lookups between runs behind a small key-value interface.

pub mod freshness;
pub mod paths;
pub mod store;

pub use freshness::{CACHE_KEY, DEFAULT_TTL, FreshnessCache, FreshnessEntry};
pub use paths::{cache_dir, log_path};
pub use store::{FileStore, KeyValueStore, MemoryStore};
