// Freshness cache for GitHub repositories.
// One JSON blob maps `owner/name` to the last known update time and when it was fetched.
// Read once per pass, written once per pass. Storage failures never reach the caller.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::store::KeyValueStore;

/// Storage key holding the serialized cache.
pub const CACHE_KEY: &str = "github_repo_cache";

/// Default TTL for freshness entries: 1 hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Cached freshness for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessEntry {
    /// Last modification time reported by GitHub.
    pub updated_at: Option<DateTime<Utc>>,
    /// When the value was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl FreshnessEntry {
    /// Check if this entry is younger than `ttl` at `now`.
    ///
    /// An entry stamped in the future is treated as stale so it gets refetched.
    pub fn is_valid(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match now.signed_duration_since(self.fetched_at).to_std() {
            Ok(elapsed) => elapsed < ttl,
            Err(_) => false,
        }
    }
}

/// In-memory view of the persisted cache blob.
pub struct FreshnessCache {
    store: Arc<dyn KeyValueStore>,
    entries: BTreeMap<String, FreshnessEntry>,
    ttl: Duration,
}

impl FreshnessCache {
    /// Read the blob from `store`. Missing or corrupt data yields an empty cache.
    pub fn load(store: Arc<dyn KeyValueStore>, ttl: Duration) -> Self {
        let entries = match store.get(CACHE_KEY) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Discarding corrupt freshness cache: {}", e);
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                warn!("Could not read freshness cache: {}", e);
                BTreeMap::new()
            }
        };

        debug!("Loaded {} freshness cache entries", entries.len());
        Self {
            store,
            entries,
            ttl,
        }
    }

    /// Look up the entry for `key` without checking its age.
    pub fn get(&self, key: &str) -> Option<&FreshnessEntry> {
        self.entries.get(key)
    }

    /// Look up the entry for `key` only if it is still within the TTL.
    pub fn get_valid(&self, key: &str, now: DateTime<Utc>) -> Option<&FreshnessEntry> {
        self.get(key).filter(|entry| entry.is_valid(now, self.ttl))
    }

    /// Insert or overwrite the entry for `key`, stamped with `now`.
    pub fn put(&mut self, key: &str, updated_at: Option<DateTime<Utc>>, now: DateTime<Utc>) {
        self.entries.insert(
            key.to_string(),
            FreshnessEntry {
                updated_at,
                fetched_at: now,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persist the whole mapping. Failures are logged and swallowed.
    pub fn flush(&self) {
        let blob = match serde_json::to_string(&self.entries) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Could not serialize freshness cache: {}", e);
                return;
            }
        };

        match self.store.set(CACHE_KEY, &blob) {
            Ok(()) => debug!("Saved {} freshness cache entries", self.entries.len()),
            Err(e) => warn!("Could not save freshness cache: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::store::MemoryStore;
    use crate::error::{FolioError, Result};

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[derive(Debug)]
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(FolioError::Other("storage unavailable".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(FolioError::Other("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_validity_boundary() {
        let fetched_at = ts("2024-06-01T12:00:00Z");
        let entry = FreshnessEntry {
            updated_at: None,
            fetched_at,
        };
        let ttl = Duration::from_secs(3600);

        assert!(entry.is_valid(fetched_at, ttl));
        assert!(entry.is_valid(fetched_at + chrono::Duration::seconds(3599), ttl));
        assert!(!entry.is_valid(fetched_at + chrono::Duration::seconds(3600), ttl));
        assert!(!entry.is_valid(fetched_at + chrono::Duration::hours(5), ttl));
    }

    #[test]
    fn test_missing_entry_is_not_valid() {
        let cache = FreshnessCache::load(Arc::new(MemoryStore::new()), DEFAULT_TTL);
        assert!(cache.get_valid("a/b", Utc::now()).is_none());
    }

    #[test]
    fn test_future_entry_is_stale() {
        let now = ts("2024-06-01T12:00:00Z");
        let entry = FreshnessEntry {
            updated_at: None,
            fetched_at: now + chrono::Duration::minutes(10),
        };
        assert!(!entry.is_valid(now, DEFAULT_TTL));
    }

    #[test]
    fn test_put_flush_and_reload() {
        let store = MemoryStore::new();
        let now = ts("2024-06-01T12:00:00Z");

        let mut cache = FreshnessCache::load(Arc::new(store.clone()), DEFAULT_TTL);
        assert!(cache.is_empty());
        cache.put("a/b", Some(ts("2024-01-01T00:00:00Z")), now);
        cache.put("c/d", None, now);
        cache.flush();

        let reloaded = FreshnessCache::load(Arc::new(store), DEFAULT_TTL);
        assert_eq!(reloaded.len(), 2);
        let entry = reloaded.get("a/b").unwrap();
        assert_eq!(entry.updated_at, Some(ts("2024-01-01T00:00:00Z")));
        assert_eq!(entry.fetched_at, now);
        assert_eq!(reloaded.get("c/d").unwrap().updated_at, None);
    }

    #[test]
    fn test_blob_format() {
        let store = MemoryStore::new();
        store
            .set(
                CACHE_KEY,
                r#"{"a/b": {"updated_at": "2024-01-01T00:00:00Z", "fetched_at": "2024-06-01T11:30:00Z"}}"#,
            )
            .unwrap();

        let cache = FreshnessCache::load(Arc::new(store), DEFAULT_TTL);
        let now = ts("2024-06-01T12:00:00Z");
        assert!(cache.get_valid("a/b", now).is_some());
        assert!(cache.get_valid("a/b", ts("2024-06-01T12:30:00Z")).is_none());
    }

    #[test]
    fn test_corrupt_blob_is_empty_cache() {
        let store = MemoryStore::new();
        store.set(CACHE_KEY, "{ definitely not json").unwrap();

        let cache = FreshnessCache::load(Arc::new(store), DEFAULT_TTL);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_broken_store_never_raises() {
        let mut cache = FreshnessCache::load(Arc::new(BrokenStore), DEFAULT_TTL);
        assert!(cache.is_empty());

        cache.put("a/b", None, Utc::now());
        cache.flush();
        assert_eq!(cache.len(), 1);
    }
}
