// Project aggregation pass.
// Merges authored project records with GitHub freshness, going through the cache first,
// and orders the result with the most recently updated projects on top.

use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::cache::{FreshnessCache, KeyValueStore};
use crate::error::{FolioError, Result};
use crate::github::{FreshnessFetcher, RepoId};
use crate::records::{ProjectRecord, load_projects};

/// A project record with its resolved freshness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedProject {
    pub record: ProjectRecord,
    /// Null when the project has no repository or its freshness could not be resolved.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Counters describing how a pass resolved its records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    pub projects: usize,
    /// Projects that ended up with a timestamp.
    pub resolved: usize,
    pub without_repo: usize,
    pub cache_hits: usize,
    pub fetched: usize,
    pub failures: usize,
}

/// Output of a completed pass.
#[derive(Debug, Clone, Default)]
pub struct Pass {
    pub projects: Vec<EnrichedProject>,
    pub report: PassReport,
}

/// How a single record's freshness was resolved.
#[derive(Debug)]
enum Resolution {
    Unlinked,
    Cached(Option<DateTime<Utc>>),
    Fetched {
        key: String,
        updated_at: Option<DateTime<Utc>>,
    },
    Failed,
}

impl Resolution {
    fn updated_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Resolution::Cached(updated_at) => *updated_at,
            Resolution::Fetched { updated_at, .. } => *updated_at,
            Resolution::Unlinked | Resolution::Failed => None,
        }
    }
}

/// Runs aggregation passes, one at a time.
pub struct Aggregator {
    fetcher: Arc<dyn FreshnessFetcher>,
    in_flight: AtomicBool,
}

impl Aggregator {
    pub fn new(fetcher: Arc<dyn FreshnessFetcher>) -> Self {
        Self {
            fetcher,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a pass is currently running.
    pub fn is_running(&self) -> bool {
        self.in_flight.load(AtomicOrdering::Acquire)
    }

    /// Load records from `projects_path` and aggregate them against the cache in `store`.
    ///
    /// A record store failure aborts the pass before the cache is read.
    pub async fn run_pass(
        &self,
        projects_path: &Path,
        store: Arc<dyn KeyValueStore>,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<Pass> {
        let _guard = PassGuard::acquire(&self.in_flight)?;

        let records = load_projects(projects_path)?;
        let mut cache = FreshnessCache::load(store, ttl);
        Ok(self.aggregate(records, &mut cache, now).await)
    }

    /// Resolve freshness for every record, persist the cache once, and sort.
    pub async fn aggregate(
        &self,
        records: Vec<ProjectRecord>,
        cache: &mut FreshnessCache,
        now: DateTime<Utc>,
    ) -> Pass {
        let resolutions = {
            let cache = &*cache;
            join_all(records.iter().map(|record| self.resolve(record, cache, now))).await
        };

        let mut report = PassReport {
            projects: records.len(),
            ..PassReport::default()
        };
        let mut projects = Vec::with_capacity(records.len());

        for (record, resolution) in records.into_iter().zip(resolutions) {
            match &resolution {
                Resolution::Unlinked => report.without_repo += 1,
                Resolution::Cached(_) => report.cache_hits += 1,
                Resolution::Fetched { key, updated_at } => {
                    report.fetched += 1;
                    cache.put(key, *updated_at, now);
                }
                Resolution::Failed => report.failures += 1,
            }

            let updated_at = resolution.updated_at();
            if updated_at.is_some() {
                report.resolved += 1;
            }
            projects.push(EnrichedProject { updated_at, record });
        }

        cache.flush();
        sort_by_freshness(&mut projects);

        info!(
            "Aggregated {} projects ({} cached, {} fetched, {} failed, {} unlinked)",
            report.projects, report.cache_hits, report.fetched, report.failures, report.without_repo
        );

        Pass { projects, report }
    }

    async fn resolve(
        &self,
        record: &ProjectRecord,
        cache: &FreshnessCache,
        now: DateTime<Utc>,
    ) -> Resolution {
        let Some(key) = record.github.as_deref() else {
            return Resolution::Unlinked;
        };

        if let Some(entry) = cache.get_valid(key, now) {
            debug!("Cache hit for {}", key);
            return Resolution::Cached(entry.updated_at);
        }

        let repo: RepoId = match key.parse() {
            Ok(repo) => repo,
            Err(e) => {
                warn!("Skipping freshness for '{}': {}", record.title, e);
                return Resolution::Failed;
            }
        };

        match self.fetcher.fetch_updated_at(&repo).await {
            Ok(updated_at) => {
                debug!("Fetched freshness for {}", repo);
                Resolution::Fetched {
                    key: key.to_string(),
                    updated_at,
                }
            }
            Err(e) => {
                warn!("Failed to fetch freshness for {}: {}", repo, e);
                if let Some(hint) = e.hint() {
                    warn!("{}", hint);
                }
                Resolution::Failed
            }
        }
    }
}

/// Most recent first; projects without a timestamp last, in their original order.
pub fn sort_by_freshness(projects: &mut [EnrichedProject]) {
    projects.sort_by(|a, b| match (a.updated_at, b.updated_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Marks a pass as running until dropped.
struct PassGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> PassGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, AtomicOrdering::AcqRel, AtomicOrdering::Acquire)
            .map_err(|_| FolioError::PassInFlight)?;
        Ok(Self { flag })
    }
}

impl Drop for PassGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, AtomicOrdering::Release);
    }
}
