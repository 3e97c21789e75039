// GitHub API module.
// Provides the client, response types, and the freshness lookup used by the aggregator.

pub mod client;
pub mod freshness;
pub mod types;

pub use client::{GITHUB_API_BASE, GitHubClient};
pub use freshness::{FreshnessFetcher, RepoId};
pub use types::{RateLimit, Repository};
