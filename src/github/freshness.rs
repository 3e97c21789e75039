// Remote freshness lookup.
// Resolves the last update time of a repository named as `owner/name`.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{FolioError, Result};

use super::client::GitHubClient;

/// Repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        let valid_part = |part: &str| !part.is_empty() && !part.chars().any(char::is_whitespace);

        match s.split_once('/') {
            Some((owner, name)) if valid_part(owner) && valid_part(name) && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(FolioError::InvalidRepo(s.to_string())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Source of repository freshness.
///
/// `Ok(None)` means the repository exists but reports no update time.
/// Any `Err` is a soft failure for that repository only.
#[async_trait]
pub trait FreshnessFetcher: Send + Sync {
    async fn fetch_updated_at(&self, repo: &RepoId) -> Result<Option<DateTime<Utc>>>;
}

#[async_trait]
impl FreshnessFetcher for GitHubClient {
    async fn fetch_updated_at(&self, repo: &RepoId) -> Result<Option<DateTime<Utc>>> {
        let repository = self.get_repo(&repo.owner, &repo.name).await?;
        Ok(repository.updated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_id() {
        let repo: RepoId = "octocat/Hello-World".parse().unwrap();
        assert_eq!(repo.owner, "octocat");
        assert_eq!(repo.name, "Hello-World");
        assert_eq!(repo.to_string(), "octocat/Hello-World");
    }

    #[test]
    fn test_reject_malformed_repo_ids() {
        for bad in ["", "octocat", "/repo", "owner/", "a/b/c", "own er/repo", "owner/re po"] {
            assert!(
                matches!(bad.parse::<RepoId>(), Err(FolioError::InvalidRepo(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
