// One-shot page rendering for the non-interactive modes.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::aggregate::Aggregator;
use crate::config::Config;
use crate::error::Result;
use crate::render::{ListEntry, ProjectList, render_html};

/// Run one pass and render it. A failed pass renders the placeholder row.
pub async fn render_once(aggregator: &Aggregator, config: &Config, now: DateTime<Utc>) -> ProjectList {
    let mut list = ProjectList::new();
    match aggregator
        .run_pass(&config.projects_path(), config.store(), config.ttl, now)
        .await
    {
        Ok(pass) => list.render(&pass.projects, now),
        Err(e) => {
            error!("Project pass failed: {}", e);
            list.render_failure(&e);
        }
    }
    list
}

/// Write the list markup to `path`.
pub fn write_html(list: &ProjectList, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_html(list))?;
    info!("Wrote {} entries to {}", list.len(), path.display());
    Ok(())
}

/// One line per list entry.
pub fn plain_lines(list: &ProjectList) -> Vec<String> {
    list.entries()
        .iter()
        .map(|entry| match entry {
            ListEntry::Placeholder(message) => message.clone(),
            ListEntry::Project(node) => {
                let mut line = format!("{} [{}]", node.title, node.category_desc);
                if !node.tags.is_empty() {
                    line.push_str(&format!(" #{}", node.tags.join(" #")));
                }
                if let Some(caption) = &node.caption {
                    line.push_str(&format!(" (updated {})", caption));
                }
                line
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{FileStore, MemoryStore};
    use crate::config::OutputMode;
    use crate::error::FolioError;
    use crate::github::{FreshnessFetcher, RepoId};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tempfile::TempDir;

    struct NotFound;

    #[async_trait]
    impl FreshnessFetcher for NotFound {
        async fn fetch_updated_at(&self, repo: &RepoId) -> Result<Option<DateTime<Utc>>> {
            Err(FolioError::NotFound(repo.to_string()))
        }
    }

    /// Counts calls and reports every repository as just updated.
    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl FreshnessFetcher for Counting {
        async fn fetch_updated_at(&self, _repo: &RepoId) -> Result<Option<DateTime<Utc>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(Utc::now()))
        }
    }

    const ONE_LINKED_PROJECT: &str = r#"[{"title": "Folio", "url": "u", "image": "i", "alt": "a",
        "category": "apps", "category_desc": "Apps", "tags": ["rust", "tui"], "github": "octo/folio"}]"#;

    fn config(dir: &TempDir) -> Config {
        Config {
            data_dir: dir.path().to_path_buf(),
            cache_dir: dir.path().join("cache"),
            ttl: Duration::from_secs(3600),
            api_base: "http://localhost".to_string(),
            store: Arc::new(FileStore::new(dir.path().join("cache"))),
            mode: OutputMode::Plain,
            verbose: 0,
        }
    }

    #[tokio::test]
    async fn test_in_memory_cache_survives_between_passes() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("projects.json"), ONE_LINKED_PROJECT).unwrap();
        let config = Config {
            store: Arc::new(MemoryStore::new()),
            ..config(&temp_dir)
        };
        let fetcher = Arc::new(Counting::default());
        let aggregator = Aggregator::new(fetcher.clone());

        let first = Utc::now();
        render_once(&aggregator, &config, first).await;
        let list = render_once(&aggregator, &config, first + chrono::Duration::minutes(1)).await;

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
        assert_eq!(list.nodes().count(), 1);
        assert!(!temp_dir.path().join("cache").exists());
    }

    #[tokio::test]
    async fn test_missing_projects_renders_single_placeholder() {
        let temp_dir = TempDir::new().unwrap();
        let aggregator = Aggregator::new(Arc::new(NotFound));

        let list = render_once(&aggregator, &config(&temp_dir), Utc::now()).await;
        let lines = plain_lines(&list);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Projects could not be loaded"));
        assert!(!temp_dir.path().join("cache").exists());
    }

    #[tokio::test]
    async fn test_render_and_export() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("projects.json"), ONE_LINKED_PROJECT).unwrap();
        let aggregator = Aggregator::new(Arc::new(NotFound));

        let list = render_once(&aggregator, &config(&temp_dir), Utc::now()).await;
        assert_eq!(plain_lines(&list), vec!["Folio [Apps] #rust #tui"]);

        let out = temp_dir.path().join("out").join("projects.html");
        write_html(&list, &out).unwrap();
        assert!(fs::read_to_string(out).unwrap().contains("data-category=\"apps\""));
    }
}
