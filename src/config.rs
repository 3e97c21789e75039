// Command-line arguments and resolved configuration.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::cache::{self, FileStore, KeyValueStore, MemoryStore};
use crate::error::{FolioError, Result};
use crate::github::GITHUB_API_BASE;

/// Folio - terminal portfolio page
///
/// Shows projects ordered by their latest GitHub activity, alongside
/// education, experience, and events.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding projects.json and the resume data files
    #[arg(long, env = "FOLIO_DATA_DIR", default_value = "assets/data")]
    pub data_dir: PathBuf,

    /// Directory for the freshness cache and log file
    #[arg(long, env = "FOLIO_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Seconds a cached repository timestamp stays fresh
    #[arg(long, default_value_t = cache::DEFAULT_TTL.as_secs())]
    pub ttl_secs: u64,

    /// GitHub REST API base URL
    #[arg(long, env = "FOLIO_GITHUB_API", default_value = GITHUB_API_BASE)]
    pub api_base: String,

    /// Keep the freshness cache in memory only
    #[arg(long)]
    pub ephemeral_cache: bool,

    /// Write the project list markup to this file and exit
    #[arg(long, value_name = "PATH", conflicts_with = "plain")]
    pub html: Option<PathBuf>,

    /// Print the project list to stdout and exit
    #[arg(long)]
    pub plain: bool,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// How the page is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Interactive,
    Html(PathBuf),
    Plain,
}

/// Configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub ttl: Duration,
    pub api_base: String,
    /// Storage backing the freshness cache, shared by every pass.
    pub store: Arc<dyn KeyValueStore>,
    pub mode: OutputMode,
    pub verbose: u8,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let api_base = cli.api_base.trim().to_string();
        if api_base.is_empty() {
            return Err(FolioError::Config("GitHub API base URL is empty".to_string()));
        }

        let cache_dir = match cli.cache_dir {
            Some(dir) => dir,
            None => cache::cache_dir().ok_or_else(|| {
                FolioError::Config(
                    "could not determine a cache directory, pass --cache-dir".to_string(),
                )
            })?,
        };

        let mode = match (cli.html, cli.plain) {
            (Some(path), _) => OutputMode::Html(path),
            (None, true) => OutputMode::Plain,
            (None, false) => OutputMode::Interactive,
        };

        let store: Arc<dyn KeyValueStore> = if cli.ephemeral_cache {
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(FileStore::new(&cache_dir))
        };

        Ok(Self {
            data_dir: cli.data_dir,
            cache_dir,
            ttl: Duration::from_secs(cli.ttl_secs),
            api_base,
            store,
            mode,
            verbose: cli.verbose,
        })
    }

    pub fn projects_path(&self) -> PathBuf {
        self.data_dir.join("projects.json")
    }

    pub fn log_path(&self) -> PathBuf {
        cache::log_path(&self.cache_dir)
    }

    /// Handle to the freshness cache storage.
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("folio").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_cli(parse(&["--cache-dir", "/tmp/folio"])).unwrap();
        assert_eq!(config.ttl, Duration::from_secs(3600));
        assert_eq!(config.mode, OutputMode::Interactive);
        assert!(config.projects_path().ends_with("assets/data/projects.json"));
        assert!(config.log_path().ends_with("folio/folio.log"));
    }

    #[test]
    fn test_output_modes() {
        let html = Config::from_cli(parse(&["--cache-dir", "c", "--html", "out.html"])).unwrap();
        assert_eq!(html.mode, OutputMode::Html(PathBuf::from("out.html")));

        let plain = Config::from_cli(parse(&["--cache-dir", "c", "--plain", "-vv"])).unwrap();
        assert_eq!(plain.mode, OutputMode::Plain);
        assert_eq!(plain.verbose, 2);
    }

    #[test]
    fn test_ephemeral_store_is_shared() {
        let config = Config::from_cli(parse(&["--cache-dir", "c", "--ephemeral-cache"])).unwrap();
        config.store().set("k", "v").unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.store().get("k").unwrap().as_deref(), Some("v"));
        assert!(!PathBuf::from("c").join("k.json").exists());
    }

    #[test]
    fn test_html_conflicts_with_plain() {
        let result = Cli::try_parse_from(["folio", "--html", "x", "--plain"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_api_base_rejected() {
        let result = Config::from_cli(parse(&["--cache-dir", "c", "--api-base", "  "]));
        assert!(matches!(result, Err(FolioError::Config(_))));
    }
}
