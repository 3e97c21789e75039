// Cache path utilities.
// Resolves the platform cache directory and the files folio keeps there.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/folio on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "folio").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the log file written while the TUI owns the terminal.
pub fn log_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join("folio.log")
}

/// Path to the file backing a key-value store entry.
pub fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", sanitize_name(key)))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("simple"), "simple");
        assert_eq!(sanitize_name("with/slash"), "with_slash");
        assert_eq!(sanitize_name("owner:name"), "owner_name");
    }

    #[test]
    fn test_key_and_log_paths() {
        let dir = Path::new("/tmp/folio");
        assert!(key_path(dir, "github_repo_cache").ends_with("folio/github_repo_cache.json"));
        assert!(key_path(dir, "a/b").ends_with("folio/a_b.json"));
        assert!(log_path(dir).ends_with("folio/folio.log"));
    }
}
