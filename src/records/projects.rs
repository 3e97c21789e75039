// Authored project records.
// A malformed file fails the whole load; entries are never skipped individually.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// One project as written in projects.json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub url: String,
    pub image: String,
    pub alt: String,
    /// Label used for filtering.
    pub category: String,
    /// Human-readable subtitle.
    pub category_desc: String,
    pub tags: Vec<String>,
    /// GitHub repository as `owner/name`.
    #[serde(default)]
    pub github: Option<String>,
}

/// Load all project records from a JSON array file.
pub fn load_projects(path: &Path) -> Result<Vec<ProjectRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| FolioError::RecordStore {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&contents).map_err(|e| FolioError::RecordStore {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"[
        {
            "title": "Folio",
            "url": "https://example.com/folio",
            "image": "./assets/images/folio.png",
            "alt": "folio screenshot",
            "category": "web development",
            "category_desc": "Web development",
            "tags": ["rust", "tui", "rust"],
            "github": "octo/folio"
        },
        {
            "title": "Notes",
            "url": "https://example.com/notes",
            "image": "./assets/images/notes.png",
            "alt": "notes",
            "category": "writing",
            "category_desc": "Writing",
            "tags": []
        }
    ]"#;

    #[test]
    fn test_load_projects() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("projects.json");
        fs::write(&path, SAMPLE).unwrap();

        let projects = load_projects(&path).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].github.as_deref(), Some("octo/folio"));
        // Duplicate tags are kept verbatim
        assert_eq!(projects[0].tags, vec!["rust", "tui", "rust"]);
        assert!(projects[1].github.is_none());
    }

    #[test]
    fn test_missing_field_fails_whole_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("projects.json");
        fs::write(
            &path,
            r#"[{"title": "No url", "image": "", "alt": "", "category": "x", "category_desc": "X", "tags": []}]"#,
        )
        .unwrap();

        let err = load_projects(&path).unwrap_err();
        assert!(matches!(err, FolioError::RecordStore { .. }));
    }

    #[test]
    fn test_missing_file_is_record_store_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_projects(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, FolioError::RecordStore { .. }));
    }
}
