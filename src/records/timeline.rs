// Resume sections: education, experience, and events.
// Rendered as plain lists; a section that fails to load is logged and left empty.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::error;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub url: String,
    pub image: String,
    pub category: String,
    /// Machine-readable date.
    pub date: String,
    #[serde(rename = "formattedDate")]
    pub formatted_date: String,
    pub description: String,
}

/// All resume sections loaded from the data directory.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub events: Vec<Event>,
}

/// Load every resume section from `data_dir`, independently of each other.
pub fn load_timeline(data_dir: &Path) -> Timeline {
    Timeline {
        education: load_section(&data_dir.join("education.json"), "education"),
        experience: load_section(&data_dir.join("experience.json"), "experience"),
        events: load_section(&data_dir.join("events.json"), "events"),
    }
}

fn load_section<T: DeserializeOwned>(path: &Path, section: &str) -> Vec<T> {
    match read_section(path) {
        Ok(items) => items,
        Err(e) => {
            error!("Error fetching {} data from {}: {}", section, path.display(), e);
            Vec::new()
        }
    }
}

fn read_section<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sections_load_independently() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("education.json"),
            r#"[{"institution": "Uni", "duration": "2018 - 2022", "description": "BSc"}]"#,
        )
        .unwrap();
        fs::write(temp_dir.path().join("experience.json"), "{ not json").unwrap();
        fs::write(
            temp_dir.path().join("events.json"),
            r#"[{"title": "Meetup", "url": "https://e.x", "image": "m.png", "category": "Talk",
                 "date": "2024-03-01", "formattedDate": "Mar 1, 2024", "description": "Rust"}]"#,
        )
        .unwrap();

        let timeline = load_timeline(temp_dir.path());
        assert_eq!(timeline.education.len(), 1);
        assert!(timeline.experience.is_empty());
        assert_eq!(timeline.events[0].formatted_date, "Mar 1, 2024");
    }

    #[test]
    fn test_missing_directory_yields_empty_timeline() {
        let temp_dir = TempDir::new().unwrap();
        let timeline = load_timeline(&temp_dir.path().join("nowhere"));
        assert!(timeline.education.is_empty());
        assert!(timeline.events.is_empty());
    }
}
