// Project list display nodes.
// The list is rebuilt from scratch on every render; the filter controller toggles visibility.

use chrono::{DateTime, Utc};

use crate::aggregate::EnrichedProject;
use crate::error::FolioError;

use super::timeago::time_ago;

/// One rendered project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNode {
    pub title: String,
    pub url: String,
    pub image: String,
    pub alt: String,
    /// Machine-readable classification read by the filter controller.
    pub category: String,
    pub category_desc: String,
    /// One chip per tag, in authored order.
    pub tags: Vec<String>,
    /// Relative update time, present only when freshness is known.
    pub caption: Option<String>,
    pub visible: bool,
}

impl ProjectNode {
    fn from_project(project: &EnrichedProject, now: DateTime<Utc>) -> Self {
        let record = &project.record;
        Self {
            title: record.title.clone(),
            url: record.url.clone(),
            image: record.image.clone(),
            alt: record.alt.clone(),
            category: record.category.clone(),
            category_desc: record.category_desc.clone(),
            tags: record.tags.clone(),
            caption: project
                .updated_at
                .map(|updated_at| time_ago(Some(updated_at), now)),
            visible: true,
        }
    }

    /// Case-insensitive category match.
    pub fn in_category(&self, label: &str) -> bool {
        self.category.to_lowercase() == label.to_lowercase()
    }
}

/// Entry in the list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Project(ProjectNode),
    /// Explanatory row shown instead of the list when the pass failed.
    Placeholder(String),
}

/// The project list container.
#[derive(Debug, Clone, Default)]
pub struct ProjectList {
    entries: Vec<ListEntry>,
}

impl ProjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with one node per project, in order.
    pub fn render(&mut self, projects: &[EnrichedProject], now: DateTime<Utc>) {
        self.entries.clear();
        self.entries.extend(
            projects
                .iter()
                .map(|project| ListEntry::Project(ProjectNode::from_project(project, now))),
        );
    }

    /// Replace the contents with a single placeholder row describing `error`.
    pub fn render_failure(&mut self, error: &FolioError) {
        self.entries.clear();
        self.entries.push(ListEntry::Placeholder(format!(
            "Projects could not be loaded: {}",
            error
        )));
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered project nodes, skipping any placeholder.
    pub fn nodes(&self) -> impl Iterator<Item = &ProjectNode> {
        self.entries.iter().filter_map(|entry| match entry {
            ListEntry::Project(node) => Some(node),
            ListEntry::Placeholder(_) => None,
        })
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut ProjectNode> {
        self.entries.iter_mut().filter_map(|entry| match entry {
            ListEntry::Project(node) => Some(node),
            ListEntry::Placeholder(_) => None,
        })
    }

    pub fn visible_nodes(&self) -> impl Iterator<Item = &ProjectNode> {
        self.nodes().filter(|node| node.visible)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for node in self.nodes() {
            if !categories.iter().any(|c| node.in_category(c)) {
                categories.push(node.category.clone());
            }
        }
        categories
    }
}
