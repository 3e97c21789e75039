// Portfolio page state.
// Holds the rendered project list, the pass outcome, and keyboard selection.

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;

use crate::aggregate::{Pass, PassReport};
use crate::error::FolioError;
use crate::render::{ProjectList, ProjectNode};

use super::filter::{CategorySelect, FilterController};

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Complete state for the Portfolio page.
#[derive(Debug, Default)]
pub struct ProjectsState {
    pub status: LoadingState<PassReport>,
    pub list: ProjectList,
    pub filter: FilterController,
    pub select: CategorySelect,
    /// Selection among visible projects.
    pub list_state: ListState,
}

impl ProjectsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loading(&mut self) {
        self.status = LoadingState::Loading;
    }

    /// Render a completed pass and re-attach the filter to the new nodes.
    pub fn apply_pass(&mut self, pass: &Pass, now: DateTime<Utc>) {
        self.list.render(&pass.projects, now);
        self.filter.rebuild(&mut self.list);
        self.status = LoadingState::Loaded(pass.report.clone());
        self.reset_selection();
    }

    /// Replace the list with the placeholder row for a failed pass.
    pub fn apply_failure(&mut self, error: &FolioError) {
        self.list.render_failure(error);
        self.filter = FilterController::default();
        self.status = LoadingState::Error(error.to_string());
        self.list_state.select(None);
    }

    pub fn visible_count(&self) -> usize {
        self.list.visible_nodes().count()
    }

    /// The highlighted visible project.
    pub fn selected_node(&self) -> Option<&ProjectNode> {
        let index = self.list_state.selected()?;
        self.list.visible_nodes().nth(index)
    }

    pub fn select_next(&mut self) {
        let len = self.visible_count();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => i, // Stay at end
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_prev(&mut self) {
        if self.visible_count() == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Reset selection to the first visible item.
    pub fn reset_selection(&mut self) {
        if self.visible_count() > 0 {
            self.list_state.select(Some(0));
        } else {
            self.list_state.select(None);
        }
    }

    pub fn next_filter(&mut self) {
        self.filter.select_next(&mut self.list);
        self.reset_selection();
    }

    pub fn prev_filter(&mut self) {
        self.filter.select_prev(&mut self.list);
        self.reset_selection();
    }

    pub fn choose_from_select(&mut self) {
        self.select.choose(&mut self.filter, &mut self.list);
        self.reset_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::EnrichedProject;
    use crate::records::ProjectRecord;

    fn pass(categories: &[&str]) -> Pass {
        let projects: Vec<_> = categories
            .iter()
            .enumerate()
            .map(|(i, category)| EnrichedProject {
                record: ProjectRecord {
                    title: format!("p{}", i),
                    url: String::new(),
                    image: String::new(),
                    alt: String::new(),
                    category: category.to_string(),
                    category_desc: category.to_string(),
                    tags: Vec::new(),
                    github: None,
                },
                updated_at: None,
            })
            .collect();
        Pass {
            report: PassReport {
                projects: projects.len(),
                without_repo: projects.len(),
                ..PassReport::default()
            },
            projects,
        }
    }

    #[test]
    fn test_apply_pass_selects_first() {
        let mut state = ProjectsState::new();
        state.set_loading();
        assert!(state.status.is_loading());

        state.apply_pass(&pass(&["a", "b", "a"]), Utc::now());
        assert_eq!(state.status.data().unwrap().projects, 3);
        assert_eq!(state.selected_node().unwrap().title, "p0");
        assert_eq!(state.filter.controls().len(), 3);
    }

    #[test]
    fn test_selection_tracks_visible_items() {
        let mut state = ProjectsState::new();
        state.apply_pass(&pass(&["a", "b", "a"]), Utc::now());

        state.next_filter();
        assert_eq!(state.filter.selected_label(), "a");
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_node().unwrap().title, "p2");

        state.select_prev();
        assert_eq!(state.selected_node().unwrap().title, "p0");
    }

    #[test]
    fn test_failure_shows_placeholder_only() {
        let mut state = ProjectsState::new();
        state.apply_pass(&pass(&["a"]), Utc::now());
        state.apply_failure(&FolioError::Other("broken".to_string()));

        assert_eq!(state.list.len(), 1);
        assert!(state.selected_node().is_none());
        assert!(matches!(state.status, LoadingState::Error(_)));
    }
}
