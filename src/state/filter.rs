// Category filter controller.
// Owns which control is selected; visibility lives on the rendered nodes.

use crate::render::ProjectList;

/// Reserved label that shows every project.
pub const ALL: &str = "all";

/// Filter controls ("All" plus one per category) and the selected one.
#[derive(Debug, Clone)]
pub struct FilterController {
    controls: Vec<String>,
    selected: usize,
}

impl Default for FilterController {
    fn default() -> Self {
        Self {
            controls: vec!["All".to_string()],
            selected: 0,
        }
    }
}

impl FilterController {
    /// Build controls from the categories present in `list`.
    pub fn for_list(list: &ProjectList) -> Self {
        let mut controller = Self::default();
        controller.controls.extend(list.categories());
        controller
    }

    pub fn controls(&self) -> &[String] {
        &self.controls
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &str {
        &self.controls[self.selected]
    }

    /// Show only projects matching `label` (or all of them for "all").
    ///
    /// Returns false when no control carries `label`; selection and visibility are then left as is.
    pub fn activate(&mut self, label: &str, list: &mut ProjectList) -> bool {
        let label = label.to_lowercase();
        let Some(index) = self
            .controls
            .iter()
            .position(|control| control.to_lowercase() == label)
        else {
            return false;
        };

        self.selected = index;
        for node in list.nodes_mut() {
            node.visible = label == ALL || node.in_category(&label);
        }
        true
    }

    /// Activate the control at `index`.
    pub fn activate_index(&mut self, index: usize, list: &mut ProjectList) -> bool {
        match self.controls.get(index).cloned() {
            Some(label) => self.activate(&label, list),
            None => false,
        }
    }

    pub fn select_next(&mut self, list: &mut ProjectList) {
        let next = (self.selected + 1) % self.controls.len();
        self.activate_index(next, list);
    }

    pub fn select_prev(&mut self, list: &mut ProjectList) {
        let prev = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.controls.len() - 1);
        self.activate_index(prev, list);
    }

    /// Rebuild controls after a re-render, keeping the selection when its category survives.
    pub fn rebuild(&mut self, list: &mut ProjectList) {
        let previous = self.selected_label().to_string();
        *self = Self::for_list(list);
        if !self.activate(&previous, list) {
            self.activate(ALL, list);
        }
    }
}

/// Dropdown variant of the filter controls.
#[derive(Debug, Clone, Default)]
pub struct CategorySelect {
    pub open: bool,
    /// Highlighted option while open.
    pub cursor: usize,
}

impl CategorySelect {
    pub fn toggle(&mut self, filter: &FilterController) {
        self.open = !self.open;
        if self.open {
            self.cursor = filter.selected();
        }
    }

    pub fn move_cursor(&mut self, filter: &FilterController, down: bool) {
        let len = filter.controls().len();
        self.cursor = if down {
            (self.cursor + 1).min(len - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    /// Apply the highlighted option and close the dropdown.
    pub fn choose(&mut self, filter: &mut FilterController, list: &mut ProjectList) {
        filter.activate_index(self.cursor, list);
        self.open = false;
    }
}
