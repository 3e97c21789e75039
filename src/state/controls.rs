// Sidebar and modal controllers.
// Each owns a single open/closed flag.

use crate::render::ProjectNode;

#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Project detail modal.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub open: bool,
    pub project: Option<ProjectNode>,
}

impl ModalState {
    /// Open the modal on `project`. Does nothing when there is no project.
    pub fn show(&mut self, project: Option<&ProjectNode>) {
        if let Some(project) = project {
            self.project = Some(project.clone());
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.project = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_toggle() {
        let mut sidebar = SidebarState::default();
        sidebar.toggle();
        assert!(sidebar.open);
        sidebar.toggle();
        assert!(!sidebar.open);
    }

    #[test]
    fn test_modal_needs_a_project() {
        let mut modal = ModalState::default();
        modal.show(None);
        assert!(!modal.open);

        let node = ProjectNode {
            title: "t".to_string(),
            url: String::new(),
            image: String::new(),
            alt: String::new(),
            category: "c".to_string(),
            category_desc: "C".to_string(),
            tags: Vec::new(),
            caption: None,
            visible: true,
        };
        modal.show(Some(&node));
        assert!(modal.open);
        assert_eq!(modal.project.as_ref().unwrap().title, "t");

        modal.close();
        assert!(!modal.open && modal.project.is_none());
    }
}
