// State management module.
// Handles project loading, filtering, and the small UI controllers.

pub mod controls;
pub mod filter;
pub mod projects;

pub use controls::{ModalState, SidebarState};
pub use filter::{ALL, CategorySelect, FilterController};
pub use projects::{LoadingState, ProjectsState};
