// Rendering of the project list.
// Builds display nodes from aggregated projects and exports them as HTML markup.

pub mod html;
pub mod page;
pub mod timeago;

pub use html::render_html;
pub use page::{ListEntry, ProjectList, ProjectNode};
pub use timeago::time_ago;
