// Local record store.
// Reads the authored JSON data files that describe projects and resume sections.

pub mod projects;
pub mod timeline;

pub use projects::{ProjectRecord, load_projects};
pub use timeline::{Education, Event, Experience, Timeline, load_timeline};
