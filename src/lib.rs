// Folio: a terminal portfolio page.
// Projects are ordered by their latest GitHub activity, cached between runs.

pub mod aggregate;
pub mod app;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod output;
pub mod records;
pub mod render;
pub mod state;
pub mod ui;
