// GitHub API response types.
// Only the repository fields folio reads are modeled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GitHub repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
    /// Whether any response carried rate limit headers yet.
    pub seen: bool,
}

impl RateLimit {
    pub fn is_exhausted(&self) -> bool {
        self.seen && self.remaining == 0
    }

    /// Reset time formatted for display.
    pub fn reset_display(&self) -> String {
        DateTime::from_timestamp(self.reset as i64, 0)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
