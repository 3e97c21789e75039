// Relative time captions ("3 days ago").

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
/// 365.25 days.
const YEAR: i64 = 365 * DAY + DAY / 4;

/// Format `timestamp` relative to `now`. An absent timestamp yields an empty string.
pub fn time_ago(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(timestamp) = timestamp else {
        return String::new();
    };

    let elapsed = now.signed_duration_since(timestamp).num_seconds();
    let buckets = [
        (YEAR, "year"),
        (MONTH, "month"),
        (DAY, "day"),
        (HOUR, "hour"),
        (MINUTE, "minute"),
    ];

    for (unit, name) in buckets {
        let count = elapsed.div_euclid(unit);
        if count >= 1 {
            let plural = if count == 1 { "" } else { "s" };
            return format!("{} {}{} ago", count, name, plural);
        }
    }

    "just now".to_string()
}
