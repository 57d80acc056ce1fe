// Relative-time labels for displayed alerts.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Human-readable age of `created_at` as seen at `now`.
///
/// Timestamps in the future (clock skew) are clamped to "Just now".
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - created_at).num_seconds().max(0);

    if elapsed < MINUTE {
        return "Just now".to_string();
    }
    if elapsed < HOUR {
        return format!("{} min ago", elapsed / MINUTE);
    }
    if elapsed < DAY {
        let hours = elapsed / HOUR;
        return format!("{} {}", hours, if hours == 1 { "hour ago" } else { "hours ago" });
    }
    let days = elapsed / DAY;
    format!("{} {}", days, if days == 1 { "day ago" } else { "days ago" })
}
