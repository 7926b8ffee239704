//! Presence and experience-level presentation helpers.

use chrono::{DateTime, Utc};

/// Presence indicator for a member: status dot color class plus the text
/// shown next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct OnlineStatus {
    pub color: &'static str,
    pub text: String,
}

/// Derive the presence indicator from the record's `is_online` flag and
/// `last_seen` timestamp (unix seconds).
pub fn online_status(is_online: bool, last_seen: Option<i64>) -> OnlineStatus {
    if is_online {
        return OnlineStatus {
            color: "bg-green-500",
            text: "Online".to_string(),
        };
    }

    match last_seen {
        Some(ts) => OnlineStatus {
            color: "bg-gray-400",
            text: format!("Last seen {}", format_relative_time(ts)),
        },
        None => OnlineStatus {
            color: "bg-gray-400",
            text: "Offline".to_string(),
        },
    }
}

/// Badge label for an experience level. Unknown levels fall back to a plain
/// "Developer" badge rather than erroring.
pub fn experience_level_label(level: Option<&str>) -> &'static str {
    match level {
        Some("junior") => "Junior Developer",
        Some("mid") => "Mid-Level Developer",
        Some("senior") => "Senior Developer",
        Some("lead") => "Lead Developer",
        _ => "Developer",
    }
}

/// Badge color classes for an experience level.
pub fn experience_level_color(level: Option<&str>) -> &'static str {
    match level {
        Some("junior") => "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
        Some("mid") => "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200",
        Some("senior") => "bg-purple-100 text-purple-800 dark:bg-purple-900 dark:text-purple-200",
        Some("lead") => "bg-orange-100 text-orange-800 dark:bg-orange-900 dark:text-orange-200",
        _ => "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-200",
    }
}

/// Format a unix timestamp as relative time ("just now", "5m ago", "2h ago",
/// "3d ago"; older than a week shows the date)
pub fn format_relative_time(timestamp: i64) -> String {
    let now = Utc::now().timestamp();

    if now < timestamp {
        return "just now".to_string();
    }

    let diff = (now - timestamp) as u64;

    match diff {
        0..=59 => "just now".to_string(),
        60..=3599 => format!("{}m ago", diff / 60),
        3600..=86399 => format!("{}h ago", diff / 3600),
        86400..=604799 => format!("{}d ago", diff / 86400),
        _ => {
            let dt = DateTime::from_timestamp(timestamp, 0).unwrap_or_else(Utc::now);
            dt.format("%b %d, %Y").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_online_wins_over_last_seen() {
        let status = online_status(true, Some(0));
        assert_eq!(status.color, "bg-green-500");
        assert_eq!(status.text, "Online");
    }

    #[test]
    fn test_offline_without_last_seen() {
        let status = online_status(false, None);
        assert_eq!(status.color, "bg-gray-400");
        assert_eq!(status.text, "Offline");
    }

    #[test]
    fn test_offline_with_last_seen() {
        let two_hours_ago = Utc::now().timestamp() - 2 * 3600;
        let status = online_status(false, Some(two_hours_ago));
        assert_eq!(status.text, "Last seen 2h ago");
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc::now().timestamp();
        assert_eq!(format_relative_time(now), "just now");
        assert_eq!(format_relative_time(now - 5 * 60), "5m ago");
        assert_eq!(format_relative_time(now - 3 * 86400), "3d ago");
        // Future timestamps are clamped
        assert_eq!(format_relative_time(now + 1000), "just now");
    }

    #[test]
    fn test_experience_level_labels() {
        assert_eq!(experience_level_label(Some("junior")), "Junior Developer");
        assert_eq!(experience_level_label(Some("senior")), "Senior Developer");
        assert_eq!(experience_level_label(Some("wizard")), "Developer");
        assert_eq!(experience_level_label(None), "Developer");
    }

    #[test]
    fn test_experience_level_color_fallback() {
        assert_eq!(
            experience_level_color(None),
            experience_level_color(Some("unknown"))
        );
    }
}
