use chrono::{DateTime, Utc};

pub const DEFAULT_TIMEAGO_CLASS: &str = "timeago";

/// Fuzzy relative time such as "about an hour ago" or "3 days from now".
pub fn humanize(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let (seconds, suffix) = if delta.num_milliseconds() < 0 {
        (-delta.num_milliseconds() as f64 / 1000.0, "from now")
    } else {
        (delta.num_milliseconds() as f64 / 1000.0, "ago")
    };

    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    let years = days / 365.0;

    let words = if seconds < 45.0 {
        "less than a minute".to_string()
    } else if seconds < 90.0 {
        "about a minute".to_string()
    } else if minutes < 45.0 {
        format!("{} minutes", minutes.round())
    } else if minutes < 90.0 {
        "about an hour".to_string()
    } else if hours < 24.0 {
        format!("about {} hours", hours.round())
    } else if hours < 42.0 {
        "a day".to_string()
    } else if days < 30.0 {
        format!("{} days", days.round())
    } else if days < 45.0 {
        "about a month".to_string()
    } else if days < 365.0 {
        format!("{} months", (days / 30.0).round())
    } else if years < 1.5 {
        "about a year".to_string()
    } else {
        format!("{} years", years.round())
    };

    format!("{words} {suffix}")
}
