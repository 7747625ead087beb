use chrono::{DateTime, Duration, Utc};

/// Human-readable distance between `then` and now, for "Posted … ago" lines.
pub fn distance_from_now(then: DateTime<Utc>) -> String {
    distance(Utc::now() - then)
}

pub fn distance(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    if secs < 45 {
        "less than a minute".to_string()
    } else if mins < 2 {
        "a minute".to_string()
    } else if mins < 60 {
        format!("{mins} minutes")
    } else if hours < 2 {
        "an hour".to_string()
    } else if hours < 24 {
        format!("{hours} hours")
    } else if days < 2 {
        "a day".to_string()
    } else if days < 30 {
        format!("{days} days")
    } else if months < 2 {
        "a month".to_string()
    } else if months < 12 {
        format!("{months} months")
    } else if years < 2 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}
