//! Misc small utilities shared across modules.
use chrono::TimeDelta;

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;
// 400 Gregorian years hold 146097 days and 4800 months.
const MONTHS_PER_DAY: f64 = 4_800.0 / 146_097.0;

/// Renders a signed offset from "now" as English relative time.
///
/// Negative (and zero) offsets are in the past, e.g. `"2 hours ago"`; positive
/// ones in the future, e.g. `"in a minute"`. Units are rounded to the nearest
/// whole value before the thresholds apply, so 90 minutes reads as "2 hours".
pub fn humanize_relative(delta: TimeDelta) -> String {
    let millis = delta.num_milliseconds();
    let phrase = humanize_span(millis.unsigned_abs() as f64);
    if millis > 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn humanize_span(millis: f64) -> String {
    let seconds = (millis / MS_PER_SECOND).round();
    let minutes = (millis / MS_PER_MINUTE).round();
    let hours = (millis / MS_PER_HOUR).round();
    let days = (millis / MS_PER_DAY).round();
    let months = (millis / MS_PER_DAY * MONTHS_PER_DAY).round();
    let years = (millis / MS_PER_DAY * MONTHS_PER_DAY / 12.0).round();

    if seconds <= 44.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{days} days")
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{months} months")
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}
