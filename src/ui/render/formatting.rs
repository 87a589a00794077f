use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

// Fixed nl-NL labels; the app renders a single locale.
const WEEKDAYS_NL: [&str; 7] = [
    "maandag",
    "dinsdag",
    "woensdag",
    "donderdag",
    "vrijdag",
    "zaterdag",
    "zondag",
];
const MONTHS_NL: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

/// 24-hour `HH:MM`.
pub(crate) fn format_time(value: NaiveDateTime) -> String {
    format!("{:02}:{:02}", value.time().hour(), value.time().minute())
}

pub(crate) fn format_time_of_day(value: chrono::NaiveTime) -> String {
    format!("{:02}:{:02}", value.hour(), value.minute())
}

/// Long Dutch day label, e.g. `vrijdag 3 oktober`.
pub(crate) fn day_label(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_NL
        .get(date.weekday().num_days_from_monday() as usize)
        .copied()
        .unwrap_or("");
    let month = MONTHS_NL
        .get(date.month0() as usize)
        .copied()
        .unwrap_or("");
    format!("{} {} {}", weekday, date.day(), month)
}

/// `HH:MM - HH:MM` span shown inside a performance bar.
pub(crate) fn format_span(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!("{} - {}", format_time(start), format_time(end))
}
