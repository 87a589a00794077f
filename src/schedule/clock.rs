use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Pins a wall-clock time of day to a festival date, minute precision.
#[must_use]
pub fn pinned_to_date(date: NaiveDate, time_of_day: NaiveTime) -> NaiveDateTime {
    let truncated =
        NaiveTime::from_hms_opt(time_of_day.hour(), time_of_day.minute(), 0).unwrap_or(time_of_day);
    date.and_time(truncated)
}

/// The simulated current time: the real wall-clock time of day pinned to the
/// selected festival date.
#[must_use]
pub fn simulated_now(selected: NaiveDate) -> NaiveDateTime {
    pinned_to_date(selected, Local::now().time())
}
