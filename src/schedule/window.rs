use chrono::{NaiveTime, Timelike};

use crate::error::ValidationError;

/// Default display window start: 13:00.
pub const DEFAULT_WINDOW_START: (u32, u32) = (13, 0);
/// Default display window length: 13.5 hours, 13:00 through 02:30.
pub const DEFAULT_WINDOW_MINUTES: u32 = 810;
/// Width of one axis slot on the grid header.
pub const SLOT_MINUTES: u32 = 30;

const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: u32 = 24;

/// The fixed daily display span used to position events horizontally.
///
/// The window may straddle midnight: wall-clock hours before the window's
/// start hour are treated as occurring after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    start: NaiveTime,
    minutes: u32,
}

impl ScheduleWindow {
    /// Builds a window from a start time and a length in minutes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::WindowDurationZero`] for a zero length.
    pub const fn new(start: NaiveTime, minutes: u32) -> Result<Self, ValidationError> {
        if minutes == 0 {
            return Err(ValidationError::WindowDurationZero);
        }
        Ok(Self { start, minutes })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Minutes between the window start and the given wall-clock time, with
    /// hours before the start hour shifted past midnight. Negative when the
    /// time falls between the start hour and the start minute.
    fn offset_minutes(&self, time: NaiveTime) -> i64 {
        let mut hour = i64::from(time.hour());
        if time.hour() < self.start.hour() {
            hour = hour.saturating_add(i64::from(HOURS_PER_DAY));
        }
        let of_day = hour
            .saturating_mul(MINUTES_PER_HOUR)
            .saturating_add(i64::from(time.minute()));
        let start = i64::from(self.start.hour())
            .saturating_mul(MINUTES_PER_HOUR)
            .saturating_add(i64::from(self.start.minute()));
        of_day.saturating_sub(start)
    }

    /// Position of a wall-clock time as a percentage of the window width.
    ///
    /// Out-of-window times produce positions outside `[0, 100]`; callers are
    /// not required to clip.
    #[must_use]
    pub fn position_pct(&self, time: NaiveTime) -> f64 {
        let offset = self.offset_minutes(time) as f64;
        offset / f64::from(self.minutes) * 100.0
    }

    /// Slot start times for the grid header, one per [`SLOT_MINUTES`] step
    /// that begins inside the window.
    #[must_use]
    pub fn slots(&self) -> Vec<NaiveTime> {
        let mut slots = Vec::new();
        let mut offset: u32 = 0;
        let mut time = self.start;
        while offset < self.minutes {
            slots.push(time);
            let (next, _wrapped) =
                time.overflowing_add_signed(chrono::Duration::minutes(i64::from(SLOT_MINUTES)));
            time = next;
            offset = offset.saturating_add(SLOT_MINUTES);
        }
        slots
    }
}

impl Default for ScheduleWindow {
    fn default() -> Self {
        let (hour, minute) = DEFAULT_WINDOW_START;
        let start = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default();
        Self {
            start,
            minutes: DEFAULT_WINDOW_MINUTES,
        }
    }
}

/// Parses a wall-clock `HH:MM` value.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTime`] when the value is not `HH:MM`.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_err| ValidationError::InvalidTime {
        value: value.to_owned(),
    })
}
