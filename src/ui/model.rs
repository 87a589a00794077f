use chrono::{NaiveDate, NaiveDateTime};

use crate::error::ValidationError;
use crate::schedule::{Performance, ScheduleWindow, Timetable, Venue, simulated_now};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Timetable,
    Admin,
}

/// Focusable admin-form fields, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminField {
    #[default]
    VenueName,
    PerformanceName,
    Venue,
    Date,
    StartTime,
    EndTime,
}

impl AdminField {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::VenueName => Self::PerformanceName,
            Self::PerformanceName => Self::Venue,
            Self::Venue => Self::Date,
            Self::Date => Self::StartTime,
            Self::StartTime => Self::EndTime,
            Self::EndTime => Self::VenueName,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::VenueName => Self::EndTime,
            Self::PerformanceName => Self::VenueName,
            Self::Venue => Self::PerformanceName,
            Self::Date => Self::Venue,
            Self::StartTime => Self::Date,
            Self::EndTime => Self::StartTime,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminForm {
    pub venue_name: String,
    pub performance_name: String,
    pub venue_index: Option<usize>,
    pub day_index: usize,
    pub start_time: String,
    pub end_time: String,
    pub focus: AdminField,
}

impl AdminForm {
    #[must_use]
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            AdminField::VenueName => Some(&mut self.venue_name),
            AdminField::PerformanceName => Some(&mut self.performance_name),
            AdminField::StartTime => Some(&mut self.start_time),
            AdminField::EndTime => Some(&mut self.end_time),
            AdminField::Venue | AdminField::Date => None,
        }
    }

    /// Resets the performance form after a successful submit; the selected
    /// day is kept, matching the original admin panel.
    pub(crate) fn clear_performance_fields(&mut self) {
        self.performance_name.clear();
        self.venue_index = None;
        self.start_time.clear();
        self.end_time.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub is_error: bool,
    pub text: String,
}

impl Feedback {
    #[must_use]
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            is_error: false,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            text: text.into(),
        }
    }
}

/// Session state owned by the input driver and published to the render task.
#[derive(Debug, Clone)]
pub struct UiData {
    pub screen: Screen,
    pub timetable: Timetable,
    pub window: ScheduleWindow,
    pub selected_day: usize,
    pub now: NaiveDateTime,
    pub form: AdminForm,
    pub feedback: Option<Feedback>,
    pub no_color: bool,
}

impl UiData {
    #[must_use]
    pub fn new(timetable: Timetable, window: ScheduleWindow, no_color: bool) -> Self {
        let first_date = timetable
            .days()
            .first()
            .map(|day| day.date)
            .unwrap_or_default();
        Self {
            screen: Screen::Timetable,
            timetable,
            window,
            selected_day: 0,
            now: simulated_now(first_date),
            form: AdminForm::default(),
            feedback: None,
            no_color,
        }
    }

    #[must_use]
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.timetable
            .days()
            .get(self.selected_day)
            .map(|day| day.date)
    }

    /// Selects a festival date for both the grid and the admin form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DateOutsideFestival`] when no day program
    /// exists for the date.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), ValidationError> {
        let index = self
            .timetable
            .day_index(date)
            .ok_or(ValidationError::DateOutsideFestival { date })?;
        self.selected_day = index;
        self.form.day_index = index;
        self.refresh_clock();
        Ok(())
    }

    /// Moves the day selection one step, wrapping at the ends.
    pub fn cycle_day(&mut self, forward: bool) {
        let count = self.timetable.days().len();
        if count == 0 {
            return;
        }
        self.selected_day = if forward {
            self.selected_day.saturating_add(1).checked_rem(count).unwrap_or(0)
        } else {
            self.selected_day
                .checked_add(count.saturating_sub(1))
                .and_then(|value| value.checked_rem(count))
                .unwrap_or(0)
        };
        self.refresh_clock();
    }

    /// Re-pins the simulated clock to the selected date.
    pub fn refresh_clock(&mut self) {
        let date = self.selected_date().unwrap_or_else(|| self.now.date());
        self.now = simulated_now(date);
    }
}

/// Immutable snapshot handed to the renderer: the selected day is already
/// resolved to its performances.
#[derive(Debug, Clone)]
pub struct UiRenderData {
    pub screen: Screen,
    pub window: ScheduleWindow,
    pub dates: Vec<NaiveDate>,
    pub selected_day: usize,
    pub venues: Vec<Venue>,
    pub performances: Vec<Performance>,
    pub now: NaiveDateTime,
    pub form: AdminForm,
    pub feedback: Option<Feedback>,
    pub no_color: bool,
}

impl From<&UiData> for UiRenderData {
    fn from(data: &UiData) -> Self {
        let performances = data
            .timetable
            .days()
            .get(data.selected_day)
            .map(|day| day.performances.clone())
            .unwrap_or_default();
        Self {
            screen: data.screen,
            window: data.window,
            dates: data.timetable.days().iter().map(|day| day.date).collect(),
            selected_day: data.selected_day,
            venues: data.timetable.venues().to_vec(),
            performances,
            now: data.now,
            form: data.form.clone(),
            feedback: data.feedback.clone(),
            no_color: data.no_color,
        }
    }
}
