use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VenueId(u32);

impl VenueId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for VenueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PerformanceId(u32);

impl PerformanceId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Performance {
    pub id: PerformanceId,
    pub name: String,
    pub venue: VenueId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Form input for a performance before ids and the overnight rollover are
/// applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerformance {
    pub name: String,
    pub venue: Option<VenueId>,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One festival date and the performances whose start falls on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayProgram {
    pub date: NaiveDate,
    pub performances: Vec<Performance>,
}

impl DayProgram {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            performances: Vec::new(),
        }
    }
}

/// The in-session schedule: seeded once from static data, appended to during
/// a session, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    venues: Vec<Venue>,
    days: Vec<DayProgram>,
    next_venue_id: u32,
    next_performance_id: u32,
}

impl Timetable {
    /// Builds the static festival dataset.
    #[must_use]
    pub fn seed() -> Self {
        super::data::seed()
    }

    pub(super) fn from_parts(venues: Vec<Venue>, days: Vec<DayProgram>) -> Self {
        let next_venue_id = venues
            .iter()
            .map(|venue| venue.id.0.saturating_add(1))
            .max()
            .unwrap_or(1);
        let next_performance_id = days
            .iter()
            .flat_map(|day| day.performances.iter())
            .map(|performance| performance.id.0.saturating_add(1))
            .max()
            .unwrap_or(1);
        Self {
            venues,
            days,
            next_venue_id,
            next_performance_id,
        }
    }

    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    #[must_use]
    pub fn days(&self) -> &[DayProgram] {
        &self.days
    }

    #[must_use]
    pub fn venue(&self, id: VenueId) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == id)
    }

    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&DayProgram> {
        self.days.iter().find(|day| day.date == date)
    }

    #[must_use]
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|day| day.date == date)
    }

    /// Appends a venue with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::VenueNameEmpty`] when the trimmed name is
    /// empty.
    pub fn add_venue(&mut self, name: &str) -> Result<VenueId, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::VenueNameEmpty);
        }
        let id = VenueId(self.next_venue_id);
        self.next_venue_id = self.next_venue_id.saturating_add(1);
        self.venues.push(Venue {
            id,
            name: name.to_owned(),
        });
        Ok(id)
    }

    /// Validates and appends a performance to the day program matching its
    /// start date. An end wall-clock time earlier than the start means the
    /// performance runs past midnight; the end date rolls over by one day.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a required field is missing, the
    /// venue is unknown, or no day program exists for the start date.
    pub fn add_performance(
        &mut self,
        new: NewPerformance,
    ) -> Result<PerformanceId, ValidationError> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        let venue = new
            .venue
            .ok_or(ValidationError::MissingField { field: "venue" })?;
        if self.venue(venue).is_none() {
            return Err(ValidationError::UnknownVenue {
                name: venue.to_string(),
            });
        }

        let start = new.date.and_time(new.start);
        let mut end = new.date.and_time(new.end);
        if end < start {
            end = end.checked_add_days(Days::new(1)).unwrap_or(start);
        }

        let day = self
            .days
            .iter_mut()
            .find(|day| day.date == new.date)
            .ok_or(ValidationError::NoDayProgram { date: new.date })?;

        let id = PerformanceId(self.next_performance_id);
        self.next_performance_id = self.next_performance_id.saturating_add(1);
        day.performances.push(Performance {
            id,
            name: name.to_owned(),
            venue,
            start,
            end,
        });
        Ok(id)
    }
}
