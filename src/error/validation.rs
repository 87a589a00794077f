use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field '{field}'.")]
    MissingField { field: &'static str },
    #[error("Invalid time '{value}'. Expected HH:MM.")]
    InvalidTime { value: String },
    #[error("Invalid date '{value}'. Expected YYYY-MM-DD: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Unknown venue '{name}'.")]
    UnknownVenue { name: String },
    #[error("No festival day on {date}. Performances can only be added to an existing day.")]
    NoDayProgram { date: NaiveDate },
    #[error("Venue name must not be empty.")]
    VenueNameEmpty,
    #[error("Window duration must be >= 1 minute.")]
    WindowDurationZero,
    #[error("Tick interval must be >= 1 second.")]
    TickIntervalZero,
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Date {date} is not a festival day.")]
    DateOutsideFestival { date: NaiveDate },
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
