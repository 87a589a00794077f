use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::schedule::parse_hhmm;

pub(crate) fn parse_time_arg(value: &str) -> Result<NaiveTime, ValidationError> {
    parse_hhmm(value)
}

pub(crate) fn parse_date_arg(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|err| {
        ValidationError::InvalidDate {
            value: value.to_owned(),
            source: err,
        }
    })
}

pub(crate) fn parse_positive_u32(value: &str) -> Result<u32, ValidationError> {
    let parsed: u32 = value
        .trim()
        .parse()
        .map_err(|err| ValidationError::InvalidNumber { source: err })?;
    if parsed == 0 {
        return Err(ValidationError::ValueTooSmall { min: 1 });
    }
    Ok(parsed)
}

pub(crate) fn parse_positive_u64(value: &str) -> Result<u64, ValidationError> {
    let parsed: u64 = value
        .trim()
        .parse()
        .map_err(|err| ValidationError::InvalidNumber { source: err })?;
    if parsed == 0 {
        return Err(ValidationError::ValueTooSmall { min: 1 });
    }
    Ok(parsed)
}
