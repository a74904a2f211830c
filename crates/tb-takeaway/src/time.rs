//! Timestamps as the vendor sends them: local wall-clock time without a zone.

use chrono::NaiveDateTime;

use crate::error::GetError;

/// Format of every timestamp in a response, e.g. `2024-05-01 18:30:00`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_time(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIME_FORMAT)
}

pub fn format_time(time: &NaiveDateTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Parse the time string found in `field`.
pub(crate) fn parse_field(field: &'static str, value: &str) -> Result<NaiveDateTime, GetError> {
    parse_time(value).map_err(|source| GetError::TimeError {
        field,
        value: value.to_owned(),
        source,
    })
}

/// Like [`parse_field`], but an empty string means the vendor left it out.
pub(crate) fn parse_optional_field(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDateTime>, GetError> {
    match value {
        Some(value) if !value.is_empty() => parse_field(field, value).map(Some),
        _ => Ok(None),
    }
}
