//! Long-form date formatting for the card header.
//!
//! Dates arrive in whatever shape the upstream feed uses: epoch milliseconds,
//! ISO-8601 text, or a native `chrono` value. [`format_date`] accepts all of
//! them and renders `Weekday, Month D, YYYY` in English.
//!
//! No timezone conversion happens. An RFC 3339 string with an offset is
//! formatted using the calendar fields as written, and epoch timestamps are
//! read as UTC.

use crate::error::InvalidDateError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// `Sunday, January 5, 2025`
const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Naive date-time layouts tried after RFC 3339, in order.
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_LAYOUT: &str = "%Y-%m-%d";

/// A point in time as supplied by the data source.
///
/// JSON integers deserialize as [`DateValue::Timestamp`] (milliseconds since
/// the Unix epoch) and JSON strings as [`DateValue::Text`]. Any other JSON
/// value lands in [`DateValue::Other`] so one bad date never rejects the
/// whole record; it fails later, in [`DateValue::to_naive_date`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Timestamp(i64),
    Text(String),
    #[serde(skip)]
    Date(NaiveDate),
    #[serde(skip)]
    DateTime(NaiveDateTime),
    #[serde(skip)]
    Zoned(DateTime<FixedOffset>),
    Other(serde_json::Value),
}

impl DateValue {
    /// Resolve to a calendar date without any timezone shift.
    pub fn to_naive_date(&self) -> Result<NaiveDate, InvalidDateError> {
        match self {
            DateValue::Timestamp(millis) => DateTime::from_timestamp_millis(*millis)
                .map(|dt| dt.date_naive())
                .ok_or_else(|| InvalidDateError::new(millis.to_string())),
            DateValue::Text(text) => parse_text(text),
            DateValue::Date(date) => Ok(*date),
            DateValue::DateTime(dt) => Ok(dt.date()),
            DateValue::Zoned(dt) => Ok(dt.date_naive()),
            DateValue::Other(value) => integral_millis(value)
                .and_then(DateTime::from_timestamp_millis)
                .map(|dt| dt.date_naive())
                .ok_or_else(|| InvalidDateError::new(value.to_string())),
        }
    }
}

/// Float timestamps such as `1736035200000.0` count as milliseconds when they
/// carry no fraction.
fn integral_millis(value: &serde_json::Value) -> Option<i64> {
    let millis = value.as_f64()?;
    if millis.fract() != 0.0 || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
        return None;
    }
    Some(millis as i64)
}

fn parse_text(text: &str) -> Result<NaiveDate, InvalidDateError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InvalidDateError::new(text));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Ok(dt.date());
        }
    }
    NaiveDate::parse_from_str(trimmed, DATE_LAYOUT).map_err(|_| InvalidDateError::new(text))
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Timestamp(millis) => write!(f, "{millis}"),
            DateValue::Text(text) => f.write_str(text),
            DateValue::Date(date) => write!(f, "{date}"),
            DateValue::DateTime(dt) => write!(f, "{dt}"),
            DateValue::Zoned(dt) => write!(f, "{}", dt.to_rfc3339()),
            DateValue::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for DateValue {
    fn from(millis: i64) -> Self {
        DateValue::Timestamp(millis)
    }
}

impl From<&str> for DateValue {
    fn from(text: &str) -> Self {
        DateValue::Text(text.to_string())
    }
}

impl From<String> for DateValue {
    fn from(text: String) -> Self {
        DateValue::Text(text)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        DateValue::Date(date)
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(dt: NaiveDateTime) -> Self {
        DateValue::DateTime(dt)
    }
}

impl From<DateTime<FixedOffset>> for DateValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        DateValue::Zoned(dt)
    }
}

impl From<&DateValue> for DateValue {
    fn from(value: &DateValue) -> Self {
        value.clone()
    }
}

/// Format a date as `Weekday, Month D, YYYY`.
///
/// # Errors
///
/// Returns [`InvalidDateError`] when the input cannot be resolved to a
/// calendar date. No default is substituted; the caller decides what to
/// display instead.
///
/// # Examples
///
/// ```
/// use news_card::format::format_date;
///
/// assert_eq!(format_date("2025-01-05").unwrap(), "Sunday, January 5, 2025");
/// assert!(format_date("yesterday").is_err());
/// ```
pub fn format_date(input: impl Into<DateValue>) -> Result<String, InvalidDateError> {
    let value = input.into();
    match value.to_naive_date() {
        Ok(date) => Ok(date.format(LONG_DATE_FORMAT).to_string()),
        Err(e) => {
            debug!(input = %value, "Date input did not parse");
            Err(e)
        }
    }
}
