//! Normalization of meeting start times sent to the server.
//!
//! The server receives every start time as RFC 3339 in UTC with millisecond
//! precision, e.g. `2025-03-01T14:30:00.000Z`, no matter how the caller
//! provided it.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::error::{invalid_input_error, Error, InvalidInputKind};

/// A start time, either structured or already formatted by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledTime {
    At(DateTime<Utc>),
    /// RFC 3339 with any offset, or a naive `YYYY-MM-DDTHH:MM:SS[.fff]` read
    /// as UTC.
    Formatted(String),
}

impl ScheduledTime {
    /// Renders the time in the single textual format the server receives.
    pub fn normalize(&self) -> Result<String, Error> {
        let at = match self {
            ScheduledTime::At(at) => *at,
            ScheduledTime::Formatted(text) => parse_timestamp(text)?,
        };
        Ok(at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, Error> {
    let text = text.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Ok(at.with_timezone(&Utc));
    }
    text.parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            log::warn!("Unparseable scheduled time: {:?}", text);
            invalid_input_error(
                InvalidInputKind::ScheduledAt,
                "scheduledAt must be an RFC 3339 timestamp",
            )
        })
}

impl From<DateTime<Utc>> for ScheduledTime {
    fn from(at: DateTime<Utc>) -> Self {
        ScheduledTime::At(at)
    }
}

impl From<String> for ScheduledTime {
    fn from(text: String) -> Self {
        ScheduledTime::Formatted(text)
    }
}

impl From<&str> for ScheduledTime {
    fn from(text: &str) -> Self {
        ScheduledTime::Formatted(text.to_string())
    }
}
