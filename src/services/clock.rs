//! Local wall-clock time.

use chrono::{DateTime, Local, TimeZone};

/// `MM/DD/YYYY, HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn now() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}
