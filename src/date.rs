//! Date codec for GPX fields
//!
//! Two precisions appear in GPX: year-only (copyright) and full RFC 3339
//! timestamps (waypoint/track times, metadata time). Absent or malformed
//! input degrades to unset in both directions; a bad date is a data
//! quality issue, not a structural one, so nothing here returns an error.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

/// Parse a canonical year string into a date pinned to January 1.
pub fn parse_year(text: Option<&str>) -> Option<Date> {
    let year: i32 = text?.trim().parse().ok()?;
    Date::from_calendar_date(year, Month::January, 1).ok()
}

/// Format a date as its canonical year string.
pub fn format_year(date: Option<Date>) -> Option<String> {
    date.and_then(|date| date.format(&format_description!("[year]")).ok())
}

/// Parse an RFC 3339 timestamp.
pub fn parse_timestamp(text: Option<&str>) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(text?.trim(), &Rfc3339).ok()
}

/// Format a timestamp as RFC 3339.
pub fn format_timestamp(datetime: Option<OffsetDateTime>) -> Option<String> {
    datetime.and_then(|datetime| datetime.format(&Rfc3339).ok())
}

/// The current year as a date, used when a copyright is stamped at
/// construction time.
pub fn current_year() -> Date {
    let now = OffsetDateTime::now_utc();
    Date::from_calendar_date(now.year(), Month::January, 1).unwrap_or(Date::MIN)
}
