//! Relative date labels for memo dates.
//!
//! Memo dates are compared as calendar days, never as instants: a memo dated
//! today is "Today" whatever the hour, and every other label is derived from
//! the whole-day distance between the memo's day and the reference day.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt;
use thiserror::Error;

/// Formats accepted for date-times without an offset. These are read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("date is empty")]
    Empty,

    #[error("unrecognized date `{0}`")]
    Unrecognized(String),
}

enum ParsedDate {
    Day(NaiveDate),
    Instant(DateTime<Utc>),
}

fn parse_date(raw: &str) -> Result<ParsedDate, DateParseError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(DateParseError::Empty);
    }
    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(ParsedDate::Day(day));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(ParsedDate::Instant(dt.with_timezone(&Utc)));
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ParsedDate::Instant(ndt.and_utc()));
        }
    }
    Err(DateParseError::Unrecognized(raw.to_string()))
}

/// Parses `raw` and returns its calendar day as seen from `tz`.
///
/// A bare `YYYY-MM-DD` is already a calendar day and is returned unchanged;
/// date-times are shifted into `tz` before the time of day is dropped.
pub fn calendar_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<NaiveDate, DateParseError> {
    match parse_date(raw)? {
        ParsedDate::Day(day) => Ok(day),
        ParsedDate::Instant(instant) => Ok(instant.with_timezone(tz).date_naive()),
    }
}

/// Canonical storage form of a memo date: the UTC calendar day as `YYYY-MM-DD`.
///
/// Only four-digit years are accepted, so stored dates sort chronologically
/// as plain strings.
pub fn normalize_date(raw: &str) -> Result<String, DateParseError> {
    let day = calendar_date_in(raw, &Utc)?;
    if !(0..=9999).contains(&day.year()) {
        return Err(DateParseError::Unrecognized(raw.to_string()));
    }
    Ok(day.format("%Y-%m-%d").to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeLabel {
    Today,
    Tomorrow,
    Yesterday,
    InWeeks(i64),
    InDays(i64),
    DaysAgo(i64),
    InAMonth,
    AMonthAgo,
    InMonths(i64),
    MonthsAgo(i64),
    InAYear,
    AYearAgo,
    InYears(i64),
    YearsAgo(i64),
}

impl fmt::Display for RelativeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeLabel::Today => f.write_str("Today"),
            RelativeLabel::Tomorrow => f.write_str("Tomorrow"),
            RelativeLabel::Yesterday => f.write_str("Yesterday"),
            RelativeLabel::InWeeks(n) => write!(f, "in {} week(s)", n),
            RelativeLabel::InDays(n) => write!(f, "in {} days", n),
            RelativeLabel::DaysAgo(n) => write!(f, "{} days ago", n),
            RelativeLabel::InAMonth => f.write_str("in a month"),
            RelativeLabel::AMonthAgo => f.write_str("a month ago"),
            RelativeLabel::InMonths(n) => write!(f, "in {} months", n),
            RelativeLabel::MonthsAgo(n) => write!(f, "{} months ago", n),
            RelativeLabel::InAYear => f.write_str("in a year"),
            RelativeLabel::AYearAgo => f.write_str("a year ago"),
            RelativeLabel::InYears(n) => write!(f, "in {} years", n),
            RelativeLabel::YearsAgo(n) => write!(f, "{} years ago", n),
        }
    }
}

/// Signed number of whole days from `today` to `date`.
pub fn days_between(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

// Calendar months between two days, never less than two.
fn month_span(earlier: NaiveDate, later: NaiveDate) -> i64 {
    let months = |d: NaiveDate| i64::from(d.year()) * 12 + i64::from(d.month());
    (months(later) - months(earlier)).max(2)
}

/// Maps a calendar day to its label relative to `today`.
///
/// Only future distances of 7, 14, 21 and 28 days are grouped into weeks;
/// past distances always stay in days.
pub fn relative_label(date: NaiveDate, today: NaiveDate) -> RelativeLabel {
    let delta = days_between(date, today);
    match delta {
        0 => RelativeLabel::Today,
        1 => RelativeLabel::Tomorrow,
        -1 => RelativeLabel::Yesterday,
        2..=29 if delta % 7 == 0 => RelativeLabel::InWeeks(delta / 7),
        2..=29 => RelativeLabel::InDays(delta),
        -29..=-2 => RelativeLabel::DaysAgo(-delta),
        30..=44 => RelativeLabel::InAMonth,
        -44..=-30 => RelativeLabel::AMonthAgo,
        45..=344 => RelativeLabel::InMonths(month_span(today, date)),
        -344..=-45 => RelativeLabel::MonthsAgo(month_span(date, today)),
        345..=546 => RelativeLabel::InAYear,
        -546..=-345 => RelativeLabel::AYearAgo,
        d if d > 0 => RelativeLabel::InYears((d / 365).max(2)),
        d => RelativeLabel::YearsAgo((-d / 365).max(2)),
    }
}

/// Labels `date` relative to the calendar day of `now`, in `now`'s time zone.
pub fn try_humanize<Tz: TimeZone>(
    date: &str,
    now: &DateTime<Tz>,
) -> Result<RelativeLabel, DateParseError> {
    let day = calendar_date_in(date, &now.timezone())?;
    Ok(relative_label(day, now.date_naive()))
}

/// Like [`try_humanize`], but falls back to the raw input when it does not parse.
pub fn humanize<Tz: TimeZone>(date: &str, now: &DateTime<Tz>) -> String {
    match try_humanize(date, now) {
        Ok(label) => label.to_string(),
        Err(err) => {
            tracing::debug!("Leaving date unhumanized: {}", err);
            date.to_string()
        }
    }
}

/// Humanizes against the server's local clock.
pub fn humanize_local(date: &str) -> String {
    humanize(date, &Local::now())
}
