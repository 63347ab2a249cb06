//! Calendar month keys and the parsing rules for transaction dates.
//!
//! Months are 1-based everywhere in this crate (January is 1). The first day
//! of a month is always built from its numeric year and month, never by
//! gluing an ISO date string together, so there is no timezone that can move
//! a month key into the previous month.

mod format;

use std::fmt::Display;

use serde::{Serialize, Serializer};
use time::{
    Date, Month, OffsetDateTime, PrimitiveDateTime,
    format_description::{
        BorrowedFormatItem,
        well_known::{Iso8601, Rfc3339},
    },
    macros::format_description,
};

use crate::Error;

pub use format::{month_abbreviation, readable_label};

const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

const SPACED_DATE_TIME_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// A calendar month, e.g. March 2024.
///
/// Two transactions belong to the same month key iff their calendar year and
/// month match. Keys order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u8,
}

impl MonthKey {
    /// Create a month key from a year and a 1-based month.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidMonthIndex] if `month` is not in 1 to 12, and
    /// [Error::UnparseableDate] if `year` is outside the supported date range.
    pub fn new(year: i32, month: u8) -> Result<Self, Error> {
        Self::from_index(year, i64::from(month))
    }

    /// Like [MonthKey::new] but accepts any integer so that negative or very
    /// large month indices are reported as they were given.
    pub fn from_index(year: i32, month: i64) -> Result<Self, Error> {
        let month = u8::try_from(month)
            .ok()
            .filter(|month| (1..=12).contains(month))
            .ok_or(Error::InvalidMonthIndex(month))?;

        let key = Self { year, month };
        Date::from_calendar_date(year, key.time_month(), 1)
            .map_err(|_| Error::UnparseableDate(key.to_string()))?;

        Ok(key)
    }

    /// The month containing `date`.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The 1-based month.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The month as `time`'s month type.
    pub fn time_month(&self) -> Month {
        Month::January.nth_next(self.month - 1)
    }

    /// The month zero-padded to two digits, e.g. "03".
    ///
    /// Descending string order of padded months matches descending numeric order.
    pub fn padded_month(&self) -> String {
        format!("{:02}", self.month)
    }

    /// The first day of the month.
    pub fn first_day(&self) -> Date {
        Date::from_calendar_date(self.year, self.time_month(), 1)
            .expect("month keys are validated on construction")
    }
}

/// Renders the compact `MM/YYYY` token, e.g. "03/2024".
impl Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse the date of a transaction.
///
/// Accepts plain dates (`2024-03-15`), ISO 8601 date-times without an offset
/// (`2024-03-15T10:30:00`, `2024-03-15 10:30:00`) and RFC 3339 date-times.
/// When an offset is given the calendar date is taken as written, no timezone
/// conversion is done.
///
/// # Errors
///
/// Returns [Error::UnparseableDate] if `value` is none of the above.
pub fn parse_transaction_date(value: &str) -> Result<Date, Error> {
    let trimmed = value.trim();

    if let Ok(date) = Date::parse(trimmed, DATE_FORMAT) {
        return Ok(date);
    }

    if let Ok(date_time) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(date_time.date());
    }

    PrimitiveDateTime::parse(trimmed, &Iso8601::DEFAULT)
        .or_else(|_| PrimitiveDateTime::parse(trimmed, SPACED_DATE_TIME_FORMAT))
        .map(|date_time| date_time.date())
        .map_err(|_| Error::UnparseableDate(value.to_owned()))
}

/// Get the month key of a transaction date.
///
/// # Errors
///
/// Returns [Error::UnparseableDate] if `value` cannot be parsed by
/// [parse_transaction_date].
pub fn normalize_date(value: &str) -> Result<MonthKey, Error> {
    parse_transaction_date(value).map(MonthKey::from_date)
}

/// Parse a compact `MM/YYYY` month token, as used by month selectors.
///
/// The token is split on `/`. A single-digit month such as `3/2024` is accepted.
///
/// # Errors
///
/// Returns [Error::UnparseableDate] if the token is not two numbers separated
/// by a `/`, or [Error::InvalidMonthIndex] if the month is not in 1 to 12.
pub fn parse_month_token(token: &str) -> Result<MonthKey, Error> {
    let unparseable = || Error::UnparseableDate(token.to_owned());

    let (month, year) = token.trim().split_once('/').ok_or_else(unparseable)?;
    let month: i64 = month.trim().parse().map_err(|_| unparseable())?;
    let year: i32 = year.trim().parse().map_err(|_| unparseable())?;

    MonthKey::from_index(year, month)
}
