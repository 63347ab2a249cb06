//! Human readable month labels.

use crate::Error;

use super::{MonthKey, parse_month_token};

/// Format a `MM/YYYY` token as a long month name and year, e.g. "March 2024".
///
/// # Errors
///
/// Returns the same errors as [parse_month_token].
pub fn readable_label(token: &str) -> Result<String, Error> {
    parse_month_token(token).map(|key| key.long_label())
}

/// Get the three-letter abbreviation of a 1-based month, e.g. 1 → "Jan".
///
/// # Errors
///
/// Returns [Error::InvalidMonthIndex] if `month` is not in 1 to 12. A 0-based
/// index is never shifted into a neighbouring month.
pub fn month_abbreviation(month: u8) -> Result<&'static str, Error> {
    let abbreviation = match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => return Err(Error::InvalidMonthIndex(i64::from(month))),
    };

    Ok(abbreviation)
}

impl MonthKey {
    /// The long label of the month, e.g. "March 2024".
    pub fn long_label(&self) -> String {
        format!("{} {}", self.time_month(), self.year())
    }

    /// The three-letter abbreviation of the month, e.g. "Mar".
    pub fn abbreviation(&self) -> &'static str {
        // Month keys always hold a month in 1 to 12.
        month_abbreviation(self.month()).unwrap_or("???")
    }
}
