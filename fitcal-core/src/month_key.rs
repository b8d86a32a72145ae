//! Month keys and document paths.
//!
//! Day records are grouped per user under a `{month}_{year}` key such as
//! `june_2025`, one document per day of month.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};

use crate::error::{FitCalError, FitCalResult};

/// A calendar month, displayed as `june_2025`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: Month,
}

impl MonthKey {
    pub fn new(year: i32, month: Month) -> Self {
        MonthKey { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        // month() is always 1..=12
        let month = Month::try_from(date.month() as u8).unwrap_or(Month::January);
        MonthKey {
            year: date.year(),
            month,
        }
    }

    /// Lowercase month name, the id used in `Month` cache tags.
    pub fn month_name(&self) -> String {
        self.month.name().to_lowercase()
    }

    /// "June 2025"
    pub fn spaced(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }

    /// The calendar date for a day of this month, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), day)
    }

    fn ordinal(&self) -> (i32, u32) {
        (self.year, self.month.number_from_month())
    }
}

impl Ord for MonthKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for MonthKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}", self.month_name(), self.year)
    }
}

impl FromStr for MonthKey {
    type Err = FitCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FitCalError::InvalidMonthKey(s.to_string());

        let (month, year) = s.split_once('_').ok_or_else(invalid)?;
        let month: Month = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;

        Ok(MonthKey { year, month })
    }
}

/// Location of a single day record: `user/{user}/{month}_{year}/{day}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocPath {
    pub user: String,
    pub month: MonthKey,
    pub day: u32,
}

impl DocPath {
    pub fn new(user: &str, month: MonthKey, day: u32) -> Self {
        DocPath {
            user: user.to_string(),
            month,
            day,
        }
    }
}

/// A user id must name exactly one directory under `user/`.
pub fn check_user_id(user: &str) -> FitCalResult<()> {
    let one_component = !user.is_empty()
        && user != "."
        && user != ".."
        && !user.contains(['\0', '/', '\\']);

    if one_component {
        Ok(())
    } else {
        Err(FitCalError::InvalidUser(user.to_string()))
    }
}

impl fmt::Display for DocPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "user/{}/{}/{}", self.user, self.month, self.day)
    }
}

/// Parse a program start date.
///
/// Accepts "June 3, 2025" or "2025-06-03".
pub fn parse_start_date(s: &str) -> FitCalResult<NaiveDate> {
    let s = s.trim();

    NaiveDate::parse_from_str(s, "%B %d, %Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| {
            FitCalError::InvalidDate(format!(
                "'{}'. Expected \"June 3, 2025\" or YYYY-MM-DD",
                s
            ))
        })
}

/// "June 3, 2025"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
