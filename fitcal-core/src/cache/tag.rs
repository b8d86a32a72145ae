//! Cache tags: `Month:{monthName}` and `Day:{day}`.

use std::fmt;

use crate::month_key::MonthKey;

/// A label identifying stored data a cached query depends on.
///
/// Month tags carry the month name only and day tags the day number only,
/// so a tag may cover the same month in several years. That over-invalidates
/// and never misses a dependent query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Month(String),
    Day(u32),
}

impl Tag {
    pub fn month(month: &MonthKey) -> Self {
        Tag::Month(month.month_name())
    }

    pub fn day(day: u32) -> Self {
        Tag::Day(day)
    }

    /// The `[Day, Month]` pair a single-day mutation invalidates.
    pub fn for_day(month: &MonthKey, day: u32) -> Vec<Tag> {
        vec![Tag::day(day), Tag::month(month)]
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tag::Month(name) => write!(f, "Month:{}", name),
            Tag::Day(day) => write!(f, "Day:{}", day),
        }
    }
}
