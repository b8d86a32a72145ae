//! Multi-week workout programs.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{FitCalError, FitCalResult};
use crate::month_key::MonthKey;
use crate::workout::Workout;

pub const DAYS_PER_WEEK: usize = 7;

/// A weekly template repeated for `duration` weeks.
///
/// `shape[slot]` is the index into `workouts` for the day `slot` days after
/// the start of each week, or `None` for a rest day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Number of weeks
    pub duration: u32,
    pub shape: [Option<usize>; DAYS_PER_WEEK],
    pub workouts: Vec<Workout>,
}

/// One day a program expands to.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledDay<'a> {
    pub date: NaiveDate,
    pub workout: &'a Workout,
}

impl ScheduledDay<'_> {
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

impl Program {
    /// Check every shape entry points at a workout.
    pub fn validate(&self) -> FitCalResult<()> {
        for (slot, index) in self.shape.iter().enumerate() {
            if let Some(index) = index
                && *index >= self.workouts.len()
            {
                return Err(FitCalError::InvalidProgram(format!(
                    "slot {} refers to workout {} but the program has {}",
                    slot,
                    index,
                    self.workouts.len()
                )));
            }
        }
        Ok(())
    }

    /// Expand into dated workouts, in calendar order.
    ///
    /// Week `w`, slot `s` lands on `start + (w * 7 + s)` days.
    pub fn schedule(&self, start: NaiveDate) -> FitCalResult<Vec<ScheduledDay<'_>>> {
        self.validate()?;

        let mut days = Vec::new();
        for week in 0..self.duration as i64 {
            for (slot, index) in self.shape.iter().enumerate() {
                let Some(index) = index else {
                    continue;
                };

                let offset = week * DAYS_PER_WEEK as i64 + slot as i64;
                let date = start
                    .checked_add_signed(Duration::days(offset))
                    .ok_or_else(|| {
                        FitCalError::InvalidDate(format!("{} + {} days is out of range", start, offset))
                    })?;

                days.push(ScheduledDay {
                    date,
                    workout: &self.workouts[*index],
                });
            }
        }

        Ok(days)
    }
}
