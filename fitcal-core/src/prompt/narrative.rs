//! Narrative text for the workout prompt.
//!
//! Each branch is a list of segments so a front end can style the
//! highlighted parts (bold dates and names, typed-out text) however it
//! renders. `Display` gives the plain text.

use std::fmt;

use chrono::NaiveDate;

use crate::month_key::{MonthKey, long_date};
use crate::workout::{DayRecord, Workout};

/// Areas listed under "Muscles Targeted".
const MAX_AREAS_SHOWN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    Bold,
    /// Bold, typed out one character at a time.
    Typed,
    Heading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Segment {
    fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Segment {
            text: text.into(),
            emphasis,
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::Plain)
    }

    fn bold(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::Bold)
    }

    fn typed(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::Typed)
    }

    fn heading(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::Heading)
    }
}

/// One branch of the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Narrative {
    Intro { today: NaiveDate },
    UpcomingWorkout { month: MonthKey, record: DayRecord },
    NoUpcomingWorkout { month: MonthKey },
    OlderMonth { month: MonthKey },
    ClickedWorkout { month: MonthKey, record: DayRecord },
    ClickedNoWorkout { month: MonthKey, day: u32 },
}

impl Narrative {
    pub fn segments(&self) -> Vec<Segment> {
        match self {
            Narrative::Intro { today } => vec![
                Segment::plain("Today is"),
                Segment::typed(format!(" {}. ", long_date(*today))),
                Segment::plain(
                    "Click on any date on the calendar to get information about a workout \
                     scheduled for that day.",
                ),
            ],
            Narrative::UpcomingWorkout { month, record } => {
                let mut segments = vec![
                    Segment::plain(
                        "The next workout you have planned for the month you are viewing is on ",
                    ),
                    Segment::bold(format!("{} {}", month.month.name(), record.date)),
                    Segment::plain(" and it is called "),
                    Segment::bold(format!("{}.", record.workout.name)),
                    Segment::plain(" Here is more information:\n"),
                ];
                segments.extend(summary_segments(&record.workout));
                segments
            }
            Narrative::NoUpcomingWorkout { month } => vec![
                Segment::plain("Currently viewing "),
                Segment::bold(month.spaced()),
                Segment::plain(
                    ". It looks like you don't have any upcoming workouts for this month. \
                     You can add a workout to a date to schedule it for that date.",
                ),
            ],
            Narrative::OlderMonth { month } => vec![
                Segment::plain("Currently viewing "),
                Segment::bold(month.spaced()),
                Segment::plain(
                    ". It looks like this is from a previous month which has already passed. \
                     You can add a workout to a date to schedule it for that date.",
                ),
            ],
            Narrative::ClickedWorkout { month, record } => {
                let mut segments = vec![
                    Segment::plain("You clicked on "),
                    Segment::typed(format!(
                        "{} {}, {}. ",
                        month.month.name(),
                        record.date,
                        month.year
                    )),
                    Segment::plain("The workout for this day is called "),
                    Segment::typed(format!("{}. ", record.workout.name)),
                    Segment::plain("Here is more information on it:\n"),
                ];
                segments.extend(summary_segments(&record.workout));
                segments
            }
            Narrative::ClickedNoWorkout { month, day } => vec![
                Segment::plain("There's no workout scheduled for "),
                Segment::bold(format!("{} {}.", month.month.name(), day)),
            ],
        }
    }

    /// The day record this branch describes, if any.
    pub fn record(&self) -> Option<&DayRecord> {
        match self {
            Narrative::UpcomingWorkout { record, .. } | Narrative::ClickedWorkout { record, .. } => {
                Some(record)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for segment in self.segments() {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

fn summary_segments(workout: &Workout) -> Vec<Segment> {
    let mut segments = vec![Segment::heading("Muscles Targeted\n")];

    for area in workout.areas_targeted.iter().take(MAX_AREAS_SHOWN) {
        segments.push(Segment::plain(format!("  • {}\n", area.name)));
    }

    segments.push(Segment::heading("Exercises\n"));
    for (index, exercise) in workout.exercises.iter().enumerate() {
        segments.push(Segment::bold(format!("  {}. ", index + 1)));
        segments.push(Segment::typed(exercise.name.clone()));
        segments.push(Segment::plain("\n"));

        for block in &exercise.sets {
            let line = if block.is_weighted() {
                format!("      {} x {} @ {} lbs\n", block.sets, block.reps, block.weight)
            } else {
                format!("      {} x {}\n", block.sets, block.reps)
            };
            segments.push(Segment::plain(line));
        }
    }

    segments.push(Segment::heading("Remove From Calendar?"));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::fixtures::workout;
    use chrono::Month;

    fn june() -> MonthKey {
        MonthKey::new(2025, Month::June)
    }

    #[test]
    fn test_intro_text() {
        let intro = Narrative::Intro {
            today: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
        };

        assert!(intro.to_string().starts_with("Today is June 3, 2025. Click on any date"));
    }

    #[test]
    fn test_upcoming_workout_text_and_summary() {
        let narrative = Narrative::UpcomingWorkout {
            month: june(),
            record: DayRecord::new(14, workout("Push Day")),
        };

        let text = narrative.to_string();

        assert!(text.starts_with(
            "The next workout you have planned for the month you are viewing is on June 14 \
             and it is called Push Day. Here is more information:"
        ));
        assert!(text.contains("  1. Bench Press\n      3 x 10 @ 135 lbs\n"));
        assert!(text.contains("  2. Dips\n      4 x 12\n"));
        assert!(text.ends_with("Remove From Calendar?"));
    }

    #[test]
    fn test_summary_lists_first_two_areas_only() {
        let text = Narrative::UpcomingWorkout {
            month: june(),
            record: DayRecord::new(14, workout("Push Day")),
        }
        .to_string();

        assert!(text.contains("• chest"));
        assert!(text.contains("• triceps"));
        assert!(!text.contains("shoulders"));
    }

    #[test]
    fn test_clicked_workout_text() {
        let narrative = Narrative::ClickedWorkout {
            month: june(),
            record: DayRecord::new(9, workout("Legs")),
        };

        assert!(narrative.to_string().starts_with(
            "You clicked on June 9, 2025. The workout for this day is called Legs. \
             Here is more information on it:"
        ));
        assert_eq!(narrative.record().map(|r| r.date), Some(9));
    }

    #[test]
    fn test_empty_and_past_month_text() {
        let none = Narrative::NoUpcomingWorkout { month: june() }.to_string();
        let older = Narrative::OlderMonth { month: june() }.to_string();

        assert!(none.starts_with("Currently viewing June 2025. It looks like you don't have any upcoming"));
        assert!(older.contains("from a previous month which has already passed"));
    }

    #[test]
    fn test_clicked_no_workout_text() {
        let text = Narrative::ClickedNoWorkout {
            month: june(),
            day: 21,
        }
        .to_string();

        assert_eq!(text, "There's no workout scheduled for June 21.");
    }

    #[test]
    fn test_exercise_names_are_typed() {
        let segments = Narrative::ClickedWorkout {
            month: june(),
            record: DayRecord::new(9, workout("Legs")),
        }
        .segments();

        assert!(
            segments
                .iter()
                .any(|s| s.text == "Bench Press" && s.emphasis == Emphasis::Typed)
        );
    }
}
