//! Terminal rendering for fitcal types.
//!
//! Extension traits that add colored output to fitcal-core types using
//! owo_colors.

use fitcal_core::month_key::MonthKey;
use fitcal_core::prompt::{Emphasis, Segment};
use fitcal_core::workout::DayRecord;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for MonthKey {
    fn render(&self) -> String {
        format!("📅 {}", self.spaced().bold())
    }
}

impl Render for DayRecord {
    fn render(&self) -> String {
        let day = format!("{:>2}", self.date);
        let check = if self.workout.complete { "✓" } else { " " };

        if self.workout.complete {
            format!("{} {} {}", check.green(), day.dimmed(), self.workout.name.green())
        } else {
            format!("{} {} {}", check, day.dimmed(), self.workout.name)
        }
    }
}

impl Render for Segment {
    fn render(&self) -> String {
        match self.emphasis {
            Emphasis::Plain => self.text.clone(),
            Emphasis::Bold | Emphasis::Typed => self.text.bold().to_string(),
            Emphasis::Heading => self.text.blue().bold().to_string(),
        }
    }
}
