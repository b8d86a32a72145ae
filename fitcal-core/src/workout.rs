//! Workout documents.
//!
//! These mirror the JSON stored for each calendar day, so field names
//! serialize in camelCase.

use serde::{Deserialize, Serialize};

/// A workout assigned to a calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub name: String,
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub areas_targeted: Vec<TargetArea>,
    #[serde(default)]
    pub exercises: Vec<AllocatedExercise>,
}

/// A muscle group a workout targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetArea {
    pub id: String,
    pub name: String,
}

/// An exercise with its planned set blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocatedExercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sets: Vec<SetBlock>,
}

/// `sets` x `reps`, optionally at `weight` (lbs). A weight of 0 means bodyweight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetBlock {
    pub id: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(default)]
    pub weight: f64,
}

impl SetBlock {
    pub fn is_weighted(&self) -> bool {
        self.weight > 0.0
    }
}

/// The stored unit: one user's workout for one day of a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Day of month (1-31)
    pub date: u32,
    pub workout: Workout,
}

impl DayRecord {
    pub fn new(date: u32, workout: Workout) -> Self {
        DayRecord { date, workout }
    }
}
