//! Core domain types for the fitness report system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Workout kinds and their sensor codes
//! - Training reports produced by the formulas
//! - Sensor packages fed into the dispatcher

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Workout Types
// ============================================================================

/// Type of workout recorded by the sensor
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// All workout kinds in dispatch-table order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Three-letter sensor code for this workout
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown as the training type in reports
    pub fn name(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Names of the positional readings this workout expects
    pub fn reading_fields(self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutKind::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }

    /// Number of readings this workout expects
    pub fn arity(self) -> usize {
        self.reading_fields().len()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Report Type
// ============================================================================

/// Summary of a completed training session
///
/// Fields are private so a report cannot change after it is built.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TrainingReport {
    training_type: WorkoutKind,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
}

impl TrainingReport {
    pub fn new(
        training_type: WorkoutKind,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        }
    }

    pub fn training_type(&self) -> WorkoutKind {
        self.training_type
    }

    /// Duration in hours
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Distance in kilometres
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Mean speed in km/h
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }
}

// ============================================================================
// Sensor Package Type
// ============================================================================

/// Raw sensor package: a workout code plus its positional readings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Package {
    pub code: String,
    pub readings: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, readings: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            readings: readings.into(),
        }
    }
}
