//! Dispatch from sensor workout codes to training formulas.
//!
//! The code table is a static lookup; nothing here holds state.

use crate::{Error, Package, Result, Training, WorkoutKind};

impl WorkoutKind {
    /// Resolve a three-letter sensor code
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "SWM" => Ok(WorkoutKind::Swimming),
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            _ => Err(Error::InvalidWorkoutCode {
                code: code.to_string(),
                valid: valid_codes(),
            }),
        }
    }
}

/// Codes accepted by [`read_package`], in dispatch-table order
pub fn valid_codes() -> Vec<&'static str> {
    WorkoutKind::ALL.iter().map(|kind| kind.code()).collect()
}

/// Build a training from a workout code and its positional readings
///
/// Fails with [`Error::InvalidWorkoutCode`] for an unknown code and with
/// [`Error::InvalidArguments`] when the number of readings does not match the
/// workout (or a reading is out of range).
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training> {
    let kind = WorkoutKind::from_code(workout_type)?;

    tracing::debug!("Dispatching {} package to {}", workout_type, kind);

    match (kind, data) {
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Training::running(action, duration, weight)
        }
        (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => {
            Training::sports_walking(action, duration, weight, height)
        }
        (WorkoutKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Training::swimming(action, duration, weight, length_pool, count_pool)
        }
        _ => Err(Error::invalid_arguments(
            kind.name(),
            format!(
                "expected {} readings ({}), got {}",
                kind.arity(),
                kind.reading_fields().join(", "),
                data.len()
            ),
        )),
    }
}

impl Package {
    /// Dispatch this package to its training
    pub fn to_training(&self) -> Result<Training> {
        read_package(&self.code, &self.readings)
    }
}
