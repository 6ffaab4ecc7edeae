//! Error types for the fitness_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitness_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout code is not one of the known three-letter codes
    #[error("Unknown workout code '{code}'. Valid workout codes: {}", valid.join(", "))]
    InvalidWorkoutCode {
        code: String,
        valid: Vec<&'static str>,
    },

    /// Sensor readings do not fit the selected workout
    #[error("Invalid arguments for {workout}: {message}")]
    InvalidArguments { workout: String, message: String },

    /// Packages skipped under the continue policy
    #[error("{failed} package(s) failed:\n{details}")]
    Batch { failed: usize, details: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArguments`]
    pub(crate) fn invalid_arguments(workout: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArguments {
            workout: workout.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_lists_valid_codes() {
        let err = Error::InvalidWorkoutCode {
            code: "XYZ".into(),
            valid: vec!["SWM", "RUN", "WLK"],
        };

        assert_eq!(
            err.to_string(),
            "Unknown workout code 'XYZ'. Valid workout codes: SWM, RUN, WLK"
        );
    }

    #[test]
    fn test_invalid_arguments_message() {
        let err = Error::invalid_arguments("Running", "expected 3 readings, got 2");
        assert_eq!(
            err.to_string(),
            "Invalid arguments for Running: expected 3 readings, got 2"
        );
    }
}
