//! Batch processing of sensor packages into report lines.
//!
//! Packages are handled in order. A failing package either aborts the whole
//! batch or is recorded and skipped, depending on [`ErrorPolicy`].

use crate::report::{render, OutputFormat};
use crate::{Error, Package, Result};
use serde::{Deserialize, Serialize};

/// What to do when a package cannot be processed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop at the first failing package
    #[default]
    Abort,
    /// Record the failure and move on to the next package
    Continue,
}

/// Options controlling a batch run
#[derive(Clone, Copy, Debug, Default)]
pub struct BatchOptions {
    pub format: OutputFormat,
    pub on_error: ErrorPolicy,
}

/// A package that could not be processed
#[derive(Debug)]
pub struct PackageFailure {
    /// Position of the package in the batch
    pub index: usize,
    pub code: String,
    pub error: Error,
}

/// Result of a batch run
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Rendered report lines, in package order
    pub lines: Vec<String>,
    pub failures: Vec<PackageFailure>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn recorded failures into an [`Error::Batch`]
    pub fn ensure_success(&self) -> Result<()> {
        if self.is_success() {
            return Ok(());
        }

        let details = self
            .failures
            .iter()
            .map(|f| format!("  - #{} {}: {}", f.index, f.code, f.error))
            .collect::<Vec<_>>()
            .join("\n");

        Err(Error::Batch {
            failed: self.failures.len(),
            details,
        })
    }
}

/// Compute and render one package
pub fn process_package(package: &Package, format: OutputFormat) -> Result<String> {
    let training = package.to_training()?;
    let report = training.show_training_info();
    render(&report, format)
}

/// Process every package according to the batch options
///
/// With [`ErrorPolicy::Abort`] the first error is returned as-is. With
/// [`ErrorPolicy::Continue`] errors are collected in the outcome.
pub fn run_batch(packages: &[Package], options: &BatchOptions) -> Result<BatchOutcome> {
    let mut outcome = BatchOutcome::default();

    for (index, package) in packages.iter().enumerate() {
        match process_package(package, options.format) {
            Ok(line) => {
                tracing::debug!("Processed package #{} ({})", index, package.code);
                outcome.lines.push(line);
            }
            Err(error) => match options.on_error {
                ErrorPolicy::Abort => {
                    tracing::error!("Package #{} ({}) failed: {}", index, package.code, error);
                    return Err(error);
                }
                ErrorPolicy::Continue => {
                    tracing::warn!(
                        "Package #{} ({}) failed, continuing: {}",
                        index,
                        package.code,
                        error
                    );
                    outcome.failures.push(PackageFailure {
                        index,
                        code: package.code.clone(),
                        error,
                    });
                }
            },
        }
    }

    tracing::info!(
        "Batch finished: {} processed, {} failed",
        outcome.lines.len(),
        outcome.failures.len()
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::sample_packages;

    fn mixed_batch() -> Vec<Package> {
        vec![
            Package::new("RUN", [15000.0, 1.0, 75.0]),
            Package::new("XYZ", [1.0, 1.0, 1.0]),
            Package::new("WLK", [9000.0, 1.0, 75.0]),
            Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        ]
    }

    #[test]
    fn test_sample_batch_text() {
        crate::logging::init_test();

        let outcome = run_batch(sample_packages(), &BatchOptions::default()).unwrap();

        assert!(outcome.is_success());
        assert_eq!(
            outcome.lines,
            vec![
                "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
                 Mean speed: 1.000 km/h; Calories: 336.000.",
                "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
                 Mean speed: 9.750 km/h; Calories: 699.750.",
                "Training type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
                 Mean speed: 5.850 km/h; Calories: 157.500.",
            ]
        );
    }

    #[test]
    fn test_abort_policy_returns_first_error() {
        let err = run_batch(&mixed_batch(), &BatchOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidWorkoutCode { .. }));
    }

    #[test]
    fn test_continue_policy_collects_failures() {
        let options = BatchOptions {
            on_error: ErrorPolicy::Continue,
            ..BatchOptions::default()
        };

        let outcome = run_batch(&mixed_batch(), &options).unwrap();

        assert_eq!(outcome.lines.len(), 2);
        assert!(outcome.lines[0].starts_with("Training type: Running"));
        assert!(outcome.lines[1].starts_with("Training type: Swimming"));

        let failed: Vec<_> = outcome.failures.iter().map(|f| (f.index, f.code.as_str())).collect();
        assert_eq!(failed, vec![(1, "XYZ"), (2, "WLK")]);
        assert!(matches!(
            outcome.failures[1].error,
            Error::InvalidArguments { .. }
        ));
    }

    #[test]
    fn test_continue_policy_reports_failures_as_error() {
        let options = BatchOptions {
            on_error: ErrorPolicy::Continue,
            ..BatchOptions::default()
        };

        let outcome = run_batch(&mixed_batch(), &options).unwrap();
        let err = outcome.ensure_success().unwrap_err();

        assert!(matches!(err, Error::Batch { failed: 2, .. }));
        let message = err.to_string();
        assert!(message.starts_with("2 package(s) failed:"));
        assert!(message.contains("#1 XYZ: Unknown workout code 'XYZ'"));
        assert!(message.contains("#2 WLK: Invalid arguments for SportsWalking"));
    }

    #[test]
    fn test_successful_batch_passes_check() {
        let outcome = run_batch(sample_packages(), &BatchOptions::default()).unwrap();
        assert!(outcome.ensure_success().is_ok());
    }

    #[test]
    fn test_json_batch() {
        let options = BatchOptions {
            format: OutputFormat::Json,
            ..BatchOptions::default()
        };

        let outcome = run_batch(sample_packages(), &options).unwrap();
        let first: serde_json::Value = serde_json::from_str(&outcome.lines[0]).unwrap();

        assert_eq!(first["training_type"], "Swimming");
        assert_eq!(first["calories"], 336.0);
    }

    #[test]
    fn test_empty_batch() {
        let outcome = run_batch(&[], &BatchOptions::default()).unwrap();
        assert!(outcome.lines.is_empty());
        assert!(outcome.is_success());
    }
}
