#![forbid(unsafe_code)]

//! Core domain model and formulas for the fitness report system.
//!
//! This crate provides:
//! - Domain types (workout kinds, reports, sensor packages)
//! - Per-workout distance, speed and calorie formulas
//! - Dispatch from sensor codes to formulas
//! - Report rendering and the batch runner

pub mod types;
pub mod error;
pub mod training;
pub mod dispatch;
pub mod report;
pub mod packages;
pub mod runner;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use training::{BaseReadings, SwimmingReadings, Training, WalkingReadings};
pub use dispatch::{read_package, valid_codes};
pub use report::{render, OutputFormat};
pub use packages::sample_packages;
pub use runner::{run_batch, BatchOptions, BatchOutcome, ErrorPolicy, PackageFailure};
pub use config::{Config, ConfigSource};
