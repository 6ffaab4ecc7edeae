//! Built-in sensor packages processed by the report runner.

use crate::types::Package;
use once_cell::sync::Lazy;

/// Cached sample packages - built once and reused
static SAMPLE_PACKAGES: Lazy<Vec<Package>> = Lazy::new(build_sample_packages);

/// Get a reference to the built-in sample packages
pub fn sample_packages() -> &'static [Package] {
    &SAMPLE_PACKAGES
}

fn build_sample_packages() -> Vec<Package> {
    vec![
        // 720 strokes, 1 h, 80 kg, 25 m pool, 40 laps
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        // 15000 steps, 1 h, 75 kg
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        // 9000 steps, 1 h, 75 kg, 180 cm
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}
