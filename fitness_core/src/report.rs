//! Report rendering.

use crate::{Result, TrainingReport};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How report lines are written
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Fixed-template text line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl TrainingReport {
    /// Render the fixed-template summary line
    pub fn message(&self) -> String {
        format!(
            "Training type: {}; \
             Duration: {:.3} h; \
             Distance: {:.3} km; \
             Mean speed: {:.3} km/h; \
             Calories: {:.3}.",
            self.training_type(),
            self.duration(),
            self.distance(),
            self.speed(),
            self.calories()
        )
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Render a report in the requested format
pub fn render(report: &TrainingReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.message()),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkoutKind;

    fn swim_report() -> TrainingReport {
        TrainingReport::new(WorkoutKind::Swimming, 1.0, 0.9936, 1.0, 336.0)
    }

    #[test]
    fn test_text_template() {
        assert_eq!(
            swim_report().message(),
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories: 336.000."
        );
    }

    #[test]
    fn test_fields_in_fixed_order_with_three_decimals() {
        let report = TrainingReport::new(WorkoutKind::Running, 1.5, 12.0, 8.0, 654.321);
        let line = report.to_string();

        let positions: Vec<usize> = [
            "Training type: Running",
            "Duration: 1.500 h",
            "Distance: 12.000 km",
            "Mean speed: 8.000 km/h",
            "Calories: 654.321.",
        ]
        .iter()
        .map(|part| line.find(part).unwrap_or_else(|| panic!("missing {}", part)))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_text_matches_display() {
        let report = swim_report();
        assert_eq!(
            render(&report, OutputFormat::Text).unwrap(),
            report.to_string()
        );
    }

    #[test]
    fn test_render_json() {
        let line = render(&swim_report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["training_type"], "Swimming");
        assert_eq!(value["duration"], 1.0);
        assert_eq!(value["speed"], 1.0);
        assert_eq!(value["calories"], 336.0);
        assert!(!line.contains('\n'));
    }
}
