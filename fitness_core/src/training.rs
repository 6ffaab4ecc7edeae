//! Distance, speed and calorie formulas for each workout kind.
//!
//! Every workout shares the step-based distance and the distance/duration
//! mean speed. Swimming overrides both the step length and the speed (which
//! comes from pool laps instead of strokes). Calorie formulas are per kind.

use crate::{Error, Result, TrainingReport, WorkoutKind};

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MINS_IN_HOUR: f64 = 60.0;

/// Step length for running and walking (metres per action)
pub const LEN_STEP: f64 = 0.65;

/// Stroke length for swimming (metres per action)
pub const LEN_STROKE: f64 = 1.38;

const RUN_CALORIE_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_CALORIE_SPEED_SHIFT: f64 = 20.0;

const WALK_CALORIE_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_CALORIE_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_CALORIE_SPEED_SHIFT: f64 = 1.1;
const SWIM_CALORIE_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Readings every workout carries
///
/// Only built through the validating [`Training`] constructors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseReadings {
    action: f64,
    duration: f64,
    weight: f64,
}

impl BaseReadings {
    /// Steps or strokes counted by the sensor
    pub fn action(&self) -> f64 {
        self.action
    }

    /// Duration in hours, always positive
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Body weight in kg
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Sports walking readings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WalkingReadings {
    base: BaseReadings,
    height: f64,
}

impl WalkingReadings {
    /// Height in cm, always positive
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Swimming readings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwimmingReadings {
    base: BaseReadings,
    length_pool: f64,
    count_pool: f64,
}

impl SwimmingReadings {
    /// Pool length in metres
    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    /// Number of pool laps
    pub fn count_pool(&self) -> f64 {
        self.count_pool
    }
}

/// A workout with its parameters, ready to compute a report
#[derive(Clone, Debug, PartialEq)]
pub enum Training {
    Running(BaseReadings),
    SportsWalking(WalkingReadings),
    Swimming(SwimmingReadings),
}

impl Training {
    pub fn running(action: f64, duration: f64, weight: f64) -> Result<Self> {
        let base = BaseReadings::validated(WorkoutKind::Running, action, duration, weight)?;
        Ok(Training::Running(base))
    }

    pub fn sports_walking(action: f64, duration: f64, weight: f64, height: f64) -> Result<Self> {
        let base = BaseReadings::validated(WorkoutKind::SportsWalking, action, duration, weight)?;
        ensure_finite(WorkoutKind::SportsWalking, "height", height)?;
        // Walking calories divide by height
        if height <= 0.0 {
            return Err(Error::invalid_arguments(
                WorkoutKind::SportsWalking.name(),
                format!("height must be positive, got {}", height),
            ));
        }
        Ok(Training::SportsWalking(WalkingReadings { base, height }))
    }

    pub fn swimming(
        action: f64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Result<Self> {
        let base = BaseReadings::validated(WorkoutKind::Swimming, action, duration, weight)?;
        ensure_finite(WorkoutKind::Swimming, "length_pool", length_pool)?;
        ensure_finite(WorkoutKind::Swimming, "count_pool", count_pool)?;
        Ok(Training::Swimming(SwimmingReadings {
            base,
            length_pool,
            count_pool,
        }))
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Training::Running(_) => WorkoutKind::Running,
            Training::SportsWalking(_) => WorkoutKind::SportsWalking,
            Training::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    pub fn base(&self) -> &BaseReadings {
        match self {
            Training::Running(base) => base,
            Training::SportsWalking(walking) => &walking.base,
            Training::Swimming(swimming) => &swimming.base,
        }
    }

    /// Metres covered per action
    fn step_length(&self) -> f64 {
        match self {
            Training::Swimming(_) => LEN_STROKE,
            _ => LEN_STEP,
        }
    }

    /// Distance in km
    pub fn distance(&self) -> f64 {
        self.base().action * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h
    pub fn mean_speed(&self) -> f64 {
        match self {
            Training::Swimming(swimming) => {
                swimming.length_pool * swimming.count_pool / M_IN_KM / swimming.base.duration
            }
            _ => self.distance() / self.base().duration,
        }
    }

    /// Calories (kcal) spent during the workout
    pub fn spent_calories(&self) -> f64 {
        let base = self.base();
        let duration_in_min = base.duration * MINS_IN_HOUR;

        match self {
            Training::Running(_) => {
                (RUN_CALORIE_SPEED_MULTIPLIER * self.mean_speed() - RUN_CALORIE_SPEED_SHIFT)
                    * base.weight
                    / M_IN_KM
                    * duration_in_min
            }
            Training::SportsWalking(walking) => {
                // km/h squared over cm: kept exactly as the formula is defined
                let speed_height_ratio = floor_div(self.mean_speed().powi(2), walking.height);
                (WALK_CALORIE_WEIGHT_MULTIPLIER * base.weight
                    + speed_height_ratio * WALK_CALORIE_SPEED_HEIGHT_MULTIPLIER * base.weight)
                    * duration_in_min
            }
            Training::Swimming(_) => {
                (self.mean_speed() + SWIM_CALORIE_SPEED_SHIFT)
                    * SWIM_CALORIE_WEIGHT_MULTIPLIER
                    * base.weight
            }
        }
    }

    /// Build the report for this workout
    pub fn show_training_info(&self) -> TrainingReport {
        let report = TrainingReport::new(
            self.kind(),
            self.base().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        );

        tracing::debug!(
            "Computed {} report: distance={:.3} km, speed={:.3} km/h, calories={:.3}",
            self.kind(),
            report.distance(),
            report.speed(),
            report.calories()
        );

        report
    }
}

impl BaseReadings {
    fn validated(kind: WorkoutKind, action: f64, duration: f64, weight: f64) -> Result<Self> {
        ensure_finite(kind, "action", action)?;
        ensure_finite(kind, "duration", duration)?;
        ensure_finite(kind, "weight", weight)?;

        if duration <= 0.0 {
            return Err(Error::invalid_arguments(
                kind.name(),
                format!("duration must be positive, got {}", duration),
            ));
        }

        Ok(Self {
            action,
            duration,
            weight,
        })
    }
}

/// Floored float division with the quotient taken from `a - a % b`
///
/// `(a / b).floor()` is one too high when `a / b` rounds up to a whole
/// number: `1.0 / 0.1` is exactly `10.0`, yet 0.1 fits into 1.0 only 9 times.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;

    // `%` keeps the sign of `a`; flooring needs it to follow `b`
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

fn ensure_finite(kind: WorkoutKind, field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_arguments(
            kind.name(),
            format!("{} must be a finite number, got {}", field, value),
        ))
    }
}
