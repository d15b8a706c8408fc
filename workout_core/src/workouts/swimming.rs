//! # Swimming
//!
//! Swimming counts strokes, which cover more ground than steps. Its mean
//! speed is measured from pool length times laps, not from the stroke
//! distance.
//!
//! ## Example
//!
//! ```rust
//! use workout_core::workouts::swimming::Swimming;
//!
//! let swim = Swimming::from_readings(&[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
//! assert!((swim.mean_speed().0 - 1.0).abs() < 1e-9);
//! assert!((swim.spent_calories().0 - 336.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::base::{whole_count, WorkoutBase};
use super::WorkoutKind;
use crate::errors::{WorkoutError, WorkoutResult};
use crate::units::{Kilocalories, Kilometers, KmPerHour, Meters};

/// Distance per stroke
pub const STEP_LENGTH: Meters = Meters(1.38);

/// Added to mean speed in the calorie formula
pub const CALORIE_SPEED_SHIFT: f64 = 1.1;

/// Weight multiplier in the calorie formula
pub const CALORIE_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Positional reading order: `[action, duration_h, weight_kg, pool_length_m, pool_laps]`
pub const FIELDS: [&str; 5] = ["action", "duration_h", "weight_kg", "pool_length_m", "pool_laps"];

/// A swimming workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    pub base: WorkoutBase,

    /// Pool length in meters
    pub pool_length_m: u32,

    /// Number of pool lengths swum
    pub pool_laps: u32,
}

impl Swimming {
    /// Build from positional readings `[action, duration_h, weight_kg, pool_length_m, pool_laps]`.
    pub fn from_readings(readings: &[f64]) -> WorkoutResult<Self> {
        let &[action, duration_h, weight_kg, pool_length_m, pool_laps] = readings else {
            return Err(WorkoutError::arity_mismatch(
                WorkoutKind::Swimming.display_name(),
                &FIELDS,
                readings.len(),
            ));
        };
        Ok(Swimming {
            base: WorkoutBase::from_readings(action, duration_h, weight_kg)?,
            pool_length_m: pool_count("pool_length_m", pool_length_m)?,
            pool_laps: pool_count("pool_laps", pool_laps)?,
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> WorkoutResult<()> {
        self.base.validate()
    }

    /// Distance covered: strokes * 1.38 m, in km
    pub fn distance(&self) -> Kilometers {
        self.base.distance(STEP_LENGTH)
    }

    /// Mean speed: pool_length * laps / 1000 / duration
    pub fn mean_speed(&self) -> KmPerHour {
        let swum = Meters(f64::from(self.pool_length_m) * f64::from(self.pool_laps));
        Kilometers::from(swum) / self.base.duration
    }

    /// Calories: (speed + 1.1) * 2 * weight
    pub fn spent_calories(&self) -> Kilocalories {
        Kilocalories((self.mean_speed().0 + CALORIE_SPEED_SHIFT) * CALORIE_WEIGHT_MULTIPLIER * self.base.weight.0)
    }
}

fn pool_count(field: &str, value: f64) -> WorkoutResult<u32> {
    let count = whole_count(field, value)?;
    u32::try_from(count)
        .map_err(|_| WorkoutError::invalid_input(field, value.to_string(), "Value is too large"))
}
