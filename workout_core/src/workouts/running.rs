//! # Running
//!
//! Running uses the default step length, so distance and mean speed come
//! straight from [`WorkoutBase`]. Calories scale with speed and weight.
//!
//! ## Example
//!
//! ```rust
//! use workout_core::workouts::running::Running;
//!
//! let run = Running::from_readings(&[15000.0, 1.0, 75.0]).unwrap();
//! assert!((run.distance().0 - 9.75).abs() < 1e-9);
//! assert!((run.spent_calories().0 - 699.75).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::base::{WorkoutBase, BASE_FIELDS, DEFAULT_STEP_LENGTH};
use super::WorkoutKind;
use crate::errors::{WorkoutError, WorkoutResult};
use crate::units::{Kilocalories, Kilometers, KmPerHour, Meters, MIN_IN_H, M_IN_KM};

/// Distance per step while running
pub const STEP_LENGTH: Meters = DEFAULT_STEP_LENGTH;

/// Multiplier applied to mean speed in the calorie formula
pub const CALORIE_SPEED_MULTIPLIER: f64 = 18.0;

/// Offset subtracted from the scaled speed in the calorie formula
pub const CALORIE_SPEED_SHIFT: f64 = 20.0;

/// Positional reading order: `[action, duration_h, weight_kg]`
pub const FIELDS: [&str; 3] = BASE_FIELDS;

/// A running workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    pub base: WorkoutBase,
}

impl Running {
    /// Build from positional readings `[action, duration_h, weight_kg]`.
    pub fn from_readings(readings: &[f64]) -> WorkoutResult<Self> {
        let &[action, duration_h, weight_kg] = readings else {
            return Err(WorkoutError::arity_mismatch(
                WorkoutKind::Running.display_name(),
                &FIELDS,
                readings.len(),
            ));
        };
        Ok(Running {
            base: WorkoutBase::from_readings(action, duration_h, weight_kg)?,
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> WorkoutResult<()> {
        self.base.validate()
    }

    /// Distance covered: action * step length, in km
    pub fn distance(&self) -> Kilometers {
        self.base.distance(STEP_LENGTH)
    }

    /// Mean speed: distance / duration
    pub fn mean_speed(&self) -> KmPerHour {
        self.base.mean_speed(STEP_LENGTH)
    }

    /// Calories: (18 * speed - 20) * weight / 1000 * duration_min
    pub fn spent_calories(&self) -> Kilocalories {
        Kilocalories(
            (CALORIE_SPEED_MULTIPLIER * self.mean_speed().0 - CALORIE_SPEED_SHIFT) * self.base.weight.0
                / M_IN_KM
                * self.base.duration.0
                * MIN_IN_H,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_golden_values() {
        let run = Running::from_readings(&[720.0, 1.0, 80.0]).unwrap();

        // 720 * 0.65 / 1000 = 0.468 km over one hour
        let distance = 720.0 * 0.65 / 1000.0;
        assert!((run.distance().0 - distance).abs() < 1e-9);
        assert!((run.mean_speed().0 - distance).abs() < 1e-9);

        let calories = (18.0 * distance - 20.0) * 80.0 / 1000.0 * 1.0 * 60.0;
        assert!((run.spent_calories().0 - calories).abs() < 1e-9);
    }

    #[test]
    fn test_running_calories() {
        let run = Running::from_readings(&[15000.0, 1.0, 75.0]).unwrap();
        // (18 * 9.75 - 20) * 75 / 1000 * 60 = 699.75
        assert!((run.spent_calories().0 - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_running_oversized_step_count() {
        let err = Running::from_readings(&[1e20, 1.0, 75.0]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("Value is too large"));
    }

    #[test]
    fn test_running_wrong_arity() {
        let err = Running::from_readings(&[15000.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::ArityMismatch {
                workout_type: "Running".to_string(),
                fields: "action, duration_h, weight_kg".to_string(),
                expected: 3,
                actual: 2,
            }
        );
        assert!(Running::from_readings(&[15000.0, 1.0, 75.0, 180.0]).is_err());
    }
}
