//! # Sports Walking
//!
//! Walking shares the running step length but its calorie formula also
//! depends on the athlete's height.
//!
//! The speed/height term uses remainder-based floor division (see
//! [`floor_div`]), so a quotient that rounds up to a whole number still
//! floors to the value below it. For ordinary walking speeds the term is
//! zero, which leaves only the weight term.

use serde::{Deserialize, Serialize};

use super::base::{WorkoutBase, DEFAULT_STEP_LENGTH};
use super::WorkoutKind;
use crate::errors::{WorkoutError, WorkoutResult};
use crate::units::{Centimeters, Kilocalories, Kilometers, KmPerHour, Meters, MIN_IN_H};

/// Distance per step while walking
pub const STEP_LENGTH: Meters = DEFAULT_STEP_LENGTH;

/// Weight term multiplier
pub const CALORIE_WEIGHT_MULTIPLIER: f64 = 0.035;

/// Speed/height term multiplier
pub const CALORIE_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Positional reading order: `[action, duration_h, weight_kg, height_cm]`
pub const FIELDS: [&str; 4] = ["action", "duration_h", "weight_kg", "height_cm"];

/// A sports walking workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    pub base: WorkoutBase,

    /// Athlete height
    pub height: Centimeters,
}

impl SportsWalking {
    /// Build from positional readings `[action, duration_h, weight_kg, height_cm]`.
    pub fn from_readings(readings: &[f64]) -> WorkoutResult<Self> {
        let &[action, duration_h, weight_kg, height_cm] = readings else {
            return Err(WorkoutError::arity_mismatch(
                WorkoutKind::SportsWalking.display_name(),
                &FIELDS,
                readings.len(),
            ));
        };
        let walk = SportsWalking {
            base: WorkoutBase::from_readings(action, duration_h, weight_kg)?,
            height: Centimeters(height_cm),
        };
        walk.validate()?;
        Ok(walk)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> WorkoutResult<()> {
        self.base.validate()?;
        if !self.height.0.is_finite() || self.height.0 <= 0.0 {
            return Err(WorkoutError::invalid_input(
                "height_cm",
                self.height.0.to_string(),
                "Height must be positive",
            ));
        }
        Ok(())
    }

    /// Distance covered: action * step length, in km
    pub fn distance(&self) -> Kilometers {
        self.base.distance(STEP_LENGTH)
    }

    /// Mean speed: distance / duration
    pub fn mean_speed(&self) -> KmPerHour {
        self.base.mean_speed(STEP_LENGTH)
    }

    /// Calories: (0.035 * weight + floor_div(speed², height) * 0.029 * weight) * duration_min
    pub fn spent_calories(&self) -> Kilocalories {
        let weight = self.base.weight.0;
        let speed_height = floor_div(self.mean_speed().0.powi(2), self.height.0);
        Kilocalories(
            (CALORIE_WEIGHT_MULTIPLIER * weight + speed_height * CALORIE_SPEED_HEIGHT_MULTIPLIER * weight)
                * self.base.duration.0
                * MIN_IN_H,
        )
    }
}

/// Floor division computed from the remainder, `(a - a % b) / b`.
///
/// `(a / b).floor()` differs when `a / b` rounds up to a whole number:
/// `1.0 / 0.1` rounds to `10.0`, but `1.0 % 0.1` is just under `0.1`,
/// so the floor quotient is `9.0`.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floor = div.floor();
    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walking_distance() {
        let walk = SportsWalking::from_readings(&[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert!((walk.distance().0 - 5.85).abs() < 1e-9);
        assert!((walk.mean_speed().0 - 5.85).abs() < 1e-9);
    }

    #[test]
    fn test_walking_calories_floor_term_zero() {
        let walk = SportsWalking::from_readings(&[9000.0, 1.0, 75.0, 180.0]).unwrap();
        // 5.85² / 180 = 0.19 -> floor 0, so only 0.035 * 75 * 60 = 157.5 remains
        assert!((walk.spent_calories().0 - 157.5).abs() < 1e-9);
    }

    #[test]
    fn test_walking_calories_floor_term_nonzero() {
        // 20000 steps in 0.5 h -> 13 km / 0.5 h = 26 km/h; 676 / 100 = 6.76 -> 6
        let walk = SportsWalking::from_readings(&[20000.0, 0.5, 60.0, 100.0]).unwrap();
        let expected = (0.035 * 60.0 + 6.0 * 0.029 * 60.0) * 0.5 * 60.0;
        assert!((walk.spent_calories().0 - expected).abs() < 1e-9);
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(1.0, 0.1), 9.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(676.0, 100.0), 6.0);
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
    }

    #[test]
    fn test_walking_calories_quotient_rounding_up() {
        // 1000 steps * 0.65 m in 0.65 h -> 1 km/h; 1.0 floor-divided by 0.1 is 9, not 10
        let walk = SportsWalking::from_readings(&[1000.0, 0.65, 75.0, 0.1]).unwrap();
        assert!((walk.mean_speed().0 - 1.0).abs() < 1e-9);
        // (0.035 * 75 + 9 * 0.029 * 75) * 0.65 * 60 = 865.8
        assert!((walk.spent_calories().0 - 865.8).abs() < 1e-6);
    }

    #[test]
    fn test_zero_height_rejected() {
        let err = SportsWalking::from_readings(&[9000.0, 1.0, 75.0, 0.0]).unwrap_err();
        assert!(err.to_string().contains("height_cm"));
    }

    #[test]
    fn test_walking_wrong_arity() {
        let err = SportsWalking::from_readings(&[9000.0, 1.0, 75.0]).unwrap_err();
        assert_eq!(err.error_code(), "ARITY_MISMATCH");
    }
}
