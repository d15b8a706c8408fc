//! # Workout Base
//!
//! The part every workout shares: the action count, the elapsed time and the
//! athlete's weight, plus the step-length distance rule built on top of them.
//!
//! `WorkoutBase` has no calorie formula. Only the concrete kinds in the
//! sibling modules define one, so an "unknown" workout can never be asked
//! for its calories.

use serde::{Deserialize, Serialize};

use crate::errors::{WorkoutError, WorkoutResult};
use crate::units::{Hours, Kilograms, Kilometers, KmPerHour, Meters};

/// Distance covered by one action (step) unless a workout kind overrides it
pub const DEFAULT_STEP_LENGTH: Meters = Meters(0.65);

/// Positional reading order shared by every workout kind
pub const BASE_FIELDS: [&str; 3] = ["action", "duration_h", "weight_kg"];

/// Raw inputs common to all workouts.
///
/// ## JSON Example
///
/// ```json
/// {
///   "action": 15000,
///   "duration": 1.0,
///   "weight": 75.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutBase {
    /// Steps or strokes recorded by the sensor
    pub action: u64,

    /// Elapsed time
    pub duration: Hours,

    /// Athlete body mass
    pub weight: Kilograms,
}

impl WorkoutBase {
    /// Build from the first three positional readings.
    ///
    /// Callers check the reading count; this only checks each value.
    pub fn from_readings(action: f64, duration_h: f64, weight_kg: f64) -> WorkoutResult<Self> {
        let base = WorkoutBase {
            action: whole_count("action", action)?,
            duration: Hours(duration_h),
            weight: Kilograms(weight_kg),
        };
        base.validate()?;
        Ok(base)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> WorkoutResult<()> {
        if !self.duration.0.is_finite() || self.duration.0 <= 0.0 {
            return Err(WorkoutError::invalid_input(
                "duration_h",
                self.duration.0.to_string(),
                "Duration must be positive",
            ));
        }
        if !self.weight.0.is_finite() || self.weight.0 < 0.0 {
            return Err(WorkoutError::invalid_input(
                "weight_kg",
                self.weight.0.to_string(),
                "Weight cannot be negative",
            ));
        }
        Ok(())
    }

    /// Distance covered: action * step length, in km
    pub fn distance(&self, step_length: Meters) -> Kilometers {
        (step_length * self.action as f64).into()
    }

    /// Mean speed: distance / duration
    pub fn mean_speed(&self, step_length: Meters) -> KmPerHour {
        self.distance(step_length) / self.duration
    }
}

/// Largest whole number an f64 reading carries exactly (2^53)
const MAX_WHOLE_READING: f64 = 9_007_199_254_740_992.0;

/// Convert a reading that must be a non-negative whole number.
pub(crate) fn whole_count(field: &str, value: f64) -> WorkoutResult<u64> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(WorkoutError::invalid_input(
            field,
            value.to_string(),
            "Must be a non-negative whole number",
        ));
    }
    if value > MAX_WHOLE_READING {
        return Err(WorkoutError::invalid_input(field, value.to_string(), "Value is too large"));
    }
    Ok(value as u64)
}
