//! # Summary Report
//!
//! The five derived values of one workout, and their one-line rendering.
//! Field order and labels of the rendered line are fixed:
//!
//! ```text
//! Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::WorkoutResult;
use crate::units::{Hours, Kilocalories, Kilometers, KmPerHour};

/// Derived metrics for one workout.
///
/// ## JSON Example
///
/// ```json
/// {
///   "workout_type": "Swimming",
///   "duration": 1.0,
///   "distance": 0.9936,
///   "speed": 1.0,
///   "calories": 336.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Display name of the workout kind
    pub workout_type: String,
    pub duration: Hours,
    pub distance: Kilometers,
    /// Mean speed
    pub speed: KmPerHour,
    /// Calories burned
    pub calories: Kilocalories,
}

impl SummaryReport {
    /// Render the summary line, every number to 3 decimal places.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Pretty JSON form of the report
    pub fn to_json(&self) -> WorkoutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.workout_type, self.duration.0, self.distance.0, self.speed.0, self.calories.0,
        )
    }
}
