//! # Dispatch
//!
//! Turns a sensor package (a type code plus a flat, positionally ordered
//! list of readings) into a concrete [`Workout`].
//!
//! | Code  | Workout       | Readings                                                   |
//! |-------|---------------|------------------------------------------------------------|
//! | `SWM` | Swimming      | action, duration_h, weight_kg, pool_length_m, pool_laps    |
//! | `RUN` | Running       | action, duration_h, weight_kg                              |
//! | `WLK` | SportsWalking | action, duration_h, weight_kg, height_cm                   |
//!
//! ## Example
//!
//! ```rust
//! use workout_core::dispatch::build_workout;
//! use workout_core::WorkoutKind;
//!
//! let workout = build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
//! assert_eq!(workout.kind(), WorkoutKind::Swimming);
//!
//! assert!(build_workout("XYZ", &[1.0, 2.0, 3.0]).is_err());
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::WorkoutResult;
use crate::workouts::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// One batch entry as received from the sensors.
///
/// ## JSON Example
///
/// ```json
/// { "workout_type": "RUN", "readings": [15000, 1, 75] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Type code ("SWM", "RUN", "WLK")
    pub workout_type: String,

    /// Readings in the workout kind's field order
    pub readings: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, readings: impl Into<Vec<f64>>) -> Self {
        SensorPackage {
            workout_type: workout_type.into(),
            readings: readings.into(),
        }
    }

    pub fn build(&self) -> WorkoutResult<Workout> {
        build_workout(&self.workout_type, &self.readings)
    }
}

/// Build a workout from a type code and its positional readings.
///
/// # Returns
///
/// * `Ok(Workout)` - A validated workout of the coded kind
/// * `Err(WorkoutError::InvalidKey)` - Unknown type code; nothing is built
/// * `Err(WorkoutError::ArityMismatch)` - Reading count does not match the kind
/// * `Err(WorkoutError::InvalidInput)` - A reading is out of range
pub fn build_workout(type_code: &str, readings: &[f64]) -> WorkoutResult<Workout> {
    let kind = WorkoutKind::from_code(type_code)?;

    let workout = match kind {
        WorkoutKind::Swimming => Workout::Swimming(Swimming::from_readings(readings)?),
        WorkoutKind::Running => Workout::Running(Running::from_readings(readings)?),
        WorkoutKind::SportsWalking => Workout::SportsWalking(SportsWalking::from_readings(readings)?),
    };

    debug!(code = type_code, kind = %kind, readings = readings.len(), "built workout");
    Ok(workout)
}

/// The built-in batch the CLI reports on.
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse a JSON array of sensor packages.
pub fn packages_from_json(json: &str) -> WorkoutResult<Vec<SensorPackage>> {
    Ok(serde_json::from_str(json)?)
}

/// Build the package's workout and render its summary line.
pub fn process_package(package: &SensorPackage) -> WorkoutResult<String> {
    let report = package.build()?.summary_report()?;
    Ok(report.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WorkoutError;

    #[test]
    fn test_build_each_kind() {
        assert_eq!(build_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap().kind(), WorkoutKind::Running);
        assert_eq!(
            build_workout("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap().kind(),
            WorkoutKind::SportsWalking
        );
        assert_eq!(
            build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap().kind(),
            WorkoutKind::Swimming
        );
    }

    #[test]
    fn test_invalid_key() {
        let err = build_workout("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, WorkoutError::InvalidKey { code: "XYZ".to_string() });
    }

    #[test]
    fn test_running_package() {
        let workout = build_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert!((workout.distance().0 - 9.75).abs() < 1e-9);
        assert!((workout.mean_speed().0 - 9.75).abs() < 1e-9);
        assert!((workout.spent_calories().0 - 699.75).abs() < 1e-9);
    }

    #[test]
    fn test_wrong_arity_is_reported_not_truncated() {
        let err = build_workout("RUN", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap_err();
        assert_eq!(err.error_code(), "ARITY_MISMATCH");
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let err = build_workout("SWM", &[720.0, 0.0, 80.0, 25.0, 40.0]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_default_batch_lines() {
        let lines: Vec<String> = default_packages()
            .iter()
            .map(process_package)
            .collect::<WorkoutResult<_>>()
            .unwrap();

        assert_eq!(
            lines,
            vec![
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
                 Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
                    .to_string(),
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
                 Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
                    .to_string(),
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
                 Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_packages_from_json() {
        let packages = packages_from_json(r#"[{"workout_type": "RUN", "readings": [15000, 1, 75]}]"#).unwrap();
        assert_eq!(packages, vec![SensorPackage::new("RUN", [15000.0, 1.0, 75.0])]);
    }

    #[test]
    fn test_packages_from_bad_json() {
        let err = packages_from_json("[{\"workout_type\": \"RUN\"").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
