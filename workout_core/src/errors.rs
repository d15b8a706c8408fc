//! # Error Types
//!
//! Structured error types for workout_core. Every failure carries enough
//! context to tell which reading or which type code was at fault.
//!
//! ## Example
//!
//! ```rust
//! use workout_core::errors::{WorkoutError, WorkoutResult};
//!
//! fn validate_duration(duration_h: f64) -> WorkoutResult<()> {
//!     if duration_h <= 0.0 {
//!         return Err(WorkoutError::invalid_input(
//!             "duration_h",
//!             duration_h.to_string(),
//!             "Duration must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_duration(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for workout_core operations
pub type WorkoutResult<T> = Result<T, WorkoutError>;

/// Structured error type for workout operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum WorkoutError {
    /// Workout type code is not one of the recognized codes
    #[error("Unknown workout type code: '{code}'")]
    InvalidKey { code: String },

    /// Reading list length does not match the workout's field list
    #[error("Wrong number of readings for {workout_type}: expected {expected} ({fields}), got {actual}")]
    ArityMismatch {
        workout_type: String,
        fields: String,
        expected: usize,
        actual: usize,
    },

    /// A reading is outside the range its formula accepts
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Sensor package batch could not be parsed
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl WorkoutError {
    /// Create an InvalidKey error
    pub fn invalid_key(code: impl Into<String>) -> Self {
        WorkoutError::InvalidKey { code: code.into() }
    }

    /// Create an ArityMismatch error
    pub fn arity_mismatch(
        workout_type: impl Into<String>,
        fields: &[&str],
        actual: usize,
    ) -> Self {
        WorkoutError::ArityMismatch {
            workout_type: workout_type.into(),
            fields: fields.join(", "),
            expected: fields.len(),
            actual,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        WorkoutError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            WorkoutError::InvalidKey { .. } => "INVALID_KEY",
            WorkoutError::ArityMismatch { .. } => "ARITY_MISMATCH",
            WorkoutError::InvalidInput { .. } => "INVALID_INPUT",
            WorkoutError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for WorkoutError {
    fn from(err: serde_json::Error) -> Self {
        WorkoutError::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = WorkoutError::invalid_input("duration_h", "0", "Duration must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: WorkoutError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(WorkoutError::invalid_key("XYZ").error_code(), "INVALID_KEY");
        assert_eq!(
            WorkoutError::arity_mismatch("Running", &["action", "duration_h", "weight_kg"], 2).error_code(),
            "ARITY_MISMATCH"
        );
    }

    #[test]
    fn test_arity_message_lists_fields() {
        let error = WorkoutError::arity_mismatch("Running", &["action", "duration_h", "weight_kg"], 5);
        assert_eq!(
            error.to_string(),
            "Wrong number of readings for Running: expected 3 (action, duration_h, weight_kg), got 5"
        );
    }
}
