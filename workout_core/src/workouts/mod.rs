//! # Workouts
//!
//! The closed set of workout kinds. Each kind lives in its own module and
//! follows the same pattern:
//!
//! - `STEP_LENGTH` and calorie coefficient constants for the kind
//! - `FIELDS` - positional reading order
//! - `from_readings(&[f64])` - validating constructor
//! - `distance()`, `mean_speed()`, `spent_calories()` - pure computations
//!
//! ## Available Workouts
//!
//! - [`running`] - Running (`RUN`)
//! - [`walking`] - Sports walking (`WLK`)
//! - [`swimming`] - Swimming (`SWM`)

pub mod base;
pub mod running;
pub mod swimming;
pub mod walking;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{WorkoutError, WorkoutResult};
use crate::report::SummaryReport;
use crate::units::{Hours, Kilocalories, Kilometers, KmPerHour};

// Re-export commonly used types
pub use base::WorkoutBase;
pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

/// Identifies a workout kind by its sensor type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// All kinds, in type code lookup order
    pub const ALL: [WorkoutKind; 3] = [WorkoutKind::Swimming, WorkoutKind::Running, WorkoutKind::SportsWalking];

    /// Sensor type code ("RUN", "WLK", "SWM")
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown in the summary line
    pub fn display_name(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Positional reading order expected by this kind
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &running::FIELDS,
            WorkoutKind::SportsWalking => &walking::FIELDS,
            WorkoutKind::Swimming => &swimming::FIELDS,
        }
    }

    /// Look up a kind by its type code.
    ///
    /// ```rust
    /// use workout_core::workouts::WorkoutKind;
    ///
    /// assert_eq!(WorkoutKind::from_code("SWM").unwrap(), WorkoutKind::Swimming);
    /// assert!(WorkoutKind::from_code("XYZ").is_err());
    /// ```
    pub fn from_code(code: &str) -> WorkoutResult<Self> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::invalid_key(code))
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutKind::from_code(s)
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Enum wrapper for all workout kinds.
///
/// Every variant carries a calorie formula, so there is no generic workout
/// that could be asked for calories it cannot compute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Workout kind of this variant
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::SportsWalking(_) => WorkoutKind::SportsWalking,
            Workout::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    /// Shared raw inputs
    pub fn base(&self) -> &WorkoutBase {
        match self {
            Workout::Running(w) => &w.base,
            Workout::SportsWalking(w) => &w.base,
            Workout::Swimming(w) => &w.base,
        }
    }

    /// Elapsed time
    pub fn duration(&self) -> Hours {
        self.base().duration
    }

    /// Validate input parameters.
    pub fn validate(&self) -> WorkoutResult<()> {
        match self {
            Workout::Running(w) => w.validate(),
            Workout::SportsWalking(w) => w.validate(),
            Workout::Swimming(w) => w.validate(),
        }
    }

    /// Distance covered, in km
    pub fn distance(&self) -> Kilometers {
        match self {
            Workout::Running(w) => w.distance(),
            Workout::SportsWalking(w) => w.distance(),
            Workout::Swimming(w) => w.distance(),
        }
    }

    /// Mean speed, in km/h
    pub fn mean_speed(&self) -> KmPerHour {
        match self {
            Workout::Running(w) => w.mean_speed(),
            Workout::SportsWalking(w) => w.mean_speed(),
            Workout::Swimming(w) => w.mean_speed(),
        }
    }

    /// Calories burned, per the kind's formula
    pub fn spent_calories(&self) -> Kilocalories {
        match self {
            Workout::Running(w) => w.spent_calories(),
            Workout::SportsWalking(w) => w.spent_calories(),
            Workout::Swimming(w) => w.spent_calories(),
        }
    }

    /// Compute the summary report.
    ///
    /// Re-validates first, since a `Workout` may have been built field by
    /// field or deserialized rather than going through `from_readings`.
    pub fn summary_report(&self) -> WorkoutResult<SummaryReport> {
        self.validate()?;

        let report = SummaryReport {
            workout_type: self.kind().display_name().to_string(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        };
        trace!(?report, "computed summary report");
        Ok(report)
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
