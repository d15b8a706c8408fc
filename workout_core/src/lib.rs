//! # workout_core - Workout Metrics Engine
//!
//! `workout_core` turns raw workout sensor readings into derived metrics
//! (distance, mean speed, calories burned) and renders a one-line summary
//! for each workout. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: A workout is built once from its readings, queried, and dropped
//! - **Closed set**: Only concrete workout kinds can be constructed, so every
//!   constructible workout has a calorie formula
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use workout_core::dispatch::build_workout;
//!
//! let workout = build_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap();
//! let line = workout.summary_report().unwrap().render();
//! assert!(line.starts_with("Тип тренировки: Running;"));
//! ```
//!
//! ## Modules
//!
//! - [`workouts`] - Workout kinds and their distance/speed/calorie formulas
//! - [`dispatch`] - Type code + reading list to workout, sensor package batches
//! - [`report`] - Summary report and its text rendering
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod dispatch;
pub mod errors;
pub mod report;
pub mod units;
pub mod workouts;

// Re-export commonly used types at crate root for convenience
pub use dispatch::{build_workout, default_packages, SensorPackage};
pub use errors::{WorkoutError, WorkoutResult};
pub use report::SummaryReport;
pub use workouts::{Workout, WorkoutKind};
