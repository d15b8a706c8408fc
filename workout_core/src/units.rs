//! # Unit Types
//!
//! Type-safe wrappers for the physical quantities a workout deals with.
//! They stay lightweight (just f64 wrappers) and serialize as bare numbers.
//!
//! ## Metric Units
//!
//! - Time: hours (h)
//! - Mass: kilograms (kg)
//! - Length: centimeters (cm), meters (m), kilometers (km)
//! - Speed: kilometers per hour (km/h)
//! - Energy: kilocalories (kcal)
//!
//! ## Example
//!
//! ```rust
//! use workout_core::units::{Kilometers, Meters};
//!
//! let pool = Meters(25.0) * 40.0;
//! let km: Kilometers = pool.into();
//! assert_eq!(km.0, 1.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// Meters in one kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in one hour
pub const MIN_IN_H: f64 = 60.0;

// ============================================================================
// Time and Mass
// ============================================================================

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

/// Body mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters (body height)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

impl From<Meters> for Kilometers {
    fn from(m: Meters) -> Self {
        Kilometers(m.0 / M_IN_KM)
    }
}

impl Div<Hours> for Kilometers {
    type Output = KmPerHour;
    fn div(self, rhs: Hours) -> Self::Output {
        KmPerHour(self.0 / rhs.0)
    }
}

// ============================================================================
// Speed and Energy
// ============================================================================

/// Speed in kilometers per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KmPerHour(pub f64);

/// Energy in kilocalories
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilocalories(pub f64);

// ============================================================================
// Scaling
// ============================================================================

impl Mul<f64> for Meters {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Meters(self.0 * rhs)
    }
}
