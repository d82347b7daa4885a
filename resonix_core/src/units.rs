//! # Unit Types
//!
//! Type-safe wrappers for the units used in resonance testing. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The resonance formulas use a small, fixed set of SI units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! All formulas operate in base SI units; the wrappers exist for display
//! conversion and API clarity:
//! - Length: meters (m), millimeters (mm)
//! - Mass: kilograms (kg), grams (g)
//! - Frequency: hertz (Hz), kilohertz (kHz)
//! - Modulus: pascals (Pa), megapascals (MPa), gigapascals (GPa)
//! - Density: kilograms per cubic meter (kg/m³)
//!
//! ## Example
//!
//! ```rust
//! use resonix_core::units::{Gigapascals, Meters, Millimeters, Pascals};
//!
//! let length = Meters(0.4);
//! let length_mm: Millimeters = length.into();
//! assert_eq!(length_mm.0, 400.0);
//!
//! let modulus = Pascals(9.8304e10);
//! let display: Gigapascals = modulus.into();
//! assert!((display.0 - 98.304).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

impl From<Kilograms> for Grams {
    fn from(kg: Kilograms) -> Self {
        Grams(kg.0 * 1000.0)
    }
}

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / 1000.0)
    }
}

// ============================================================================
// Frequency Units
// ============================================================================

/// Frequency in hertz
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hertz(pub f64);

/// Frequency in kilohertz
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilohertz(pub f64);

impl From<Hertz> for Kilohertz {
    fn from(hz: Hertz) -> Self {
        Kilohertz(hz.0 / 1000.0)
    }
}

impl From<Kilohertz> for Hertz {
    fn from(khz: Kilohertz) -> Self {
        Hertz(khz.0 * 1000.0)
    }
}

// ============================================================================
// Modulus (Stress) Units
// ============================================================================

/// Stress/modulus in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress/modulus in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Stress/modulus in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1.0e6)
    }
}

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1.0e6)
    }
}

impl From<Pascals> for Gigapascals {
    fn from(pa: Pascals) -> Self {
        Gigapascals(pa.0 / 1.0e9)
    }
}

impl From<Gigapascals> for Pascals {
    fn from(gpa: Gigapascals) -> Self {
        Pascals(gpa.0 * 1.0e9)
    }
}

impl From<Gigapascals> for Megapascals {
    fn from(gpa: Gigapascals) -> Self {
        Megapascals(gpa.0 * 1000.0)
    }
}

impl From<Megapascals> for Gigapascals {
    fn from(mpa: Megapascals) -> Self {
        Gigapascals(mpa.0 / 1000.0)
    }
}

// ============================================================================
// Density Units
// ============================================================================

/// Density in kilograms per cubic meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilogramsPerCubicMeter(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Grams);
impl_arithmetic!(Hertz);
impl_arithmetic!(Kilohertz);
impl_arithmetic!(Pascals);
impl_arithmetic!(Megapascals);
impl_arithmetic!(Gigapascals);
impl_arithmetic!(KilogramsPerCubicMeter);
