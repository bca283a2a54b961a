//! # Unit Types
//!
//! Type-safe wrappers for shop-floor units. These provide compile-time safety
//! against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Gasket quoting uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## US Customary Units
//!
//! Part dimensions and nesting computations are in inches; billing converts
//! to feet (roll footage) and square feet (stocked sheet area):
//! - Length: inches (in), feet (ft)
//! - Area: square inches (in²), square feet (ft²)
//!
//! ## Example
//!
//! ```rust
//! use quote_core::units::{Feet, Inches};
//!
//! let run = Inches(30.0);
//! let run_ft: Feet = run.into();
//! assert_eq!(run_ft.0, 2.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl From<SqFt> for SqIn {
    fn from(sqft: SqFt) -> Self {
        SqIn(sqft.0 * 144.0)
    }
}

impl From<SqIn> for SqFt {
    fn from(sqin: SqIn) -> Self {
        SqFt(sqin.0 / 144.0)
    }
}

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

impl_arithmetic!(Inches);
impl_arithmetic!(Feet);
impl_arithmetic!(SqIn);
impl_arithmetic!(SqFt);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_inches() {
        let ft = Feet(3.0);
        let inches: Inches = ft.into();
        assert_eq!(inches.0, 36.0);
    }

    #[test]
    fn test_sqin_to_sqft() {
        let area = SqIn(36.0 * 36.0);
        let sqft: SqFt = area.into();
        assert_eq!(sqft.0, 9.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Inches(10.0);
        let b = Inches(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let inches = Inches(12.5);
        let json = serde_json::to_string(&inches).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Inches = serde_json::from_str(&json).unwrap();
        assert_eq!(inches, roundtrip);
    }
}
