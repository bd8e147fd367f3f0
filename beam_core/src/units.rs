//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These give compile-time safety
//! against unit confusion at the request/result boundary while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Unit System
//!
//! The engine computes in base SI internally:
//! - Length: metres (m)
//! - Force: newtons (N), distributed load: newtons per metre (N/m)
//! - Moment: newton-metres (N·m)
//! - Stress: pascals (Pa)
//!
//! Requests and results use the units engineers type and read:
//! - Length: millimetres (mm), distributed load: N/mm
//! - Moment: newton-millimetres (N·mm)
//! - Stress: megapascals (MPa), modulus: gigapascals (GPa)
//! - Section properties: mm², mm⁴, mm³
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{Meters, Millimeters, Megapascals, Pascals};
//!
//! let span: Meters = Millimeters(1500.0).into();
//! assert_eq!(span.0, 1.5);
//!
//! let stress: Megapascals = Pascals(250.0e6).into();
//! assert_eq!(stress.0, 250.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Distributed Load Units
// ============================================================================

/// Distributed load in newtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonsPerMeter(pub f64);

/// Distributed load in newtons per millimetre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonsPerMillimeter(pub f64);

impl From<NewtonsPerMillimeter> for NewtonsPerMeter {
    fn from(n_mm: NewtonsPerMillimeter) -> Self {
        NewtonsPerMeter(n_mm.0 * 1000.0)
    }
}

impl From<NewtonsPerMeter> for NewtonsPerMillimeter {
    fn from(n_m: NewtonsPerMeter) -> Self {
        NewtonsPerMillimeter(n_m.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

impl From<NewtonMeters> for NewtonMillimeters {
    fn from(nm: NewtonMeters) -> Self {
        NewtonMillimeters(nm.0 * 1000.0)
    }
}

impl From<NewtonMillimeters> for NewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        NewtonMeters(nmm.0 / 1000.0)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Stress in gigapascals (elastic moduli)
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

impl From<Gigapascals> for Megapascals {
    fn from(gpa: Gigapascals) -> Self {
        Megapascals(gpa.0 * 1000.0)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Second moment of area in m⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M4(pub f64);

/// Second moment of area in mm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm4(pub f64);

/// Section modulus in m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M3(pub f64);

/// Section modulus in mm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm3(pub f64);

impl From<SqM> for SqMm {
    fn from(a: SqM) -> Self {
        SqMm(a.0 * 1.0e6)
    }
}

impl From<M4> for Mm4 {
    fn from(i: M4) -> Self {
        Mm4(i.0 * 1.0e12)
    }
}

impl From<M3> for Mm3 {
    fn from(z: M3) -> Self {
        Mm3(z.0 * 1.0e9)
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
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(NewtonsPerMeter);
impl_arithmetic!(NewtonsPerMillimeter);
impl_arithmetic!(NewtonMeters);
impl_arithmetic!(NewtonMillimeters);
impl_arithmetic!(Pascals);
impl_arithmetic!(Megapascals);
impl_arithmetic!(Gigapascals);
impl_arithmetic!(SqM);
impl_arithmetic!(SqMm);
impl_arithmetic!(M4);
impl_arithmetic!(Mm4);
impl_arithmetic!(M3);
impl_arithmetic!(Mm3);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mm_to_m() {
        let m: Meters = Millimeters(1000.0).into();
        assert_eq!(m.0, 1.0);
        let mm: Millimeters = Meters(0.25).into();
        assert_eq!(mm.0, 250.0);
    }

    #[test]
    fn test_distributed_load_conversion() {
        let w: NewtonsPerMeter = NewtonsPerMillimeter(10.0).into();
        assert_eq!(w.0, 10_000.0);
    }

    #[test]
    fn test_moment_conversion() {
        let m: NewtonMillimeters = NewtonMeters(250.0).into();
        assert_eq!(m.0, 250_000.0);
    }

    #[test]
    fn test_section_property_conversion() {
        let i: Mm4 = M4(6.666_666_7e-5).into();
        assert_relative_eq!(i.0, 6.666_666_7e7, max_relative = 1e-9);
        let z: Mm3 = M3(6.666_666_7e-4).into();
        assert_relative_eq!(z.0, 6.666_666_7e5, max_relative = 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).value(), 5.0);
    }

    #[test]
    fn test_serialization() {
        let len = Millimeters(12.5);
        let json = serde_json::to_string(&len).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(len, roundtrip);
    }
}
