//! # Error Types
//!
//! Structured error types for beam_core. Every failure carries enough context
//! for a caller (UI, report layer, script) to tell the user which input was
//! wrong and why, and a stable code for programmatic handling.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_m: f64) -> CalcResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "length_m",
//!             length_m.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_length(-1.0).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Calculations are all-or-nothing: any of these errors means no partial
/// results were produced.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Cross-section dimensions are non-positive or inconsistent
    #[error("Invalid geometry for {shape} section: '{dimension}' = {value} - {reason}")]
    InvalidGeometry {
        shape: String,
        dimension: String,
        value: String,
        reason: String,
    },

    /// Support positions coincide, are inverted, or lie off the beam
    #[error("Invalid supports: left = {left}, right = {right} - {reason}")]
    InvalidSupports {
        left: String,
        right: String,
        reason: String,
    },

    /// Load position outside the beam, or a distributed load ending before it starts
    #[error("Invalid load position: {position} - {reason}")]
    InvalidLoadPosition { position: String, reason: String },

    /// Safety factor requested but the governing stress is zero
    #[error("Safety factor undefined: maximum normal stress is {stress_mpa} MPa")]
    UndefinedSafetyFactor { stress_mpa: String },

    /// Material code not found in the standard library
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// File I/O error (request files read by front ends)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        shape: impl Into<String>,
        dimension: impl Into<String>,
        value: f64,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidGeometry {
            shape: shape.into(),
            dimension: dimension.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSupports error
    pub fn invalid_supports(left: f64, right: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidSupports {
            left: left.to_string(),
            right: right.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidLoadPosition error
    pub fn invalid_load_position(position: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidLoadPosition {
            position: position.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if the error stems from user-editable inputs (as opposed to I/O)
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            CalcError::FileError { .. } | CalcError::SerializationError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidSupports { .. } => "INVALID_SUPPORTS",
            CalcError::InvalidLoadPosition { .. } => "INVALID_LOAD_POSITION",
            CalcError::UndefinedSafetyFactor { .. } => "UNDEFINED_SAFETY_FACTOR",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

/// Reject NaN and infinities before they reach any formula.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_supports(0.5, 0.5, "Supports coincide");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidSupports\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_geometry("Rectangular", "width", 0.0, "must be positive").error_code(),
            "INVALID_GEOMETRY"
        );
        assert_eq!(
            CalcError::invalid_load_position(2.0, "beyond end").error_code(),
            "INVALID_LOAD_POSITION"
        );
        assert_eq!(
            CalcError::UndefinedSafetyFactor { stress_mpa: "0".into() }.error_code(),
            "UNDEFINED_SAFETY_FACTOR"
        );
        assert_eq!(CalcError::material_not_found("unobtainium").error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::invalid_supports(1.0, 0.0, "inverted").is_input_error());
        assert!(!CalcError::file_error("open", "req.json", "missing").is_input_error());
    }

    #[test]
    fn test_require_finite() {
        assert!(require_finite("x", 1.0).is_ok());
        assert_eq!(require_finite("x", f64::NAN).unwrap_err().error_code(), "INVALID_INPUT");
        assert!(require_finite("x", f64::INFINITY).is_err());
    }
}
