//! # Materials
//!
//! Material properties used by the stress and self-weight calculations.
//!
//! A request either names a [`StandardMaterial`] from the built-in library or
//! supplies custom values (for a grade not in the library, or to override a
//! yield strength from a mill certificate).
//!
//! ## JSON Serialization
//!
//! ```json
//! { "type": "Standard", "grade": "S355" }
//! { "type": "Custom", "yield_strength_mpa": 300.0, "elastic_modulus_gpa": 205.0, "density_kg_m3": 7850.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::{MaterialSpec, StandardMaterial};
//!
//! let spec = MaterialSpec::Standard { grade: StandardMaterial::S355 };
//! let material = spec.resolve().unwrap();
//! assert_eq!(material.yield_strength_mpa, 355.0);
//! ```

pub mod library;

pub use library::StandardMaterial;

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcError, CalcResult};
use crate::units::{Gigapascals, Megapascals};

/// Resolved material properties.
///
/// Elastic modulus is carried for completeness; current stress outputs do
/// not use it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Yield strength fy (MPa)
    pub yield_strength_mpa: f64,
    /// Modulus of elasticity E (GPa)
    pub elastic_modulus_gpa: f64,
    /// Mass density ρ (kg/m³)
    pub density_kg_m3: f64,
}

impl Material {
    /// Validate that all properties are finite and positive.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("yield_strength_mpa", self.yield_strength_mpa),
            ("elastic_modulus_gpa", self.elastic_modulus_gpa),
            ("density_kg_m3", self.density_kg_m3),
        ] {
            require_finite(field, value)?;
            if value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Material property must be positive"));
            }
        }
        if self.yield_strength_mpa >= self.elastic_modulus_mpa() {
            return Err(CalcError::invalid_input(
                "yield_strength_mpa",
                self.yield_strength_mpa.to_string(),
                "Yield strength must be below the elastic modulus (check GPa vs MPa)",
            ));
        }
        Ok(())
    }

    /// E in MPa, the unit of the stresses
    pub fn elastic_modulus_mpa(&self) -> f64 {
        Megapascals::from(Gigapascals(self.elastic_modulus_gpa)).value()
    }
}

/// Material selection as it appears in a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MaterialSpec {
    /// A grade from the built-in library
    Standard { grade: StandardMaterial },
    /// User-supplied properties
    Custom {
        yield_strength_mpa: f64,
        elastic_modulus_gpa: f64,
        density_kg_m3: f64,
    },
}

impl MaterialSpec {
    /// Look up or assemble the material properties, validating custom values.
    pub fn resolve(&self) -> CalcResult<Material> {
        let material = match *self {
            MaterialSpec::Standard { grade } => grade.properties(),
            MaterialSpec::Custom {
                yield_strength_mpa,
                elastic_modulus_gpa,
                density_kg_m3,
            } => Material {
                yield_strength_mpa,
                elastic_modulus_gpa,
                density_kg_m3,
            },
        };
        material.validate()?;
        Ok(material)
    }

    /// Short label for summaries
    pub fn label(&self) -> String {
        match self {
            MaterialSpec::Standard { grade } => grade.display_name().to_string(),
            MaterialSpec::Custom { yield_strength_mpa, .. } => format!("Custom (fy = {} MPa)", yield_strength_mpa),
        }
    }
}

impl Default for MaterialSpec {
    fn default() -> Self {
        MaterialSpec::Standard {
            grade: StandardMaterial::S235,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulus_entered_in_mpa_rejected() {
        let material = Material {
            yield_strength_mpa: 235.0,
            elastic_modulus_gpa: 0.2,
            density_kg_m3: 7850.0,
        };
        assert_eq!(material.validate().unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(StandardMaterial::S235.properties().elastic_modulus_mpa(), 210_000.0);
    }

    #[test]
    fn test_standard_resolves() {
        let m = MaterialSpec::Standard { grade: StandardMaterial::Aluminum6061T6 }.resolve().unwrap();
        assert_eq!(m.density_kg_m3, 2700.0);
    }

    #[test]
    fn test_custom_resolves() {
        let spec = MaterialSpec::Custom {
            yield_strength_mpa: 300.0,
            elastic_modulus_gpa: 205.0,
            density_kg_m3: 7850.0,
        };
        assert_eq!(spec.resolve().unwrap().yield_strength_mpa, 300.0);
    }

    #[test]
    fn test_custom_rejects_zero_yield() {
        let spec = MaterialSpec::Custom {
            yield_strength_mpa: 0.0,
            elastic_modulus_gpa: 205.0,
            density_kg_m3: 7850.0,
        };
        assert_eq!(spec.resolve().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_spec_json() {
        let json = r#"{ "type": "Standard", "grade": "S355" }"#;
        let spec: MaterialSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec, MaterialSpec::Standard { grade: StandardMaterial::S355 });

        let json = r#"{ "type": "Custom", "yield_strength_mpa": 250.0, "elastic_modulus_gpa": 200.0, "density_kg_m3": 7850.0 }"#;
        let spec: MaterialSpec = serde_json::from_str(json).unwrap();
        assert!(matches!(spec, MaterialSpec::Custom { .. }));
    }
}
