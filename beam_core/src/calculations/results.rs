//! # Results Aggregation
//!
//! Combines the beam analysis peaks with section and material properties into
//! stresses, a safety factor and the self-weight figures.
//!
//! ## Assumptions
//!
//! - Bending stress σ = M/Z at the extreme fibre
//! - Shear stress τ = 1.5·V/A for every shape. 1.5 is exact for a solid
//!   rectangle; for I-beams and channels it understates the web stress and
//!   for circles (4/3) it is slightly conservative
//! - Self-weight is reported and included in the support reactions, but the
//!   diagrams and stresses carry the applied load only
//! - g = 9.81 m/s²

use serde::{Deserialize, Serialize};

use super::beam_analysis::{reactions, BeamConfig, BeamMaxima, Reactions};
use crate::errors::{CalcError, CalcResult};
use crate::loads::Load;
use crate::materials::Material;
use crate::section::SectionProperties;
use crate::units::{Megapascals, Pascals};

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Shear distribution factor applied to the average shear stress
pub const SHEAR_SHAPE_FACTOR: f64 = 1.5;

/// Yield strength over peak bending stress.
///
/// An unstressed beam has no finite safety factor; it is reported as
/// `Undefined` rather than as NaN or a bare infinity, which JSON cannot carry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum SafetyFactor {
    Defined { value: f64 },
    Undefined,
}

impl SafetyFactor {
    /// fy / σ, or `Undefined` when σ is zero
    pub fn from_stress(yield_strength_mpa: f64, stress_mpa: f64) -> Self {
        if stress_mpa == 0.0 {
            SafetyFactor::Undefined
        } else {
            SafetyFactor::Defined {
                value: yield_strength_mpa / stress_mpa,
            }
        }
    }

    /// Numeric value; `Undefined` reads as +∞
    pub fn value(&self) -> f64 {
        match self {
            SafetyFactor::Defined { value } => *value,
            SafetyFactor::Undefined => f64::INFINITY,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, SafetyFactor::Defined { .. })
    }

    /// Condition code for the undefined case
    pub fn condition_code(&self) -> Option<&'static str> {
        match self {
            SafetyFactor::Defined { .. } => None,
            SafetyFactor::Undefined => Some("UNDEFINED_SAFETY_FACTOR"),
        }
    }

    /// The finite value, or `UndefinedSafetyFactor` for callers that need a number
    pub fn checked(&self) -> CalcResult<f64> {
        match self {
            SafetyFactor::Defined { value } => Ok(*value),
            SafetyFactor::Undefined => Err(CalcError::UndefinedSafetyFactor {
                stress_mpa: "0".to_string(),
            }),
        }
    }

    /// True when yield is not reached (factor ≥ 1)
    pub fn passes(&self) -> bool {
        self.value() >= 1.0
    }
}

/// Everything derived from one set of inputs, in SI units except stresses (MPa)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// max |V| (N)
    pub max_shear_force: f64,
    /// max |M| (N·m)
    pub max_bending_moment: f64,
    /// σ = M/Z (MPa)
    pub max_normal_stress: f64,
    /// τ = 1.5·V/A (MPa)
    pub max_shear_stress: f64,
    /// fy / σ
    pub safety_factor: SafetyFactor,
    /// Position of the combined self-weight + load resultant (m)
    pub center_of_gravity: f64,
    /// Cross-sectional area (m²)
    pub area: f64,
    /// Second moment of area (m⁴)
    pub moment_of_inertia: f64,
    /// Section modulus (m³)
    pub section_modulus: f64,
    /// Self-weight (N)
    pub beam_weight: f64,
    /// Reactions from the applied load plus self-weight (N)
    pub support_reactions: Reactions,
}

/// Self-weight W = A·L·ρ·g
///
/// # Example
/// ```rust
/// use beam_core::calculations::results::beam_weight;
///
/// // 100 x 200 mm steel, 1 m long
/// let w = beam_weight(0.02, 1.0, 7850.0);
/// assert!((w - 1540.17).abs() < 0.01);
/// ```
pub fn beam_weight(area: f64, length: f64, density: f64) -> f64 {
    area * length * density * GRAVITY
}

/// Position of the resultant of self-weight (at midspan) and the applied load
pub fn center_of_gravity(beam_weight: f64, length: f64, load: &Load) -> CalcResult<f64> {
    let load_force = load.total_force();
    let total = beam_weight + load_force;
    if total == 0.0 {
        return Err(CalcError::invalid_input(
            "beam_weight",
            beam_weight.to_string(),
            "Beam weight and applied load are both zero; centre of gravity is undefined",
        ));
    }
    Ok((beam_weight * length / 2.0 + load_force * load.resultant_position()) / total)
}

/// Combine analysis peaks, section and material into a [`ResultSet`].
///
/// # Errors
/// `InvalidGeometry` for non-positive area or section modulus, plus any
/// configuration error raised while resolving the self-weight reactions.
pub fn aggregate(
    section: &SectionProperties,
    maxima: &BeamMaxima,
    material: &Material,
    beam_weight: f64,
    load: &Load,
    config: &BeamConfig,
) -> CalcResult<ResultSet> {
    if section.area <= 0.0 {
        return Err(CalcError::invalid_geometry("section", "area", section.area, "Area must be positive"));
    }
    if section.section_modulus <= 0.0 {
        return Err(CalcError::invalid_geometry(
            "section",
            "section_modulus",
            section.section_modulus,
            "Section modulus must be positive",
        ));
    }

    let max_normal_stress = Megapascals::from(Pascals(maxima.max_bending_moment / section.section_modulus)).value();
    let max_shear_stress =
        Megapascals::from(Pascals(SHEAR_SHAPE_FACTOR * maxima.max_shear_force / section.area)).value();

    let safety_factor = SafetyFactor::from_stress(material.yield_strength_mpa, max_normal_stress);
    if !safety_factor.is_defined() {
        log::warn!("maximum normal stress is zero; safety factor is undefined");
    }

    let self_weight_load = Load::uniform(beam_weight / config.length, 0.0, config.length);
    let support_reactions = reactions(config, load)? + reactions(config, &self_weight_load)?;

    let center_of_gravity = center_of_gravity(beam_weight, config.length, load)?;

    log::debug!(
        "σ = {:.3} MPa, τ = {:.3} MPa, SF = {:?}, W = {:.2} N",
        max_normal_stress,
        max_shear_stress,
        safety_factor,
        beam_weight
    );

    Ok(ResultSet {
        max_shear_force: maxima.max_shear_force,
        max_bending_moment: maxima.max_bending_moment,
        max_normal_stress,
        max_shear_stress,
        safety_factor,
        center_of_gravity,
        area: section.area,
        moment_of_inertia: section.moment_of_inertia,
        section_modulus: section.section_modulus,
        beam_weight,
        support_reactions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn steel() -> Material {
        Material {
            yield_strength_mpa: 235.0,
            elastic_modulus_gpa: 210.0,
            density_kg_m3: 7850.0,
        }
    }

    fn rect_100x200() -> SectionProperties {
        SectionProperties {
            area: 0.02,
            moment_of_inertia: 0.1 * 0.2_f64.powi(3) / 12.0,
            section_modulus: 0.1 * 0.2_f64.powi(2) / 6.0,
        }
    }

    fn maxima(v: f64, m: f64) -> BeamMaxima {
        BeamMaxima {
            max_shear_force: v,
            max_shear_position: 0.0,
            max_bending_moment: m,
            max_moment_position: 0.5,
        }
    }

    #[test]
    fn test_stresses() {
        let config = BeamConfig::simply_supported(1.0);
        let load = Load::point(1000.0, 0.5);
        let results = aggregate(&rect_100x200(), &maxima(500.0, 250.0), &steel(), 0.0, &load, &config).unwrap();

        // σ = 250 / 6.6667e-4 = 375_000 Pa = 0.375 MPa
        assert_relative_eq!(results.max_normal_stress, 0.375, max_relative = 1e-9);
        // τ = 1.5 * 500 / 0.02 = 37_500 Pa = 0.0375 MPa
        assert_relative_eq!(results.max_shear_stress, 0.0375, max_relative = 1e-9);
        assert_relative_eq!(results.safety_factor.value(), 235.0 / 0.375, max_relative = 1e-9);
        assert!(results.safety_factor.passes());
    }

    #[test]
    fn test_zero_stress_safety_factor_undefined() {
        let config = BeamConfig::simply_supported(1.0);
        let load = Load::point(0.0, 0.5);
        let weight = beam_weight(0.02, 1.0, 7850.0);
        let results = aggregate(&rect_100x200(), &maxima(0.0, 0.0), &steel(), weight, &load, &config).unwrap();

        assert_eq!(results.safety_factor, SafetyFactor::Undefined);
        assert!(!results.safety_factor.value().is_nan());
        assert_eq!(results.safety_factor.value(), f64::INFINITY);
        assert_eq!(results.safety_factor.condition_code(), Some("UNDEFINED_SAFETY_FACTOR"));
        assert_eq!(results.safety_factor.checked().unwrap_err().error_code(), "UNDEFINED_SAFETY_FACTOR");
    }

    #[test]
    fn test_safety_factor_json() {
        let json = serde_json::to_string(&SafetyFactor::Undefined).unwrap();
        assert_eq!(json, r#"{"status":"Undefined"}"#);
        let json = serde_json::to_string(&SafetyFactor::Defined { value: 2.5 }).unwrap();
        assert_eq!(json, r#"{"status":"Defined","value":2.5}"#);
    }

    #[test]
    fn test_center_of_gravity() {
        // 100 N self-weight at 1 m, 300 N at 1.6 m → (100 + 480)/400 = 1.45
        let cog = center_of_gravity(100.0, 2.0, &Load::point(300.0, 1.6)).unwrap();
        assert_relative_eq!(cog, 1.45, epsilon = 1e-12);

        let cog = center_of_gravity(100.0, 2.0, &Load::uniform(50.0, 0.0, 2.0)).unwrap();
        assert_relative_eq!(cog, 1.0, epsilon = 1e-12);

        assert!(center_of_gravity(0.0, 2.0, &Load::point(0.0, 1.0)).is_err());
    }

    #[test]
    fn test_reactions_include_self_weight() {
        let config = BeamConfig::with_supports(3.0, 0.5, 2.5);
        let load = Load::point(1200.0, 1.0);
        let weight = 450.0;
        let results = aggregate(&rect_100x200(), &maxima(1.0, 1.0), &steel(), weight, &load, &config).unwrap();
        assert_relative_eq!(results.support_reactions.total(), 1650.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_section_rejected() {
        let mut section = rect_100x200();
        section.section_modulus = 0.0;
        let err = aggregate(
            &section,
            &maxima(1.0, 1.0),
            &steel(),
            1.0,
            &Load::point(1.0, 0.5),
            &BeamConfig::simply_supported(1.0),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }
}
