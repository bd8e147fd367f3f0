//! # Beam Check
//!
//! The end-to-end calculation: one request in, one result out. This module
//! owns the boundary between request units (mm, N, N/mm, MPa) and the SI
//! units the engine computes in.
//!
//! ## Pipeline
//!
//! ```text
//! BeamCheckInput ──to_analysis_input──▶ AnalysisInput (SI)
//!                                          │
//!                 section properties ◀─────┤
//!                 beam analysis      ◀─────┤
//!                                          ▼
//!                                      aggregate ──▶ BeamCheckResult (mm, N·mm, MPa)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::{calculate, BeamCheckInput};
//! use beam_core::calculations::beam_analysis::SupportCondition;
//! use beam_core::loads::Load;
//! use beam_core::materials::{MaterialSpec, StandardMaterial};
//! use beam_core::section::CrossSection;
//!
//! let input = BeamCheckInput {
//!     label: "B-1".to_string(),
//!     length_mm: 1000.0,
//!     support: SupportCondition::SimplySupported { left: 0.0, right: 1000.0 },
//!     load: Load::point(1000.0, 500.0),
//!     section: CrossSection::Rectangular { width: 100.0, height: 200.0 },
//!     material: MaterialSpec::Standard { grade: StandardMaterial::S235 },
//!     beam_density_kg_m3: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.max_bending_moment_nmm - 250_000.0).abs() < 1e-6);
//! assert_eq!(result.shear_diagram.len(), 100);
//! ```

use serde::{Deserialize, Serialize};

use super::beam_analysis::{AnalysisResults, BeamAnalysis, BeamConfig, DiagramSeries, SupportCondition, DEFAULT_SAMPLE_COUNT};
use super::results::{aggregate, beam_weight, ResultSet, SafetyFactor};
use crate::errors::{require_finite, CalcError, CalcResult};
use crate::loads::Load;
use crate::materials::{Material, MaterialSpec};
use crate::section::CrossSection;
use crate::units::{
    Meters, Millimeters, Mm3, Mm4, NewtonMeters, NewtonMillimeters, NewtonsPerMeter, NewtonsPerMillimeter, SqM,
    SqMm, M3, M4,
};

/// Request for one beam check, in request units.
///
/// Lengths and positions are millimetres, point loads newtons, distributed
/// loads N/mm.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "length_mm": 1000.0,
///   "support": { "type": "SimplySupported", "left": 0.0, "right": 1000.0 },
///   "load": { "kind": "Point", "magnitude": 1000.0, "position": 500.0 },
///   "section": { "shape": "Rectangular", "width": 100.0, "height": 200.0 },
///   "material": { "type": "Standard", "grade": "S235" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamCheckInput {
    /// User label (e.g., "B-1", "Lintel over door")
    #[serde(default)]
    pub label: String,

    /// Overall beam length (mm)
    pub length_mm: f64,

    /// Support arrangement, positions in mm
    pub support: SupportCondition,

    /// Applied load, positions in mm
    pub load: Load,

    /// Cross-section, dimensions in mm
    pub section: CrossSection,

    /// Standard grade or custom properties
    pub material: MaterialSpec,

    /// Density for self-weight (kg/m³); defaults to the material's density
    #[serde(default)]
    pub beam_density_kg_m3: Option<f64>,
}

/// Fully resolved inputs in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub config: BeamConfig,
    pub load: Load,
    pub section: CrossSection,
    pub material: Material,
    /// kg/m³
    pub beam_density: f64,
}

/// Engine output in SI units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub results: ResultSet,
    pub analysis: AnalysisResults,
}

/// Results of a beam check, in display units.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "label": "B-1",
///   "reaction_left_n": 500.0,
///   "reaction_right_n": 500.0,
///   "max_bending_moment_nmm": 250000.0,
///   "max_normal_stress_mpa": 0.375,
///   "safety_factor": { "status": "Defined", "value": 626.7 },
///   "moment_of_inertia_mm4": 66666666.7,
///   "shear_diagram": [[0.0, 500.0], [10.1, 500.0]]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamCheckResult {
    pub label: String,

    // === Reactions ===
    /// Left (or fixed-end) reaction from the applied load (N)
    pub reaction_left_n: f64,
    /// Right reaction from the applied load (N); zero for a cantilever
    pub reaction_right_n: f64,
    /// Left reaction including self-weight (N)
    pub support_reaction_left_n: f64,
    /// Right reaction including self-weight (N)
    pub support_reaction_right_n: f64,

    // === Demand ===
    /// max |V| (N)
    pub max_shear_force_n: f64,
    /// Position of max |V| (mm)
    pub max_shear_position_mm: f64,
    /// max |M| (N·mm)
    pub max_bending_moment_nmm: f64,
    /// Position of max |M| (mm)
    pub max_moment_position_mm: f64,

    // === Stresses ===
    /// σ = M/Z (MPa)
    pub max_normal_stress_mpa: f64,
    /// τ = 1.5·V/A (MPa)
    pub max_shear_stress_mpa: f64,
    /// fy / σ
    pub safety_factor: SafetyFactor,

    // === Section & Weight ===
    pub area_mm2: f64,
    pub moment_of_inertia_mm4: f64,
    pub section_modulus_mm3: f64,
    /// Self-weight (N)
    pub beam_weight_n: f64,
    /// Resultant position of self-weight and load (mm)
    pub center_of_gravity_mm: f64,

    // === Diagrams ===
    /// Shear force (N) against position (mm)
    pub shear_diagram: DiagramSeries,
    /// Bending moment (N·mm) against position (mm)
    pub moment_diagram: DiagramSeries,
}

impl BeamCheckResult {
    /// True when the safety factor is at least 1.0
    pub fn passes(&self) -> bool {
        self.safety_factor.passes()
    }

    /// Pretty-printed JSON for downstream plotting and reporting
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::SerializationError { reason: e.to_string() })
    }
}

/// mm → m
fn mm_to_m() -> f64 {
    Meters::from(Millimeters(1.0)).value()
}

impl BeamCheckInput {
    /// Parse a request from JSON text
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid beam check request: {}", e),
        })
    }

    /// Convert to SI and resolve the material.
    ///
    /// Only the unit conversion and material lookup happen here; geometry,
    /// supports and load positions are validated by [`run`].
    pub fn to_analysis_input(&self) -> CalcResult<AnalysisInput> {
        let length_factor = mm_to_m();
        let magnitude_factor = match self.load {
            Load::Point { .. } => 1.0,
            Load::Uniform { .. } => NewtonsPerMeter::from(NewtonsPerMillimeter(1.0)).value(),
        };

        let material = self.material.resolve()?;
        let beam_density = self.beam_density_kg_m3.unwrap_or(material.density_kg_m3);

        Ok(AnalysisInput {
            config: BeamConfig {
                length: self.length_mm,
                support: self.support,
            }
            .scaled(length_factor),
            load: self.load.scaled(length_factor, magnitude_factor),
            section: self.section.scaled(length_factor),
            material,
            beam_density,
        })
    }
}

/// Run the engine on SI inputs.
///
/// All-or-nothing: any invalid input returns an error before results are
/// assembled.
pub fn run(input: &AnalysisInput) -> CalcResult<AnalysisOutcome> {
    require_finite("beam_density", input.beam_density)?;
    if input.beam_density <= 0.0 {
        return Err(CalcError::invalid_input(
            "beam_density",
            input.beam_density.to_string(),
            "Density must be positive",
        ));
    }
    input.material.validate()?;

    let section = input.section.properties()?;
    let analysis = BeamAnalysis::new(input.config, input.load)?.analyze(DEFAULT_SAMPLE_COUNT)?;

    let weight = beam_weight(section.area, input.config.length, input.beam_density);
    let results = aggregate(&section, &analysis.maxima, &input.material, weight, &input.load, &input.config)?;

    Ok(AnalysisOutcome { results, analysis })
}

/// Calculate a beam check from a request.
///
/// This is a pure function: the same input always gives the same result.
///
/// # Errors
///
/// * `InvalidInput` - non-positive length or density, non-finite values, negative load
/// * `InvalidGeometry` - degenerate cross-section
/// * `InvalidSupports` - coincident, inverted or off-beam supports
/// * `InvalidLoadPosition` - load off the beam or distributed load reversed
pub fn calculate(input: &BeamCheckInput) -> CalcResult<BeamCheckResult> {
    log::debug!("calculating beam check '{}'", input.label);

    let outcome = run(&input.to_analysis_input()?)?;
    let AnalysisOutcome { results, analysis } = outcome;

    let m_to_mm = Millimeters::from(Meters(1.0)).value();
    let nm_to_nmm = NewtonMillimeters::from(NewtonMeters(1.0)).value();

    Ok(BeamCheckResult {
        label: input.label.clone(),
        reaction_left_n: analysis.reactions.left,
        reaction_right_n: analysis.reactions.right,
        support_reaction_left_n: results.support_reactions.left,
        support_reaction_right_n: results.support_reactions.right,
        max_shear_force_n: results.max_shear_force,
        max_shear_position_mm: analysis.maxima.max_shear_position * m_to_mm,
        max_bending_moment_nmm: NewtonMillimeters::from(NewtonMeters(results.max_bending_moment)).value(),
        max_moment_position_mm: analysis.maxima.max_moment_position * m_to_mm,
        max_normal_stress_mpa: results.max_normal_stress,
        max_shear_stress_mpa: results.max_shear_stress,
        safety_factor: results.safety_factor,
        area_mm2: SqMm::from(SqM(results.area)).value(),
        moment_of_inertia_mm4: Mm4::from(M4(results.moment_of_inertia)).value(),
        section_modulus_mm3: Mm3::from(M3(results.section_modulus)).value(),
        beam_weight_n: results.beam_weight,
        center_of_gravity_mm: results.center_of_gravity * m_to_mm,
        shear_diagram: analysis.shear_diagram.scaled(m_to_mm, 1.0),
        moment_diagram: analysis.moment_diagram.scaled(m_to_mm, nm_to_nmm),
    })
}
