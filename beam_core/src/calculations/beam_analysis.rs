//! Single-Span Beam Analysis
//!
//! Reactions, shear-force and bending-moment diagrams for one straight beam
//! carrying one load. Lengths are metres and forces newtons throughout.
//!
//! ## Support Conditions
//! - Simply supported on two supports placed anywhere along the beam
//!   (overhangs allowed)
//! - Cantilever fixed at x = 0, free at x = length
//!
//! ## Sign Convention
//! - Loads positive downward, reactions positive upward
//! - Simply supported: shear is the sum of forces left of the section,
//!   moment positive sagging
//! - Cantilever: shear and moment are measured from the free end and come out
//!   negative (hogging)
//!
//! ## Discontinuities
//! Diagrams are sampled, so the side of a jump a sample lands on matters:
//! - a support reaction enters the shear once x ≥ support
//! - a load enters the shear once x ≥ its start, but the moment only once
//!   x > its start
//! - before the left support of a simply-supported beam, both are zero
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::beam_analysis::{BeamAnalysis, BeamConfig};
//! use beam_core::loads::Load;
//!
//! // 1 m beam on end supports, 1 kN at midspan
//! let config = BeamConfig::simply_supported(1.0);
//! let analysis = BeamAnalysis::new(config, Load::point(1000.0, 0.5)).unwrap();
//!
//! let results = analysis.analyze(100).unwrap();
//! assert!((results.reactions.left - 500.0).abs() < 1e-9);
//! assert!((results.maxima.max_bending_moment - 250.0).abs() < 1e-9);
//! assert_eq!(results.shear_diagram.len(), 100);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::beam as eq;
use crate::errors::{require_finite, CalcError, CalcResult};
use crate::loads::Load;

/// Number of evenly spaced samples in each diagram
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// How the beam is held
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SupportCondition {
    /// Pin and roller at `left` and `right` (measured from the left end)
    SimplySupported { left: f64, right: f64 },
    /// Fixed at x = 0, free at x = length
    Cantilever,
}

/// Span and supports. Immutable per calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamConfig {
    /// Overall beam length
    pub length: f64,
    /// Support arrangement
    pub support: SupportCondition,
}

impl BeamConfig {
    /// Simply supported at both ends
    pub fn simply_supported(length: f64) -> Self {
        BeamConfig {
            length,
            support: SupportCondition::SimplySupported { left: 0.0, right: length },
        }
    }

    /// Simply supported at arbitrary positions
    pub fn with_supports(length: f64, left: f64, right: f64) -> Self {
        BeamConfig {
            length,
            support: SupportCondition::SimplySupported { left, right },
        }
    }

    /// Cantilever fixed at the left end
    pub fn cantilever(length: f64) -> Self {
        BeamConfig {
            length,
            support: SupportCondition::Cantilever,
        }
    }

    /// Multiply every length by `factor` (e.g. 0.001 for mm → m)
    pub fn scaled(&self, factor: f64) -> Self {
        let support = match self.support {
            SupportCondition::SimplySupported { left, right } => SupportCondition::SimplySupported {
                left: left * factor,
                right: right * factor,
            },
            SupportCondition::Cantilever => SupportCondition::Cantilever,
        };
        BeamConfig {
            length: self.length * factor,
            support,
        }
    }

    /// Validate length and support positions.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("length", self.length)?;
        if self.length <= 0.0 {
            return Err(CalcError::invalid_input(
                "length",
                self.length.to_string(),
                "Beam length must be positive",
            ));
        }

        if let SupportCondition::SimplySupported { left, right } = self.support {
            let on_beam = |x: f64| x.is_finite() && (0.0..=self.length).contains(&x);
            if !on_beam(left) || !on_beam(right) {
                return Err(CalcError::invalid_supports(
                    left,
                    right,
                    format!("Supports must lie within [0, {}]", self.length),
                ));
            }
            if right == left {
                return Err(CalcError::invalid_supports(left, right, "Supports coincide"));
            }
            if right < left {
                return Err(CalcError::invalid_supports(left, right, "Left support is right of the right support"));
            }
        }
        Ok(())
    }

    /// Support positions, for critical-point evaluation
    fn support_positions(&self) -> Vec<f64> {
        match self.support {
            SupportCondition::SimplySupported { left, right } => vec![left, right],
            SupportCondition::Cantilever => vec![0.0],
        }
    }
}

/// Vertical support reactions (positive upward).
///
/// For a cantilever, `left` is the fixed-end reaction and `right` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    pub left: f64,
    pub right: f64,
}

impl Reactions {
    /// Sum of both reactions
    pub fn total(&self) -> f64 {
        self.left + self.right
    }
}

impl std::ops::Add for Reactions {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Reactions {
            left: self.left + rhs.left,
            right: self.right + rhs.right,
        }
    }
}

/// Ordered (position, value) samples along the beam.
///
/// Built once per analysis; positions are strictly increasing from 0 to the
/// beam length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagramSeries {
    points: Vec<(f64, f64)>,
}

impl DiagramSeries {
    /// The samples
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when there are no samples
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sample with the largest |value|, as (position, |value|).
    ///
    /// Ties keep the first occurrence. Empty series report (0, 0).
    pub fn max_abs(&self) -> (f64, f64) {
        self.points
            .iter()
            .fold((0.0, 0.0), |best, &(x, v)| if v.abs() > best.1 { (x, v.abs()) } else { best })
    }

    /// New series with positions and values multiplied by the given factors
    pub fn scaled(&self, position_factor: f64, value_factor: f64) -> Self {
        DiagramSeries {
            points: self
                .points
                .iter()
                .map(|&(x, v)| (x * position_factor, v * value_factor))
                .collect(),
        }
    }
}

/// Largest shear and moment magnitudes and where they occur
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BeamMaxima {
    /// max |V| (N)
    pub max_shear_force: f64,
    /// Position of max |V| (m)
    pub max_shear_position: f64,
    /// max |M| (N·m)
    pub max_bending_moment: f64,
    /// Position of max |M| (m)
    pub max_moment_position: f64,
}

/// Results from beam analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Support reactions (N)
    pub reactions: Reactions,
    /// Shear force (N) against position (m)
    pub shear_diagram: DiagramSeries,
    /// Bending moment (N·m) against position (m)
    pub moment_diagram: DiagramSeries,
    /// Peak magnitudes
    pub maxima: BeamMaxima,
}

/// A validated beam with its load and reactions
#[derive(Debug, Clone, Copy)]
pub struct BeamAnalysis {
    config: BeamConfig,
    load: Load,
    reactions: Reactions,
}

impl BeamAnalysis {
    /// Validate the configuration and load, then resolve reactions.
    ///
    /// # Errors
    /// `InvalidInput` for a non-positive length, `InvalidSupports` for
    /// coincident, inverted or off-beam supports, `InvalidLoadPosition` for a
    /// load off the beam.
    pub fn new(config: BeamConfig, load: Load) -> CalcResult<Self> {
        config.validate()?;
        load.validate(config.length)?;

        let (left, right) = match (config.support, load) {
            (SupportCondition::SimplySupported { left, right }, Load::Point { magnitude, position }) => {
                eq::point_load_reactions(magnitude, position, left, right)
            }
            (SupportCondition::SimplySupported { left, right }, Load::Uniform { magnitude, start, end }) => {
                eq::partial_uniform_reactions(magnitude, start, end, left, right)
            }
            (SupportCondition::Cantilever, Load::Point { magnitude, .. }) => (eq::cantilever_point_reaction(magnitude), 0.0),
            (SupportCondition::Cantilever, Load::Uniform { magnitude, start, end }) => {
                (eq::cantilever_uniform_reaction(magnitude, start, end), 0.0)
            }
        };
        let reactions = Reactions { left, right };

        log::debug!("reactions for {:?} under {:?}: {:?}", config.support, load, reactions);

        Ok(BeamAnalysis { config, load, reactions })
    }

    /// Beam configuration
    pub fn config(&self) -> &BeamConfig {
        &self.config
    }

    /// Support reactions
    pub fn reactions(&self) -> Reactions {
        self.reactions
    }

    /// Shear force at position x
    pub fn shear_at(&self, x: f64) -> f64 {
        match self.config.support {
            SupportCondition::SimplySupported { left, right } => {
                let mut v = 0.0;
                if x >= left {
                    v += self.reactions.left;
                }
                if x >= right {
                    v += self.reactions.right;
                }
                v - self.load_shear_from_left(x)
            }
            SupportCondition::Cantilever => self.cantilever_shear(x),
        }
    }

    /// Bending moment at position x
    pub fn moment_at(&self, x: f64) -> f64 {
        match self.config.support {
            SupportCondition::SimplySupported { left, right } => {
                let mut m = 0.0;
                if x >= left {
                    m += self.reactions.left * (x - left);
                }
                if x > right {
                    m += self.reactions.right * (x - right);
                }
                m - self.load_moment_from_left(x)
            }
            SupportCondition::Cantilever => self.cantilever_moment(x),
        }
    }

    /// Load already passed at x, counted from the left end
    fn load_shear_from_left(&self, x: f64) -> f64 {
        match self.load {
            Load::Point { magnitude, position } => {
                if x >= position {
                    magnitude
                } else {
                    0.0
                }
            }
            Load::Uniform { magnitude, start, end } => {
                if x >= start {
                    magnitude * (x - start).min(end - start)
                } else {
                    0.0
                }
            }
        }
    }

    /// Moment about x of the load already passed
    fn load_moment_from_left(&self, x: f64) -> f64 {
        match self.load {
            Load::Point { magnitude, position } => {
                if x > position {
                    magnitude * (x - position)
                } else {
                    0.0
                }
            }
            Load::Uniform { magnitude, start, end } => {
                if x > start {
                    let covered = (x - start).min(end - start);
                    magnitude * covered * (x - (start + covered / 2.0))
                } else {
                    0.0
                }
            }
        }
    }

    fn cantilever_shear(&self, x: f64) -> f64 {
        match self.load {
            Load::Point { magnitude, position } => {
                if x <= position {
                    -magnitude
                } else {
                    0.0
                }
            }
            Load::Uniform { magnitude, start, end } => {
                if x < start {
                    -self.load.total_force()
                } else if x <= end {
                    -magnitude * (end - x)
                } else {
                    0.0
                }
            }
        }
    }

    fn cantilever_moment(&self, x: f64) -> f64 {
        match self.load {
            Load::Point { magnitude, position } => {
                if x <= position {
                    -eq::cantilever_fixed_end_moment(magnitude, position - x)
                } else {
                    0.0
                }
            }
            Load::Uniform { magnitude, start, end } => {
                if x < start {
                    let arm = self.load.resultant_position() - x;
                    -eq::cantilever_fixed_end_moment(self.load.total_force(), arm)
                } else if x <= end {
                    -magnitude * (end - x).powi(2) / 2.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Evenly spaced sample positions including both ends
    fn sample_positions(&self, num_samples: usize) -> CalcResult<Vec<f64>> {
        if num_samples < 2 {
            return Err(CalcError::invalid_input(
                "num_samples",
                num_samples.to_string(),
                "At least two samples are needed to span the beam",
            ));
        }
        let length = self.config.length;
        let last = num_samples - 1;
        Ok((0..num_samples)
            .map(|i| if i == last { length } else { length * i as f64 / last as f64 })
            .collect())
    }

    /// Sample shear and moment diagrams at `num_samples` evenly spaced points
    pub fn sample(&self, num_samples: usize) -> CalcResult<(DiagramSeries, DiagramSeries)> {
        let positions = self.sample_positions(num_samples)?;

        let shear = DiagramSeries {
            points: positions.iter().map(|&x| (x, self.shear_at(x))).collect(),
        };
        let moment = DiagramSeries {
            points: positions.iter().map(|&x| (x, self.moment_at(x))).collect(),
        };
        Ok((shear, moment))
    }

    /// Positions where a peak can fall between samples
    fn critical_positions(&self) -> Vec<f64> {
        let mut positions = self.config.support_positions();
        positions.extend(self.load.critical_positions());

        // Zero-shear points inside a distributed load (moment peaks). Supports
        // inside the loaded span split it into segments of constant slope.
        if let Load::Uniform { magnitude, start, end } = self.load {
            if magnitude > 0.0 {
                let mut breaks: Vec<f64> = self
                    .config
                    .support_positions()
                    .into_iter()
                    .filter(|&x| x > start && x < end)
                    .collect();
                breaks.push(start);
                breaks.push(end);
                breaks.sort_by(f64::total_cmp);

                for segment in breaks.windows(2) {
                    let (a, b) = (segment[0], segment[1]);
                    let x0 = a + self.shear_at(a) / magnitude;
                    if x0 > a && x0 < b {
                        positions.push(x0);
                    }
                }
            }
        }

        positions.retain(|x| (0.0..=self.config.length).contains(x));
        positions
    }

    /// Peak |V| and |M| over the sampled diagrams and the critical positions.
    ///
    /// Shear is also checked just left of each critical position so that a
    /// jump landing between samples is still seen from both sides.
    pub fn maxima(&self, shear: &DiagramSeries, moment: &DiagramSeries) -> BeamMaxima {
        let (mut shear_pos, mut max_shear) = shear.max_abs();
        let (mut moment_pos, mut max_moment) = moment.max_abs();

        let nudge = self.config.length * 1e-9;
        for x in self.critical_positions() {
            let candidates = [x, (x - nudge).max(0.0)];
            for xs in candidates {
                let v = self.shear_at(xs).abs();
                if v > max_shear {
                    max_shear = v;
                    shear_pos = xs;
                }
            }
            let m = self.moment_at(x).abs();
            if m > max_moment {
                max_moment = m;
                moment_pos = x;
            }
        }

        BeamMaxima {
            max_shear_force: max_shear,
            max_shear_position: shear_pos,
            max_bending_moment: max_moment,
            max_moment_position: moment_pos,
        }
    }

    /// Perform the full analysis
    pub fn analyze(&self, num_samples: usize) -> CalcResult<AnalysisResults> {
        let (shear_diagram, moment_diagram) = self.sample(num_samples)?;
        let maxima = self.maxima(&shear_diagram, &moment_diagram);

        log::debug!(
            "max |V| = {:.3} N at {:.4} m, max |M| = {:.3} N·m at {:.4} m",
            maxima.max_shear_force,
            maxima.max_shear_position,
            maxima.max_bending_moment,
            maxima.max_moment_position
        );

        Ok(AnalysisResults {
            reactions: self.reactions,
            shear_diagram,
            moment_diagram,
            maxima,
        })
    }
}

/// Support reactions for one load on a validated beam
pub fn reactions(config: &BeamConfig, load: &Load) -> CalcResult<Reactions> {
    Ok(BeamAnalysis::new(*config, *load)?.reactions())
}

/// Shear and moment diagrams sampled at `num_samples` evenly spaced points
pub fn sample(config: &BeamConfig, load: &Load, num_samples: usize) -> CalcResult<(DiagramSeries, DiagramSeries)> {
    BeamAnalysis::new(*config, *load)?.sample(num_samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn analyze(config: BeamConfig, load: Load) -> AnalysisResults {
        BeamAnalysis::new(config, load).unwrap().analyze(DEFAULT_SAMPLE_COUNT).unwrap()
    }

    #[test]
    fn test_point_load_reactions() {
        let r = reactions(&BeamConfig::simply_supported(10.0), &Load::point(1000.0, 3.0)).unwrap();
        assert_relative_eq!(r.left, 700.0, epsilon = 1e-9);
        assert_relative_eq!(r.right, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_symmetric_supports_split_midspan_load() {
        for inset in [0.0, 0.5, 1.0, 2.5, 4.0] {
            let config = BeamConfig::with_supports(10.0, inset, 10.0 - inset);
            let r = reactions(&config, &Load::point(800.0, 5.0)).unwrap();
            assert_relative_eq!(r.left, 400.0, epsilon = 1e-9);
            assert_relative_eq!(r.right, 400.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_uniform_reactions_use_centroid() {
        let r = reactions(&BeamConfig::simply_supported(10.0), &Load::uniform(100.0, 2.0, 6.0)).unwrap();
        // W = 400 at 4 m
        assert_relative_eq!(r.left, 240.0, epsilon = 1e-9);
        assert_relative_eq!(r.right, 160.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cantilever_reactions() {
        let r = reactions(&BeamConfig::cantilever(2.0), &Load::point(500.0, 1.2)).unwrap();
        assert_eq!(r, Reactions { left: 500.0, right: 0.0 });
        let r = reactions(&BeamConfig::cantilever(1.0), &Load::uniform(10_000.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(r.left, 10_000.0);
        assert_eq!(r.right, 0.0);
    }

    #[test]
    fn test_coincident_supports_rejected() {
        let err = reactions(&BeamConfig::with_supports(4.0, 2.0, 2.0), &Load::point(1.0, 1.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SUPPORTS");
        let err = reactions(&BeamConfig::with_supports(4.0, 3.0, 1.0), &Load::point(1.0, 1.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SUPPORTS");
        let err = reactions(&BeamConfig::with_supports(4.0, 0.0, 4.5), &Load::point(1.0, 1.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SUPPORTS");
    }

    #[test]
    fn test_non_positive_length_rejected() {
        let err = reactions(&BeamConfig::cantilever(0.0), &Load::point(1.0, 0.0)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_sample_positions() {
        let (shear, moment) = sample(&BeamConfig::simply_supported(3.7), &Load::point(1.0, 1.0), 100).unwrap();
        assert_eq!(shear.len(), 100);
        assert_eq!(moment.len(), 100);
        assert_eq!(shear.points()[0].0, 0.0);
        assert_eq!(shear.points()[99].0, 3.7);
        assert!(shear.points().windows(2).all(|w| w[1].0 > w[0].0));
    }

    #[test]
    fn test_too_few_samples_rejected() {
        let err = sample(&BeamConfig::simply_supported(1.0), &Load::point(1.0, 0.5), 1).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_midspan_point_load_peak_caught_between_samples() {
        // 100 samples never land on 0.5 m; the critical point still does
        let results = analyze(BeamConfig::simply_supported(1.0), Load::point(1000.0, 0.5));
        assert_relative_eq!(results.maxima.max_bending_moment, 250.0, epsilon = 1e-9);
        assert_relative_eq!(results.maxima.max_moment_position, 0.5);
        assert_relative_eq!(results.maxima.max_shear_force, 500.0, epsilon = 1e-9);
        let (_, sampled_peak) = results.moment_diagram.max_abs();
        assert!(sampled_peak < 250.0);
    }

    #[test]
    fn test_shear_closes_past_right_support() {
        let analysis = BeamAnalysis::new(BeamConfig::simply_supported(1.0), Load::point(1000.0, 0.5)).unwrap();
        assert_relative_eq!(analysis.shear_at(0.25), 500.0);
        assert_relative_eq!(analysis.shear_at(0.75), -500.0);
        assert_relative_eq!(analysis.shear_at(1.0), 0.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.moment_at(1.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_diagrams_close_at_far_end() {
        // Both reactions enter with their upward sign, so the beam is in equilibrium at x = L
        let analysis = BeamAnalysis::new(BeamConfig::simply_supported(1.0), Load::point(1000.0, 0.5)).unwrap();
        assert_eq!(analysis.shear_at(1.0), 0.0);
        assert_relative_eq!(analysis.moment_at(1.0), 0.0, epsilon = 1e-12);

        let analysis = BeamAnalysis::new(BeamConfig::with_supports(4.0, 0.0, 3.0), Load::point(100.0, 4.0)).unwrap();
        assert_relative_eq!(analysis.shear_at(4.0), 0.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.moment_at(4.0), 0.0, epsilon = 1e-9);

        let results = analysis.analyze(DEFAULT_SAMPLE_COUNT).unwrap();
        let (x_last, v_last) = *results.shear_diagram.points().last().unwrap();
        assert_eq!(x_last, 4.0);
        assert_relative_eq!(v_last, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_shear_peak_between_inset_supports() {
        // Supports at 2 and 8 m under w = 1 N/m over the whole 10 m beam:
        // R1 = R2 = 5, shear right of the left support is 3, so V = 0 at 5 m
        let results = analyze(BeamConfig::with_supports(10.0, 2.0, 8.0), Load::uniform(1.0, 0.0, 10.0));
        assert_relative_eq!(results.maxima.max_bending_moment, 2.5, epsilon = 1e-12);
        assert_relative_eq!(results.maxima.max_moment_position, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_boundary_asymmetry_at_load() {
        let analysis = BeamAnalysis::new(BeamConfig::simply_supported(2.0), Load::point(100.0, 1.0)).unwrap();
        // Shear already includes the load at x == position
        assert_relative_eq!(analysis.shear_at(1.0), -50.0);
        // Moment does not subtract it until x > position (and it is zero there anyway)
        assert_relative_eq!(analysis.moment_at(1.0), 50.0);
    }

    #[test]
    fn test_zero_before_inset_left_support() {
        let analysis = BeamAnalysis::new(BeamConfig::with_supports(4.0, 1.0, 3.0), Load::point(100.0, 2.0)).unwrap();
        assert_eq!(analysis.shear_at(0.0), 0.0);
        assert_eq!(analysis.moment_at(0.5), 0.0);
        assert_relative_eq!(analysis.shear_at(1.0), 50.0);
        assert_relative_eq!(analysis.moment_at(2.0), 50.0);
    }

    #[test]
    fn test_overhang_load() {
        // Supports at 0 and 3, load at the 4 m tip
        let analysis = BeamAnalysis::new(BeamConfig::with_supports(4.0, 0.0, 3.0), Load::point(300.0, 4.0)).unwrap();
        let r = analysis.reactions();
        assert_relative_eq!(r.left, -100.0, epsilon = 1e-9);
        assert_relative_eq!(r.right, 400.0, epsilon = 1e-9);
        // Hogging over the right support: M = -P * 1 m
        assert_relative_eq!(analysis.moment_at(3.0), -300.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.shear_at(3.5), 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_full_uniform_simply_supported() {
        // wL²/8 = 100 * 100 / 8 = 1250 N·m, V = wL/2 = 500 N
        let results = analyze(BeamConfig::simply_supported(10.0), Load::uniform(100.0, 0.0, 10.0));
        assert_relative_eq!(results.maxima.max_bending_moment, 1250.0, epsilon = 1e-6);
        assert_relative_eq!(results.maxima.max_moment_position, 5.0, epsilon = 1e-9);
        assert_relative_eq!(results.maxima.max_shear_force, 500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_partial_uniform_moment_matches_closed_form() {
        // 100 N/m over [2, 8] on 10 m: R1 = 300, M(5) = 300*5 - 100*3*1.5 = 1050
        let analysis = BeamAnalysis::new(BeamConfig::simply_supported(10.0), Load::uniform(100.0, 2.0, 8.0)).unwrap();
        assert_relative_eq!(analysis.moment_at(5.0), 1050.0, epsilon = 1e-9);
        // Past the load the full resultant acts at the centroid: M(9) = 300*9 - 600*4 = 300
        assert_relative_eq!(analysis.moment_at(9.0), 300.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.shear_at(9.0), -300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cantilever_point_at_free_end() {
        let results = analyze(BeamConfig::cantilever(2.0), Load::point(500.0, 2.0));
        assert_relative_eq!(results.maxima.max_bending_moment, 1000.0, epsilon = 1e-9);
        assert_eq!(results.maxima.max_moment_position, 0.0);
        assert_relative_eq!(results.maxima.max_shear_force, 500.0);
        assert!(results.moment_diagram.points().iter().all(|&(_, m)| m <= 0.0));
    }

    #[test]
    fn test_cantilever_point_inside_span() {
        let analysis = BeamAnalysis::new(BeamConfig::cantilever(2.0), Load::point(500.0, 1.0)).unwrap();
        assert_relative_eq!(analysis.moment_at(0.0), -500.0);
        assert_relative_eq!(analysis.moment_at(0.5), -250.0);
        assert_eq!(analysis.moment_at(1.5), 0.0);
        assert_eq!(analysis.shear_at(1.0), -500.0);
        assert_eq!(analysis.shear_at(1.5), 0.0);
    }

    #[test]
    fn test_cantilever_full_uniform() {
        // 10 kN/m over 1 m: fixed-end moment = -W * L/2 = -5000 N·m
        let analysis = BeamAnalysis::new(BeamConfig::cantilever(1.0), Load::uniform(10_000.0, 0.0, 1.0)).unwrap();
        assert_relative_eq!(analysis.moment_at(0.0), -5000.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.shear_at(0.0), -10_000.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.moment_at(0.5), -1250.0, epsilon = 1e-9);
        assert_relative_eq!(analysis.moment_at(1.0), 0.0);
    }

    #[test]
    fn test_cantilever_partial_uniform_before_span() {
        // 100 N/m over [1, 3] on 4 m: W = 200 at c = 2
        let analysis = BeamAnalysis::new(BeamConfig::cantilever(4.0), Load::uniform(100.0, 1.0, 3.0)).unwrap();
        assert_relative_eq!(analysis.shear_at(0.5), -200.0);
        assert_relative_eq!(analysis.moment_at(0.0), -400.0);
        assert_relative_eq!(analysis.moment_at(0.5), -300.0);
        // Continuity at the load start
        assert_relative_eq!(analysis.moment_at(1.0), -200.0, epsilon = 1e-9);
        assert_eq!(analysis.moment_at(3.5), 0.0);
    }

    #[test]
    fn test_zero_length_uniform_load_is_inert() {
        let results = analyze(BeamConfig::simply_supported(2.0), Load::uniform(1000.0, 1.0, 1.0));
        assert_eq!(results.reactions.total(), 0.0);
        assert_eq!(results.maxima.max_bending_moment, 0.0);
        assert_eq!(results.maxima.max_shear_force, 0.0);
    }

    #[test]
    fn test_load_at_support() {
        let results = analyze(BeamConfig::simply_supported(2.0), Load::point(100.0, 0.0));
        assert_relative_eq!(results.reactions.left, 100.0);
        assert_relative_eq!(results.reactions.right, 0.0);
        assert_relative_eq!(results.maxima.max_bending_moment, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_series_scaling() {
        let (shear, _) = sample(&BeamConfig::simply_supported(1.0), &Load::point(10.0, 0.5), 3).unwrap();
        let scaled = shear.scaled(1000.0, 2.0);
        assert_eq!(scaled.points()[2].0, 1000.0);
        assert_eq!(scaled.points()[0].1, 10.0);
    }
}
