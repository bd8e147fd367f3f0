//! # Structural Calculations
//!
//! The calculation pipeline. Each stage is a pure function of its inputs:
//!
//! - [`beam_analysis`] - Reactions, sampled shear/moment diagrams and their peaks
//! - [`results`] - Stresses, safety factor, self-weight and centre of gravity
//! - [`beam`] - Request/result types in display units and the `calculate` entry point
//!
//! Section properties live in [`crate::section`]; they do not depend on the
//! beam analysis and can be computed on their own.

pub mod beam;
pub mod beam_analysis;
pub mod results;

// Re-export commonly used types
pub use beam::{calculate, run, AnalysisInput, AnalysisOutcome, BeamCheckInput, BeamCheckResult};
pub use beam_analysis::{
    reactions, sample, AnalysisResults, BeamAnalysis, BeamConfig, BeamMaxima, DiagramSeries, Reactions,
    SupportCondition, DEFAULT_SAMPLE_COUNT,
};
pub use results::{aggregate, beam_weight, ResultSet, SafetyFactor};
