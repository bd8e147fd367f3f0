//! # beam_core - Single-Span Beam Check Engine
//!
//! `beam_core` computes the static response of one straight beam under one
//! load: support reactions, sampled shear-force and bending-moment diagrams,
//! cross-section properties, stresses and a safety factor against yield.
//! All inputs and outputs are JSON-serializable so that front ends (forms,
//! charts, report generators, scripts) can drive it without sharing code.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take one immutable input and return results
//! - **All-or-nothing**: Invalid input is rejected before any result is assembled
//! - **Tagged variants**: Shapes, loads and supports are enums matched exhaustively
//! - **Rich Errors**: Structured error types with stable codes
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::{calculate, BeamCheckInput, SupportCondition};
//! use beam_core::loads::Load;
//! use beam_core::materials::MaterialSpec;
//! use beam_core::section::CrossSection;
//!
//! let input = BeamCheckInput {
//!     label: "Cantilever bracket".to_string(),
//!     length_mm: 1000.0,
//!     support: SupportCondition::Cantilever,
//!     load: Load::uniform(10.0, 0.0, 1000.0), // 10 N/mm
//!     section: CrossSection::Rectangular { width: 100.0, height: 200.0 },
//!     material: MaterialSpec::default(),
//!     beam_density_kg_m3: None,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.reaction_left_n - 10_000.0).abs() < 1e-6);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("moment_diagram"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beam analysis, results aggregation and the `calculate` entry point
//! - [`section`] - Cross-section shapes and their properties
//! - [`loads`] - The applied load
//! - [`materials`] - Material properties and the standard grade library
//! - [`equations`] - Closed-form formulas the calculations use
//! - [`units`] - Type-safe unit wrappers for the request/result boundary
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod section;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BeamCheckInput, BeamCheckResult, SafetyFactor};
pub use errors::{CalcError, CalcResult};
pub use section::{CrossSection, SectionProperties};
