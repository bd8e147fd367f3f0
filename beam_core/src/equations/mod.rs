//! # Structural Engineering Equations
//!
//! The closed-form formulas the calculations are built from. Keeping them in
//! one place makes each one easy to check against a reference text.
//!
//! ## Modules
//!
//! - [`beam`] - Reaction formulas (simply-supported, cantilever)
//! - [`section`] - Cross-section properties (A, I, Z)
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fibre (sagging)
//! - **Reactions**: Positive upward (resisting gravity)

pub mod beam;
pub mod section;

pub use beam::{
    cantilever_fixed_end_moment,
    cantilever_point_reaction,
    cantilever_uniform_reaction,
    partial_uniform_reactions,
    point_load_reactions,
};

pub use section::{
    c_channel_moment_of_inertia,
    circular_area,
    circular_moment_of_inertia,
    flanged_area,
    i_beam_moment_of_inertia,
    rectangular_area,
    rectangular_moment_of_inertia,
    section_modulus,
    web_height,
};
