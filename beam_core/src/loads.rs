//! # Loads
//!
//! The single load applied to a beam. Positions are measured from the left
//! end of the beam; magnitudes are positive downward.
//!
//! ```json
//! { "kind": "Point", "magnitude": 1000.0, "position": 500.0 }
//! { "kind": "Uniform", "magnitude": 10.0, "start": 0.0, "end": 1000.0 }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcError, CalcResult};

/// A single load applied to the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Load {
    /// Concentrated force at `position`
    Point { magnitude: f64, position: f64 },

    /// Force per unit length from `start` to `end`.
    ///
    /// `start == end` is accepted and carries zero total force, the same as a
    /// point load of that (zero) resultant.
    Uniform { magnitude: f64, start: f64, end: f64 },
}

impl Load {
    /// Create a point load
    pub fn point(magnitude: f64, position: f64) -> Self {
        Load::Point { magnitude, position }
    }

    /// Create a uniform load over [start, end]
    pub fn uniform(magnitude: f64, start: f64, end: f64) -> Self {
        Load::Uniform { magnitude, start, end }
    }

    /// Total resultant force
    pub fn total_force(&self) -> f64 {
        match *self {
            Load::Point { magnitude, .. } => magnitude,
            Load::Uniform { magnitude, start, end } => magnitude * (end - start),
        }
    }

    /// Position of the resultant (load position, or centroid of the loaded span)
    pub fn resultant_position(&self) -> f64 {
        match *self {
            Load::Point { position, .. } => position,
            Load::Uniform { start, end, .. } => (start + end) / 2.0,
        }
    }

    /// Positions where the diagrams change slope or jump
    pub fn critical_positions(&self) -> Vec<f64> {
        match *self {
            Load::Point { position, .. } => vec![position],
            Load::Uniform { start, end, .. } => vec![start, end],
        }
    }

    /// Convert lengths and magnitude into another unit system.
    ///
    /// `length_factor` scales positions; `magnitude_factor` scales the
    /// magnitude (force for point loads, force per length for uniform loads).
    pub fn scaled(&self, length_factor: f64, magnitude_factor: f64) -> Self {
        match *self {
            Load::Point { magnitude, position } => Load::Point {
                magnitude: magnitude * magnitude_factor,
                position: position * length_factor,
            },
            Load::Uniform { magnitude, start, end } => Load::Uniform {
                magnitude: magnitude * magnitude_factor,
                start: start * length_factor,
                end: end * length_factor,
            },
        }
    }

    /// Validate the load against a beam of `length`.
    pub fn validate(&self, length: f64) -> CalcResult<()> {
        let magnitude = match *self {
            Load::Point { magnitude, .. } | Load::Uniform { magnitude, .. } => magnitude,
        };
        require_finite("load.magnitude", magnitude)?;
        if magnitude < 0.0 {
            return Err(CalcError::invalid_input(
                "load.magnitude",
                magnitude.to_string(),
                "Load magnitude must be zero or positive (downward)",
            ));
        }

        let on_beam = |x: f64| x.is_finite() && (0.0..=length).contains(&x);

        match *self {
            Load::Point { position, .. } => {
                if !on_beam(position) {
                    return Err(CalcError::invalid_load_position(
                        position,
                        format!("Point load must lie within [0, {}]", length),
                    ));
                }
            }
            Load::Uniform { start, end, .. } => {
                for x in [start, end] {
                    if !on_beam(x) {
                        return Err(CalcError::invalid_load_position(
                            x,
                            format!("Distributed load must lie within [0, {}]", length),
                        ));
                    }
                }
                if end < start {
                    return Err(CalcError::invalid_load_position(
                        end,
                        format!("Distributed load ends before it starts ({})", start),
                    ));
                }
            }
        }
        Ok(())
    }
}
