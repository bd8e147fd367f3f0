//! # Cross-Sections
//!
//! The four supported cross-section shapes and their geometric properties.
//! A [`CrossSection`] is validated before any property is computed, so a
//! degenerate section (zero width, flanges thicker than half the height)
//! produces an `INVALID_GEOMETRY` error instead of negative inertia.
//!
//! ## JSON
//!
//! Sections serialize with a `"shape"` discriminator; unknown shapes are
//! rejected at deserialization rather than falling back to a rectangle.
//!
//! ```json
//! { "shape": "Rectangular", "width": 100.0, "height": 200.0 }
//! { "shape": "IBeam", "flange_width": 100.0, "flange_thickness": 8.5,
//!   "web_thickness": 5.6, "height": 200.0 }
//! { "shape": "Circular", "diameter": 60.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::section::CrossSection;
//!
//! let section = CrossSection::Rectangular { width: 0.1, height: 0.2 };
//! let props = section.properties().unwrap();
//! assert!((props.moment_of_inertia - 6.6667e-5).abs() < 1e-8);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section as eq;
use crate::errors::{CalcError, CalcResult};

/// Cross-section shape with its dimensions.
///
/// Lengths are in whatever unit the caller works in; the engine itself works
/// in metres, and [`CrossSection::scaled`] converts from request units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum CrossSection {
    /// Solid rectangle
    Rectangular { width: f64, height: f64 },

    /// Doubly-symmetric I-beam (equal flanges)
    IBeam {
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
        height: f64,
    },

    /// Channel (flanges on one side of the web)
    CChannel {
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
        height: f64,
    },

    /// Solid circle
    Circular { diameter: f64 },
}

/// Geometric properties of a cross-section about its strong axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area A
    pub area: f64,
    /// Second moment of area I
    pub moment_of_inertia: f64,
    /// Elastic section modulus Z = I/c
    pub section_modulus: f64,
}

impl CrossSection {
    /// Display name used in errors and summaries
    pub fn shape_name(&self) -> &'static str {
        match self {
            CrossSection::Rectangular { .. } => "Rectangular",
            CrossSection::IBeam { .. } => "I-Beam",
            CrossSection::CChannel { .. } => "C-Channel",
            CrossSection::Circular { .. } => "Circular",
        }
    }

    /// Overall depth in the bending direction
    pub fn depth(&self) -> f64 {
        match *self {
            CrossSection::Rectangular { height, .. }
            | CrossSection::IBeam { height, .. }
            | CrossSection::CChannel { height, .. } => height,
            CrossSection::Circular { diameter } => diameter,
        }
    }

    /// Multiply every dimension by `factor` (e.g. 0.001 for mm → m)
    pub fn scaled(&self, factor: f64) -> Self {
        match *self {
            CrossSection::Rectangular { width, height } => CrossSection::Rectangular {
                width: width * factor,
                height: height * factor,
            },
            CrossSection::IBeam {
                flange_width,
                flange_thickness,
                web_thickness,
                height,
            } => CrossSection::IBeam {
                flange_width: flange_width * factor,
                flange_thickness: flange_thickness * factor,
                web_thickness: web_thickness * factor,
                height: height * factor,
            },
            CrossSection::CChannel {
                flange_width,
                flange_thickness,
                web_thickness,
                height,
            } => CrossSection::CChannel {
                flange_width: flange_width * factor,
                flange_thickness: flange_thickness * factor,
                web_thickness: web_thickness * factor,
                height: height * factor,
            },
            CrossSection::Circular { diameter } => CrossSection::Circular {
                diameter: diameter * factor,
            },
        }
    }

    /// Named dimensions, in declaration order
    fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            CrossSection::Rectangular { width, height } => vec![("width", width), ("height", height)],
            CrossSection::IBeam {
                flange_width,
                flange_thickness,
                web_thickness,
                height,
            }
            | CrossSection::CChannel {
                flange_width,
                flange_thickness,
                web_thickness,
                height,
            } => vec![
                ("flange_width", flange_width),
                ("flange_thickness", flange_thickness),
                ("web_thickness", web_thickness),
                ("height", height),
            ],
            CrossSection::Circular { diameter } => vec![("diameter", diameter)],
        }
    }

    /// Validate dimensions.
    ///
    /// Every dimension must be finite and positive. Flanged sections also need
    /// a positive web height (tf < h/2) and a web no wider than the flanges.
    pub fn validate(&self) -> CalcResult<()> {
        let shape = self.shape_name();

        for (name, value) in self.dimensions() {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_geometry(
                    shape,
                    name,
                    value,
                    "Dimension must be a positive number",
                ));
            }
        }

        match *self {
            CrossSection::IBeam {
                flange_width,
                flange_thickness,
                web_thickness,
                height,
            }
            | CrossSection::CChannel {
                flange_width,
                flange_thickness,
                web_thickness,
                height,
            } => {
                if eq::web_height(height, flange_thickness) <= 0.0 {
                    return Err(CalcError::invalid_geometry(
                        shape,
                        "flange_thickness",
                        flange_thickness,
                        format!("Flanges leave no web: thickness must be less than half the height ({})", height),
                    ));
                }
                if web_thickness > height / 2.0 {
                    return Err(CalcError::invalid_geometry(
                        shape,
                        "web_thickness",
                        web_thickness,
                        format!("Web thickness must not exceed half the height ({})", height),
                    ));
                }
                if web_thickness > flange_width {
                    return Err(CalcError::invalid_geometry(
                        shape,
                        "web_thickness",
                        web_thickness,
                        format!("Web is wider than the flanges ({})", flange_width),
                    ));
                }
                Ok(())
            }
            CrossSection::Rectangular { .. } | CrossSection::Circular { .. } => Ok(()),
        }
    }

    /// Compute area, moment of inertia and section modulus.
    ///
    /// # Errors
    /// `InvalidGeometry` when [`CrossSection::validate`] fails.
    pub fn properties(&self) -> CalcResult<SectionProperties> {
        self.validate()?;

        let (area, moment_of_inertia) = match *self {
            CrossSection::Rectangular { width, height } => (
                eq::rectangular_area(width, height),
                eq::rectangular_moment_of_inertia(width, height),
            ),
            CrossSection::IBeam {
                flange_width,
                flange_thickness,
                web_thickness,
                height,
            } => (
                eq::flanged_area(flange_width, flange_thickness, web_thickness, height),
                eq::i_beam_moment_of_inertia(flange_width, flange_thickness, web_thickness, height),
            ),
            CrossSection::CChannel {
                flange_width,
                flange_thickness,
                web_thickness,
                height,
            } => (
                eq::flanged_area(flange_width, flange_thickness, web_thickness, height),
                eq::c_channel_moment_of_inertia(flange_width, flange_thickness, web_thickness, height),
            ),
            CrossSection::Circular { diameter } => (
                eq::circular_area(diameter),
                eq::circular_moment_of_inertia(diameter),
            ),
        };

        let section_modulus = eq::section_modulus(moment_of_inertia, self.depth() / 2.0);

        log::debug!(
            "{} section: A = {:.6e}, I = {:.6e}, Z = {:.6e}",
            self.shape_name(),
            area,
            moment_of_inertia,
            section_modulus
        );

        Ok(SectionProperties {
            area,
            moment_of_inertia,
            section_modulus,
        })
    }
}
