//! # Beam Statics Formulas
//!
//! Closed-form reaction formulas for a single load on a single span.
//!
//! ## Sign Convention
//!
//! - Loads: positive downward (gravity direction)
//! - Reactions: positive upward
//! - Positions: measured from the left end of the beam, not from a support
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Structural Analysis by R.C. Hibbeler

// =============================================================================
// SIMPLY-SUPPORTED (SUPPORTS ANYWHERE ALONG THE BEAM)
// =============================================================================

/// Reactions for point load P at position x on supports at positions a and b
///
/// ```text
///            P
///            ↓
///    ────────┬────────────────
///        △   x          △
///        a              b
///       R1             R2
/// ```
///
/// # Formulas (moment balance about each support)
/// - R1 = P(b - x)/(b - a)
/// - R2 = P(x - a)/(b - a)
///
/// Loads outside [a, b] (overhangs) give a negative reaction at the far
/// support. The caller guarantees b != a.
///
/// # Example
/// ```rust
/// use beam_core::equations::beam::point_load_reactions;
///
/// let (r1, r2) = point_load_reactions(1000.0, 0.3, 0.0, 1.0);
/// assert!((r1 - 700.0).abs() < 1e-9);
/// assert!((r2 - 300.0).abs() < 1e-9);
/// ```
#[inline]
pub fn point_load_reactions(p: f64, x: f64, a: f64, b: f64) -> (f64, f64) {
    let support_span = b - a;
    let r1 = p * (b - x) / support_span;
    let r2 = p * (x - a) / support_span;
    (r1, r2)
}

/// Reactions for uniform load w from s to e on supports at a and b
///
/// ```text
///          ↓↓↓↓↓↓↓↓↓ w
///    ══════════════════════
///        △ s       e    △
///        a              b
/// ```
///
/// # Formulas
/// Total load W = w(e - s), centroid c = (s + e)/2, then the point-load
/// formulas with P = W at x = c.
#[inline]
pub fn partial_uniform_reactions(w: f64, s: f64, e: f64, a: f64, b: f64) -> (f64, f64) {
    let total_load = w * (e - s);
    let centroid = (s + e) / 2.0;
    point_load_reactions(total_load, centroid, a, b)
}

// =============================================================================
// CANTILEVER (FIXED AT x = 0, FREE AT x = L)
// =============================================================================

/// Vertical reaction at the fixed end for a point load P
///
/// ```text
///    ▌           P
///    ▌           ↓
///    ▌═══════════┬═════
///    ▌           x
/// ```
///
/// # Formula
/// R = P
#[inline]
pub fn cantilever_point_reaction(p: f64) -> f64 {
    p
}

/// Vertical reaction at the fixed end for a uniform load w from s to e
///
/// # Formula
/// R = w(e - s)
#[inline]
pub fn cantilever_uniform_reaction(w: f64, s: f64, e: f64) -> f64 {
    w * (e - s)
}

/// Fixed-end moment magnitude for a resultant W acting at distance c from the wall
///
/// # Formula
/// M = W·c
#[inline]
pub fn cantilever_fixed_end_moment(total_load: f64, c: f64) -> f64 {
    total_load * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_load_midspan() {
        let (r1, r2) = point_load_reactions(1000.0, 0.5, 0.0, 1.0);
        assert_relative_eq!(r1, 500.0);
        assert_relative_eq!(r2, 500.0);
    }

    #[test]
    fn test_point_load_inset_supports() {
        // Supports at 1 and 4, load at 2: R1 = P*2/3, R2 = P*1/3
        let (r1, r2) = point_load_reactions(900.0, 2.0, 1.0, 4.0);
        assert_relative_eq!(r1, 600.0, epsilon = 1e-9);
        assert_relative_eq!(r2, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_overhang_load_lifts_far_support() {
        // Load at 5 beyond right support at 4
        let (r1, r2) = point_load_reactions(300.0, 5.0, 1.0, 4.0);
        assert!(r1 < 0.0);
        assert_relative_eq!(r1 + r2, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_partial_uniform_reactions() {
        // 100 N/m from 2 to 8 on supports 0/10: W = 600 at c = 5
        let (r1, r2) = partial_uniform_reactions(100.0, 2.0, 8.0, 0.0, 10.0);
        assert_relative_eq!(r1, 300.0, epsilon = 1e-9);
        assert_relative_eq!(r2, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cantilever_reactions() {
        assert_eq!(cantilever_point_reaction(250.0), 250.0);
        assert_relative_eq!(cantilever_uniform_reaction(10_000.0, 0.0, 1.0), 10_000.0);
        assert_relative_eq!(cantilever_fixed_end_moment(10_000.0, 0.5), 5_000.0);
    }
}
