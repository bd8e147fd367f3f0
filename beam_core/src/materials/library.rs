//! Standard Materials Library
//!
//! Nominal properties for common structural materials. Yield strengths are
//! the minimum specified values for the thinnest product range of each
//! standard; use a custom material when thicker plate or a certificate
//! value applies.
//!
//! ## Data Sources
//!
//! - EN 10025-2 (S235, S275, S355), EN 1993-1-1 §3.2.6 (E = 210 GPa)
//! - ASTM A36, ASTM A992
//! - ASTM B209 / Aluminum Design Manual (6061-T6)
//! - EN 10088-2 (1.4301 / 304 stainless)
//! - EN 338 (C24 timber: bending strength used as "yield")

use serde::{Deserialize, Serialize};

use super::Material;
use crate::errors::{CalcError, CalcResult};

/// Built-in material grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardMaterial {
    /// Structural steel S235
    S235,
    /// Structural steel S275
    S275,
    /// Structural steel S355
    S355,
    /// Carbon steel ASTM A36
    #[serde(rename = "A36")]
    AstmA36,
    /// Wide-flange steel ASTM A992
    #[serde(rename = "A992")]
    AstmA992,
    /// Aluminium alloy 6061-T6
    #[serde(rename = "6061-T6")]
    Aluminum6061T6,
    /// Austenitic stainless steel 304 (1.4301)
    #[serde(rename = "304")]
    Stainless304,
    /// Softwood timber strength class C24
    C24,
}

impl StandardMaterial {
    /// All grades for UI selection
    pub const ALL: [StandardMaterial; 8] = [
        StandardMaterial::S235,
        StandardMaterial::S275,
        StandardMaterial::S355,
        StandardMaterial::AstmA36,
        StandardMaterial::AstmA992,
        StandardMaterial::Aluminum6061T6,
        StandardMaterial::Stainless304,
        StandardMaterial::C24,
    ];

    /// Short code as used in requests (e.g., "S355", "6061-T6")
    pub fn code(&self) -> &'static str {
        match self {
            StandardMaterial::S235 => "S235",
            StandardMaterial::S275 => "S275",
            StandardMaterial::S355 => "S355",
            StandardMaterial::AstmA36 => "A36",
            StandardMaterial::AstmA992 => "A992",
            StandardMaterial::Aluminum6061T6 => "6061-T6",
            StandardMaterial::Stainless304 => "304",
            StandardMaterial::C24 => "C24",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_'], "-").as_str() {
            "S235" | "S235JR" => Ok(StandardMaterial::S235),
            "S275" | "S275JR" => Ok(StandardMaterial::S275),
            "S355" | "S355JR" | "S355J2" => Ok(StandardMaterial::S355),
            "A36" | "ASTM-A36" => Ok(StandardMaterial::AstmA36),
            "A992" | "ASTM-A992" => Ok(StandardMaterial::AstmA992),
            "6061-T6" | "AL-6061-T6" | "6061" => Ok(StandardMaterial::Aluminum6061T6),
            "304" | "SS304" | "1.4301" => Ok(StandardMaterial::Stainless304),
            "C24" => Ok(StandardMaterial::C24),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            StandardMaterial::S235 => "Steel S235",
            StandardMaterial::S275 => "Steel S275",
            StandardMaterial::S355 => "Steel S355",
            StandardMaterial::AstmA36 => "Steel ASTM A36",
            StandardMaterial::AstmA992 => "Steel ASTM A992",
            StandardMaterial::Aluminum6061T6 => "Aluminium 6061-T6",
            StandardMaterial::Stainless304 => "Stainless 304",
            StandardMaterial::C24 => "Timber C24",
        }
    }

    /// Nominal properties
    pub fn properties(&self) -> Material {
        let (yield_strength_mpa, elastic_modulus_gpa, density_kg_m3) = match self {
            StandardMaterial::S235 => (235.0, 210.0, 7850.0),
            StandardMaterial::S275 => (275.0, 210.0, 7850.0),
            StandardMaterial::S355 => (355.0, 210.0, 7850.0),
            StandardMaterial::AstmA36 => (250.0, 200.0, 7850.0),
            StandardMaterial::AstmA992 => (345.0, 200.0, 7850.0),
            StandardMaterial::Aluminum6061T6 => (276.0, 68.9, 2700.0),
            StandardMaterial::Stainless304 => (215.0, 193.0, 8000.0),
            StandardMaterial::C24 => (24.0, 11.0, 420.0),
        };
        Material {
            yield_strength_mpa,
            elastic_modulus_gpa,
            density_kg_m3,
        }
    }
}
