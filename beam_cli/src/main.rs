//! # Beam Check CLI
//!
//! Runs one beam check from a JSON request file, or interactively with
//! prompted values when no file is given.
//!
//! ```text
//! beam_cli [--json] [request.json]
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

mod cli;

use std::fs::File;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use clap::Parser;

use beam_core::calculations::{calculate, BeamCheckInput, BeamCheckResult, SupportCondition};
use beam_core::loads::Load;
use beam_core::materials::{MaterialSpec, StandardMaterial};
use beam_core::section::CrossSection;
use beam_core::{CalcError, CalcResult};

use cli::Cli;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn load_request(path: &Path) -> CalcResult<BeamCheckInput> {
    let path_str = path.display().to_string();

    let mut file = File::open(path).map_err(|e| CalcError::file_error("open", &path_str, e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", &path_str, e.to_string()))?;

    BeamCheckInput::from_json(&contents)
}

/// Rectangular steel beam with a point load, values taken from the prompts
fn prompt_request() -> BeamCheckInput {
    println!("Beam Check CLI - Single-Span Statics");
    println!("====================================");
    println!();
    println!("No request file given. Enter values or press Enter for defaults.");
    println!();

    let length_mm = prompt_f64("Beam length (mm) [1000.0]: ", 1000.0);
    let cantilever = prompt_string("Support (ss/cantilever) [ss]: ", "ss").eq_ignore_ascii_case("cantilever");
    let magnitude = prompt_f64("Point load (N) [1000.0]: ", 1000.0);
    let position = prompt_f64(&format!("Load position (mm) [{:.1}]: ", length_mm / 2.0), length_mm / 2.0);
    let width = prompt_f64("Section width (mm) [100.0]: ", 100.0);
    let height = prompt_f64("Section height (mm) [200.0]: ", 200.0);
    let grade_text = prompt_string("Material grade [S235]: ", "S235");

    let grade = StandardMaterial::from_str_flexible(&grade_text).unwrap_or_else(|e| {
        log::warn!("{}; using S235", e);
        StandardMaterial::S235
    });

    let support = if cantilever {
        SupportCondition::Cantilever
    } else {
        SupportCondition::SimplySupported {
            left: 0.0,
            right: length_mm,
        }
    };

    BeamCheckInput {
        label: "CLI".to_string(),
        length_mm,
        support,
        load: Load::point(magnitude, position),
        section: CrossSection::Rectangular { width, height },
        material: MaterialSpec::Standard { grade },
        beam_density_kg_m3: None,
    }
}

fn print_summary(input: &BeamCheckInput, result: &BeamCheckResult) {
    println!("═══════════════════════════════════════");
    println!("  BEAM CHECK RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Length:   {:.1} mm", input.length_mm);
    println!("  Section:  {}", input.section.shape_name());
    println!("  Material: {}", input.material.label());
    println!();
    println!("Reactions (applied load):");
    println!("  R1 = {:.1} N", result.reaction_left_n);
    println!("  R2 = {:.1} N", result.reaction_right_n);
    println!("Reactions (with self-weight {:.1} N):", result.beam_weight_n);
    println!("  R1 = {:.1} N", result.support_reaction_left_n);
    println!("  R2 = {:.1} N", result.support_reaction_right_n);
    println!();
    println!("Demand:");
    println!(
        "  V_max = {:.1} N at {:.1} mm",
        result.max_shear_force_n, result.max_shear_position_mm
    );
    println!(
        "  M_max = {:.0} N·mm at {:.1} mm",
        result.max_bending_moment_nmm, result.max_moment_position_mm
    );
    println!();
    println!("Section:");
    println!("  A = {:.1} mm²", result.area_mm2);
    println!("  I = {:.4e} mm⁴", result.moment_of_inertia_mm4);
    println!("  Z = {:.4e} mm³", result.section_modulus_mm3);
    println!();
    println!("Stresses:");
    println!("  σ = {:.3} MPa", result.max_normal_stress_mpa);
    println!("  τ = {:.3} MPa", result.max_shear_stress_mpa);
    println!("  Centre of gravity at {:.1} mm", result.center_of_gravity_mm);
    println!();
    println!("═══════════════════════════════════════");
    match result.safety_factor.condition_code() {
        Some(code) => println!("  SAFETY FACTOR: undefined ({})", code),
        None => println!(
            "  SAFETY FACTOR: {:.2} {}",
            result.safety_factor.value(),
            status_icon(result.passes())
        ),
    }
    println!("═══════════════════════════════════════");
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let input = match &cli.request {
        Some(path) => match load_request(path) {
            Ok(input) => input,
            Err(e) => {
                report_error(&e);
                std::process::exit(1);
            }
        },
        None => prompt_request(),
    };

    log::info!("checking beam '{}'", input.label);

    match calculate(&input) {
        Ok(result) => {
            if !cli.json {
                println!();
                print_summary(&input, &result);
                println!();
                println!("JSON Output:");
            }
            match result.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    report_error(&e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
