//! # Resonix CLI Application
//!
//! Terminal interface for the ASTM C215 dynamic modulus calculator.
//! Prompts for a specimen's geometry and measured resonant frequencies,
//! then prints every computable modulus plus Poisson's ratio.

use std::io::{self, BufRead, Write};

use resonix_core::calculations::unified::{calculate, UnifiedInput};
use resonix_core::series::combined_points;
use resonix_core::specimen::SpecimenGeometry;

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

/// Prompt for an optional frequency; 0 means "not measured".
fn prompt_frequency(prompt: &str, default: f64) -> Option<f64> {
    let value = prompt_f64(prompt, default);
    if value > 0.0 {
        Some(value)
    } else {
        None
    }
}

fn prompt_shape() -> bool {
    print!("Specimen shape - [b]eam or [c]ylinder [b]: ");
    if io::stdout().flush().is_err() {
        return true;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return true;
    }

    !input.trim().eq_ignore_ascii_case("c")
}

fn main() {
    println!("Resonix CLI - ASTM C215 Dynamic Modulus Calculator");
    println!("==================================================");
    println!();

    let is_beam = prompt_shape();

    let length_m = prompt_f64("Specimen length (m) [0.4]: ", 0.4);
    let mass_kg = prompt_f64("Specimen mass (kg) [2.5]: ", 2.5);
    let density_kg_m3 = prompt_f64("Specimen density (kg/m3) [2400]: ", 2400.0);

    let geometry = if is_beam {
        let width_m = prompt_f64("Beam width (m) [0.1]: ", 0.1);
        let depth_m = prompt_f64("Beam depth (m) [0.1]: ", 0.1);
        SpecimenGeometry::beam(length_m, mass_kg, width_m, depth_m).with_density(density_kg_m3)
    } else {
        let diameter_m = prompt_f64("Cylinder diameter (m) [0.15]: ", 0.15);
        SpecimenGeometry::cylinder(length_m, mass_kg, diameter_m).with_density(density_kg_m3)
    };

    println!();
    println!("Enter measured fundamental frequencies (0 to skip a mode).");
    let f_longitudinal_hz = prompt_frequency("Longitudinal frequency (Hz) [8000]: ", 8000.0);
    let f_transverse_hz = prompt_frequency("Transverse frequency (Hz) [5000]: ", 5000.0);
    let f_torsional_hz = prompt_frequency("Torsional frequency (Hz) [7000]: ", 7000.0);

    let input = UnifiedInput {
        label: "CLI-Specimen".to_string(),
        geometry,
        f_longitudinal_hz,
        f_transverse_hz,
        f_torsional_hz,
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  DYNAMIC MODULUS RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Shape:   {}", input.geometry.shape_name());
            println!("  Length:  {:.3} m", input.geometry.length_m);
            println!("  Mass:    {:.3} kg", input.geometry.mass_kg);
            if let Some(density) = input.geometry.density_kg_m3 {
                println!("  Density: {:.0} kg/m3", density);
            }
            println!();
            println!("Moduli:");
            for row in combined_points(&result.results) {
                if let Some(gpa) = row.longitudinal_gpa {
                    println!("  Longitudinal (E): {:>10.3} GPa @ {:.0} Hz", gpa, row.frequency_hz);
                }
                if let Some(gpa) = row.transverse_gpa {
                    println!("  Transverse   (E): {:>10.3} GPa @ {:.0} Hz", gpa, row.frequency_hz);
                }
                if let Some(gpa) = row.torsional_gpa {
                    println!("  Torsional    (G): {:>10.3} GPa @ {:.0} Hz", gpa, row.frequency_hz);
                }
            }
            if let Some(mu) = result.poissons_ratio {
                println!();
                println!("  Poisson's ratio (μ): {:.4}", mu);
            }
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for scripting/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
