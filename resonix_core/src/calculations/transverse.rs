//! # Transverse Modulus Calculation
//!
//! Dynamic modulus of elasticity from the fundamental transverse (flexural)
//! resonant frequency, per ASTM C215. Dispatches on the specimen's
//! cross-section tag: prisms use the corrected beam formula, cylinders the
//! closed-form cylinder constant.
//!
//! ## Example
//!
//! ```rust
//! use resonix_core::calculations::transverse::{calculate, TransverseInput};
//! use resonix_core::specimen::SpecimenGeometry;
//!
//! let input = TransverseInput {
//!     label: "C-1".to_string(),
//!     geometry: SpecimenGeometry::cylinder(0.3, 12.72, 0.15),
//!     frequency_hz: 3200.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.modulus_pa > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{ModulusResult, VibrationMode};
use crate::equations::resonance;
use crate::errors::{CalcError, CalcResult};
use crate::specimen::{CrossSection, SpecimenGeometry};

/// Input parameters for a transverse resonance test.
///
/// ## JSON Example (Beam)
///
/// ```json
/// {
///   "label": "P-1",
///   "geometry": {
///     "length_m": 0.4,
///     "mass_kg": 2.5,
///     "section": { "shape": "Beam", "width_m": 0.1, "depth_m": 0.1 }
///   },
///   "frequency_hz": 5000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransverseInput {
    /// User label for this specimen
    pub label: String,

    /// Specimen geometry (the section tag selects the formula)
    pub geometry: SpecimenGeometry,

    /// Fundamental transverse frequency (Hz)
    pub frequency_hz: f64,
}

impl TransverseInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.geometry.validate()?;
        if self.frequency_hz <= 0.0 {
            return Err(CalcError::invalid_input(
                "frequency_hz",
                self.frequency_hz.to_string(),
                "Frequency must be positive",
            ));
        }
        Ok(())
    }
}

/// Calculate the transverse dynamic modulus of elasticity.
///
/// Formula selection is solely by the geometry's section tag; the tag is
/// authoritative regardless of any other fields present.
///
/// # Returns
///
/// * `Ok(ModulusResult)` - Modulus in Pa with the input frequency echoed
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &TransverseInput) -> CalcResult<ModulusResult> {
    input.validate()?;

    let geometry = &input.geometry;
    let modulus_pa = match geometry.section {
        CrossSection::Beam { width_m, depth_m } => resonance::transverse_beam_modulus(
            geometry.length_m,
            width_m,
            depth_m,
            geometry.mass_kg,
            input.frequency_hz,
        ),
        CrossSection::Cylinder { diameter_m } => resonance::transverse_cylinder_modulus(
            geometry.length_m,
            diameter_m,
            geometry.mass_kg,
            input.frequency_hz,
        ),
    };

    Ok(ModulusResult {
        mode: VibrationMode::Transverse,
        frequency_hz: input.frequency_hz,
        modulus_pa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beam_input() -> TransverseInput {
        TransverseInput {
            label: "Test Beam".to_string(),
            geometry: SpecimenGeometry::beam(0.4, 2.5, 0.1, 0.1),
            frequency_hz: 5000.0,
        }
    }

    fn cylinder_input() -> TransverseInput {
        TransverseInput {
            label: "Test Cylinder".to_string(),
            geometry: SpecimenGeometry::cylinder(0.3, 12.72, 0.15),
            frequency_hz: 3200.0,
        }
    }

    #[test]
    fn test_beam_known_value() {
        // C = 0.9464 × (0.4/0.1)² × (1 + 6.585 × 0.25²) = 21.374444
        // E = C × 2.5 × 5000² / (0.1 × 0.1³) ≈ 1.3359e13 Pa
        let result = calculate(&beam_input()).unwrap();
        assert_eq!(result.mode, VibrationMode::Transverse);
        assert!((result.modulus_pa - 1.3359028e13).abs() / 1.3359028e13 < 1e-6);
    }

    #[test]
    fn test_cylinder_known_value() {
        // E = 1.6067 × (0.3³/0.15⁴) × 12.72 × 3200² ≈ 1.1161e10 Pa
        let result = calculate(&cylinder_input()).unwrap();
        assert!((result.modulus_pa - 1.11614e10).abs() / 1.11614e10 < 1e-4);
    }

    #[test]
    fn test_dispatch_follows_section_tag() {
        // Same length, mass, and frequency; the section tag alone selects
        // the formula, so results must differ between shapes.
        let beam = TransverseInput {
            label: "A".to_string(),
            geometry: SpecimenGeometry::beam(0.3, 12.72, 0.15, 0.15),
            frequency_hz: 3200.0,
        };
        let cylinder = TransverseInput {
            label: "B".to_string(),
            geometry: SpecimenGeometry::cylinder(0.3, 12.72, 0.15),
            frequency_hz: 3200.0,
        };

        let e_beam = calculate(&beam).unwrap().modulus_pa;
        let e_cylinder = calculate(&cylinder).unwrap().modulus_pa;
        assert!((e_beam - e_cylinder).abs() / e_cylinder > 0.01);
    }

    #[test]
    fn test_density_not_required() {
        // Transverse mode never consumes density
        let mut input = beam_input();
        input.geometry.density_kg_m3 = None;
        assert!(calculate(&input).is_ok());
    }

    #[test]
    fn test_invalid_frequency() {
        let mut input = beam_input();
        input.frequency_hz = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_dimensions() {
        let input = TransverseInput {
            label: "Bad".to_string(),
            geometry: SpecimenGeometry::beam(0.4, 2.5, 0.1, -0.1),
            frequency_hz: 5000.0,
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = cylinder_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: TransverseInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
