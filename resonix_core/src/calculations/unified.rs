//! # Unified Specimen Calculation
//!
//! Runs the full resonance test suite for a single specimen: whichever of
//! the three fundamental frequencies were measured are turned into moduli,
//! and Poisson's ratio is derived whenever both the longitudinal and
//! torsional results are available.
//!
//! ## Example
//!
//! ```rust
//! use resonix_core::calculations::unified::{calculate, UnifiedInput};
//! use resonix_core::specimen::SpecimenGeometry;
//!
//! let input = UnifiedInput {
//!     label: "P-1".to_string(),
//!     geometry: SpecimenGeometry::beam(0.4, 2.5, 0.1, 0.1).with_density(2400.0),
//!     f_longitudinal_hz: Some(8000.0),
//!     f_transverse_hz: Some(5000.0),
//!     f_torsional_hz: Some(7000.0),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.results.len(), 3);
//! assert!(result.poissons_ratio.is_some());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{longitudinal, torsional, transverse};
use crate::calculations::{
    LongitudinalInput, ModulusResult, TorsionalInput, TransverseInput, VibrationMode,
};
use crate::equations::resonance;
use crate::errors::{CalcError, CalcResult};
use crate::specimen::SpecimenGeometry;

/// Input parameters for a full specimen test suite.
///
/// Each frequency is optional; `None` means that mode was not measured.
/// The longitudinal path requires the geometry to carry a measured density.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "geometry": {
///     "length_m": 0.3,
///     "mass_kg": 12.72,
///     "density_kg_m3": 2400.0,
///     "section": { "shape": "Cylinder", "diameter_m": 0.15 }
///   },
///   "f_longitudinal_hz": 7500.0,
///   "f_torsional_hz": 363.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedInput {
    /// User label for this specimen
    pub label: String,

    /// Specimen geometry
    pub geometry: SpecimenGeometry,

    /// Fundamental longitudinal frequency (Hz), if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f_longitudinal_hz: Option<f64>,

    /// Fundamental transverse frequency (Hz), if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f_transverse_hz: Option<f64>,

    /// Fundamental torsional frequency (Hz), if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f_torsional_hz: Option<f64>,
}

impl UnifiedInput {
    /// True if at least one frequency was measured.
    pub fn has_measurements(&self) -> bool {
        self.f_longitudinal_hz.is_some()
            || self.f_transverse_hz.is_some()
            || self.f_torsional_hz.is_some()
    }
}

/// Results for a full specimen test suite.
///
/// One [`ModulusResult`] per measured frequency, in mode order, plus the
/// derived Poisson's ratio when both E (longitudinal) and G (torsional)
/// are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedResult {
    /// Computed moduli, one per measured mode
    pub results: Vec<ModulusResult>,

    /// Poisson's ratio μ = E/(2G) − 1, when E and G are both available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poissons_ratio: Option<f64>,
}

impl UnifiedResult {
    /// Get the result for a specific mode, if it was computed.
    pub fn for_mode(&self, mode: VibrationMode) -> Option<&ModulusResult> {
        self.results.iter().find(|r| r.mode == mode)
    }
}

/// Run every available modulus calculation for one specimen.
///
/// # Returns
///
/// * `Ok(UnifiedResult)` - One result per measured frequency
/// * `Err(CalcError)` - First validation failure encountered, or
///   `InvalidInput` when no frequency was measured at all
pub fn calculate(input: &UnifiedInput) -> CalcResult<UnifiedResult> {
    if !input.has_measurements() {
        return Err(CalcError::invalid_input(
            "frequencies",
            "none",
            "At least one resonant frequency must be measured",
        ));
    }

    let mut results = Vec::new();

    if let Some(frequency_hz) = input.f_longitudinal_hz {
        let density_kg_m3 = input.geometry.density_for("longitudinal")?;
        results.push(longitudinal::calculate(&LongitudinalInput {
            label: input.label.clone(),
            length_m: input.geometry.length_m,
            frequency_hz,
            density_kg_m3,
        })?);
    }

    if let Some(frequency_hz) = input.f_transverse_hz {
        results.push(transverse::calculate(&TransverseInput {
            label: input.label.clone(),
            geometry: input.geometry.clone(),
            frequency_hz,
        })?);
    }

    if let Some(frequency_hz) = input.f_torsional_hz {
        results.push(torsional::calculate(&TorsionalInput {
            label: input.label.clone(),
            geometry: input.geometry.clone(),
            frequency_hz,
        })?);
    }

    let e_longitudinal = results
        .iter()
        .find(|r| r.mode == VibrationMode::Longitudinal)
        .map(|r| r.modulus_pa);
    let g_torsional = results
        .iter()
        .find(|r| r.mode == VibrationMode::Torsional)
        .map(|r| r.modulus_pa);

    let poissons_ratio = match (e_longitudinal, g_torsional) {
        (Some(e), Some(g)) => Some(resonance::poissons_ratio(e, g)),
        _ => None,
    };

    Ok(UnifiedResult {
        results,
        poissons_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specimen;

    fn beam_input() -> UnifiedInput {
        UnifiedInput {
            label: "P-1".to_string(),
            geometry: specimen::example_beam(),
            f_longitudinal_hz: Some(8000.0),
            f_transverse_hz: Some(5000.0),
            f_torsional_hz: Some(7000.0),
        }
    }

    #[test]
    fn test_full_suite() {
        let result = calculate(&beam_input()).unwrap();
        assert_eq!(result.results.len(), 3);
        assert!(result.for_mode(VibrationMode::Longitudinal).is_some());
        assert!(result.for_mode(VibrationMode::Transverse).is_some());
        assert!(result.for_mode(VibrationMode::Torsional).is_some());
        assert!(result.poissons_ratio.is_some());
    }

    #[test]
    fn test_partial_suite_no_poisson() {
        let mut input = beam_input();
        input.f_torsional_hz = None;

        let result = calculate(&input).unwrap();
        assert_eq!(result.results.len(), 2);
        assert!(result.poissons_ratio.is_none());
    }

    #[test]
    fn test_no_measurements_rejected() {
        let input = UnifiedInput {
            label: "Empty".to_string(),
            geometry: specimen::example_beam(),
            f_longitudinal_hz: None,
            f_transverse_hz: None,
            f_torsional_hz: None,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_longitudinal_requires_density() {
        let mut input = beam_input();
        input.geometry.density_kg_m3 = None;
        input.f_transverse_hz = None;
        input.f_torsional_hz = None;

        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_transverse_only_works_without_density() {
        let mut input = beam_input();
        input.geometry.density_kg_m3 = None;
        input.f_longitudinal_hz = None;
        input.f_torsional_hz = None;

        let result = calculate(&input).unwrap();
        assert_eq!(result.results.len(), 1);
    }

    #[test]
    fn test_poissons_ratio_typical_concrete_range() {
        // Density-consistent 150×300 mm cylinder (mass = ρ·V ≈ 12.72 kg)
        // with a frequency pair whose E/G ratio lands in the documented
        // concrete range of 0.15-0.25.
        let geometry =
            SpecimenGeometry::cylinder(0.3, 12.7234, 0.15).with_density(2400.0);
        let input = UnifiedInput {
            label: "C-1".to_string(),
            geometry,
            f_longitudinal_hz: Some(7500.0),
            f_transverse_hz: None,
            f_torsional_hz: Some(363.0),
        };

        let result = calculate(&input).unwrap();
        let mu = result.poissons_ratio.unwrap();
        assert!(
            (0.15..=0.25).contains(&mu),
            "Poisson's ratio {mu} outside typical concrete range"
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = beam_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: UnifiedInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: UnifiedResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
