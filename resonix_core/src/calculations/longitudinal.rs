//! # Longitudinal Modulus Calculation
//!
//! Dynamic modulus of elasticity from the fundamental longitudinal resonant
//! frequency, per ASTM C215. The longitudinal formula depends only on
//! length, frequency, and density, so it takes no shape dispatch - the same
//! formula covers beam and cylinder specimens.
//!
//! ## Example
//!
//! ```rust
//! use resonix_core::calculations::longitudinal::{calculate, LongitudinalInput};
//!
//! let input = LongitudinalInput {
//!     label: "P-1".to_string(),
//!     length_m: 0.4,
//!     frequency_hz: 8000.0,
//!     density_kg_m3: 2400.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.modulus_pa - 9.8304e10).abs() < 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{ModulusResult, VibrationMode};
use crate::equations::resonance;
use crate::errors::{CalcError, CalcResult};

/// Input parameters for a longitudinal resonance test.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "P-1",
///   "length_m": 0.4,
///   "frequency_hz": 8000.0,
///   "density_kg_m3": 2400.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongitudinalInput {
    /// User label for this specimen (e.g., "P-1", "Batch 3 prism")
    pub label: String,

    /// Specimen length (m)
    pub length_m: f64,

    /// Fundamental longitudinal frequency (Hz)
    pub frequency_hz: f64,

    /// Specimen density (kg/m³)
    pub density_kg_m3: f64,
}

impl LongitudinalInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        if self.frequency_hz <= 0.0 {
            return Err(CalcError::invalid_input(
                "frequency_hz",
                self.frequency_hz.to_string(),
                "Frequency must be positive",
            ));
        }
        if self.density_kg_m3 <= 0.0 {
            return Err(CalcError::invalid_input(
                "density_kg_m3",
                self.density_kg_m3.to_string(),
                "Density must be positive",
            ));
        }
        Ok(())
    }
}

/// Calculate the longitudinal dynamic modulus of elasticity.
///
/// # Returns
///
/// * `Ok(ModulusResult)` - Modulus in Pa with the input frequency echoed
/// * `Err(CalcError)` - Structured error if inputs are invalid
pub fn calculate(input: &LongitudinalInput) -> CalcResult<ModulusResult> {
    input.validate()?;

    let modulus_pa =
        resonance::longitudinal_modulus(input.length_m, input.frequency_hz, input.density_kg_m3);

    Ok(ModulusResult {
        mode: VibrationMode::Longitudinal,
        frequency_hz: input.frequency_hz,
        modulus_pa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> LongitudinalInput {
        LongitudinalInput {
            label: "Test Prism".to_string(),
            length_m: 0.4,
            frequency_hz: 8000.0,
            density_kg_m3: 2400.0,
        }
    }

    #[test]
    fn test_known_value() {
        // E = 4 × 0.4² × 8000² × 2400 = 98.304 GPa
        let result = calculate(&test_input()).unwrap();
        assert_eq!(result.mode, VibrationMode::Longitudinal);
        assert_eq!(result.frequency_hz, 8000.0);
        assert!((result.modulus_pa - 9.8304e10).abs() < 1.0);
        assert!((result.modulus_gigapascals().0 - 98.304).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic_in_each_argument() {
        let base = calculate(&test_input()).unwrap().modulus_pa;

        let mut longer = test_input();
        longer.length_m = 0.5;
        assert!(calculate(&longer).unwrap().modulus_pa > base);

        let mut faster = test_input();
        faster.frequency_hz = 9000.0;
        assert!(calculate(&faster).unwrap().modulus_pa > base);

        let mut denser = test_input();
        denser.density_kg_m3 = 2600.0;
        assert!(calculate(&denser).unwrap().modulus_pa > base);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        for field in ["length", "frequency", "density"] {
            let mut input = test_input();
            match field {
                "length" => input.length_m = 0.0,
                "frequency" => input.frequency_hz = -100.0,
                _ => input.density_kg_m3 = 0.0,
            }
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: LongitudinalInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
