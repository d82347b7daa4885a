//! # Modulus Calculations
//!
//! This module contains the per-mode modulus calculations. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `calculate(input) -> Result<ModulusResult, CalcError>` - Pure calculation function
//!
//! All three modes produce the shared [`ModulusResult`]; the modulus is
//! always in pascals, and display conversion is left to the caller.
//!
//! ## Available Calculations
//!
//! - [`longitudinal`] - Longitudinal modulus of elasticity (shape-independent)
//! - [`transverse`] - Transverse modulus of elasticity (beam or cylinder)
//! - [`torsional`] - Torsional modulus of rigidity (beam or cylinder)
//! - [`unified`] - Full test suite for one specimen, including Poisson's ratio

pub mod longitudinal;
pub mod torsional;
pub mod transverse;
pub mod unified;

use serde::{Deserialize, Serialize};

use crate::units::{Gigapascals, Pascals};

// Re-export commonly used types
pub use longitudinal::LongitudinalInput;
pub use torsional::TorsionalInput;
pub use transverse::TransverseInput;
pub use unified::{UnifiedInput, UnifiedResult};

/// Vibration mode of a resonance test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VibrationMode {
    /// Axial vibration along the specimen length
    Longitudinal,
    /// Flexural vibration perpendicular to the specimen length
    Transverse,
    /// Twisting vibration about the specimen axis
    Torsional,
}

impl VibrationMode {
    /// Display name for reports and tables
    pub fn display_name(&self) -> &'static str {
        match self {
            VibrationMode::Longitudinal => "Longitudinal",
            VibrationMode::Transverse => "Transverse",
            VibrationMode::Torsional => "Torsional",
        }
    }

    /// Conventional symbol for the modulus this mode yields
    pub fn modulus_symbol(&self) -> &'static str {
        match self {
            VibrationMode::Longitudinal | VibrationMode::Transverse => "E",
            VibrationMode::Torsional => "G",
        }
    }
}

/// Result of a single modulus calculation.
///
/// Created fresh per calculation call; immutable; no identity beyond its
/// field values. The input frequency is echoed for provenance.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mode": "Longitudinal",
///   "frequency_hz": 8000.0,
///   "modulus_pa": 98304000000.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModulusResult {
    /// Vibration mode this result was computed from
    pub mode: VibrationMode,

    /// Resonant frequency used as input (Hz)
    pub frequency_hz: f64,

    /// Computed modulus (Pa)
    pub modulus_pa: f64,
}

impl ModulusResult {
    /// The modulus in display-friendly gigapascals.
    pub fn modulus_gigapascals(&self) -> Gigapascals {
        Pascals(self.modulus_pa).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_symbols() {
        assert_eq!(VibrationMode::Longitudinal.modulus_symbol(), "E");
        assert_eq!(VibrationMode::Transverse.modulus_symbol(), "E");
        assert_eq!(VibrationMode::Torsional.modulus_symbol(), "G");
    }

    #[test]
    fn test_result_display_conversion() {
        let result = ModulusResult {
            mode: VibrationMode::Longitudinal,
            frequency_hz: 8000.0,
            modulus_pa: 9.8304e10,
        };
        assert!((result.modulus_gigapascals().0 - 98.304).abs() < 1e-9);
    }

    #[test]
    fn test_result_serialization() {
        let result = ModulusResult {
            mode: VibrationMode::Torsional,
            frequency_hz: 6500.0,
            modulus_pa: 2.2952e12,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"mode\":\"Torsional\""));
        assert!(json.contains("frequency_hz"));

        let roundtrip: ModulusResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
