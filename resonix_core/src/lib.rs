//! # resonix_core - Dynamic Modulus Calculation Engine
//!
//! `resonix_core` computes the dynamic elastic moduli of concrete test
//! specimens from their fundamental resonant frequencies, per ASTM C215:
//! longitudinal and transverse modulus of elasticity, torsional modulus of
//! rigidity, and the derived Poisson's ratio.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **SI throughout**: Formulas take meters/kilograms/hertz, return pascals
//!
//! ## Quick Start
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
//! println!("E = {:.3} GPa", result.modulus_gigapascals().0);
//! ```
//!
//! ## Modules
//!
//! - [`specimen`] - Specimen geometry (shape-tagged cross-sections)
//! - [`calculations`] - Per-mode modulus calculations and the unified suite
//! - [`equations`] - Raw resonance formulas and the equation registry
//! - [`session`] - Test session container, metadata, and settings
//! - [`series`] - Chart-ready result series
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Session files with atomic saves and locking
//! - [`report`] - PDF report generation

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod report;
pub mod series;
pub mod session;
pub mod specimen;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{ModulusResult, VibrationMode};
pub use equations::poissons_ratio;
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_session, save_session, FileLock};
pub use session::{SpecimenRecord, TestSession};
pub use specimen::{CrossSection, SpecimenGeometry};
