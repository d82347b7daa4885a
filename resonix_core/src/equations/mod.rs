//! # Resonance Equations
//!
//! All fundamental resonance formulas used in calculations live in this
//! module. Having the full (vibration mode × specimen shape) formula table
//! in one place enables:
//! - Easy verification against the standard (ASTM C215)
//! - Documentation of the polynomial correction-factor approximations
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`resonance`] - Modulus formulas and geometry factors (pure functions)
//! - [`registry`] - Equation metadata and tracking for PDF appendix generation
//!
//! ## References
//!
//! - ASTM C215-14: Standard Test Method for Fundamental Transverse,
//!   Longitudinal, and Torsional Resonant Frequencies of Concrete Specimens

pub mod registry;
pub mod resonance;

// Re-export commonly used items
pub use resonance::{
    longitudinal_modulus,
    poissons_ratio,
    torsional_beam_modulus,
    torsional_cylinder_modulus,
    torsional_shape_factor,
    transverse_beam_modulus,
    transverse_correction_factor,
    transverse_cylinder_modulus,
};

pub use registry::{
    generate_equations_markdown,
    generate_static_equations_appendix_typst,
    specimen_equations,
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
};
