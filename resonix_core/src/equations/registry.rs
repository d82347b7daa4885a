//! # Equation Registry
//!
//! Central registry of the resonance formulas used in calculations. The
//! mapping from (vibration mode, specimen shape) to formula lives here in
//! one auditable place; each entry carries full metadata including the
//! standard reference, formulas, and variable definitions.
//!
//! ## Usage
//!
//! ```rust
//! use resonix_core::equations::registry::{Equation, EquationUsage};
//!
//! // Track equation usage during calculation
//! let usage = EquationUsage::new(Equation::LongitudinalModulus, "Specimen P-1");
//!
//! // Get metadata for PDF appendix
//! let meta = Equation::LongitudinalModulus.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a test standard or source text.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// ASTM C215 - Standard Test Method for Fundamental Transverse,
    /// Longitudinal, and Torsional Resonant Frequencies of Concrete Specimens
    AstmC215 { year: u16, section: &'static str },
    /// Fundamental elasticity theory (no specific standard reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in PDF reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::AstmC215 { year, section } => {
                format!("ASTM C215-{} {}", year % 100, section)
            }
            CodeReference::Mechanics => "Theory of Elasticity".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::AstmC215 { .. } => "ASTM C215",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the PDF appendix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Dynamic modulus of elasticity (longitudinal/transverse modes)
    ElasticModulus,
    /// Dynamic modulus of rigidity (torsional mode)
    RigidityModulus,
    /// Geometry-dependent correction and shape factors
    CorrectionFactors,
    /// Quantities derived from already-computed moduli
    DerivedRatios,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::ElasticModulus => "Dynamic Modulus of Elasticity",
            EquationCategory::RigidityModulus => "Dynamic Modulus of Rigidity",
            EquationCategory::CorrectionFactors => "Correction Factors",
            EquationCategory::DerivedRatios => "Derived Ratios",
        }
    }

    /// Sort order for PDF appendix (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::CorrectionFactors => 1,
            EquationCategory::ElasticModulus => 2,
            EquationCategory::RigidityModulus => 3,
            EquationCategory::DerivedRatios => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "E", "L", "n")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "Pa", "m", "Hz")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self {
            symbol,
            description,
            units,
        }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a resonance equation.
///
/// This struct contains everything needed to:
/// - Display the equation in a PDF report
/// - Document its source for audit purposes
/// - Explain its variables and assumptions
/// - Generate markdown documentation for auditability
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Longitudinal Modulus of Elasticity")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in Typst math notation for PDF rendering
    pub formula_typst: &'static str,
    /// The formula in plain text for markdown (human-readable)
    pub formula_plain: &'static str,
    /// Standard reference
    pub reference: CodeReference,
    /// Variable definitions (owned for flexibility)
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping in appendix
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation (for linking)
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All resonance formulas used in Resonix.
///
/// One variant per formula across the (vibration mode × specimen shape)
/// space plus the geometry factors and derived ratios. This enum is the
/// primary interface for equation tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Longitudinal Mode
    // -------------------------------------------------------------------------
    /// E = 4 L² n² ρ (shape-independent)
    LongitudinalModulus,

    // -------------------------------------------------------------------------
    // Transverse Mode
    // -------------------------------------------------------------------------
    /// T' = 1 + 6.585 (t/L)²
    TransverseCorrectionFactor,
    /// E = 0.9464 (L/b)² T' m n² / (b t³)
    TransverseBeamModulus,
    /// E = 1.6067 (L³/D⁴) m n²
    TransverseCylinderModulus,

    // -------------------------------------------------------------------------
    // Torsional Mode
    // -------------------------------------------------------------------------
    /// β = b t³ (1/3 − 0.21 (t/b)(1 − (t/b)⁴/12))
    TorsionalShapeFactor,
    /// G = 4 L m n² / β
    TorsionalBeamModulus,
    /// G = 4 L m n² / (π R⁴)
    TorsionalCylinderModulus,

    // -------------------------------------------------------------------------
    // Derived Ratios
    // -------------------------------------------------------------------------
    /// μ = E/(2G) − 1
    PoissonsRatio,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::LongitudinalModulus => EquationMetadata {
                name: "Longitudinal Modulus of Elasticity",
                description: "Dynamic modulus of elasticity from the fundamental longitudinal resonant frequency",
                formula_typst: r#"$E = 4 L^2 n^2 rho$"#,
                formula_plain: "E = 4 L^2 n^2 rho",
                reference: CodeReference::AstmC215 { year: 2014, section: "Section 9.4" },
                variables: vec![
                    Variable::new("E", "Dynamic modulus of elasticity", "Pa"),
                    Variable::new("L", "Specimen length", "m"),
                    Variable::new("n", "Fundamental longitudinal frequency", "Hz"),
                    Variable::new("rho", "Specimen density", "kg/m^3"),
                ],
                assumptions: vec![
                    "Length-dominated axial vibration",
                    "Same formula for beam and cylinder specimens",
                ],
                category: EquationCategory::ElasticModulus,
                source_module: "equations/resonance.rs",
                source_function: "longitudinal_modulus",
            },

            Equation::TransverseCorrectionFactor => EquationMetadata {
                name: "Transverse Correction Factor",
                description: "Correction for shear and rotary-inertia effects in non-slender prisms",
                formula_typst: r#"$T' = 1 + 6.585 (t / L)^2$"#,
                formula_plain: "T' = 1 + 6.585 (t/L)^2",
                reference: CodeReference::AstmC215 { year: 2014, section: "Table 1" },
                variables: vec![
                    Variable::new("T'", "Correction factor", "-"),
                    Variable::new("t", "Beam depth (direction of vibration)", "m"),
                    Variable::new("L", "Specimen length", "m"),
                ],
                assumptions: vec![
                    "Polynomial approximation of the tabulated values, not the table lookup itself",
                ],
                category: EquationCategory::CorrectionFactors,
                source_module: "equations/resonance.rs",
                source_function: "transverse_correction_factor",
            },

            Equation::TransverseBeamModulus => EquationMetadata {
                name: "Transverse Modulus (Prism)",
                description: "Dynamic modulus of elasticity from the fundamental transverse frequency of a rectangular prism",
                formula_typst: r#"$E = C m n^2 / (b t^3)$ with $C = 0.9464 (L / b)^2 T'$"#,
                formula_plain: "E = C m n^2 / (b t^3), C = 0.9464 (L/b)^2 T'",
                reference: CodeReference::AstmC215 { year: 2014, section: "Section 9.2" },
                variables: vec![
                    Variable::new("E", "Dynamic modulus of elasticity", "Pa"),
                    Variable::new("m", "Specimen mass", "kg"),
                    Variable::new("n", "Fundamental transverse frequency", "Hz"),
                    Variable::new("L", "Specimen length", "m"),
                    Variable::new("b", "Beam width", "m"),
                    Variable::new("t", "Beam depth", "m"),
                    Variable::new("T'", "Correction factor", "-"),
                ],
                assumptions: vec!["Prism vibrating flatwise in the fundamental flexural mode"],
                category: EquationCategory::ElasticModulus,
                source_module: "equations/resonance.rs",
                source_function: "transverse_beam_modulus",
            },

            Equation::TransverseCylinderModulus => EquationMetadata {
                name: "Transverse Modulus (Cylinder)",
                description: "Dynamic modulus of elasticity from the fundamental transverse frequency of a cylinder",
                formula_typst: r#"$E = 1.6067 (L^3 / D^4) m n^2$"#,
                formula_plain: "E = 1.6067 (L^3/D^4) m n^2",
                reference: CodeReference::AstmC215 { year: 2014, section: "Section 9.2" },
                variables: vec![
                    Variable::new("E", "Dynamic modulus of elasticity", "Pa"),
                    Variable::new("L", "Specimen length", "m"),
                    Variable::new("D", "Cylinder diameter", "m"),
                    Variable::new("m", "Specimen mass", "kg"),
                    Variable::new("n", "Fundamental transverse frequency", "Hz"),
                ],
                assumptions: vec!["Cylinder in the fundamental flexural mode"],
                category: EquationCategory::ElasticModulus,
                source_module: "equations/resonance.rs",
                source_function: "transverse_cylinder_modulus",
            },

            Equation::TorsionalShapeFactor => EquationMetadata {
                name: "Torsional Shape Factor",
                description: "Torsion constant of a rectangular cross-section",
                formula_typst: r#"$beta = b t^3 (1/3 - 0.21 (t / b)(1 - (t / b)^4 / 12))$"#,
                formula_plain: "beta = b t^3 (1/3 - 0.21 (t/b)(1 - (t/b)^4/12))",
                reference: CodeReference::AstmC215 { year: 2014, section: "Section 9.3" },
                variables: vec![
                    Variable::new("beta", "Torsion constant", "m^4"),
                    Variable::new("b", "Beam width", "m"),
                    Variable::new("t", "Beam depth", "m"),
                ],
                assumptions: vec![
                    "Polynomial approximation of the tabulated shape factors",
                ],
                category: EquationCategory::CorrectionFactors,
                source_module: "equations/resonance.rs",
                source_function: "torsional_shape_factor",
            },

            Equation::TorsionalBeamModulus => EquationMetadata {
                name: "Torsional Modulus (Prism)",
                description: "Dynamic modulus of rigidity from the fundamental torsional frequency of a rectangular prism",
                formula_typst: r#"$G = 4 L m n^2 / beta$"#,
                formula_plain: "G = 4 L m n^2 / beta",
                reference: CodeReference::AstmC215 { year: 2014, section: "Section 9.3" },
                variables: vec![
                    Variable::new("G", "Dynamic modulus of rigidity", "Pa"),
                    Variable::new("L", "Specimen length", "m"),
                    Variable::new("m", "Specimen mass", "kg"),
                    Variable::new("n", "Fundamental torsional frequency", "Hz"),
                    Variable::new("beta", "Torsion constant", "m^4"),
                ],
                assumptions: vec!["Prism in the fundamental torsional mode"],
                category: EquationCategory::RigidityModulus,
                source_module: "equations/resonance.rs",
                source_function: "torsional_beam_modulus",
            },

            Equation::TorsionalCylinderModulus => EquationMetadata {
                name: "Torsional Modulus (Cylinder)",
                description: "Dynamic modulus of rigidity from the fundamental torsional frequency of a cylinder",
                formula_typst: r#"$G = 4 L m n^2 / (pi R^4)$"#,
                formula_plain: "G = 4 L m n^2 / (pi R^4), R = D/2",
                reference: CodeReference::AstmC215 { year: 2014, section: "Section 9.3" },
                variables: vec![
                    Variable::new("G", "Dynamic modulus of rigidity", "Pa"),
                    Variable::new("L", "Specimen length", "m"),
                    Variable::new("m", "Specimen mass", "kg"),
                    Variable::new("n", "Fundamental torsional frequency", "Hz"),
                    Variable::new("R", "Cylinder radius", "m"),
                ],
                assumptions: vec!["Cylinder in the fundamental torsional mode"],
                category: EquationCategory::RigidityModulus,
                source_module: "equations/resonance.rs",
                source_function: "torsional_cylinder_modulus",
            },

            Equation::PoissonsRatio => EquationMetadata {
                name: "Poisson's Ratio",
                description: "Dimensionless ratio derived from the elastic and rigidity moduli of the same specimen",
                formula_typst: r#"$mu = E / (2 G) - 1$"#,
                formula_plain: "mu = E/(2G) - 1",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("mu", "Poisson's ratio", "-"),
                    Variable::new("E", "Dynamic modulus of elasticity", "Pa"),
                    Variable::new("G", "Dynamic modulus of rigidity", "Pa"),
                ],
                assumptions: vec![
                    "E and G measured on the same specimen",
                    "Typical concrete range 0.15-0.25; values outside are reported as-is",
                ],
                category: EquationCategory::DerivedRatios,
                source_module: "equations/resonance.rs",
                source_function: "poissons_ratio",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in appendix order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![CorrectionFactors, ElasticModulus, RigidityModulus, DerivedRatios];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Longitudinal
    Equation::LongitudinalModulus,
    // Transverse
    Equation::TransverseCorrectionFactor,
    Equation::TransverseBeamModulus,
    Equation::TransverseCylinderModulus,
    // Torsional
    Equation::TorsionalShapeFactor,
    Equation::TorsionalBeamModulus,
    Equation::TorsionalCylinderModulus,
    // Derived
    Equation::PoissonsRatio,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
///
/// This struct is used to track which equations were applied during a
/// calculation, enabling the "List of Equations" PDF appendix feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used (e.g., "Transverse mode")
    pub context: String,
    /// Optional: the specimen label this equation was applied to
    pub specimen_label: Option<String>,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            specimen_label: None,
        }
    }

    /// Create usage record with specimen label
    pub fn for_specimen(
        equation: Equation,
        context: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            equation,
            context: context.into(),
            specimen_label: Some(label.into()),
        }
    }
}

/// Collector for equation usage during a calculation.
///
/// Pass this to report generation to build the equations appendix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Record equation usage for a specific specimen
    pub fn record_for_specimen(
        &mut self,
        equation: Equation,
        context: impl Into<String>,
        label: impl Into<String>,
    ) {
        self.usages
            .push(EquationUsage::for_specimen(equation, context, label));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used (deduplicated)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = std::collections::HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group usages by equation for appendix generation
    pub fn by_equation(&self) -> std::collections::HashMap<Equation, Vec<&EquationUsage>> {
        let mut map: std::collections::HashMap<Equation, Vec<&EquationUsage>> =
            std::collections::HashMap::new();
        for usage in &self.usages {
            map.entry(usage.equation).or_default().push(usage);
        }
        map
    }

    /// Group unique equations by category for appendix
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let unique = self.unique_equations();
        let mut by_cat: std::collections::HashMap<EquationCategory, Vec<Equation>> =
            std::collections::HashMap::new();

        for eq in unique {
            let cat = eq.metadata().category;
            by_cat.entry(cat).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }

    /// Merge another tracker into this one
    pub fn merge(&mut self, other: EquationTracker) {
        self.usages.extend(other.usages);
    }
}

// ============================================================================
// Typst Appendix Generation
// ============================================================================

impl EquationTracker {
    /// Generate Typst markup for the "List of Equations" appendix.
    ///
    /// The appendix is organized by category and shows each unique equation
    /// with its formula, reference, and the specimens it was applied to.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resonix_core::equations::registry::{Equation, EquationTracker};
    ///
    /// let mut tracker = EquationTracker::new();
    /// tracker.record_for_specimen(Equation::LongitudinalModulus, "Longitudinal mode", "P-1");
    ///
    /// let typst = tracker.generate_appendix_typst();
    /// assert!(typst.contains("Longitudinal Modulus of Elasticity"));
    /// ```
    pub fn generate_appendix_typst(&self) -> String {
        let mut output = String::new();

        // Appendix header
        output.push_str(
            r##"
#pagebreak()

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Appendix: List of Equations]
  ]
]

#v(12pt)

#text(size: 10pt)[
  This appendix lists all resonance formulas used in this report.
  Each equation includes its formula, standard reference, and the specimens to which it was applied.
]

#v(16pt)
"##,
        );

        let by_category = self.by_category();

        if by_category.is_empty() {
            output.push_str("#text(style: \"italic\")[No equations recorded for this session.]\n");
            return output;
        }

        let usage_by_eq = self.by_equation();

        for (category, equations) in by_category {
            output.push_str(&format!("\n== {}\n\n", category.display_name()));

            for equation in equations {
                let meta = equation.metadata();

                output.push_str(&format!("=== {}\n\n", meta.name));
                output.push_str(&format!("#text(size: 10pt)[{}]\n\n", meta.description));
                output.push_str(&format!("*Formula:* {}\n\n", meta.formula_typst));
                output.push_str(&format!("*Reference:* {}\n\n", meta.reference.citation()));

                if !meta.variables.is_empty() {
                    output.push_str("*Variables:*\n");
                    output.push_str("#table(\n");
                    output.push_str("  columns: (auto, 1fr, auto),\n");
                    output.push_str("  inset: 6pt,\n");
                    output.push_str("  stroke: 0.5pt,\n");
                    output.push_str("  align: (left, left, left),\n");
                    output.push_str("  table.header([*Symbol*], [*Description*], [*Units*]),\n");

                    for var in &meta.variables {
                        output.push_str(&format!(
                            "  [${}$], [{}], [{}],\n",
                            escape_typst_math(var.symbol),
                            var.description,
                            var.units
                        ));
                    }
                    output.push_str(")\n\n");
                }

                if let Some(usages) = usage_by_eq.get(&equation) {
                    let labels: Vec<&str> = usages
                        .iter()
                        .filter_map(|u| u.specimen_label.as_deref())
                        .collect();

                    if !labels.is_empty() {
                        let mut unique: Vec<&str> = labels.clone();
                        unique.sort();
                        unique.dedup();

                        output.push_str(&format!("*Applied to:* {}\n\n", unique.join(", ")));
                    }
                }

                if !meta.assumptions.is_empty() {
                    output.push_str("*Assumptions:*\n");
                    for assumption in &meta.assumptions {
                        output.push_str(&format!("- {}\n", assumption));
                    }
                    output.push('\n');
                }

                output.push_str("#v(8pt)\n");
                output.push_str("#line(length: 100%, stroke: 0.25pt + gray)\n");
                output.push_str("#v(8pt)\n\n");
            }
        }

        output
    }
}

/// Generate a "List of Equations" appendix for a set of equations.
///
/// Convenience function for listing specific equations without a full
/// tracker. Useful for generating reference documentation.
pub fn generate_static_equations_appendix_typst(equations: &[Equation]) -> String {
    let mut tracker = EquationTracker::new();
    for &eq in equations {
        tracker.record(eq, "Reference");
    }
    tracker.generate_appendix_typst()
}

/// Get the equations applied when computing a given set of vibration modes
/// on a given cross-section shape.
///
/// `is_beam` selects the prism or cylinder formula column; the three flags
/// select which modes were actually measured.
pub fn specimen_equations(
    is_beam: bool,
    longitudinal: bool,
    transverse: bool,
    torsional: bool,
) -> Vec<Equation> {
    let mut equations = Vec::new();

    if longitudinal {
        equations.push(Equation::LongitudinalModulus);
    }
    if transverse {
        if is_beam {
            equations.push(Equation::TransverseCorrectionFactor);
            equations.push(Equation::TransverseBeamModulus);
        } else {
            equations.push(Equation::TransverseCylinderModulus);
        }
    }
    if torsional {
        if is_beam {
            equations.push(Equation::TorsionalShapeFactor);
            equations.push(Equation::TorsionalBeamModulus);
        } else {
            equations.push(Equation::TorsionalCylinderModulus);
        }
    }
    if longitudinal && torsional {
        equations.push(Equation::PoissonsRatio);
    }

    equations
}

/// Escape special characters for Typst math mode
fn escape_typst_math(s: &str) -> String {
    s.replace('\\', "\\\\")
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md file for documentation.
///
/// Produces a markdown document listing all equations in the registry,
/// organized by category, with formulas, references, and source links.
///
/// # Example
///
/// ```rust
/// use resonix_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Resonix Equations Reference"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Resonix Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists all resonance formulas used in Resonix calculations.
Each equation includes its formula, standard reference, source location, and
assumptions. Engineers can use this as a single reference to audit the
underlying mathematics.

## Units

| Quantity | Unit |
|----------|------|
| Length, width, depth, diameter | meters (m) |
| Mass | kilograms (kg) |
| Frequency | hertz (Hz) |
| Density | kg/m^3 |
| Modulus | pascals (Pa) |

---

"#,
    );

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_complete() {
        assert_eq!(ALL_EQUATIONS.len(), 8);

        // Every equation has non-empty metadata
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty());
            assert!(!meta.formula_plain.is_empty());
            assert!(!meta.formula_typst.is_empty());
            assert!(!meta.variables.is_empty());
        }
    }

    #[test]
    fn test_categories_cover_all_equations() {
        let mut count = 0;
        for category in Equation::all_categories() {
            count += Equation::in_category(category).len();
        }
        assert_eq!(count, ALL_EQUATIONS.len());
    }

    #[test]
    fn test_citation_format() {
        let reference = CodeReference::AstmC215 {
            year: 2014,
            section: "Section 9.4",
        };
        assert_eq!(reference.citation(), "ASTM C215-14 Section 9.4");
        assert_eq!(reference.short_form(), "ASTM C215");
    }

    #[test]
    fn test_specimen_equations_beam_full_suite() {
        let equations = specimen_equations(true, true, true, true);
        assert!(equations.contains(&Equation::LongitudinalModulus));
        assert!(equations.contains(&Equation::TransverseCorrectionFactor));
        assert!(equations.contains(&Equation::TransverseBeamModulus));
        assert!(equations.contains(&Equation::TorsionalShapeFactor));
        assert!(equations.contains(&Equation::TorsionalBeamModulus));
        assert!(equations.contains(&Equation::PoissonsRatio));
        assert!(!equations.contains(&Equation::TransverseCylinderModulus));
    }

    #[test]
    fn test_specimen_equations_cylinder_no_poisson() {
        // Poisson's ratio needs both longitudinal and torsional results
        let equations = specimen_equations(false, true, false, false);
        assert_eq!(equations, vec![Equation::LongitudinalModulus]);

        let equations = specimen_equations(false, false, false, true);
        assert_eq!(equations, vec![Equation::TorsionalCylinderModulus]);
    }

    #[test]
    fn test_tracker_dedup() {
        let mut tracker = EquationTracker::new();
        tracker.record_for_specimen(Equation::LongitudinalModulus, "Longitudinal mode", "P-1");
        tracker.record_for_specimen(Equation::LongitudinalModulus, "Longitudinal mode", "P-2");
        tracker.record(Equation::PoissonsRatio, "Derived");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_equations().len(), 2);
    }

    #[test]
    fn test_appendix_generation() {
        let mut tracker = EquationTracker::new();
        tracker.record_for_specimen(Equation::TorsionalCylinderModulus, "Torsional mode", "C-1");

        let typst = tracker.generate_appendix_typst();
        assert!(typst.contains("Torsional Modulus (Cylinder)"));
        assert!(typst.contains("ASTM C215-14"));
        assert!(typst.contains("C-1"));
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();
        assert!(markdown.contains("Resonix Equations Reference"));
        assert!(markdown.contains("Correction Factors"));
        assert!(markdown.contains("E = 4 L^2 n^2 rho"));
        assert!(markdown.contains("**Total Equations:** 8"));
    }
}
