//! # PDF Report Module
//!
//! Generates test report PDFs from resonance calculations using Typst.
//!
//! ## Architecture
//!
//! - Typst templates are embedded as string constants
//! - Data is injected via string formatting before compilation
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use resonix_core::calculations::unified;
//! use resonix_core::report::render_specimen_pdf;
//! use resonix_core::session::SpecimenRecord;
//! use resonix_core::specimen;
//!
//! let mut record = SpecimenRecord::new("P-1", specimen::example_beam());
//! record.frequencies.longitudinal_hz = Some(8000.0);
//! record.frequencies.torsional_hz = Some(7000.0);
//!
//! let result = unified::calculate(&record.to_unified_input()).unwrap();
//! let pdf_bytes = render_specimen_pdf(&record, &result, "Jane Tech", "LAB-042").unwrap();
//! std::fs::write("specimen_report.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Utc;
use once_cell::sync::Lazy;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::unified::{self, UnifiedResult};
use crate::equations::registry::{specimen_equations, EquationTracker};
use crate::errors::{CalcError, CalcResult};
use crate::session::{SpecimenRecord, TestSession};
use crate::specimen::CrossSection;

// ============================================================================
// Typst World Implementation
// ============================================================================

/// Bundled fonts, loaded once per process.
static FONTS: Lazy<Vec<Font>> = Lazy::new(load_fonts);

fn load_fonts() -> Vec<Font> {
    let mut fonts = Vec::new();

    for font_bytes in typst_assets::fonts() {
        let buffer = Bytes::new(font_bytes.to_vec());
        for font in Font::iter(buffer) {
            fonts.push(font);
        }
    }

    fonts
}

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let book = FontBook::from_fonts(FONTS.iter());

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            library: LazyHash::new(Library::default()),
        }
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// PDF Templates
// ============================================================================

/// Typst template for a single-specimen report
const SPECIMEN_TEMPLATE: &str = r##"
#set page(
  paper: "us-letter",
  margin: (top: 1in, bottom: 1in, left: 1in, right: 1in),
  header: align(right)[
    #text(size: 9pt, fill: gray)[Resonix Dynamic Modulus Report]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[Lab: {{LAB_ID}}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(size: 11pt)

// Title Block
#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Dynamic Modulus of Elasticity]
    #v(4pt)
    #text(size: 14pt)[Specimen {{SPECIMEN_LABEL}}]
  ]
]

#v(12pt)

#grid(
  columns: (1fr, 1fr),
  gutter: 20pt,
  [
    *Test Information*
    #v(4pt)
    #table(
      columns: (auto, 1fr),
      stroke: none,
      row-gutter: 4pt,
      [Technician:], [{{TECHNICIAN}}],
      [Lab ID:], [{{LAB_ID}}],
      [Date:], [{{DATE}}],
    )
  ],
  [
    *Test Method*
    #v(4pt)
    ASTM C215-14 (Fundamental Transverse, Longitudinal, and Torsional
    Resonant Frequencies of Concrete Specimens)
  ]
)

#v(16pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

== Specimen Geometry

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Parameter*], [*Value*], [*Unit*]),
{{GEOMETRY_ROWS}}
)

#v(12pt)

== Measured Moduli

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, right),
  table.header([*Mode*], [*Frequency (Hz)*], [*Modulus (GPa)*]),
{{RESULT_ROWS}}
)

{{POISSON_BLOCK}}

#v(24pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

#text(size: 9pt, fill: gray)[
  Generated by Resonix \
  Results should be reviewed by qualified laboratory personnel.
]
"##;

// ============================================================================
// PDF Rendering Functions
// ============================================================================

/// Render a single specimen's results to PDF.
///
/// # Arguments
///
/// * `record` - The specimen record (geometry + measured frequencies)
/// * `result` - The unified calculation results
/// * `technician` - Technician name for the report
/// * `lab_id` - Lab/work order ID
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError)` - If rendering fails
pub fn render_specimen_pdf(
    record: &SpecimenRecord,
    result: &UnifiedResult,
    technician: &str,
    lab_id: &str,
) -> CalcResult<Vec<u8>> {
    let source = SPECIMEN_TEMPLATE
        .replace("{{SPECIMEN_LABEL}}", &escape_typst(&record.label))
        .replace("{{TECHNICIAN}}", &escape_typst(technician))
        .replace("{{LAB_ID}}", &escape_typst(lab_id))
        .replace("{{DATE}}", &Utc::now().format("%Y-%m-%d").to_string())
        .replace("{{GEOMETRY_ROWS}}", &build_geometry_rows(record))
        .replace("{{RESULT_ROWS}}", &build_result_rows(result))
        .replace("{{POISSON_BLOCK}}", &build_poisson_block(result));

    compile_to_pdf(source)
}

/// Render an entire session (all specimens) to a single PDF.
///
/// Specimens without any measured frequency are skipped; the report ends
/// with an equations appendix covering every formula applied.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError)` - If rendering fails or no specimen has measurements
pub fn render_session_pdf(session: &TestSession) -> CalcResult<Vec<u8>> {
    // Collect specimens with measurements and calculate their results
    let mut specimens: Vec<(&SpecimenRecord, UnifiedResult)> = Vec::new();

    for record in session.specimens.values() {
        if !record.frequencies.any() {
            continue;
        }
        match unified::calculate(&record.to_unified_input()) {
            Ok(result) => specimens.push((record, result)),
            Err(e) => {
                return Err(CalcError::Internal {
                    message: format!("Failed to calculate specimen '{}': {}", record.label, e),
                });
            }
        }
    }

    if specimens.is_empty() {
        return Err(CalcError::Internal {
            message: "Session has no measured specimens to export".to_string(),
        });
    }

    // Sort specimens by label for consistent ordering
    specimens.sort_by(|a, b| a.0.label.cmp(&b.0.label));

    // Cover page with summary table
    let mut source = format!(
        r##"
#set page(
  paper: "us-letter",
  margin: (top: 1in, bottom: 1in, left: 1in, right: 1in),
  header: align(right)[
    #text(size: 9pt, fill: gray)[Resonix Dynamic Modulus Report]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[Lab: {lab_id}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{date}]],
    )
  ]
)

#set text(size: 11pt)

// Cover Page
#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 20pt, radius: 4pt)[
    #text(size: 24pt, weight: "bold")[Dynamic Modulus Test Report]
    #v(8pt)
    #text(size: 16pt)[{client}]
  ]
]

#v(24pt)

#grid(
  columns: (1fr, 1fr),
  gutter: 20pt,
  [
    *Test Information*
    #v(4pt)
    #table(
      columns: (auto, 1fr),
      stroke: none,
      row-gutter: 4pt,
      [Technician:], [{technician}],
      [Lab ID:], [{lab_id}],
      [Client:], [{client}],
      [Date:], [{date}],
    )
  ],
  [
    *Test Method*
    #v(4pt)
    ASTM C215-14 (Fundamental Transverse, Longitudinal, and Torsional
    Resonant Frequencies of Concrete Specimens)
  ]
)

#v(24pt)

== Specimen Summary

#table(
  columns: (auto, 1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, left, left, right),
  table.header([*No.*], [*Specimen*], [*Shape*], [*Modes Tested*]),
{summary_rows}
)

#v(24pt)
#text(size: 9pt, fill: gray)[
  Generated by Resonix \
  Results should be reviewed by qualified laboratory personnel.
]
"##,
        lab_id = escape_typst(&session.meta.lab_id),
        date = Utc::now().format("%Y-%m-%d"),
        client = escape_typst(&session.meta.client),
        technician = escape_typst(&session.meta.technician),
        summary_rows = build_summary_rows(&specimens),
    );

    // Individual specimen pages
    for (record, result) in &specimens {
        source.push_str(&format!(
            r##"
#pagebreak()

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Specimen Results]
    #v(4pt)
    #text(size: 14pt)[{specimen_label}]
  ]
]

#v(12pt)

== Specimen Geometry

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Parameter*], [*Value*], [*Unit*]),
{geometry_rows}
)

#v(12pt)

== Measured Moduli

#table(
  columns: (1fr, auto, auto),
  inset: 8pt,
  stroke: 0.5pt,
  align: (left, right, right),
  table.header([*Mode*], [*Frequency (Hz)*], [*Modulus (GPa)*]),
{result_rows}
)

{poisson_block}
"##,
            specimen_label = escape_typst(&record.label),
            geometry_rows = build_geometry_rows(record),
            result_rows = build_result_rows(result),
            poisson_block = build_poisson_block(result),
        ));
    }

    // Equations appendix covering every formula applied
    let mut tracker = EquationTracker::new();
    for (record, _result) in &specimens {
        let is_beam = matches!(record.geometry.section, CrossSection::Beam { .. });
        let frequencies = &record.frequencies;
        for equation in specimen_equations(
            is_beam,
            frequencies.longitudinal_hz.is_some(),
            frequencies.transverse_hz.is_some(),
            frequencies.torsional_hz.is_some(),
        ) {
            tracker.record_for_specimen(equation, "Resonance test", record.label.clone());
        }
    }
    source.push_str(&tracker.generate_appendix_typst());

    compile_to_pdf(source)
}

/// Compile Typst source and render it to PDF bytes.
fn compile_to_pdf(source: String) -> CalcResult<Vec<u8>> {
    let world = PdfWorld::new(source);

    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("Typst compilation failed: {}", error_msgs.join("; ")),
        }
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::Internal {
            message: format!("PDF rendering failed: {}", error_msgs.join("; ")),
        }
    })?;

    Ok(pdf_bytes)
}

// ============================================================================
// Template Helpers
// ============================================================================

/// Build the geometry table rows for a specimen
fn build_geometry_rows(record: &SpecimenRecord) -> String {
    let geometry = &record.geometry;
    let mut rows = vec![
        format!("  [Shape], [{}], [],", geometry.shape_name()),
        format!("  [Length], [{:.3}], [m],", geometry.length_m),
        format!("  [Mass], [{:.3}], [kg],", geometry.mass_kg),
    ];

    match geometry.section {
        CrossSection::Beam { width_m, depth_m } => {
            rows.push(format!("  [Width], [{:.3}], [m],", width_m));
            rows.push(format!("  [Depth], [{:.3}], [m],", depth_m));
        }
        CrossSection::Cylinder { diameter_m } => {
            rows.push(format!("  [Diameter], [{:.3}], [m],", diameter_m));
        }
    }

    if let Some(density) = geometry.density_kg_m3 {
        rows.push(format!("  [Density], [{:.0}], [kg/m#super[3]],", density));
    }

    rows.join("\n")
}

/// Build the results table rows for a specimen
fn build_result_rows(result: &UnifiedResult) -> String {
    result
        .results
        .iter()
        .map(|r| {
            format!(
                "  [{} ({})], [{:.0}], [{:.3}],",
                r.mode.display_name(),
                r.mode.modulus_symbol(),
                r.frequency_hz,
                r.modulus_gigapascals().0
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the Poisson's ratio block, or an empty string when not derived
fn build_poisson_block(result: &UnifiedResult) -> String {
    match result.poissons_ratio {
        Some(mu) => format!(
            r##"
#v(16pt)

#align(center)[
  #block(width: auto, fill: rgb("#e8eef7"), inset: 16pt, radius: 4pt)[
    #text(size: 14pt, weight: "bold")[Poisson's Ratio]
    #v(4pt)
    #text(size: 16pt)[$mu = {mu:.4}$]
  ]
]
"##,
            mu = mu
        ),
        None => String::new(),
    }
}

/// Build summary table rows for the cover page
fn build_summary_rows(specimens: &[(&SpecimenRecord, UnifiedResult)]) -> String {
    specimens
        .iter()
        .enumerate()
        .map(|(i, (record, result))| {
            let modes: Vec<&str> = result
                .results
                .iter()
                .map(|r| r.mode.display_name())
                .collect();
            format!(
                "  [{}], [{}], [{}], [{}],",
                i + 1,
                escape_typst(&record.label),
                record.geometry.shape_name(),
                modes.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape special Typst characters in user-provided text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specimen;

    fn measured_record() -> SpecimenRecord {
        let mut record = SpecimenRecord::new("P-1 Test Prism", specimen::example_beam());
        record.frequencies.longitudinal_hz = Some(8000.0);
        record.frequencies.transverse_hz = Some(5000.0);
        record.frequencies.torsional_hz = Some(7000.0);
        record
    }

    #[test]
    fn test_specimen_pdf_generation() {
        let record = measured_record();
        let result = unified::calculate(&record.to_unified_input()).unwrap();

        let pdf = render_specimen_pdf(&record, &result, "Test Tech", "LAB-001");
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        // PDF should start with %PDF
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        // Should be a reasonable size (at least 1KB)
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }

    #[test]
    fn test_session_pdf_generation() {
        let mut session = TestSession::new("Test Tech", "LAB-001", "Test Client");
        session.add_specimen(measured_record());

        let mut cylinder = SpecimenRecord::new("C-1", specimen::example_cylinder());
        cylinder.frequencies.torsional_hz = Some(6500.0);
        session.add_specimen(cylinder);

        let pdf = render_session_pdf(&session);
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());
        assert!(pdf.unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_session_pdf_requires_measurements() {
        let mut session = TestSession::new("Test Tech", "LAB-001", "Test Client");
        session.add_specimen(SpecimenRecord::new("Empty", specimen::example_beam()));

        assert!(render_session_pdf(&session).is_err());
    }

    #[test]
    fn test_geometry_rows_by_shape() {
        let beam_rows = build_geometry_rows(&measured_record());
        assert!(beam_rows.contains("Width"));
        assert!(beam_rows.contains("Depth"));
        assert!(!beam_rows.contains("Diameter"));

        let cylinder = SpecimenRecord::new("C-1", specimen::example_cylinder());
        let cylinder_rows = build_geometry_rows(&cylinder);
        assert!(cylinder_rows.contains("Diameter"));
        assert!(!cylinder_rows.contains("Width"));
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("P*1"), "P\\*1");
        assert_eq!(escape_typst("plain"), "plain");
    }
}
