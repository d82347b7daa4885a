//! # Specimen Geometry
//!
//! Describes the physical concrete test specimen. Shape-specific dimensions
//! live in the [`CrossSection`] sum type, so a cylinder can never carry a
//! stray `width` and a beam can never carry a stray `diameter` - the shape
//! tag is the single source of truth for dispatch.
//!
//! All dimensions are SI: meters, kilograms, kg/m³.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "length_m": 0.4,
//!   "mass_kg": 2.5,
//!   "density_kg_m3": 2400.0,
//!   "section": { "shape": "Beam", "width_m": 0.1, "depth_m": 0.1 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::errors::{CalcError, CalcResult};

/// Cross-section of a test specimen.
///
/// The two shapes ASTM C215 covers: prismatic beams and circular cylinders.
/// Serializes with a `shape` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum CrossSection {
    /// Rectangular prism (width is the dimension parallel to vibration
    /// nodes, depth the dimension in the direction of vibration)
    Beam { width_m: f64, depth_m: f64 },
    /// Circular cylinder
    Cylinder { diameter_m: f64 },
}

impl CrossSection {
    /// Shape name for error messages and reports
    pub fn shape_name(&self) -> &'static str {
        match self {
            CrossSection::Beam { .. } => "beam",
            CrossSection::Cylinder { .. } => "cylinder",
        }
    }

    /// Cross-sectional area (m²)
    pub fn area_m2(&self) -> f64 {
        match self {
            CrossSection::Beam { width_m, depth_m } => width_m * depth_m,
            CrossSection::Cylinder { diameter_m } => PI * (diameter_m / 2.0).powi(2),
        }
    }

    /// Validate section dimensions are positive.
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            CrossSection::Beam { width_m, depth_m } => {
                if *width_m <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "width_m",
                        width_m.to_string(),
                        "Width must be positive",
                    ));
                }
                if *depth_m <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "depth_m",
                        depth_m.to_string(),
                        "Depth must be positive",
                    ));
                }
            }
            CrossSection::Cylinder { diameter_m } => {
                if *diameter_m <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "diameter_m",
                        diameter_m.to_string(),
                        "Diameter must be positive",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Physical description of a test specimen.
///
/// Density is optional because only the longitudinal and beam-torsional
/// calculations consume it; mass and density are related by
/// `mass = density × volume` but the geometry does not enforce this -
/// callers supply whichever values were actually measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecimenGeometry {
    /// Specimen length (m)
    pub length_m: f64,

    /// Specimen mass (kg)
    pub mass_kg: f64,

    /// Specimen density (kg/m³), if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_kg_m3: Option<f64>,

    /// Cross-section shape and dimensions
    pub section: CrossSection,
}

impl SpecimenGeometry {
    /// Create a beam specimen.
    pub fn beam(length_m: f64, mass_kg: f64, width_m: f64, depth_m: f64) -> Self {
        SpecimenGeometry {
            length_m,
            mass_kg,
            density_kg_m3: None,
            section: CrossSection::Beam { width_m, depth_m },
        }
    }

    /// Create a cylinder specimen.
    pub fn cylinder(length_m: f64, mass_kg: f64, diameter_m: f64) -> Self {
        SpecimenGeometry {
            length_m,
            mass_kg,
            density_kg_m3: None,
            section: CrossSection::Cylinder { diameter_m },
        }
    }

    /// Attach a measured density (kg/m³).
    pub fn with_density(mut self, density_kg_m3: f64) -> Self {
        self.density_kg_m3 = Some(density_kg_m3);
        self
    }

    /// Shape name for error messages and reports
    pub fn shape_name(&self) -> &'static str {
        self.section.shape_name()
    }

    /// Specimen volume (m³)
    pub fn volume_m3(&self) -> f64 {
        self.section.area_m2() * self.length_m
    }

    /// Density from the specimen's measured mass and nominal volume (kg/m³).
    ///
    /// This is the geometric density, distinct from the independently
    /// measured `density_kg_m3` field when both are present.
    pub fn bulk_density_kg_m3(&self) -> f64 {
        self.mass_kg / self.volume_m3()
    }

    /// Get the measured density, or an `InvalidGeometry` error naming the
    /// mode that needed it.
    pub fn density_for(&self, mode: &str) -> CalcResult<f64> {
        self.density_kg_m3.ok_or_else(|| {
            CalcError::invalid_geometry(
                mode,
                format!("{} specimens require a measured density", self.shape_name()),
            )
        })
    }

    /// Validate all dimensional fields are positive.
    ///
    /// This is the positivity gate the calculation layer runs before
    /// evaluating any formula; the formula layer itself is unguarded.
    pub fn validate(&self) -> CalcResult<()> {
        if self.length_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Length must be positive",
            ));
        }
        if self.mass_kg <= 0.0 {
            return Err(CalcError::invalid_input(
                "mass_kg",
                self.mass_kg.to_string(),
                "Mass must be positive",
            ));
        }
        if let Some(density) = self.density_kg_m3 {
            if density <= 0.0 {
                return Err(CalcError::invalid_input(
                    "density_kg_m3",
                    density.to_string(),
                    "Density must be positive",
                ));
            }
        }
        self.section.validate()
    }
}

/// Example 100×100×400 mm beam specimen (typical lab prism).
pub fn example_beam() -> SpecimenGeometry {
    SpecimenGeometry::beam(0.4, 2.5, 0.1, 0.1).with_density(2400.0)
}

/// Example 150×300 mm cylinder specimen (standard test cylinder).
pub fn example_cylinder() -> SpecimenGeometry {
    SpecimenGeometry::cylinder(0.3, 4.5, 0.15).with_density(2400.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beam_validation() {
        let geometry = example_beam();
        assert!(geometry.validate().is_ok());

        let mut bad = geometry.clone();
        bad.length_m = 0.0;
        assert!(bad.validate().is_err());

        let bad_section = SpecimenGeometry::beam(0.4, 2.5, -0.1, 0.1);
        assert!(bad_section.validate().is_err());
    }

    #[test]
    fn test_cylinder_validation() {
        let geometry = example_cylinder();
        assert!(geometry.validate().is_ok());

        let bad = SpecimenGeometry::cylinder(0.3, 4.5, 0.0);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_negative_density_rejected() {
        let geometry = SpecimenGeometry::beam(0.4, 2.5, 0.1, 0.1).with_density(-2400.0);
        assert!(geometry.validate().is_err());
    }

    #[test]
    fn test_volume() {
        // 0.1 × 0.1 × 0.4 = 0.004 m³
        let beam = example_beam();
        assert!((beam.volume_m3() - 0.004).abs() < 1e-12);

        // π × 0.075² × 0.3 ≈ 0.00530 m³
        let cylinder = example_cylinder();
        assert!((cylinder.volume_m3() - 0.005301).abs() < 1e-5);
    }

    #[test]
    fn test_bulk_density() {
        // 2.5 kg / 0.004 m³ = 625 kg/m³ (example mass is not
        // density-consistent; bulk density just reports the quotient)
        let beam = example_beam();
        assert!((beam.bulk_density_kg_m3() - 625.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_for_missing() {
        let geometry = SpecimenGeometry::beam(0.4, 2.5, 0.1, 0.1);
        let err = geometry.density_for("torsional").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_serialization_shape_tag() {
        let beam = example_beam();
        let json = serde_json::to_string(&beam).unwrap();
        assert!(json.contains("\"shape\":\"Beam\""));
        assert!(json.contains("width_m"));

        let roundtrip: SpecimenGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(beam, roundtrip);
    }

    #[test]
    fn test_cylinder_json_has_no_beam_fields() {
        let cylinder = example_cylinder();
        let json = serde_json::to_string(&cylinder).unwrap();
        assert!(json.contains("diameter_m"));
        assert!(!json.contains("width_m"));
        assert!(!json.contains("depth_m"));
    }
}
