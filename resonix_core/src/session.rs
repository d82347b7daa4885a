//! # Test Session Data Structures
//!
//! The `TestSession` struct is the root container for a lab session's
//! specimens and measurements. Sessions serialize to `.rnx` files as
//! human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! TestSession
//! ├── meta: SessionMetadata (version, technician, lab info, timestamps)
//! ├── settings: SessionSettings (display unit, defaults)
//! └── specimens: HashMap<Uuid, SpecimenRecord> (geometry + measured frequencies)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use resonix_core::session::TestSession;
//!
//! let mut session = TestSession::new("Jane Tech", "LAB-042", "ACME Ready-Mix");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&session).unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::unified::UnifiedInput;
use crate::specimen::SpecimenGeometry;
use crate::units::{Gigapascals, Megapascals, Pascals};

/// Current schema version for .rnx files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root session container.
///
/// This is the top-level struct that gets serialized to `.rnx` files.
/// Specimens are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSession {
    /// Session metadata (version, technician, lab info)
    pub meta: SessionMetadata,

    /// Session settings (display unit, defaults)
    pub settings: SessionSettings,

    /// All specimens under test, keyed by UUID
    pub specimens: HashMap<Uuid, SpecimenRecord>,
}

impl TestSession {
    /// Create a new empty session.
    ///
    /// # Arguments
    ///
    /// * `technician` - Name of the responsible lab technician
    /// * `lab_id` - Lab/work order number (e.g., "LAB-042")
    /// * `client` - Client name
    ///
    /// # Example
    ///
    /// ```rust
    /// use resonix_core::session::TestSession;
    ///
    /// let session = TestSession::new("John Doe", "LAB-001", "Client Corp");
    /// assert_eq!(session.meta.technician, "John Doe");
    /// ```
    pub fn new(
        technician: impl Into<String>,
        lab_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        TestSession {
            meta: SessionMetadata {
                version: SCHEMA_VERSION.to_string(),
                technician: technician.into(),
                lab_id: lab_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: SessionSettings::default(),
            specimens: HashMap::new(),
        }
    }

    /// Add a specimen record to the session.
    ///
    /// Returns the UUID assigned to the record.
    pub fn add_specimen(&mut self, record: SpecimenRecord) -> Uuid {
        let id = Uuid::new_v4();
        self.specimens.insert(id, record);
        self.touch();
        id
    }

    /// Remove a specimen record by UUID.
    ///
    /// Returns the removed record if it existed.
    pub fn remove_specimen(&mut self, id: &Uuid) -> Option<SpecimenRecord> {
        let record = self.specimens.remove(id);
        if record.is_some() {
            self.touch();
        }
        record
    }

    /// Get a specimen record by UUID.
    pub fn get_specimen(&self, id: &Uuid) -> Option<&SpecimenRecord> {
        self.specimens.get(id)
    }

    /// Get a mutable reference to a specimen record by UUID.
    ///
    /// Note: a successful lookup updates the modified timestamp.
    pub fn get_specimen_mut(&mut self, id: &Uuid) -> Option<&mut SpecimenRecord> {
        if self.specimens.contains_key(id) {
            self.meta.modified = Utc::now();
            self.specimens.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn specimen_count(&self) -> usize {
        self.specimens.len()
    }
}

impl Default for TestSession {
    fn default() -> Self {
        TestSession::new("", "", "")
    }
}

/// Session metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible lab technician
    pub technician: String,

    /// Lab/work order number
    pub lab_id: String,

    /// Client name
    pub client: String,

    /// When the session was created
    pub created: DateTime<Utc>,

    /// When the session was last modified
    pub modified: DateTime<Utc>,
}

/// Session-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Unit used when displaying moduli
    pub display_unit: DisplayUnit,

    /// Default density for new specimens (kg/m³)
    pub default_density_kg_m3: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            display_unit: DisplayUnit::Gigapascals,
            // Normal-weight concrete
            default_density_kg_m3: 2400.0,
        }
    }
}

/// Display unit for modulus values.
///
/// The core always computes in pascals; this controls the conversion
/// applied at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayUnit {
    Pascals,
    Megapascals,
    Gigapascals,
}

impl Default for DisplayUnit {
    fn default() -> Self {
        DisplayUnit::Gigapascals
    }
}

impl DisplayUnit {
    /// Convert a modulus in Pa to this display unit's scale.
    pub fn convert(&self, modulus_pa: f64) -> f64 {
        let pa = Pascals(modulus_pa);
        match self {
            DisplayUnit::Pascals => pa.0,
            DisplayUnit::Megapascals => Megapascals::from(pa).0,
            DisplayUnit::Gigapascals => Gigapascals::from(pa).0,
        }
    }

    /// Unit suffix for display (e.g., "GPa")
    pub fn suffix(&self) -> &'static str {
        match self {
            DisplayUnit::Pascals => "Pa",
            DisplayUnit::Megapascals => "MPa",
            DisplayUnit::Gigapascals => "GPa",
        }
    }
}

/// Measured fundamental frequencies for one specimen.
///
/// Each is optional; `None` means the mode was not tested.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasuredFrequencies {
    /// Fundamental longitudinal frequency (Hz)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitudinal_hz: Option<f64>,

    /// Fundamental transverse frequency (Hz)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transverse_hz: Option<f64>,

    /// Fundamental torsional frequency (Hz)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torsional_hz: Option<f64>,
}

impl MeasuredFrequencies {
    /// True if any mode was tested.
    pub fn any(&self) -> bool {
        self.longitudinal_hz.is_some()
            || self.transverse_hz.is_some()
            || self.torsional_hz.is_some()
    }
}

/// One specimen and its measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecimenRecord {
    /// User label for this specimen (e.g., "P-1", "Cyl 28d #3")
    pub label: String,

    /// Specimen geometry
    pub geometry: SpecimenGeometry,

    /// Measured fundamental frequencies
    pub frequencies: MeasuredFrequencies,
}

impl SpecimenRecord {
    pub fn new(label: impl Into<String>, geometry: SpecimenGeometry) -> Self {
        SpecimenRecord {
            label: label.into(),
            geometry,
            frequencies: MeasuredFrequencies::default(),
        }
    }

    /// Build the unified calculation input for this record.
    pub fn to_unified_input(&self) -> UnifiedInput {
        UnifiedInput {
            label: self.label.clone(),
            geometry: self.geometry.clone(),
            f_longitudinal_hz: self.frequencies.longitudinal_hz,
            f_transverse_hz: self.frequencies.transverse_hz,
            f_torsional_hz: self.frequencies.torsional_hz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::unified;
    use crate::specimen;

    #[test]
    fn test_session_creation() {
        let session = TestSession::new("John Doe", "LAB-001", "Acme Ready-Mix");
        assert_eq!(session.meta.technician, "John Doe");
        assert_eq!(session.meta.lab_id, "LAB-001");
        assert_eq!(session.meta.client, "Acme Ready-Mix");
        assert_eq!(session.meta.version, SCHEMA_VERSION);
        assert_eq!(session.specimen_count(), 0);
    }

    #[test]
    fn test_add_remove_specimen() {
        let mut session = TestSession::new("Tech", "LAB-001", "Client");

        let record = SpecimenRecord::new("P-1", specimen::example_beam());
        let id = session.add_specimen(record);
        assert_eq!(session.specimen_count(), 1);
        assert!(session.get_specimen(&id).is_some());

        let removed = session.remove_specimen(&id);
        assert!(removed.is_some());
        assert_eq!(session.specimen_count(), 0);
    }

    #[test]
    fn test_session_serialization() {
        let mut session = TestSession::new("Jane Tech", "LAB-042", "Test Client");
        session.add_specimen(SpecimenRecord::new("P-1", specimen::example_beam()));

        let json = serde_json::to_string_pretty(&session).unwrap();
        assert!(json.contains("Jane Tech"));
        assert!(json.contains("LAB-042"));
        assert!(json.contains("P-1"));

        let roundtrip: TestSession = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.technician, "Jane Tech");
        assert_eq!(roundtrip.specimen_count(), 1);
    }

    #[test]
    fn test_record_to_unified_input() {
        let mut record = SpecimenRecord::new("C-1", specimen::example_cylinder());
        record.frequencies.longitudinal_hz = Some(7500.0);
        record.frequencies.torsional_hz = Some(6500.0);

        let input = record.to_unified_input();
        assert_eq!(input.label, "C-1");
        assert_eq!(input.f_longitudinal_hz, Some(7500.0));
        assert_eq!(input.f_transverse_hz, None);

        // The unified calculation accepts the converted input directly
        let result = unified::calculate(&input).unwrap();
        assert_eq!(result.results.len(), 2);
        assert!(result.poissons_ratio.is_some());
    }

    #[test]
    fn test_display_unit_conversion() {
        assert_eq!(DisplayUnit::Pascals.convert(9.8304e10), 9.8304e10);
        assert!((DisplayUnit::Megapascals.convert(9.8304e10) - 98_304.0).abs() < 1e-6);
        assert!((DisplayUnit::Gigapascals.convert(9.8304e10) - 98.304).abs() < 1e-9);
        assert_eq!(DisplayUnit::Gigapascals.suffix(), "GPa");
    }

    #[test]
    fn test_display_unit_serialization() {
        let unit = DisplayUnit::Gigapascals;
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, "\"Gigapascals\"");

        let roundtrip: DisplayUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, unit);
    }
}
