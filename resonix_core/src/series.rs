//! # Result Series
//!
//! Chart-ready data shaping for modulus-vs-frequency plots. The core does
//! not render anything; these types are the tabular form consumed by the
//! CLI results table, PDF reports, and any external plotting layer.

use serde::{Deserialize, Serialize};

use crate::calculations::{ModulusResult, VibrationMode};

/// A single (frequency, modulus) point for one mode's series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Resonant frequency (Hz)
    pub frequency_hz: f64,
    /// Modulus at that frequency (GPa, display scale)
    pub modulus_gpa: f64,
}

impl From<&ModulusResult> for SeriesPoint {
    fn from(result: &ModulusResult) -> Self {
        SeriesPoint {
            frequency_hz: result.frequency_hz,
            modulus_gpa: result.modulus_gigapascals().0,
        }
    }
}

/// Accumulating series of results for one vibration mode.
///
/// Points are kept sorted by frequency so the series plots as a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulusSeries {
    /// Vibration mode this series tracks
    pub mode: VibrationMode,
    /// Points in ascending frequency order
    pub points: Vec<SeriesPoint>,
}

impl ModulusSeries {
    pub fn new(mode: VibrationMode) -> Self {
        ModulusSeries {
            mode,
            points: Vec::new(),
        }
    }

    /// Add a result to the series. Results for other modes are ignored.
    pub fn push(&mut self, result: &ModulusResult) {
        if result.mode != self.mode {
            return;
        }
        let point = SeriesPoint::from(result);
        let idx = self
            .points
            .partition_point(|p| p.frequency_hz < point.frequency_hz);
        self.points.insert(idx, point);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Clear all accumulated points.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// One row of the combined moduli table: a frequency with up to one
/// modulus per mode.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CombinedPoint {
    /// Resonant frequency (Hz)
    pub frequency_hz: f64,
    /// Longitudinal modulus at this frequency (GPa), if computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitudinal_gpa: Option<f64>,
    /// Transverse modulus at this frequency (GPa), if computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transverse_gpa: Option<f64>,
    /// Torsional modulus at this frequency (GPa), if computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torsional_gpa: Option<f64>,
}

/// Build the combined per-frequency table from a batch of results.
///
/// Rows come out in ascending frequency order, one per result (two results
/// at the same frequency for different modes share a row).
pub fn combined_points(results: &[ModulusResult]) -> Vec<CombinedPoint> {
    let mut rows: Vec<CombinedPoint> = Vec::new();

    for result in results {
        let gpa = result.modulus_gigapascals().0;
        let idx = match rows
            .iter()
            .position(|r| r.frequency_hz == result.frequency_hz)
        {
            Some(idx) => idx,
            None => {
                rows.push(CombinedPoint {
                    frequency_hz: result.frequency_hz,
                    ..Default::default()
                });
                rows.len() - 1
            }
        };
        let row = &mut rows[idx];

        match result.mode {
            VibrationMode::Longitudinal => row.longitudinal_gpa = Some(gpa),
            VibrationMode::Transverse => row.transverse_gpa = Some(gpa),
            VibrationMode::Torsional => row.torsional_gpa = Some(gpa),
        }
    }

    rows.sort_by(|a, b| a.frequency_hz.total_cmp(&b.frequency_hz));
    rows
}
