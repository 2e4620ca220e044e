//! Normalization statistics and result structures

use crate::app::models::GeoPoint;

/// Normalization result with surviving points and row accounting
#[derive(Debug, Clone)]
pub struct NormalizeResult {
    /// Points that survived validation, in input order
    pub points: Vec<GeoPoint>,

    /// Row accounting for the pass
    pub stats: NormalizeStats,
}

/// Row accounting for a normalization pass
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NormalizeStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Number of rows successfully normalized into points
    pub points_parsed: usize,

    /// Number of rows dropped as unusable
    pub rows_dropped: usize,

    /// Per-row drop reasons for debugging
    pub errors: Vec<String>,
}

impl NormalizeStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            points_parsed: 0,
            rows_dropped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.points_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }
}

impl Default for NormalizeStats {
    fn default() -> Self {
        Self::new()
    }
}
