//! Data models for normalized geographic points.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A labeled geographic point in canonical decimal-degree form
///
/// Points are only constructed through [`GeoPoint::new`], which enforces
/// the structural invariants: a non-empty trimmed label and finite
/// coordinates. Out-of-range values pass through unchanged; range checking
/// belongs to downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,

    /// Label attached to the point (analyst, user, or place name)
    pub label: String,
}

impl GeoPoint {
    /// Create a validated point
    pub fn new(lat: f64, lon: f64, label: impl Into<String>) -> Result<Self> {
        let label = label.into().trim().to_string();

        if label.is_empty() {
            return Err(Error::data_validation(
                "Point label is empty after trimming".to_string(),
            ));
        }

        if !lat.is_finite() || !lon.is_finite() {
            return Err(Error::data_validation(format!(
                "Non-finite coordinates for '{}': lat = {}, lon = {}",
                label, lat, lon
            )));
        }

        Ok(Self { lat, lon, label })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_point() {
        let point = GeoPoint::new(28.6139, 77.2090, "alice").unwrap();

        assert_eq!(point.lat, 28.6139);
        assert_eq!(point.lon, 77.2090);
        assert_eq!(point.label, "alice");
    }

    #[test]
    fn test_new_trims_label() {
        let point = GeoPoint::new(0.0, 0.0, "  bob  ").unwrap();
        assert_eq!(point.label, "bob");
    }

    #[test]
    fn test_new_rejects_empty_label() {
        assert!(GeoPoint::new(0.0, 0.0, "").is_err());
        assert!(GeoPoint::new(0.0, 0.0, "   ").is_err());
    }

    #[test]
    fn test_new_rejects_non_finite_coordinates() {
        assert!(GeoPoint::new(f64::NAN, 0.0, "x").is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY, "x").is_err());
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        // Range validation is deliberately not performed here
        let point = GeoPoint::new(123.0, -456.0, "offshore").unwrap();
        assert_eq!(point.lat, 123.0);
        assert_eq!(point.lon, -456.0);
    }
}
