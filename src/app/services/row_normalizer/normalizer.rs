//! Record-by-record normalization of raw CSV rows
//!
//! Combines column alias resolution with coordinate parsing to turn raw
//! records into validated points. Rows that cannot be normalized are
//! dropped and counted, never fatal.

use csv::StringRecord;
use tracing::{debug, info, warn};

use super::header::ColumnMap;
use super::stats::{NormalizeResult, NormalizeStats};
use crate::app::models::GeoPoint;
use crate::app::services::coordinate_parser::parse_coordinate;
use crate::constants::{LABEL_ALIASES, LATITUDE_ALIASES, LONGITUDE_ALIASES};
use crate::{Error, Result};

/// Normalize raw CSV records into labeled decimal-degree points
///
/// Rows are processed in input order and survivors keep their relative
/// order. A row is dropped when a required column cannot be resolved
/// against the accepted aliases, a coordinate cell fails to parse, or the
/// label is empty after trimming. The dropped count is reported as a log
/// event at the end of the pass and returned in the statistics.
pub fn normalize_records(headers: &StringRecord, records: &[StringRecord]) -> NormalizeResult {
    let columns = ColumnMap::from_headers(headers);
    let mut stats = NormalizeStats::new();
    let mut points = Vec::new();

    for record in records {
        stats.total_rows += 1;

        match normalize_record(&columns, record) {
            Ok(point) => {
                points.push(point);
                stats.points_parsed += 1;
            }
            Err(e) => {
                stats.rows_dropped += 1;
                stats.errors.push(format!("Row {}: {}", stats.total_rows, e));
                debug!("Dropped row {}: {}", stats.total_rows, e);
            }
        }
    }

    if stats.rows_dropped > 0 {
        warn!(
            "Dropped {} of {} rows during normalization",
            stats.rows_dropped, stats.total_rows
        );
    }
    info!(
        "Normalized {} points from {} rows",
        stats.points_parsed, stats.total_rows
    );

    NormalizeResult { points, stats }
}

/// Normalize a single record into a point
fn normalize_record(columns: &ColumnMap, record: &StringRecord) -> Result<GeoPoint> {
    let lat_col = columns.resolve(LATITUDE_ALIASES).ok_or_else(|| {
        Error::data_validation("No latitude column matches the accepted aliases".to_string())
    })?;
    let lon_col = columns.resolve(LONGITUDE_ALIASES).ok_or_else(|| {
        Error::data_validation("No longitude column matches the accepted aliases".to_string())
    })?;
    let label_col = columns.resolve(LABEL_ALIASES).ok_or_else(|| {
        Error::data_validation("No label column matches the accepted aliases".to_string())
    })?;

    // Short records yield empty cells here, which fail parsing below
    let lat_raw = record.get(lat_col).unwrap_or("");
    let lon_raw = record.get(lon_col).unwrap_or("");
    let label_raw = record.get(label_col).unwrap_or("");

    let lat = parse_coordinate(lat_raw)
        .map_err(|e| Error::data_validation(format!("Invalid latitude '{}': {}", lat_raw, e)))?;
    let lon = parse_coordinate(lon_raw)
        .map_err(|e| Error::data_validation(format!("Invalid longitude '{}': {}", lon_raw, e)))?;

    GeoPoint::new(lat, lon, label_raw)
}
