//! Tests for record-by-record normalization and drop accounting

use super::super::normalizer::normalize_records;
use super::record;

#[test]
fn test_normalize_plain_decimal_rows() {
    let headers = record(&["lat", "lon", "name"]);
    let rows = vec![
        record(&["28.6139", "77.2090", "alice"]),
        record(&["51.4778", "-0.4614", "bob"]),
    ];

    let result = normalize_records(&headers, &rows);

    assert_eq!(result.points.len(), 2);
    assert_eq!(result.stats.total_rows, 2);
    assert_eq!(result.stats.points_parsed, 2);
    assert_eq!(result.stats.rows_dropped, 0);

    assert_eq!(result.points[0].label, "alice");
    assert!((result.points[0].lat - 28.6139).abs() < 1e-9);
    assert_eq!(result.points[1].label, "bob");
    assert!((result.points[1].lon - (-0.4614)).abs() < 1e-9);
}

#[test]
fn test_normalize_resolves_header_aliases() {
    let headers = record(&["Latitude", "Longitude", "Analyst"]);
    let rows = vec![record(&["28.6139", "77.2090", "alice"])];

    let result = normalize_records(&headers, &rows);

    assert_eq!(result.points.len(), 1);
    assert_eq!(result.points[0].label, "alice");
}

#[test]
fn test_normalize_parses_dms_cells() {
    let headers = record(&["lat", "lon", "user"]);
    let rows = vec![record(&["28°36'50\"N", "77 12 30 E", "carol"])];

    let result = normalize_records(&headers, &rows);

    assert_eq!(result.points.len(), 1);
    let expected_lat = 28.0 + 36.0 / 60.0 + 50.0 / 3600.0;
    let expected_lon = 77.0 + 12.0 / 60.0 + 30.0 / 3600.0;
    assert!((result.points[0].lat - expected_lat).abs() < 1e-9);
    assert!((result.points[0].lon - expected_lon).abs() < 1e-9);
}

#[test]
fn test_missing_latitude_column_drops_rows() {
    // No header matches any latitude alias
    let headers = record(&["longitude", "name"]);
    let rows = vec![record(&["77.2090", "alice"])];

    let result = normalize_records(&headers, &rows);

    assert!(result.points.is_empty());
    assert_eq!(result.stats.rows_dropped, 1);
    assert_eq!(result.stats.errors.len(), 1);
    assert!(result.stats.errors[0].contains("latitude"));
}

#[test]
fn test_malformed_coordinate_drops_row_and_preserves_order() {
    let headers = record(&["lat", "lon", "name"]);
    let rows = vec![
        record(&["28.6139", "77.2090", "alice"]),
        record(&["invalid", "77.2", "bob"]),
        record(&["51.4778", "-0.4614", "carol"]),
    ];

    let result = normalize_records(&headers, &rows);

    assert_eq!(result.points.len(), 2);
    assert_eq!(result.stats.rows_dropped, 1);

    // Survivors keep their relative input order
    assert_eq!(result.points[0].label, "alice");
    assert_eq!(result.points[1].label, "carol");
}

#[test]
fn test_empty_label_drops_row() {
    let headers = record(&["lat", "lon", "name"]);
    let rows = vec![
        record(&["28.6139", "77.2090", "   "]),
        record(&["51.4778", "-0.4614", "bob"]),
    ];

    let result = normalize_records(&headers, &rows);

    assert_eq!(result.points.len(), 1);
    assert_eq!(result.points[0].label, "bob");
    assert_eq!(result.stats.rows_dropped, 1);
}

#[test]
fn test_short_record_drops_row() {
    let headers = record(&["lat", "lon", "name"]);
    let rows = vec![record(&["28.6139"])];

    let result = normalize_records(&headers, &rows);

    assert!(result.points.is_empty());
    assert_eq!(result.stats.rows_dropped, 1);
}

#[test]
fn test_empty_input() {
    let headers = record(&["lat", "lon", "name"]);

    let result = normalize_records(&headers, &[]);

    assert!(result.points.is_empty());
    assert_eq!(result.stats.total_rows, 0);
    assert_eq!(result.stats.success_rate(), 0.0);
}

#[test]
fn test_success_rate() {
    let headers = record(&["lat", "lon", "name"]);
    let rows = vec![
        record(&["28.6139", "77.2090", "alice"]),
        record(&["invalid", "77.2", "bob"]),
    ];

    let result = normalize_records(&headers, &rows);

    assert_eq!(result.stats.success_rate(), 50.0);
}
