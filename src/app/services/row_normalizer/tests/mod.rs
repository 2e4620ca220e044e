//! Test utilities for row normalization testing

use csv::StringRecord;

mod normalizer_tests;

/// Helper to build a record from string fields
pub fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}
