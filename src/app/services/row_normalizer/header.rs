//! Case-insensitive column lookup over a parsed header row

use csv::StringRecord;
use std::collections::HashMap;

/// Case-insensitive view of a header row
///
/// Header names are kept exactly as they appear in the file; lookups fold
/// both sides to lowercase. The view is built once per normalization pass
/// and is a pure function of the header record.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    /// Lowercased column name to index mapping
    name_to_index: HashMap<String, usize>,
}

impl ColumnMap {
    /// Build the lookup view from a header record
    ///
    /// When a file repeats a header name, the first occurrence wins.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            name_to_index
                .entry(header.trim().to_lowercase())
                .or_insert(index);
        }

        Self { name_to_index }
    }

    /// Resolve the first matching candidate, in the caller's priority order
    pub fn resolve(&self, candidates: &[&str]) -> Option<usize> {
        candidates
            .iter()
            .find_map(|candidate| self.name_to_index.get(&candidate.to_lowercase()).copied())
    }

    /// Check if a column exists under any spelling case
    pub fn has_column(&self, name: &str) -> bool {
        self.name_to_index.contains_key(&name.to_lowercase())
    }

    /// Number of distinct column names in the view
    pub fn len(&self) -> usize {
        self.name_to_index.len()
    }

    /// Whether the header row was empty
    pub fn is_empty(&self) -> bool {
        self.name_to_index.is_empty()
    }
}
