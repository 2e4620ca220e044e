//! Application constants for the geopoint loader
//!
//! This module contains the accepted column alias lists and default values
//! used throughout the loading pipeline.

// =============================================================================
// Column Aliases
// =============================================================================
//
// Alias lists are searched in order, so earlier spellings win when a file
// carries more than one. Matching is case-insensitive.

/// Accepted latitude column spellings, in priority order
pub const LATITUDE_ALIASES: &[&str] = &["lat", "latitude", "y"];

/// Accepted longitude column spellings, in priority order
pub const LONGITUDE_ALIASES: &[&str] = &["lon", "lng", "longitude", "x"];

/// Accepted label column spellings, in priority order
pub const LABEL_ALIASES: &[&str] = &["user", "username", "name", "label", "analyst"];

// =============================================================================
// Loader Defaults
// =============================================================================

/// Default bound on a single source file read, in seconds
///
/// Guards against unresponsive storage (network mounts); a stalled read
/// would otherwise block the calling request indefinitely.
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 10;
