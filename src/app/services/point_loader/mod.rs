//! Modification-time-aware point loading and caching
//!
//! This module owns the on-disk source file and re-parses it only when its
//! modification time advances, serving the last successfully normalized
//! result otherwise. Loading is triggered lazily by callers; there is no
//! background refresh.

pub mod loader;

// Re-export main types for easy access
pub use loader::PointLoader;
