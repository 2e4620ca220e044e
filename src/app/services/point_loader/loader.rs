//! File-backed point cache with modification-time invalidation

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::app::models::GeoPoint;
use crate::app::services::row_normalizer::normalize_records;
use crate::config::Config;
use crate::constants::DEFAULT_READ_TIMEOUT_SECS;
use crate::{Error, Result};

/// One successfully normalized generation of the source file
///
/// The entry is replaced wholesale on every detected file change; `points`
/// always reflects exactly the content that produced `modified`.
#[derive(Debug, Clone)]
struct CacheEntry {
    points: Vec<GeoPoint>,
    modified: SystemTime,
}

/// Modification-time-aware loader for a CSV-backed point list
///
/// The cache is the loader's only state. The check-then-maybe-reload
/// sequence runs under a single mutex, so concurrent callers during an
/// invalidation window await one load instead of issuing redundant reads.
#[derive(Debug)]
pub struct PointLoader {
    source_path: PathBuf,
    read_timeout: Duration,
    cache: Mutex<Option<CacheEntry>>,
    loads_performed: AtomicUsize,
}

impl PointLoader {
    /// Create a loader for the given source file with the default read bound
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            cache: Mutex::new(None),
            loads_performed: AtomicUsize::new(0),
        }
    }

    /// Create a loader from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            source_path: config.source_path.clone(),
            read_timeout: config.read_timeout(),
            cache: Mutex::new(None),
            loads_performed: AtomicUsize::new(0),
        }
    }

    /// Path of the backing source file
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Number of full read-and-parse passes performed so far
    ///
    /// Calls served from the cache do not increment this, which makes the
    /// re-parse frequency observable in cache behavior tests.
    pub fn loads_performed(&self) -> usize {
        self.loads_performed.load(Ordering::Relaxed)
    }

    /// Load the current point list, re-parsing only if the file changed
    ///
    /// Never returns an error: when the source is unavailable or unreadable
    /// the last successfully loaded points are served (or an empty list if
    /// no load ever succeeded), with the condition logged.
    pub async fn load_points(&self) -> Vec<GeoPoint> {
        let mut cache = self.cache.lock().await;

        let modified = match tokio::fs::metadata(&self.source_path)
            .await
            .and_then(|metadata| metadata.modified())
        {
            Ok(modified) => modified,
            Err(e) => {
                warn!(
                    "Source file {} unavailable, serving {} retained points: {}",
                    self.source_path.display(),
                    cache.as_ref().map_or(0, |entry| entry.points.len()),
                    e
                );
                return cache
                    .as_ref()
                    .map(|entry| entry.points.clone())
                    .unwrap_or_default();
            }
        };

        if let Some(entry) = cache.as_ref() {
            if modified <= entry.modified {
                debug!(
                    "Source file unchanged, serving {} cached points",
                    entry.points.len()
                );
                return entry.points.clone();
            }
        }

        // First load, or the file advanced: read and re-parse the whole file
        let read = tokio::time::timeout(
            self.read_timeout,
            tokio::fs::read_to_string(&self.source_path),
        )
        .await;

        let content = match read {
            Ok(Ok(content)) => content,
            Ok(Err(e)) => {
                warn!(
                    "Failed to read source file {}: {}",
                    self.source_path.display(),
                    e
                );
                return cache
                    .as_ref()
                    .map(|entry| entry.points.clone())
                    .unwrap_or_default();
            }
            Err(_) => {
                warn!(
                    "Timed out reading source file {} after {:?}",
                    self.source_path.display(),
                    self.read_timeout
                );
                return cache
                    .as_ref()
                    .map(|entry| entry.points.clone())
                    .unwrap_or_default();
            }
        };

        let points = match parse_content(&self.source_path, &content) {
            Ok(points) => points,
            Err(e) => {
                warn!(
                    "Failed to parse source file {}: {}",
                    self.source_path.display(),
                    e
                );
                return cache
                    .as_ref()
                    .map(|entry| entry.points.clone())
                    .unwrap_or_default();
            }
        };

        self.loads_performed.fetch_add(1, Ordering::Relaxed);
        info!(
            "Loaded {} points from {}",
            points.len(),
            self.source_path.display()
        );

        *cache = Some(CacheEntry {
            points: points.clone(),
            modified,
        });

        points
    }
}

/// Parse full file content into normalized points
fn parse_content(path: &Path, content: &str) -> Result<Vec<GeoPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| {
            Error::csv_parsing(
                path.to_string_lossy().to_string(),
                "Failed to read CSV headers".to_string(),
                Some(e),
            )
        })?
        .clone();

    let mut records = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                debug!("Skipped unreadable CSV record: {}", e);
            }
        }
    }

    Ok(normalize_records(&headers, &records).points)
}
