//! Command-line argument definitions for the geopoint loader
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::DEFAULT_READ_TIMEOUT_SECS;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the geopoint loader
///
/// Normalizes loosely-structured CSV coordinate files into a canonical
/// ordered list of labeled decimal-degree points.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "geopoint-loader",
    version,
    about = "Normalize loosely-structured CSV coordinate files into decimal-degree point lists",
    long_about = "Reads a CSV file whose coordinate columns may be expressed in decimal-degree \
                  or degrees-minutes-seconds notation, with inconsistent header names and \
                  optional hemisphere letters, and produces a canonical ordered list of \
                  labeled decimal-degree points."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the geopoint loader
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load the source file and print the normalized point list
    Points(PointsArgs),
    /// Parse a single coordinate value and print the decimal-degree result
    Check(CheckArgs),
}

/// Arguments for the points command (main loading path)
#[derive(Debug, Clone, Parser)]
pub struct PointsArgs {
    /// Path to the source CSV file
    ///
    /// The file must carry a header row; accepted column spellings for
    /// latitude, longitude and label are resolved case-insensitively.
    #[arg(
        short = 's',
        long = "source",
        value_name = "FILE",
        help = "Path to the source CSV file"
    )]
    pub source_path: PathBuf,

    /// Bound on the source file read, in seconds
    ///
    /// Guards against unresponsive storage such as network mounts.
    #[arg(
        long = "timeout",
        value_name = "SECS",
        default_value_t = DEFAULT_READ_TIMEOUT_SECS,
        help = "Bound on the source file read, in seconds"
    )]
    pub read_timeout_secs: u64,

    /// Output format for the point list
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the point list"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the check command (single-value parsing aid)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Raw coordinate value to parse
    ///
    /// Examples: 28.6139, "28,6139", "28°36'50\"N", "77 12 30 W"
    #[arg(value_name = "VALUE", help = "Raw coordinate value to parse")]
    pub value: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl PointsArgs {
    /// Validate the points command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.source_path.exists() {
            return Err(Error::configuration(format!(
                "Source path does not exist: {}",
                self.source_path.display()
            )));
        }

        if !self.source_path.is_file() {
            return Err(Error::configuration(format!(
                "Source path is not a file: {}",
                self.source_path.display()
            )));
        }

        if self.read_timeout_secs == 0 {
            return Err(Error::configuration(
                "Read timeout must be greater than 0 seconds".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl CheckArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn points_args(source_path: PathBuf) -> PointsArgs {
        PointsArgs {
            source_path,
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_points_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("points.csv");
        fs::write(&source, "lat,lon,name\n").unwrap();

        let args = points_args(source.clone());
        assert!(args.validate().is_ok());

        // Nonexistent source
        let args = points_args(temp_dir.path().join("absent.csv"));
        assert!(args.validate().is_err());

        // Directory instead of file
        let args = points_args(temp_dir.path().to_path_buf());
        assert!(args.validate().is_err());

        // Zero timeout
        let mut args = points_args(source);
        args.read_timeout_secs = 0;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("points.csv");
        fs::write(&source, "lat,lon,name\n").unwrap();

        let mut args = points_args(source);

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}
