//! Command implementations for the geopoint loader CLI
//!
//! This module contains the command execution logic, logging setup, and
//! output rendering for the CLI interface.

use anyhow::Context;
use tracing::{debug, info};

use crate::app::models::GeoPoint;
use crate::app::services::coordinate_parser::parse_coordinate;
use crate::app::services::point_loader::PointLoader;
use crate::cli::args::{Args, CheckArgs, Commands, OutputFormat, PointsArgs};
use crate::config::Config;

/// Main command runner for the geopoint loader
pub async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Commands::Points(points_args)) => run_points(points_args).await,
        Some(Commands::Check(check_args)) => run_check(check_args),
        None => {
            // main prints help before dispatching when no subcommand is given
            Ok(())
        }
    }
}

/// Load the source file and print the normalized point list
async fn run_points(args: PointsArgs) -> anyhow::Result<()> {
    setup_logging(args.get_log_level());

    info!("Starting geopoint loader");
    debug!("Command line arguments: {:?}", args);

    args.validate().context("Invalid arguments")?;

    let config =
        Config::new(&args.source_path).with_read_timeout_secs(args.read_timeout_secs);
    config.validate().context("Invalid configuration")?;

    let loader = PointLoader::from_config(&config);
    let points = loader.load_points().await;

    render_points(&points, &args.output_format).context("Failed to render point list")?;

    Ok(())
}

/// Parse a single coordinate value and print the decimal-degree result
fn run_check(args: CheckArgs) -> anyhow::Result<()> {
    setup_logging(args.get_log_level());

    match parse_coordinate(&args.value) {
        Ok(decimal) => {
            println!("{}", decimal);
            Ok(())
        }
        Err(reason) => Err(anyhow::anyhow!(
            "Invalid coordinate '{}': {}",
            args.value,
            reason
        )),
    }
}

/// Set up structured logging at the given level
fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("geopoint_loader={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Render the point list in the requested output format
fn render_points(points: &[GeoPoint], format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Human => {
            for point in points {
                println!("{:<24} {:>12.5} {:>12.5}", point.label, point.lat, point.lon);
            }
            println!("{} points", points.len());
        }
        OutputFormat::Json => {
            let rendered =
                serde_json::to_string_pretty(points).context("Failed to serialize points")?;
            println!("{}", rendered);
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for point in points {
                writer
                    .serialize(point)
                    .context("Failed to write CSV record")?;
            }
            writer.flush().context("Failed to flush CSV output")?;
        }
    }

    Ok(())
}
