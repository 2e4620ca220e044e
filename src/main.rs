use clap::Parser;
use geopoint_loader::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Geopoint Loader - CSV Coordinate Normalizer");
    println!("===========================================");
    println!();
    println!("Normalize loosely-structured CSV coordinate files into a canonical");
    println!("ordered list of labeled decimal-degree points.");
    println!();
    println!("USAGE:");
    println!("    geopoint-loader <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    points      Load the source file and print the normalized point list");
    println!("    check       Parse a single coordinate value and print the result");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Print the normalized points from a CSV file:");
    println!("    geopoint-loader points --source waypoints.csv");
    println!();
    println!("    # Emit the point list as JSON:");
    println!("    geopoint-loader points --source waypoints.csv --format json");
    println!();
    println!("    # Check how a single coordinate value parses:");
    println!("    geopoint-loader check \"28°36'50\\\"N\"");
    println!();
    println!("For detailed help on any command, use:");
    println!("    geopoint-loader <COMMAND> --help");
}
