//! Command-line interface for `squarebuf`, a square point-buffer tool for shapefiles.
//!
//! This binary provides a user-friendly CLI to interact with the [`squarebuf_core`]
//! library, generating fixed-size square polygons around the points of a shapefile
//! dataset and carrying the attribute table across.
//!
//! # Architecture
//!
//! The CLI is built using [`clap`] for argument parsing and [`tracing`] for structured logging.
//! It acts as a thin façade that parses arguments, configures logging, and delegates
//! to command handlers in front of the core pipeline.
//!
//! # Available Commands
//!
//! - `buffer` - Generate square buffers around the points of a dataset
//! - `info` - Display dataset information and metadata
//! - `drivers` - List all available format drivers and their capabilities

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use tabled::Table;
use tracing::{Level, info, warn};
use tracing_log::LogTracer;
use tracing_subscriber::FmtSubscriber;

use squarebuf_core::SquarebufError;
use squarebuf_core::buffer::DEFAULT_DISTANCE;
use squarebuf_core::drivers;
use squarebuf_core::error;
use squarebuf_core::operations::{self, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
use squarebuf_core::srs;

mod display;

/// Driver used for both reading the input and writing the output dataset.
const SHAPEFILE_DRIVER: &str = "ESRI Shapefile";

#[derive(Parser)]
#[command(
    name = "squarebuf",
    version,
    about = "Square buffer generation for point shapefiles",
    long_about = "squarebuf reads point features from a shapefile, generates a fixed-size\n\
                  square polygon centered on each point, and writes the polygons plus the\n\
                  original attributes to a new shapefile dataset."
)]
/// Command-line arguments and options for the `squarebuf` CLI.
///
/// This struct defines the top-level CLI interface, including global flags for
/// logging verbosity and the subcommand to execute.
struct Cli {
    /// Enable verbose (INFO level) logging output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug (DEBUG level) logging output with detailed diagnostics.
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the `squarebuf` CLI.
#[derive(Subcommand)]
enum Commands {
    /// Generates square buffers around every point of the input dataset.
    ///
    /// Reads the input point dataset, buffers each feature into a square of
    /// side `2 * distance` centered on the point, and writes the result as a
    /// polygon dataset `squareBuffers` inside the output folder. The output
    /// folder is deleted and recreated on every run.
    Buffer {
        /// Path to the input point dataset (`.shp` is appended to bare names).
        #[arg(short, long, value_name = "DATASET", default_value = DEFAULT_INPUT)]
        input: String,

        /// Output folder, destructively replaced on every run.
        #[arg(short, long, value_name = "FOLDER", default_value = DEFAULT_OUTPUT_DIR)]
        output: String,

        /// Buffer distance, in the linear unit of the input reference system.
        #[arg(long, value_name = "DISTANCE", default_value_t = DEFAULT_DISTANCE)]
        distance: f64,
    },

    /// Displays information about a vector dataset.
    ///
    /// Shows the driver, geometry type, feature count, coordinate reference
    /// system, and attribute schema of the dataset.
    Info {
        /// Path to the input dataset.
        #[arg(value_name = "DATASET")]
        input: String,
    },

    /// Lists all available format drivers and their capabilities.
    ///
    /// This command provides an overview of which formats can be read from,
    /// written to, and provide metadata information.
    Drivers,
}

/// Entry point for the `squarebuf` command-line interface.
///
/// This function parses command-line arguments, configures the logging system based on
/// verbosity flags, and dispatches to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if command execution fails or if the logging system cannot be initialized.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity flags
    let log_level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    // Bridge logs from the `log` crate to the `tracing` ecosystem.
    LogTracer::init()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true) // Show module paths for better context
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute the command
    match cli.command {
        Commands::Buffer {
            input,
            output,
            distance,
        } => {
            info!("Buffering {input} into {output}");
            handle_buffer(&input, &output, distance)?;
        },
        Commands::Info { input } => {
            info!("Displaying info for {input}");
            handle_info(&input)?;
        },
        Commands::Drivers => {
            handle_drivers()?;
        },
    }

    Ok(())
}

/// Surfaces the recovery suggestion of a core error, then converts it into a
/// CLI-level error carrying the user-facing message.
fn report(err: SquarebufError) -> anyhow::Error {
    if let Some(suggestion) = err.recovery_suggestion() {
        warn!("{suggestion}");
    }
    anyhow!(err.user_message())
}

fn handle_buffer(input: &str, output: &str, distance: f64) -> Result<()> {
    let driver = drivers::find_driver(SHAPEFILE_DRIVER)
        .ok_or_else(|| report(error::driver_not_found(SHAPEFILE_DRIVER).into()))?;
    let output_srs = srs::from_epsg(srs::OUTPUT_EPSG)
        .ok_or_else(|| anyhow!("Spatial reference EPSG:{} not found.", srs::OUTPUT_EPSG))?;

    operations::buffer(
        input,
        std::path::Path::new(output),
        distance,
        &driver,
        output_srs,
    )
    .map_err(report)?;
    info!("Buffer run complete.");
    Ok(())
}

fn handle_info(input: &str) -> Result<()> {
    let driver = drivers::find_driver(SHAPEFILE_DRIVER)
        .ok_or_else(|| report(error::driver_not_found(SHAPEFILE_DRIVER).into()))?;

    let dataset_info = operations::info(input, &driver).map_err(report)?;
    display::display_dataset_info(&dataset_info);
    Ok(())
}

/// Handles the `drivers` subcommand by displaying a formatted table of available drivers.
///
/// Retrieves all drivers from the driver registry and presents their capabilities
/// (info, read, write) in a human-readable table format written to standard output.
#[allow(clippy::unnecessary_wraps)] // Result for consistency with the other handlers
fn handle_drivers() -> Result<()> {
    let all_drivers = drivers::get_drivers();

    println!("\nAvailable Drivers ({} total):\n", all_drivers.len());

    let rows: Vec<display::DriverRow> = all_drivers
        .iter()
        .map(|d| display::DriverRow {
            short_name: d.short_name.to_string(),
            long_name: d.long_name.to_string(),
            info: d.capabilities.info.as_str().to_string(),
            read: d.capabilities.read.as_str().to_string(),
            write: d.capabilities.write.as_str().to_string(),
        })
        .collect();

    let table = Table::new(rows).to_string();
    println!("{table}");

    Ok(())
}
