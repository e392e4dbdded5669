//! Trace Paint CLI
//!
//! Extracts memory addresses from QEMU execution traces and builds
//! highlight requests for binary analysis tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use trace_paint::address::{Address, AddressSpaceBounds, FlatAddressSpace};
use trace_paint::commands::{
    display_version, execute_paint, validate_args, validate_request_file, PaintArgs,
};

/// Trace Paint - highlight traced addresses inside a binary image
#[derive(Parser, Debug)]
#[command(name = "trace-paint")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract addresses from a trace and build a highlight request
    Paint {
        /// Path to the QEMU trace file
        #[arg(short, long)]
        trace: PathBuf,

        /// Minimum address of the loaded image (hex, inclusive)
        #[arg(long, default_value = "0x0")]
        min: String,

        /// Maximum address of the loaded image (hex, inclusive).
        /// Defaults to the largest address at the chosen width.
        #[arg(long)]
        max: Option<String>,

        /// Pointer width of the address space in bits
        #[arg(long, default_value = "64", value_parser = ["32", "64"])]
        width: String,

        /// Output path for the highlight request JSON
        #[arg(short, long, default_value = "highlight.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a highlight request JSON file
    Validate {
        /// Path to highlight request JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Paint {
            trace,
            min,
            max,
            width,
            output,
            summary,
        } => {
            // value_parser restricts width to "32" or "64"
            let width_bits: u32 = width.parse().context("Invalid address width")?;
            let space = FlatAddressSpace::new(width_bits);

            let min = Address::parse_hex(&min)
                .with_context(|| format!("Invalid --min address: {}", min))?;
            let max = match max {
                Some(ref s) => {
                    Address::parse_hex(s).with_context(|| format!("Invalid --max address: {}", s))?
                }
                None => default_max(width_bits),
            };

            let args = PaintArgs {
                trace,
                bounds: AddressSpaceBounds::new(min, max),
                space,
                output,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute paint
            execute_paint(args)?;
        }

        Commands::Validate { file } => {
            validate_request_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Largest address at the given pointer width
fn default_max(width_bits: u32) -> Address {
    if width_bits >= 64 {
        Address::new(u64::MAX)
    } else {
        Address::new((1u64 << width_bits) - 1)
    }
}
