//! Paint command implementation.
//!
//! The paint command:
//! 1. Opens the trace file
//! 2. Extracts candidate addresses
//! 3. Filters them against the image bounds
//! 4. Writes the highlight request JSON

use crate::address::{AddressSpaceBounds, FlatAddressSpace};
use crate::highlight::build_highlight_set;
use crate::output::write_request;
use crate::parser::extract_addresses;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the paint command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct PaintArgs {
    /// Path to the QEMU trace file
    pub trace: PathBuf,

    /// Image bounds to filter against, inclusive both ends
    pub bounds: AddressSpaceBounds,

    /// Address space the hex tokens resolve into
    pub space: FlatAddressSpace,

    /// Output path for the highlight request JSON
    pub output: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

/// Validate paint arguments before executing
///
/// **Public** - called by main.rs before execute_paint
pub fn validate_args(args: &PaintArgs) -> Result<()> {
    if !args.trace.exists() {
        anyhow::bail!("Trace file does not exist: {}", args.trace.display());
    }
    if args.bounds.min() > args.bounds.max() {
        anyhow::bail!(
            "Invalid bounds: min {} exceeds max {}",
            args.bounds.min(),
            args.bounds.max()
        );
    }
    Ok(())
}

/// Execute the paint command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Trace file open/read failures (fatal, no partial result)
/// * Highlight request write failures
pub fn execute_paint(args: PaintArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Painting addresses from trace: {}", args.trace.display());
    info!(
        "Image bounds: {}..={} ({}-bit space)",
        args.bounds.min(),
        args.bounds.max(),
        args.space.width_bits()
    );

    // Step 1: Open the trace file. Open or read failure aborts the whole
    // run; we never paint from a partially read trace.
    info!("Step 1/3: Reading trace file...");
    let file = File::open(&args.trace)
        .with_context(|| format!("Failed to open trace file {}", args.trace.display()))?;
    let reader = BufReader::new(file);

    let extraction = extract_addresses(reader, &args.space)
        .with_context(|| format!("Failed to read trace file {}", args.trace.display()))?;

    debug!(
        "Extracted {} distinct candidates from {} matched lines ({} scanned)",
        extraction.candidates.len(),
        extraction.lines_matched,
        extraction.lines_scanned
    );

    // Step 2: Filter against the image bounds
    info!("Step 2/3: Filtering against image bounds...");
    let highlight_set = build_highlight_set(&extraction.candidates, &args.bounds);

    if highlight_set.is_empty() {
        // Zero matches is diagnosable, not fatal: an empty request is
        // still written so a downstream script sees an explicit no-op.
        warn!(
            "No addresses to color (matched {} of {} lines, {} rejected out of range)",
            extraction.lines_matched,
            extraction.lines_scanned,
            highlight_set.rejected()
        );
    }

    // Step 3: Write the highlight request
    info!("Step 3/3: Writing highlight request...");
    let request = highlight_set.to_request(&args.trace.display().to_string());
    write_request(&request, &args.output).context("Failed to write highlight request JSON")?;

    info!("✓ Highlight request written to: {}", args.output.display());
    info!("{} pointers were colored!", highlight_set.accepted());

    if highlight_set.rejected() > 0 {
        info!(
            "{} addresses were out of range and dropped",
            highlight_set.rejected()
        );
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("HIGHLIGHT SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Trace:          {}", args.trace.display());
        println!("Lines scanned:  {}", extraction.lines_scanned);
        println!("Lines matched:  {}", extraction.lines_matched);
        println!("Unresolvable:   {}", extraction.unresolved);
        println!("Accepted:       {}", highlight_set.accepted());
        println!("Out of range:   {}", highlight_set.rejected());
        println!("Request:        {}", args.output.display());
        println!("{}", "=".repeat(60));
    }

    let elapsed = start_time.elapsed();
    info!("Paint completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
