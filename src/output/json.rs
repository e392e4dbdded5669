//! JSON highlight request writer.
//!
//! Writes HighlightRequest structs to JSON files with proper formatting.

use crate::highlight::HighlightRequest;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a highlight request to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `request` - Highlight request to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_request(
    request: &HighlightRequest,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing highlight request to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, request).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Highlight request written ({} addresses)",
        request.addresses.len()
    );

    Ok(())
}

/// Read a highlight request from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - file read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_request(input_path: impl AsRef<Path>) -> Result<HighlightRequest, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading highlight request from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let request: HighlightRequest =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Request loaded: version {}, {} addresses",
        request.version,
        request.addresses.len()
    );

    Ok(request)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
