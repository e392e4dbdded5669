use crate::output::read_request;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a highlight request JSON file
pub fn validate_request_file(file_path: PathBuf) -> Result<()> {
    println!("Validating highlight request: {}", file_path.display());

    let request = read_request(&file_path)?;

    println!("✓ Valid highlight request JSON");
    println!("  Version:   {}", request.version);
    println!("  Trace:     {}", request.trace_source);
    println!(
        "  Color:     rgb({}, {}, {})",
        request.color.r, request.color.g, request.color.b
    );
    println!("  Addresses: {}", request.addresses.len());
    println!("  Accepted:  {}", request.accepted);
    println!("  Rejected:  {}", request.rejected);

    if request.accepted != request.addresses.len() as u64 {
        anyhow::bail!(
            "Accepted count {} does not match address list length {}",
            request.accepted,
            request.addresses.len()
        );
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("trace-paint v{}", env!("CARGO_PKG_VERSION"));
    println!("Highlight request schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Extracts memory addresses from QEMU execution traces and");
    println!("builds highlight requests for binary analysis tools.");
}
