//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading and scanning a trace stream
///
/// Per-line grammar misses and per-candidate resolve failures are not
/// errors; only a failure of the underlying stream is fatal to a run.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to read trace stream: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when resolving a hex token into an address
///
/// Always recovered locally: a token that fails to resolve drops that
/// one candidate, never the whole run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("token is not a valid hex address: {0}")]
    InvalidDigit(String),

    #[error("value {value} does not fit in a {width}-bit address space")]
    OutOfWidth { value: String, width: u32 },

    #[error("missing 0x prefix on token: {0}")]
    MissingPrefix(String),
}

/// Errors that can occur during highlight request file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("invalid output path: {0}")]
    InvalidPath(String),
}
