//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod paint;
pub mod utils;

// Re-export main command functions
pub use paint::{execute_paint, validate_args, PaintArgs};
pub use utils::{display_version, validate_request_file};
