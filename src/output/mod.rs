//! Output writers for highlight request data.
//!
//! This module handles writing data to disk:
//! - JSON highlight requests consumed by host-tool scripts

pub mod json;

// Re-export main functions
pub use json::{read_request, write_request};
