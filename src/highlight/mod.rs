//! Highlight set construction and request schema.
//!
//! This module handles:
//! - Filtering candidate addresses against the image bounds
//! - Accepted/rejected accounting for the final report
//! - The serializable highlight request consumed by host-tool scripts

pub mod builder;
pub mod schema;

// Re-export main types
pub use builder::{build_highlight_set, HighlightSet};
pub use schema::{highlight_color, HighlightRequest, Rgb};
