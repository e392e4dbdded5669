//! Trace parsing.
//!
//! This module handles:
//! - Matching lines against the QEMU trace record grammar
//! - Extracting and resolving embedded address tokens
//! - Deduplicating candidates across the whole trace

pub mod qemu_trace;

// Re-export main types
pub use qemu_trace::{extract_addresses, match_trace_line, Extraction};
