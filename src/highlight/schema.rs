//! Output JSON schema definitions for highlight requests.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution. A highlight request
//! is everything a host-tool script needs to perform the actual visual
//! marking: the address list, the color, and the run counts.

use crate::address::Address;
use crate::utils::config::{HIGHLIGHT_BLUE, HIGHLIGHT_GREEN, HIGHLIGHT_RED};
use serde::{Deserialize, Serialize};

/// An RGB color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The fixed color applied to every highlighted address
pub fn highlight_color() -> Rgb {
    Rgb {
        r: HIGHLIGHT_RED,
        g: HIGHLIGHT_GREEN,
        b: HIGHLIGHT_BLUE,
    }
}

/// Top-level highlight request written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightRequest {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file this request was extracted from
    pub trace_source: String,

    /// Background color to apply
    pub color: Rgb,

    /// Distinct in-range addresses, sorted ascending
    pub addresses: Vec<Address>,

    /// Count of accepted addresses; equals `addresses.len()`
    pub accepted: u64,

    /// Count of candidates dropped as out of range
    pub rejected: u64,

    /// Timestamp when the request was generated
    pub generated_at: String,
}
