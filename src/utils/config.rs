//! Configuration and constants for the CLI.

/// Current highlight request schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default pointer width for the flat address space, in bits
pub const DEFAULT_ADDRESS_WIDTH: u32 = 64;

// The fixed highlight color. Pink fuchsia, chosen to stand out against
// every disassembler theme we have seen.
pub const HIGHLIGHT_RED: u8 = 255;
pub const HIGHLIGHT_GREEN: u8 = 119;
pub const HIGHLIGHT_BLUE: u8 = 255;
