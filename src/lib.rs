//! Trace Paint
//!
//! Extracts memory addresses referenced in a QEMU execution trace,
//! deduplicates them, filters them against the bounds of a loaded
//! binary image, and emits a highlight request an analysis tool can
//! apply to visually mark every traced location.
//!
//! This crate provides the core implementation for the `trace-paint`
//! CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install trace-paint
//! trace-paint --help
//! ```

pub mod address;
pub mod commands;
pub mod highlight;
pub mod output;
pub mod parser;
pub mod utils;
