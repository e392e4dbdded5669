//! Address types and resolution.
//!
//! This module handles:
//! - Typed addresses with a total order
//! - Inclusive address space bounds for the loaded image
//! - Resolving hex tokens into addresses via an injected resolver

pub mod resolver;
pub mod space;

// Re-export main types
pub use resolver::{AddressResolver, FlatAddressSpace};
pub use space::{Address, AddressSpaceBounds};
