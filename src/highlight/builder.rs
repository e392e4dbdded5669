//! Highlight set construction.
//!
//! Takes the candidate addresses produced by extraction, applies the
//! image bounds filter, and assembles the final deduplicated set plus
//! the accepted/rejected counts for reporting.

use super::schema::{highlight_color, HighlightRequest};
use crate::address::{Address, AddressSpaceBounds};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use log::debug;
use std::collections::BTreeSet;

/// The final in-range address set for one run
///
/// Built once per run and handed to the highlighter (or serialized for
/// it); never retained across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSet {
    addresses: BTreeSet<Address>,
    accepted: usize,
    rejected: usize,
}

impl HighlightSet {
    /// Addresses accepted for highlighting, deduplicated
    pub fn addresses(&self) -> &BTreeSet<Address> {
        &self.addresses
    }

    /// Count of distinct in-range addresses
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Count of distinct candidates dropped as out of range
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Assemble the serializable highlight request for this set
    ///
    /// **Public** - used by commands to create final output
    pub fn to_request(&self, trace_source: &str) -> HighlightRequest {
        HighlightRequest {
            version: SCHEMA_VERSION.to_string(),
            trace_source: trace_source.to_string(),
            color: highlight_color(),
            addresses: self.addresses.iter().copied().collect(),
            accepted: self.accepted as u64,
            rejected: self.rejected as u64,
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Partition candidates against the image bounds
///
/// **Public** - main entry point for building the highlight set
///
/// An address is accepted iff `min <= addr <= max`, inclusive on both
/// ends. Rejected addresses are dropped but counted; they never reach
/// the highlighter. An empty candidate set yields an empty highlight
/// set with both counts zero, which is not an error.
pub fn build_highlight_set(
    candidates: &BTreeSet<Address>,
    bounds: &AddressSpaceBounds,
) -> HighlightSet {
    let mut addresses = BTreeSet::new();
    let mut rejected = 0usize;

    for &addr in candidates {
        if bounds.contains(addr) {
            addresses.insert(addr);
        } else {
            debug!(
                "Rejecting out-of-range address {} (bounds {}..={})",
                addr,
                bounds.min(),
                bounds.max()
            );
            rejected += 1;
        }
    }

    let accepted = addresses.len();
    HighlightSet {
        addresses,
        accepted,
        rejected,
    }
}
