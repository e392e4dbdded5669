//! Typed addresses and address space bounds.
//!
//! An `Address` is an opaque, ordered value inside some address space.
//! `AddressSpaceBounds` describes the inclusive range of addresses valid
//! for the currently analyzed image; it is supplied by the caller and
//! read-only to the extraction pipeline.

use crate::utils::error::ResolveError;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated address within an address space
///
/// Ordered and hashable so candidates can be collected into sets.
/// Serialized as a `0x`-prefixed hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u64);

impl Address {
    /// Construct an address from a raw numeric value
    pub const fn new(value: u64) -> Self {
        Address(value)
    }

    /// Raw numeric value of this address
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Parse a hex string, with or without a `0x` prefix
    ///
    /// **Public** - used by the CLI to parse user-supplied bounds.
    ///
    /// # Errors
    /// * `ResolveError::InvalidDigit` - non-hex characters or empty string
    /// * `ResolveError::OutOfWidth` - value does not fit in 64 bits
    pub fn parse_hex(input: &str) -> Result<Address, ResolveError> {
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);

        if digits.is_empty() {
            return Err(ResolveError::InvalidDigit(input.to_string()));
        }

        u64::from_str_radix(digits, 16).map(Address).map_err(|_| {
            if digits.chars().all(|c| c.is_ascii_hexdigit()) {
                ResolveError::OutOfWidth {
                    value: input.to_string(),
                    width: 64,
                }
            } else {
                ResolveError::InvalidDigit(input.to_string())
            }
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{:#x}", self.0))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::parse_hex(&s).map_err(D::Error::custom)
    }
}

/// Inclusive bounds of the currently loaded image
///
/// Both ends are inclusive: an address equal to `min` or `max` is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSpaceBounds {
    min: Address,
    max: Address,
}

impl AddressSpaceBounds {
    pub const fn new(min: Address, max: Address) -> Self {
        AddressSpaceBounds { min, max }
    }

    pub const fn min(&self) -> Address {
        self.min
    }

    pub const fn max(&self) -> Address {
        self.max
    }

    /// Whether `addr` lies within `[min, max]`, inclusive on both ends
    pub fn contains(&self, addr: Address) -> bool {
        self.min <= addr && addr <= self.max
    }
}
