//! Hex token resolution into typed addresses.
//!
//! The extraction pipeline never parses addresses itself; it hands each
//! `0x`-prefixed token to an injected `AddressResolver`. In a host tool
//! integration the resolver wraps the tool's address factory; the
//! standalone CLI uses `FlatAddressSpace`.

use super::space::Address;
use crate::utils::error::ResolveError;

/// Turns a `0x`-prefixed hex string into a typed address, or fails cleanly
///
/// A resolve failure drops one candidate; it must never abort the run.
pub trait AddressResolver {
    fn resolve(&self, token: &str) -> Result<Address, ResolveError>;
}

/// A flat address space with a fixed pointer width
///
/// Stands in for a host tool's address factory: a token resolves iff it
/// is well-formed hex and its value is representable at the configured
/// width.
#[derive(Debug, Clone, Copy)]
pub struct FlatAddressSpace {
    width_bits: u32,
}

impl FlatAddressSpace {
    /// Create a flat address space with the given pointer width in bits
    ///
    /// Widths above 64 are clamped to 64.
    pub fn new(width_bits: u32) -> Self {
        FlatAddressSpace {
            width_bits: width_bits.min(64),
        }
    }

    pub const fn width_bits(&self) -> u32 {
        self.width_bits
    }

    /// Largest value representable at this width
    fn max_value(&self) -> u64 {
        if self.width_bits >= 64 {
            u64::MAX
        } else {
            (1u64 << self.width_bits) - 1
        }
    }
}

impl Default for FlatAddressSpace {
    fn default() -> Self {
        FlatAddressSpace::new(crate::utils::config::DEFAULT_ADDRESS_WIDTH)
    }
}

impl AddressResolver for FlatAddressSpace {
    fn resolve(&self, token: &str) -> Result<Address, ResolveError> {
        // The extractor always re-attaches the prefix; a bare token here
        // is a caller bug, not trace noise.
        if !token.starts_with("0x") && !token.starts_with("0X") {
            return Err(ResolveError::MissingPrefix(token.to_string()));
        }

        let addr = Address::parse_hex(token)?;

        if addr.value() > self.max_value() {
            return Err(ResolveError::OutOfWidth {
                value: token.to_string(),
                width: self.width_bits,
            });
        }

        Ok(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_64_bit() {
        let space = FlatAddressSpace::new(64);
        assert_eq!(
            space.resolve("0xdeadbeef").unwrap(),
            Address::new(0xdead_beef)
        );
        assert_eq!(
            space.resolve("0xffffffffffffffff").unwrap(),
            Address::new(u64::MAX)
        );
    }

    #[test]
    fn test_resolve_32_bit_width_check() {
        let space = FlatAddressSpace::new(32);
        assert_eq!(
            space.resolve("0xffffffff").unwrap(),
            Address::new(0xffff_ffff)
        );
        assert!(matches!(
            space.resolve("0x100000000"),
            Err(ResolveError::OutOfWidth { width: 32, .. })
        ));
    }

    #[test]
    fn test_resolve_requires_prefix() {
        let space = FlatAddressSpace::default();
        assert!(matches!(
            space.resolve("deadbeef"),
            Err(ResolveError::MissingPrefix(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_malformed_token() {
        let space = FlatAddressSpace::default();
        assert!(matches!(
            space.resolve("0xnothex"),
            Err(ResolveError::InvalidDigit(_))
        ));
        assert!(matches!(
            space.resolve("0x"),
            Err(ResolveError::InvalidDigit(_))
        ));
    }
}
