//! Trace record grammar and address extraction.
//!
//! Scans QEMU execution trace output line by line, matches each line
//! against the fixed trace record grammar, and resolves the embedded
//! hex address token into the current address space.

use crate::address::{Address, AddressResolver};
use crate::utils::error::ExtractError;
use log::{debug, warn};
use regex::Regex;
use std::collections::BTreeSet;
use std::io::BufRead;
use std::sync::OnceLock;

/// The trace record grammar
///
/// A line is a trace record iff the whole line matches:
///
/// ```text
/// Trace <digits>: 0x<pc> [<module>/<ADDR>/<offset>]<space>
/// ```
///
/// Only the `addr` capture is semantically used; the surrounding fields
/// are structurally required but their content is free text. The capture
/// is restricted to hex digits, so a successful match guarantees a
/// well-formed token. The trailing space is part of the record format.
const TRACE_RECORD_PATTERN: &str = r"^Trace \d+: 0x.+? \[.+?/(?P<addr>[0-9a-fA-F]+)/.+?\] $";

fn trace_record_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // The pattern is a compile-time literal; it cannot fail to build.
        Regex::new(TRACE_RECORD_PATTERN).expect("trace record pattern is valid")
    })
}

/// Result of one extraction pass over a trace stream
///
/// `candidates` holds the distinct successfully resolved addresses, not
/// yet filtered against the image bounds. The counters exist for the
/// final report only.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Distinct resolved addresses, order irrelevant downstream
    pub candidates: BTreeSet<Address>,

    /// Total lines read from the stream
    pub lines_scanned: u64,

    /// Lines that matched the trace record grammar
    pub lines_matched: u64,

    /// Matched tokens the resolver rejected
    pub unresolved: u64,
}

/// Match a single line against the trace record grammar
///
/// **Public** - grammar entry point, also used directly by tests
///
/// Returns the embedded hex address token (no `0x` prefix) if the entire
/// line conforms to the record format, `None` otherwise. Partial matches
/// do not count: trailing or leading extra content invalidates the line.
pub fn match_trace_line(line: &str) -> Option<&str> {
    trace_record_regex()
        .captures(line)
        .and_then(|caps| caps.name("addr"))
        .map(|m| m.as_str())
}

/// Extract distinct candidate addresses from a trace stream
///
/// **Public** - main entry point for extraction
///
/// Single pass over the line source; memory is bounded by the number of
/// distinct matched addresses, never the file size. Lines that miss the
/// grammar are skipped silently (headers, blanks, interleaved output are
/// expected). Tokens the resolver rejects drop that one candidate and
/// the pass continues. Duplicate addresses across lines collapse to one
/// entry.
///
/// # Errors
/// * `ExtractError::Io` - the underlying stream failed; fatal, no
///   partial result is returned
pub fn extract_addresses<R: BufRead>(
    reader: R,
    resolver: &impl AddressResolver,
) -> Result<Extraction, ExtractError> {
    let mut extraction = Extraction::default();

    for line in reader.lines() {
        let line = line?;
        extraction.lines_scanned += 1;

        let Some(token) = match_trace_line(&line) else {
            continue;
        };
        extraction.lines_matched += 1;

        // The capture carries no prefix; the resolver contract wants one.
        let prefixed = format!("0x{}", token);

        match resolver.resolve(&prefixed) {
            Ok(addr) => {
                debug!("Adding address to be colored: {}", addr);
                extraction.candidates.insert(addr);
            }
            Err(e) => {
                warn!("Skipping unresolvable token {}: {}", prefixed, e);
                extraction.unresolved += 1;
            }
        }
    }

    debug!(
        "Scanned {} lines, {} matched, {} distinct candidates",
        extraction.lines_scanned,
        extraction.lines_matched,
        extraction.candidates.len()
    );

    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::FlatAddressSpace;
    use std::io::Cursor;

    #[test]
    fn test_match_extracts_middle_group() {
        let token = match_trace_line("Trace 12: 0xdeadbeef [mod/1000/2000] ").unwrap();
        assert_eq!(token, "1000");
    }

    #[test]
    fn test_match_requires_full_line() {
        // missing trailing space
        assert!(match_trace_line("Trace 12: 0xdeadbeef [mod/1000/2000]").is_none());
        // leading junk
        assert!(match_trace_line("x Trace 12: 0xdeadbeef [mod/1000/2000] ").is_none());
        // trailing junk after the record
        assert!(match_trace_line("Trace 12: 0xdeadbeef [mod/1000/2000] extra").is_none());
    }

    #[test]
    fn test_match_rejects_near_miss_formats() {
        assert!(match_trace_line("garbage line").is_none());
        assert!(match_trace_line("").is_none());
        assert!(match_trace_line("Trace : 0xdeadbeef [mod/1000/2000] ").is_none());
        assert!(match_trace_line("Trace 1 0xdeadbeef [mod/1000/2000] ").is_none());
        assert!(match_trace_line("Trace 1: deadbeef [mod/1000/2000] ").is_none());
        // no bracket group at all
        assert!(match_trace_line("Trace 1: 0xdeadbeef mod/1000/2000 ").is_none());
    }

    #[test]
    fn test_match_multi_digit_sequence_number() {
        assert!(match_trace_line("Trace 31337: 0xcafe [m/abc/o] ").is_some());
    }

    #[test]
    fn test_extract_deduplicates_across_lines() {
        let input = "Trace 1: 0xaaaa [modA/1000/8] \n\
                     Trace 2: 0xbbbb [modB/1000/16] \n\
                     Trace 3: 0xcccc [modA/2000/8] \n";
        let space = FlatAddressSpace::default();

        let extraction = extract_addresses(Cursor::new(input), &space).unwrap();

        assert_eq!(extraction.lines_scanned, 3);
        assert_eq!(extraction.lines_matched, 3);
        assert_eq!(extraction.candidates.len(), 2);
        assert!(extraction.candidates.contains(&Address::new(0x1000)));
        assert!(extraction.candidates.contains(&Address::new(0x2000)));
    }

    #[test]
    fn test_extract_skips_non_matching_lines() {
        let input = "QEMU 7.2.0 monitor\n\
                     \n\
                     Trace 1: 0xaaaa [mod/1000/8] \n\
                     some interleaved output\n";
        let space = FlatAddressSpace::default();

        let extraction = extract_addresses(Cursor::new(input), &space).unwrap();

        assert_eq!(extraction.lines_scanned, 4);
        assert_eq!(extraction.lines_matched, 1);
        assert_eq!(extraction.candidates.len(), 1);
    }

    #[test]
    fn test_extract_drops_unresolvable_tokens() {
        // token resolves fine at 64-bit width but not at 32
        let input = "Trace 1: 0xaaaa [mod/ffffffffffff/8] \n\
                     Trace 2: 0xbbbb [mod/1000/8] \n";
        let space = FlatAddressSpace::new(32);

        let extraction = extract_addresses(Cursor::new(input), &space).unwrap();

        assert_eq!(extraction.lines_matched, 2);
        assert_eq!(extraction.unresolved, 1);
        assert_eq!(extraction.candidates.len(), 1);
        assert!(extraction.candidates.contains(&Address::new(0x1000)));
    }

    #[test]
    fn test_extract_empty_input() {
        let space = FlatAddressSpace::default();
        let extraction = extract_addresses(Cursor::new(""), &space).unwrap();

        assert_eq!(extraction.lines_scanned, 0);
        assert!(extraction.candidates.is_empty());
    }
}
