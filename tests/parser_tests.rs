use pretty_assertions::assert_eq;
use std::io::Cursor;
use trace_paint::address::{Address, FlatAddressSpace};
use trace_paint::parser::{extract_addresses, match_trace_line};

#[test]
fn test_middle_group_is_the_address() {
    // The bracket group is <module>/<address>/<offset>; only the middle
    // field is the address, the pc after "0x" is not extracted.
    let token = match_trace_line("Trace 12: 0xdeadbeef [mod/1000/2000] ").unwrap();
    assert_eq!(token, "1000");
}

#[test]
fn test_garbage_line_yields_no_candidates() {
    let space = FlatAddressSpace::default();
    let extraction = extract_addresses(Cursor::new("garbage line\n"), &space).unwrap();

    assert_eq!(extraction.lines_scanned, 1);
    assert_eq!(extraction.lines_matched, 0);
    assert!(extraction.candidates.is_empty());
}

#[test]
fn test_near_miss_lines_do_not_match() {
    // close to the record shape but each one broken in a different way
    let near_misses = [
        "Trace 12: 0xdeadbeef [mod/1000/2000]",   // missing trailing space
        "Trace 12 0xdeadbeef [mod/1000/2000] ",   // missing colon
        "Trace x: 0xdeadbeef [mod/1000/2000] ",   // non-numeric sequence
        "Trace 12: deadbeef [mod/1000/2000] ",    // missing 0x on pc
        "Trace 12: 0xdeadbeef mod/1000/2000 ",    // missing brackets
        "prefix Trace 12: 0xdeadbeef [mod/1000/2000] ", // leading content
        "Trace 12: 0xdeadbeef [mod/1000/2000] trailing", // trailing content
    ];

    for line in near_misses {
        assert!(
            match_trace_line(line).is_none(),
            "should not match: {:?}",
            line
        );
    }
}

#[test]
fn test_module_and_offset_fields_are_free_text() {
    let lines = [
        "Trace 1: 0xdeadbeef [libfoo.so.6/4010a0/1a0] ",
        "Trace 2: 0xcafe [some module name/4010a0/whatever text] ",
        "Trace 400: 0x0 [x/4010a0/y] ",
    ];
    let space = FlatAddressSpace::default();
    let input = lines.join("\n") + "\n";

    let extraction = extract_addresses(Cursor::new(input), &space).unwrap();

    assert_eq!(extraction.lines_matched, 3);
    // same address in all three records collapses to one candidate
    assert_eq!(extraction.candidates.len(), 1);
    assert!(extraction.candidates.contains(&Address::new(0x4010a0)));
}

#[test]
fn test_duplicate_addresses_collapse() {
    let input = "Trace 1: 0xaaaa [modA/1000/8] \n\
                 Trace 2: 0xbbbb [modB/1000/10] \n";
    let space = FlatAddressSpace::default();

    let extraction = extract_addresses(Cursor::new(input), &space).unwrap();

    assert_eq!(extraction.candidates.len(), 1);
}

#[test]
fn test_unresolvable_token_is_skipped_not_fatal() {
    // 32-bit space: a 48-bit value fails width validation in the
    // resolver, the run continues with the remaining candidates
    let input = "Trace 1: 0xaaaa [mod/ffffffffffff/8] \n\
                 Trace 2: 0xbbbb [mod/2000/8] \n";
    let space = FlatAddressSpace::new(32);

    let extraction = extract_addresses(Cursor::new(input), &space).unwrap();

    assert_eq!(extraction.unresolved, 1);
    assert_eq!(extraction.candidates.len(), 1);
    assert!(extraction.candidates.contains(&Address::new(0x2000)));
}

#[test]
fn test_interleaved_output_is_skipped_silently() {
    let input = "QEMU emulator version 7.2.0\n\
                 \n\
                 Trace 1: 0x401000 [prog/401000/0] \n\
                 IN: main\n\
                 0x401000: push rbp\n\
                 Trace 2: 0x401004 [prog/401004/4] \n";
    let space = FlatAddressSpace::default();

    let extraction = extract_addresses(Cursor::new(input), &space).unwrap();

    assert_eq!(extraction.lines_scanned, 6);
    assert_eq!(extraction.lines_matched, 2);
    assert_eq!(extraction.candidates.len(), 2);
}

#[test]
fn test_empty_stream_is_not_an_error() {
    let space = FlatAddressSpace::default();
    let extraction = extract_addresses(Cursor::new(""), &space).unwrap();

    assert_eq!(extraction.lines_scanned, 0);
    assert_eq!(extraction.lines_matched, 0);
    assert!(extraction.candidates.is_empty());
}
