use acasm::{assemble, error::ErrorKind};

#[test]
fn forward_reference_resolves_to_later_label() {
    let asm = assemble(
        "        load 0x20\n\
         \x20       jz END\n\
         \x20       jmp 0\n\
         .org 0x10\n\
         END:    halt\n",
    )
    .unwrap();
    assert_eq!(asm.symbols.get("END"), Some(0x10));
    assert_eq!(asm.image.get(2), 0x05);
    assert_eq!(asm.image.get(3), 0x10);
}

#[test]
fn duplicate_label_is_rejected() {
    let err = assemble("A: halt\nB: halt\nA: halt\n").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::RedefinedSymbol { name, first: 1, .. } if name == "A"));
    assert_eq!(err.line(), Some(3));
}

#[test]
fn numeric_literal_forms() {
    let asm = assemble("load -1\nload 0x1F\nload 0b101\nload 42\n").unwrap();
    assert_eq!(asm.image.bytes(), &[1, 0xFF, 1, 31, 1, 5, 1, 42]);
}

#[test]
fn equ_constants_are_operands() {
    let asm = assemble(".equ PORT 0x40\nstore PORT\n.byte PORT, 1\n").unwrap();
    assert_eq!(asm.image.bytes(), &[0x03, 0x40, 0x40, 0x01]);
}

#[test]
fn org_overlap_keeps_later_bytes() {
    let asm = assemble(
        ".org 0x00\n\
         load 0x10\n\
         add 0x11\n\
         .org 0x02\n\
         halt\n",
    )
    .unwrap();
    assert_eq!(asm.image.bytes(), &[0x01, 0x10, 0xFF, 0x11]);
}

#[test]
fn listing_addresses_match_pass_one() {
    let asm = assemble(
        "START:  load A\n\
         LOOP:   add ONE\n\
         \x20       jz DONE\n\
         \x20       jmp LOOP\n\
         .org 0x40\n\
         DONE:   store A\n\
         \x20       halt\n\
         .equ ONE_VAL 1\n\
         A:      .byte 0\n\
         ONE:    .byte ONE_VAL, 2, 3\n\
         .org 0x08\n\
         \x20       halt\n",
    )
    .unwrap();
    assert_eq!(asm.listing.len(), asm.placements.len());
    for (entry, placement) in asm.listing.iter().zip(&asm.placements) {
        assert_eq!(entry.line, placement.line);
        assert_eq!(entry.addr, placement.addr, "line {}", entry.line);
    }
}

#[test]
fn output_stops_at_highest_written_address() {
    let asm = assemble(".org 0x10\nload 0x12\n.byte 7\n").unwrap();
    assert_eq!(asm.image.last_used(), 0x12);
    assert_eq!(asm.image.bytes().len(), 19);
    assert!(asm.image.bytes()[..0x10].iter().all(|&b| b == 0));
}

#[test]
fn errors_stop_at_the_first_problem() {
    let err = assemble("halt\nfoo 1\nbar 2\n").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::UnknownMnemonic(m) if m == "foo"));
    assert_eq!(err.line(), Some(2));
}

#[test]
fn first_error_is_reported_in_source_order() {
    let err = assemble("X: halt\nX: halt\n: halt\n").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::RedefinedSymbol { name, .. } if name == "X"));
    assert_eq!(err.line(), Some(2));
}
