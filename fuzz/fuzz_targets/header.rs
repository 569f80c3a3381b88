#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: TokenFileHeader::read_from with arbitrary bytes.
//
// Catches bugs in:
// - Magic byte validation
// - Version checking
// - Reserved byte enforcement
// - Truncated header handling
fuzz_target!(|data: &[u8]| {
    if let Ok(header) = tku_wire::TokenFileHeader::read_from(data) {
        let mut out = Vec::new();
        header.write_to(&mut out);
        assert_eq!(out.len(), tku_wire::HEADER_SIZE);
    }
});
