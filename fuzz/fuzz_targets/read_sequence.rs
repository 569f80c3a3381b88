#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: read_sequence on arbitrary bytes.
//
// A hostile count must not trigger a huge allocation, and whatever parses
// must survive a rewrite in canonical form.
fuzz_target!(|data: &[u8]| {
    if let Ok(ids) = tku_wire::read_sequence(data) {
        let rewritten = tku_wire::write_sequence(&ids);
        assert_eq!(tku_wire::read_sequence(&rewritten).unwrap(), ids);
    }
});
