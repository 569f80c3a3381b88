#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: write_sequence->read_sequence roundtrip over arbitrary ids.
fuzz_target!(|ids: Vec<u32>| {
    let bytes = tku_wire::write_sequence(&ids);
    let decoded = tku_wire::read_sequence(&bytes).unwrap();
    assert_eq!(decoded, ids);
});
