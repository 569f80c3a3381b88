#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: get_varint on arbitrary bytes.
//
// Any input must decode or fail cleanly, and a successful decode never
// claims more bytes than the input holds or than a u64 varint can span.
fuzz_target!(|data: &[u8]| {
    if let Ok((_, consumed)) = tku_wire::varint::get_varint(data, 0) {
        assert!(consumed >= 1);
        assert!(consumed <= data.len());
        assert!(consumed <= tku_wire::varint::MAX_VARINT_BYTES);
    }
});
