#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: varint put->get roundtrip.
//
// Takes 8 bytes of fuzz input, interprets as a u64, appends it as a
// LEB128 varint, then decodes it and asserts the value matches.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let value = u64::from_le_bytes(data[..8].try_into().unwrap());

    let mut buf = Vec::new();
    let written = tku_wire::varint::put_varint(&mut buf, value);

    let (decoded, consumed) = tku_wire::varint::get_varint(&buf, 0).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(consumed, written);
});
