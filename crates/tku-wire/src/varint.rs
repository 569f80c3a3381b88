use crate::error::WireError;

/// Maximum number of bytes a u64 varint can occupy: ceil(64 / 7).
pub const MAX_VARINT_BYTES: usize = 10;

/// Append `value` to `out` as an unsigned LEB128 varint.
///
/// Returns the number of bytes appended (1–10).
///
/// | Value   | Encoded bytes        |
/// |---------|----------------------|
/// | 0       | `[0x00]`             |
/// | 127     | `[0x7F]`             |
/// | 128     | `[0x80, 0x01]`       |
/// | 198     | `[0xC6, 0x01]`       |
/// | 15339   | `[0xEB, 0x77]`       |
/// | 16384   | `[0x80, 0x80, 0x01]` |
pub fn put_varint(out: &mut Vec<u8>, mut value: u64) -> usize {
    let start = out.len();
    loop {
        #[allow(clippy::cast_possible_truncation)]
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value > 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if value == 0 {
            return out.len() - start;
        }
    }
}

/// Decode one unsigned LEB128 varint starting at `buf[offset]`.
///
/// Returns `(value, bytes_consumed)`.
///
/// # Errors
///
/// - [`WireError::VarintTooLong`] if no terminating byte appears within
///   [`MAX_VARINT_BYTES`].
/// - [`WireError::UnexpectedEof`] if the input ends mid-varint.
pub fn get_varint(buf: &[u8], offset: usize) -> Result<(u64, usize), WireError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for (i, &byte) in buf.iter().skip(offset).enumerate() {
        if i >= MAX_VARINT_BYTES {
            return Err(WireError::VarintTooLong { offset });
        }
        result |= u64::from(byte & 0x7F) << shift;
        shift += 7;
        if byte & 0x80 == 0 {
            return Ok((result, i + 1));
        }
    }

    Err(WireError::UnexpectedEof {
        offset: buf.len().max(offset),
    })
}
