//! Whole-file encoding of a token sequence.
//!
//! ```text
//! ┌────────────────────┬──────────────┬────────────┬─────┬────────────┐
//! │ header (8 bytes)   │ count varint │ id varint  │ ... │ id varint  │
//! └────────────────────┴──────────────┴────────────┴─────┴────────────┘
//! ```
//!
//! The count is written up front so a reader knows exactly where the file
//! ends; anything after the last id is rejected as trailing data.

use crate::error::WireError;
use crate::header::{HEADER_SIZE, TokenFileHeader};
use crate::varint::{get_varint, put_varint};

/// Serialise `ids` into a complete token file.
///
/// The returned buffer is meant to be written in one shot.
pub fn write_sequence(ids: &[u32]) -> Vec<u8> {
    // Most cl100k ids fit in two or three varint bytes.
    let mut out = Vec::with_capacity(HEADER_SIZE + 5 + ids.len() * 3);
    TokenFileHeader::default().write_to(&mut out);
    put_varint(&mut out, ids.len() as u64);
    for &id in ids {
        put_varint(&mut out, u64::from(id));
    }
    out
}

/// Parse a complete token file back into its ids.
///
/// # Errors
///
/// Returns a [`WireError`] if the header is invalid, the payload is
/// truncated, an id exceeds `u32::MAX`, or bytes remain after the last id.
pub fn read_sequence(buf: &[u8]) -> Result<Vec<u32>, WireError> {
    TokenFileHeader::read_from(buf)?;

    let mut offset = HEADER_SIZE;
    let (count, consumed) = get_varint(buf, offset)?;
    offset += consumed;

    // Each id takes at least one byte, so the remaining length bounds the
    // allocation even when the count field is garbage.
    let capacity = usize::try_from(count)
        .unwrap_or(usize::MAX)
        .min(buf.len() - offset);
    let mut ids = Vec::with_capacity(capacity);

    for _ in 0..count {
        let (value, consumed) = get_varint(buf, offset)?;
        let id = u32::try_from(value).map_err(|_| WireError::TokenOutOfRange { offset, value })?;
        ids.push(id);
        offset += consumed;
    }

    if offset < buf.len() {
        return Err(WireError::TrailingData {
            count: buf.len() - offset,
        });
    }

    Ok(ids)
}
