/// Errors raised while reading or writing a token file.
///
/// Every decoding variant carries the byte offset at which the problem was
/// found so a malformed file can be located with a hex dump.
///
/// ```text
/// ┌──────────────────────┬───────────────────────────────────────────────┐
/// │ Variant              │ Cause                                         │
/// ├──────────────────────┼───────────────────────────────────────────────┤
/// │ VarintTooLong        │ more than 10 continuation bytes               │
/// │ UnexpectedEof        │ input ended inside the header or a varint     │
/// │ InvalidMagic         │ first four bytes are not "TKS\0"              │
/// │ UnsupportedVersion   │ major version this reader does not know       │
/// │ ReservedNonZero      │ reserved header byte set                      │
/// │ TokenOutOfRange      │ decoded id does not fit in a u32              │
/// │ TrailingData         │ bytes left after the last token id            │
/// └──────────────────────┴───────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("varint too long at offset {offset}: exceeded 10-byte limit")]
    VarintTooLong { offset: usize },

    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("invalid magic number: expected \"TKS\\0\", got {found:02X?}")]
    InvalidMagic { found: [u8; 4] },

    #[error("unsupported token file version {major}.{minor}")]
    UnsupportedVersion { major: u8, minor: u8 },

    #[error("reserved field at offset {offset} was {value:#04X}, expected 0x00")]
    ReservedNonZero { offset: usize, value: u8 },

    #[error("token id {value} at offset {offset} does not fit in 32 bits")]
    TokenOutOfRange { offset: usize, value: u64 },

    #[error("{count} trailing bytes after the last token id")]
    TrailingData { count: usize },
}
