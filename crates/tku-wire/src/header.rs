use crate::error::WireError;

/// Magic number: ASCII "TKS\0". Stored as raw bytes so byte order never
/// enters into it.
pub const TOKEN_FILE_MAGIC: [u8; 4] = *b"TKS\0";

/// Total header size in bytes (fixed).
pub const HEADER_SIZE: usize = 8;

/// Current format version major. Readers reject any other major version.
pub const VERSION_MAJOR: u8 = 1;

/// Current format version minor.
pub const VERSION_MINOR: u8 = 0;

/// Token file header, the first 8 bytes of every persisted sequence.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────────┐
/// │ Offset │ Size    │ Description                      │
/// ├────────┼─────────┼──────────────────────────────────┤
/// │ 0x00   │ 4 bytes │ Magic: "TKS\0"                   │
/// │ 0x04   │ 1 byte  │ Version major                    │
/// │ 0x05   │ 1 byte  │ Version minor                    │
/// │ 0x06   │ 2 bytes │ Reserved (0x00 0x00)             │
/// └────────┴─────────┴──────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenFileHeader {
    pub version_major: u8,
    pub version_minor: u8,
}

impl Default for TokenFileHeader {
    fn default() -> Self {
        Self {
            version_major: VERSION_MAJOR,
            version_minor: VERSION_MINOR,
        }
    }
}

impl TokenFileHeader {
    /// Append the 8 header bytes to `out`.
    pub fn write_to(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&TOKEN_FILE_MAGIC);
        out.push(self.version_major);
        out.push(self.version_minor);
        out.extend_from_slice(&[0x00, 0x00]);
    }

    /// Parse a header from the start of `buf`.
    ///
    /// Checks run in order magic, version, reserved bytes, so a file that is
    /// not a token file at all reports `InvalidMagic` rather than something
    /// more confusing.
    ///
    /// # Errors
    ///
    /// - [`WireError::UnexpectedEof`] if `buf` is shorter than [`HEADER_SIZE`].
    /// - [`WireError::InvalidMagic`] if the magic does not match.
    /// - [`WireError::UnsupportedVersion`] for an unknown major version.
    /// - [`WireError::ReservedNonZero`] if a reserved byte is set.
    pub fn read_from(buf: &[u8]) -> Result<Self, WireError> {
        if buf.len() < HEADER_SIZE {
            return Err(WireError::UnexpectedEof { offset: buf.len() });
        }

        if buf[0..4] != TOKEN_FILE_MAGIC {
            return Err(WireError::InvalidMagic {
                found: [buf[0], buf[1], buf[2], buf[3]],
            });
        }

        let version_major = buf[4];
        let version_minor = buf[5];
        if version_major != VERSION_MAJOR {
            return Err(WireError::UnsupportedVersion {
                major: version_major,
                minor: version_minor,
            });
        }

        for offset in 6..HEADER_SIZE {
            if buf[offset] != 0x00 {
                return Err(WireError::ReservedNonZero {
                    offset,
                    value: buf[offset],
                });
            }
        }

        Ok(Self {
            version_major,
            version_minor,
        })
    }
}
