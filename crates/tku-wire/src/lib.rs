//! Binary format for persisted token sequences.
//!
//! A token file is an 8-byte [`header::TokenFileHeader`] followed by a
//! varint count and one varint per token id. [`write_sequence`] builds the
//! complete file in memory; [`read_sequence`] validates and reverses it.

#![warn(clippy::pedantic)]

pub mod error;
pub mod header;
pub mod sequence;
pub mod varint;

pub use error::WireError;
pub use header::{HEADER_SIZE, TokenFileHeader};
pub use sequence::{read_sequence, write_sequence};
