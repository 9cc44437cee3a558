//! Canonical binary codec.
//!
//! Libra's canonical serialization is a fixed, unambiguous byte layout:
//!
//! - integers are fixed width and little-endian,
//! - byte strings, strings and sequences carry a `u32` length/count prefix,
//! - booleans are a single `0x00`/`0x01` byte,
//! - tagged unions start with a one-byte tag,
//! - addresses are 32 raw bytes with no prefix.
//!
//! [`CanonicalWriter`] produces this layout, [`CanonicalReader`] consumes it
//! with bounds checks on every read.

mod reader;
mod writer;

pub use reader::CanonicalReader;
pub use writer::CanonicalWriter;

use crate::error::CodecError;

/// A value that can be read back from its canonical encoding.
///
/// Implementations read exactly their own fields; trailing input is left to
/// the caller (see [`decode_exact`]).
pub trait CanonicalDecode: Sized {
    fn decode(reader: &mut CanonicalReader<'_>) -> Result<Self, CodecError>;
}

/// Decode `T` from `bytes`, rejecting any trailing input.
pub fn decode_exact<T: CanonicalDecode>(bytes: &[u8]) -> Result<T, CodecError> {
    let mut reader = CanonicalReader::new(bytes);
    let value = T::decode(&mut reader)?;
    reader.finish()?;
    Ok(value)
}
