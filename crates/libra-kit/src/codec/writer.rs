//! Encoder for the canonical binary format.
//!
//! The wire format lines up with Borsh: little-endian fixed-width integers,
//! `u32` length prefixes on byte strings and sequences, one-byte enum tags and
//! raw fixed-size arrays. Values derive [`BorshSerialize`] and this writer
//! drives them.

use borsh::BorshSerialize;

/// Appends canonical values to an owned buffer.
///
/// # Panics
///
/// Writes panic only if a byte string or sequence is longer than
/// `u32::MAX`, which the format cannot express.
///
/// # Example
///
/// ```rust
/// use libra_kit::codec::CanonicalWriter;
///
/// let mut writer = CanonicalWriter::new();
/// writer.write_u32(7).write_bytes(&[0xaa]);
/// assert_eq!(writer.into_bytes(), vec![7, 0, 0, 0, 1, 0, 0, 0, 0xaa]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CanonicalWriter {
    buf: Vec<u8>,
}

impl CanonicalWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Encode a single value into a fresh buffer.
    pub fn encode<T: BorshSerialize + ?Sized>(value: &T) -> Vec<u8> {
        let mut writer = Self::new();
        writer.write(value);
        writer.into_bytes()
    }

    /// Append any canonically serializable value.
    pub fn write<T: BorshSerialize + ?Sized>(&mut self, value: &T) -> &mut Self {
        value
            .serialize(&mut self.buf)
            .expect("canonical length prefixes are limited to u32::MAX");
        self
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.write(&value)
    }

    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.write(&value)
    }

    pub fn write_u64(&mut self, value: u64) -> &mut Self {
        self.write(&value)
    }

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write(&value)
    }

    /// Append a `u32` length prefix followed by the bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.write(bytes)
    }

    /// Append raw bytes with no length prefix (fixed-width fields).
    pub fn write_fixed(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
