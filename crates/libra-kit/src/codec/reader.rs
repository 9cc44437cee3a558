//! Cursor-based decoder for the canonical binary format.

use crate::error::CodecError;

/// Length prefixes with the sign bit set are rejected outright: the format
/// defines lengths as signed 32-bit values.
const MAX_LENGTH_PREFIX: u32 = i32::MAX as u32;

/// Reads canonical values from a byte slice.
///
/// Every read checks the remaining buffer first, so a failed read never
/// advances the cursor past the end of the input.
///
/// # Example
///
/// ```rust
/// use libra_kit::codec::CanonicalReader;
///
/// let bytes = [0x02, 0x00, 0x00, 0x00, 0xaa, 0xbb, 0x01];
/// let mut reader = CanonicalReader::new(&bytes);
/// assert_eq!(reader.read_bytes().unwrap(), vec![0xaa, 0xbb]);
/// assert!(reader.read_bool().unwrap());
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct CanonicalReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> CanonicalReader<'a> {
    /// Create a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True when every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail with [`CodecError::TrailingBytes`] unless the buffer is fully consumed.
    pub fn finish(&self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(CodecError::TrailingBytes(n)),
        }
    }

    /// Borrow the next `n` bytes.
    pub fn read_slice(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::TruncatedInput {
                needed: n,
                remaining,
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_slice(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, CodecError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Read a one-byte boolean. Only `0` and `1` are canonical.
    pub fn read_bool(&mut self) -> Result<bool, CodecError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(CodecError::InvalidBool(other)),
        }
    }

    /// Read a `u32` length prefix and validate it against the remaining buffer.
    pub fn read_length(&mut self) -> Result<usize, CodecError> {
        let len = self.read_u32()?;
        if len > MAX_LENGTH_PREFIX {
            return Err(CodecError::MalformedLength(len));
        }
        let len = len as usize;
        let remaining = self.remaining();
        if len > remaining {
            return Err(CodecError::TruncatedInput {
                needed: len,
                remaining,
            });
        }
        Ok(len)
    }

    /// Read a length-prefixed byte string.
    pub fn read_bytes(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.read_length()?;
        Ok(self.read_slice(len)?.to_vec())
    }

    /// Read a length-prefixed UTF-8 string.
    pub fn read_string(&mut self) -> Result<String, CodecError> {
        String::from_utf8(self.read_bytes()?).map_err(|_| CodecError::InvalidUtf8)
    }

    /// Read a `u32` element count followed by that many elements.
    ///
    /// The count is not checked against the buffer up front (elements have
    /// no fixed size); each element read is bounds-checked instead.
    pub fn read_seq<T>(
        &mut self,
        mut read_elem: impl FnMut(&mut Self) -> Result<T, CodecError>,
    ) -> Result<Vec<T>, CodecError> {
        let count = self.read_u32()?;
        if count > MAX_LENGTH_PREFIX {
            return Err(CodecError::MalformedLength(count));
        }
        // Every element occupies at least one byte.
        let mut out = Vec::with_capacity((count as usize).min(self.remaining()));
        for _ in 0..count {
            out.push(read_elem(self)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fixed_width_little_endian() {
        let bytes = [
            0x01, 0x00, 0x00, 0x00, // u32 = 1
            0x40, 0x42, 0x0f, 0x00, 0x00, 0x00, 0x00, 0x00, // u64 = 1_000_000
        ];
        let mut reader = CanonicalReader::new(&bytes);
        assert_eq!(reader.read_u32().unwrap(), 1);
        assert_eq!(reader.read_u64().unwrap(), 1_000_000);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_truncated_fixed_width() {
        let mut reader = CanonicalReader::new(&[0x01, 0x02, 0x03]);
        assert_eq!(
            reader.read_u32(),
            Err(CodecError::TruncatedInput {
                needed: 4,
                remaining: 3
            })
        );
        // Cursor did not move
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_declared_length_exceeds_buffer() {
        let bytes = [0x05, 0x00, 0x00, 0x00, 0xaa, 0xbb];
        let mut reader = CanonicalReader::new(&bytes);
        assert_eq!(
            reader.read_bytes(),
            Err(CodecError::TruncatedInput {
                needed: 5,
                remaining: 2
            })
        );
    }

    #[test]
    fn test_negative_length_is_malformed() {
        let bytes = [0xff, 0xff, 0xff, 0xff, 0x00];
        let mut reader = CanonicalReader::new(&bytes);
        assert_eq!(
            reader.read_bytes(),
            Err(CodecError::MalformedLength(0xffff_ffff))
        );
    }

    #[test]
    fn test_largest_positive_length_is_truncated() {
        let bytes = [0xff, 0xff, 0xff, 0x7f, 0x00, 0x01];
        let mut reader = CanonicalReader::new(&bytes);
        assert_eq!(
            reader.read_bytes(),
            Err(CodecError::TruncatedInput {
                needed: 0x7fff_ffff,
                remaining: 2
            })
        );
    }

    #[test]
    fn test_zero_length_bytes() {
        let mut reader = CanonicalReader::new(&[0, 0, 0, 0]);
        assert_eq!(reader.read_bytes().unwrap(), Vec::<u8>::new());
        assert!(reader.is_empty());
    }

    #[test]
    fn test_non_canonical_bool_rejected() {
        let mut reader = CanonicalReader::new(&[0x02]);
        assert_eq!(reader.read_bool(), Err(CodecError::InvalidBool(2)));
    }

    #[test]
    fn test_invalid_utf8_string() {
        let bytes = [0x02, 0x00, 0x00, 0x00, 0xc3, 0x28];
        let mut reader = CanonicalReader::new(&bytes);
        assert_eq!(reader.read_string(), Err(CodecError::InvalidUtf8));
    }

    #[test]
    fn test_read_seq() {
        let bytes = [0x02, 0x00, 0x00, 0x00, 0x07, 0x09];
        let mut reader = CanonicalReader::new(&bytes);
        let items = reader.read_seq(|r| r.read_u8()).unwrap();
        assert_eq!(items, vec![7, 9]);
    }

    #[test]
    fn test_read_seq_count_larger_than_input() {
        let bytes = [0x03, 0x00, 0x00, 0x00, 0x07];
        let mut reader = CanonicalReader::new(&bytes);
        assert!(matches!(
            reader.read_seq(|r| r.read_u8()),
            Err(CodecError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_finish_reports_trailing_bytes() {
        let mut reader = CanonicalReader::new(&[0x01, 0x02]);
        reader.read_u8().unwrap();
        assert_eq!(reader.finish(), Err(CodecError::TrailingBytes(1)));
    }
}
