//! Wire format encoding and decoding.
//!
//! Implements the fixed-width decimal length header:
//! ```text
//! ┌────────────────────────┬───────────────────┐
//! │ Payload length         │ Payload           │
//! │ 8 bytes, ASCII decimal │ N bytes, no       │
//! │ zero-padded            │ terminator        │
//! └────────────────────────┴───────────────────┘
//! ```
//!
//! Example: a 7-byte payload `{"a":1}` is framed as `00000007{"a":1}`.
//!
//! The header width is fixed at 8 digits, so the largest representable
//! payload is 99,999,999 bytes. Longer payloads are a checked failure
//! ([`LicwireError::PayloadTooLarge`]), never a wrapped or truncated
//! header.

use crate::error::{LicwireError, Result};

/// Header size in bytes (fixed, exactly 8 decimal digits).
pub const HEADER_SIZE: usize = 8;

/// Largest payload length representable in the 8-digit header.
pub const MAX_PAYLOAD_LEN: usize = 99_999_999;

/// Decoded length header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Exact byte length of the payload that follows the header.
    pub payload_len: u64,
}

impl Header {
    /// Create a header for a payload of `payload_len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`LicwireError::PayloadTooLarge`] if the length does not
    /// fit in 8 decimal digits.
    pub fn new(payload_len: usize) -> Result<Self> {
        if payload_len > MAX_PAYLOAD_LEN {
            return Err(LicwireError::PayloadTooLarge {
                len: payload_len,
                max: MAX_PAYLOAD_LEN,
            });
        }
        Ok(Self {
            payload_len: payload_len as u64,
        })
    }

    /// Encode the header as 8 zero-padded ASCII decimal digits.
    ///
    /// # Example
    ///
    /// ```
    /// use licwire::protocol::Header;
    ///
    /// let header = Header::new(7).unwrap();
    /// assert_eq!(&header.encode(), b"00000007");
    /// ```
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [b'0'; HEADER_SIZE];
        let mut n = self.payload_len;
        let mut i = HEADER_SIZE;
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        buf
    }

    /// Encode the header into an existing buffer.
    ///
    /// # Panics
    ///
    /// Panics if buffer is smaller than `HEADER_SIZE` (8 bytes).
    pub fn encode_into(&self, buf: &mut [u8]) {
        debug_assert!(buf.len() >= HEADER_SIZE);
        buf[..HEADER_SIZE].copy_from_slice(&self.encode());
    }

    /// Decode a header from the first 8 bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`LicwireError::InvalidParameter`] if the buffer is
    /// shorter than 8 bytes or any header byte is not an ASCII digit.
    ///
    /// # Example
    ///
    /// ```
    /// use licwire::protocol::Header;
    ///
    /// let header = Header::decode(b"00000005hello").unwrap();
    /// assert_eq!(header.payload_len, 5);
    /// ```
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_SIZE {
            return Err(LicwireError::InvalidParameter(
                "header requires 8 bytes",
            ));
        }
        let mut payload_len = 0u64;
        for &byte in &buf[..HEADER_SIZE] {
            if !byte.is_ascii_digit() {
                return Err(LicwireError::InvalidParameter(
                    "header contains a non-digit byte",
                ));
            }
            payload_len = payload_len * 10 + u64::from(byte - b'0');
        }
        Ok(Self { payload_len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero_padded() {
        assert_eq!(&Header::new(0).unwrap().encode(), b"00000000");
        assert_eq!(&Header::new(5).unwrap().encode(), b"00000005");
        assert_eq!(&Header::new(42).unwrap().encode(), b"00000042");
        assert_eq!(&Header::new(4096).unwrap().encode(), b"00004096");
        assert_eq!(&Header::new(99_999_999).unwrap().encode(), b"99999999");
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        for len in [0usize, 1, 7, 100, 12_345_678, MAX_PAYLOAD_LEN] {
            let original = Header::new(len).unwrap();
            let decoded = Header::decode(&original.encode()).unwrap();
            assert_eq!(original, decoded);
        }
    }

    #[test]
    fn test_new_rejects_oversized_length() {
        let result = Header::new(MAX_PAYLOAD_LEN + 1);
        assert!(matches!(
            result,
            Err(LicwireError::PayloadTooLarge { len, max })
                if len == MAX_PAYLOAD_LEN + 1 && max == MAX_PAYLOAD_LEN
        ));
    }

    #[test]
    fn test_decode_too_short_buffer() {
        let result = Header::decode(b"0000007");
        assert!(matches!(result, Err(LicwireError::InvalidParameter(_))));
    }

    #[test]
    fn test_decode_rejects_non_digit() {
        let result = Header::decode(b"0000000x");
        assert!(matches!(result, Err(LicwireError::InvalidParameter(_))));

        // Sign characters are not valid header bytes either.
        let result = Header::decode(b"+0000007");
        assert!(matches!(result, Err(LicwireError::InvalidParameter(_))));
    }

    #[test]
    fn test_decode_ignores_trailing_payload() {
        let header = Header::decode(b"00000007{\"a\":1}").unwrap();
        assert_eq!(header.payload_len, 7);
    }

    #[test]
    fn test_encode_into() {
        let header = Header::new(123).unwrap();
        let mut buf = [0u8; HEADER_SIZE + 4];
        header.encode_into(&mut buf);
        assert_eq!(&buf[..HEADER_SIZE], b"00000123");
    }
}
