//! Owned byte buffers with checked allocation and bounded writes.
//!
//! [`ByteBuf`] models the pre-allocated output buffers the framing layer
//! writes into: a fixed capacity chosen by the caller, a logical length
//! tracking how much has been filled, and exactly one owner for the whole
//! lifetime. Allocation is fallible ([`LicwireError::MemoryAllocFail`])
//! and the backing storage starts zeroed; writes past capacity fail with
//! [`LicwireError::BufferTooSmall`] instead of growing or truncating.
//!
//! # Example
//!
//! ```
//! use licwire::buffer::ByteBuf;
//!
//! let mut buf = ByteBuf::zeroed(16).unwrap();
//! buf.extend_from_slice(b"hello").unwrap();
//! assert_eq!(buf.as_slice(), b"hello");
//! assert_eq!(buf.capacity(), 16);
//! ```

use bytes::Bytes;

use crate::error::{LicwireError, Result};

/// Fixed-capacity owned byte buffer with a logical length.
#[derive(Debug)]
pub struct ByteBuf {
    /// Backing storage; every byte beyond `len` is zero.
    data: Box<[u8]>,
    /// Logical length of the filled prefix.
    len: usize,
}

impl ByteBuf {
    /// Allocate a zero-initialized buffer of exactly `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`LicwireError::MemoryAllocFail`] if the allocation cannot
    /// be satisfied.
    pub fn zeroed(capacity: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        data.resize(capacity, 0);
        Ok(Self {
            data: data.into_boxed_slice(),
            len: 0,
        })
    }

    /// Total capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Logical length (bytes written so far).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether nothing has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remaining capacity after the filled prefix.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// View of the filled prefix.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Append bytes after the filled prefix.
    ///
    /// The bounds check happens before any byte is copied, so a failed
    /// append leaves the buffer untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LicwireError::BufferTooSmall`] if `src` does not fit in
    /// the remaining capacity.
    pub fn extend_from_slice(&mut self, src: &[u8]) -> Result<()> {
        let needed = self.len + src.len();
        if needed > self.capacity() {
            return Err(LicwireError::BufferTooSmall {
                needed,
                capacity: self.capacity(),
            });
        }
        self.data[self.len..needed].copy_from_slice(src);
        self.len = needed;
        Ok(())
    }

    /// Reset the logical length to zero and re-zero the storage.
    pub fn clear(&mut self) {
        self.data.fill(0);
        self.len = 0;
    }

    /// Consume the buffer, returning the filled prefix as [`Bytes`].
    pub fn into_bytes(self) -> Bytes {
        let mut data = Vec::from(self.data);
        data.truncate(self.len);
        Bytes::from(data)
    }
}
