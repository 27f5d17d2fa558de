//! Frame struct and payload framing.
//!
//! A frame is a self-describing wire blob: an 8-digit zero-padded decimal
//! length header immediately followed by the payload bytes. Builders come
//! in three flavors:
//!
//! - [`build_frame`]: allocate and frame an exact payload slice.
//! - [`build_frame_into`]: frame into a caller-owned [`ByteBuf`] with an
//!   explicit capacity check.
//! - [`frame_terminated`]: measure a sentinel-terminated buffer with the
//!   bounded scanner, then frame the measured prefix.
//!
//! # Example
//!
//! ```
//! use licwire::protocol::build_frame;
//!
//! let frame = build_frame(b"hello").unwrap();
//! assert_eq!(&frame[..], b"00000005hello");
//! ```

use bytes::Bytes;

use super::scan::terminated_len;
use super::wire_format::{Header, HEADER_SIZE};
use crate::buffer::ByteBuf;
use crate::error::{LicwireError, Result};

/// A complete frame: decoded header plus payload.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Decoded length header.
    pub header: Header,
    /// Payload bytes (zero-copy via `bytes::Bytes`).
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame from header and payload.
    pub fn new(header: Header, payload: Bytes) -> Self {
        Self { header, payload }
    }

    /// Get a reference to the payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Get the payload length.
    #[inline]
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }
}

/// Build a complete frame as a newly allocated buffer.
///
/// `payload` is taken as exact bytes; its length becomes the header value.
/// The output buffer is obtained through the checked zeroed allocator.
///
/// # Errors
///
/// - [`LicwireError::PayloadTooLarge`] if the length exceeds 8 digits.
/// - [`LicwireError::MemoryAllocFail`] if allocation fails.
pub fn build_frame(payload: &[u8]) -> Result<Bytes> {
    // Validate the length before touching the allocator.
    let header = Header::new(payload.len())?;

    let mut out = ByteBuf::zeroed(HEADER_SIZE + payload.len())?;
    out.extend_from_slice(&header.encode())?;
    out.extend_from_slice(payload)?;
    Ok(out.into_bytes())
}

/// Build a frame into a caller-owned output buffer.
///
/// The capacity check runs before anything is written: on any failure the
/// buffer's filled prefix is exactly what it was before the call, so a
/// failed build can never be mistaken for a valid frame.
///
/// # Errors
///
/// - [`LicwireError::PayloadTooLarge`] if the length exceeds 8 digits.
/// - [`LicwireError::BufferTooSmall`] if `out` cannot hold header plus
///   payload after its current fill.
pub fn build_frame_into(payload: &[u8], out: &mut ByteBuf) -> Result<()> {
    let header = Header::new(payload.len())?;

    let needed = out.len() + HEADER_SIZE + payload.len();
    if needed > out.capacity() {
        return Err(LicwireError::BufferTooSmall {
            needed,
            capacity: out.capacity(),
        });
    }

    out.extend_from_slice(&header.encode())?;
    out.extend_from_slice(payload)?;
    Ok(())
}

/// Measure a sentinel-terminated payload and frame the measured prefix.
///
/// Runs the bounded scanner first; the bytes before the sentinel become
/// the framed payload. Scanner failures surface as
/// [`LicwireError::LengthComputationFailed`] with the underlying cause
/// attached.
///
/// # Example
///
/// ```
/// use licwire::buffer::ByteBuf;
/// use licwire::protocol::frame_terminated;
///
/// let mut out = ByteBuf::zeroed(32).unwrap();
/// frame_terminated(b"{\"a\":1}\0", &mut out).unwrap();
/// assert_eq!(out.as_slice(), b"00000007{\"a\":1}");
/// ```
pub fn frame_terminated(raw: &[u8], out: &mut ByteBuf) -> Result<()> {
    let len = terminated_len(raw)
        .map_err(|e| LicwireError::LengthComputationFailed(Box::new(e)))?;
    build_frame_into(&raw[..len], out)
}
