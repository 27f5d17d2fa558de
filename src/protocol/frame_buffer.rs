//! Frame buffer for accumulating partial reads.
//!
//! Incoming framed requests may arrive fragmented across socket reads.
//! `FrameBuffer` accumulates bytes in a `bytes::BytesMut` and extracts
//! complete frames with a two-state machine:
//! - `WaitingForHeader`: need the 8 ASCII decimal header bytes
//! - `WaitingForPayload`: header parsed, need N more payload bytes
//!
//! # Example
//!
//! ```
//! use licwire::protocol::FrameBuffer;
//!
//! let mut buffer = FrameBuffer::new();
//! let frames = buffer.push(b"00000005hello").unwrap();
//! assert_eq!(frames.len(), 1);
//! assert_eq!(frames[0].payload(), b"hello");
//! ```

use bytes::{Bytes, BytesMut};

use super::wire_format::{Header, HEADER_SIZE, MAX_PAYLOAD_LEN};
use super::Frame;
use crate::error::{LicwireError, Result};

/// State machine for frame parsing.
#[derive(Debug, Clone)]
enum State {
    /// Waiting for complete header (need 8 bytes).
    WaitingForHeader,
    /// Header parsed, waiting for payload bytes.
    WaitingForPayload { header: Header, remaining: usize },
}

/// Buffer for accumulating incoming bytes and extracting complete frames.
pub struct FrameBuffer {
    /// Accumulated bytes from socket reads.
    buffer: BytesMut,
    /// Current parsing state.
    state: State,
    /// Maximum payload length this endpoint accepts.
    max_payload_len: usize,
}

impl FrameBuffer {
    /// Create a frame buffer accepting payloads up to the header's
    /// representable maximum (99,999,999 bytes).
    pub fn new() -> Self {
        Self::with_max_payload(MAX_PAYLOAD_LEN)
    }

    /// Create a frame buffer with a custom maximum payload length.
    ///
    /// Untrusted peers can claim any 8-digit length; a server handling
    /// small JSON requests should cap this well below the default.
    pub fn with_max_payload(max_payload_len: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(8 * 1024),
            state: State::WaitingForHeader,
            max_payload_len,
        }
    }

    /// Push data into the buffer and extract all complete frames.
    ///
    /// Partial data is buffered internally for the next push.
    ///
    /// # Errors
    ///
    /// - [`LicwireError::InvalidParameter`] if a header byte is not an
    ///   ASCII digit.
    /// - [`LicwireError::PayloadTooLarge`] if a header claims more than
    ///   the configured maximum.
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<Frame>> {
        self.buffer.extend_from_slice(data);

        let mut frames = Vec::new();
        while let Some(frame) = self.try_extract_one()? {
            frames.push(frame);
        }
        Ok(frames)
    }

    /// Try to extract a single frame from the buffer.
    fn try_extract_one(&mut self) -> Result<Option<Frame>> {
        match &self.state {
            State::WaitingForHeader => {
                if self.buffer.len() < HEADER_SIZE {
                    return Ok(None);
                }

                let header = Header::decode(&self.buffer[..HEADER_SIZE])?;
                let payload_len = header.payload_len as usize;

                if payload_len > self.max_payload_len {
                    return Err(LicwireError::PayloadTooLarge {
                        len: payload_len,
                        max: self.max_payload_len,
                    });
                }

                // Consume header bytes.
                let _ = self.buffer.split_to(HEADER_SIZE);

                if payload_len == 0 {
                    return Ok(Some(Frame::new(header, Bytes::new())));
                }

                self.state = State::WaitingForPayload {
                    header,
                    remaining: payload_len,
                };

                // The payload may already be buffered.
                self.try_extract_one()
            }

            State::WaitingForPayload { header, remaining } => {
                let remaining = *remaining;
                if self.buffer.len() < remaining {
                    return Ok(None);
                }

                let payload = self.buffer.split_to(remaining).freeze();
                let header = *header;
                self.state = State::WaitingForHeader;

                Ok(Some(Frame::new(header, payload)))
            }
        }
    }

    /// Get the number of buffered bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer and reset state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = State::WaitingForHeader;
    }

    #[cfg(test)]
    fn state_name(&self) -> &'static str {
        match &self.state {
            State::WaitingForHeader => "WaitingForHeader",
            State::WaitingForPayload { .. } => "WaitingForPayload",
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
