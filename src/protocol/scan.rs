//! Bounded-length scanning of sentinel-terminated buffers.
//!
//! Payloads arrive from untrusted clients as sentinel-terminated byte
//! buffers whose length is not known up front. Rather than scanning an
//! unbounded span in one pass, [`terminated_len`] inspects the buffer in
//! fixed-size probe windows of [`PROBE_CEILING`] bytes, so the worst-case
//! cost of any single step stays bounded and auditable.
//!
//! # Example
//!
//! ```
//! use licwire::protocol::terminated_len;
//!
//! let buf = b"hello\0";
//! assert_eq!(terminated_len(buf).unwrap(), 5);
//! ```

use crate::error::{LicwireError, Result};

/// Terminating byte marking the logical end of a buffer's content.
pub const SENTINEL: u8 = 0;

/// Maximum span inspected per probe window (4 KiB).
pub const PROBE_CEILING: usize = 4096;

/// Compute the exact byte length of a sentinel-terminated buffer.
///
/// Scans in windows of [`PROBE_CEILING`] bytes: a sentinel inside the
/// current window ends the scan; a full window with no sentinel adds
/// `PROBE_CEILING` to the running total and advances the origin. A full
/// window is never treated as terminal, so a sentinel sitting exactly on
/// a window boundary is picked up at offset 0 of the next window rather
/// than stalling or double-counting.
///
/// The buffer is only read, never modified.
///
/// # Errors
///
/// Returns [`LicwireError::InvalidParameter`] if the buffer is empty or
/// no sentinel occurs anywhere in it.
///
/// # Example
///
/// ```
/// use licwire::protocol::{terminated_len, PROBE_CEILING};
///
/// // Sentinel exactly on a window boundary.
/// let mut buf = vec![b'x'; PROBE_CEILING];
/// buf.push(0);
/// assert_eq!(terminated_len(&buf).unwrap(), PROBE_CEILING);
/// ```
pub fn terminated_len(buf: &[u8]) -> Result<usize> {
    if buf.is_empty() {
        return Err(LicwireError::InvalidParameter(
            "cannot measure an empty buffer",
        ));
    }

    let mut total = 0usize;
    loop {
        let end = buf.len().min(total + PROBE_CEILING);
        let window = &buf[total..end];

        match window.iter().position(|&b| b == SENTINEL) {
            Some(offset) => return Ok(total + offset),
            // Full window consumed: advance the origin and keep scanning.
            None if window.len() == PROBE_CEILING => total = end,
            None => {
                return Err(LicwireError::InvalidParameter(
                    "buffer is not sentinel-terminated",
                ))
            }
        }
    }
}
