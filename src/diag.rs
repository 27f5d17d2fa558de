//! Diagnostic helpers.

use std::fmt::Write;

use tracing::debug;

/// Render a buffer as contiguous lowercase hex, one pair per byte.
pub fn hexdump(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for byte in data {
        // Writing to a String cannot fail.
        let _ = write!(out, "{:02x}", byte);
    }
    out
}

/// Log a buffer's hexdump at debug level under the given label.
pub fn trace_hexdump(label: &str, data: &[u8]) {
    debug!(label, len = data.len(), hex = %hexdump(data));
}
