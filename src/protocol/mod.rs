//! Protocol module - wire format, framing, and bounded scanning.
//!
//! This module implements the payload wire format:
//! - 8-digit ASCII decimal header encoding/decoding
//! - Bounded-window length scanning for sentinel-terminated buffers
//! - Frame builders and a frame buffer for accumulating partial reads

mod frame;
mod frame_buffer;
mod scan;
mod wire_format;

pub use frame::{build_frame, build_frame_into, frame_terminated, Frame};
pub use frame_buffer::FrameBuffer;
pub use scan::{terminated_len, PROBE_CEILING, SENTINEL};
pub use wire_format::{Header, HEADER_SIZE, MAX_PAYLOAD_LEN};
