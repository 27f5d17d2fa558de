//! # licwire
//!
//! Payload framing and buffer utilities for a license validation service.
//!
//! Variable-length JSON payloads (license requests, TCB signature lists,
//! certificates read from disk) are serialized into self-describing wire
//! blobs: an 8-digit zero-padded decimal length header followed by the
//! payload bytes. Input arrives from untrusted clients, so measurement
//! and framing are bounds-checked throughout.
//!
//! ## Architecture
//!
//! - **protocol**: bounded-window length scanning, the 8-digit decimal
//!   header, frame builders, and a frame buffer for fragmented reads
//! - **buffer**: fallibly-allocated, capacity-checked output buffers
//! - **fs**: whole-file loading for license artifacts
//! - **tcb**: TCB signature and license-server URL chains
//!
//! ## Example
//!
//! ```
//! use licwire::protocol::{build_frame, FrameBuffer};
//!
//! let frame = build_frame(b"{\"a\":1}").unwrap();
//! assert_eq!(&frame[..], b"00000007{\"a\":1}");
//!
//! let mut buffer = FrameBuffer::new();
//! let frames = buffer.push(&frame).unwrap();
//! assert_eq!(frames[0].payload(), b"{\"a\":1}");
//! ```

pub mod buffer;
pub mod diag;
pub mod error;
pub mod fs;
pub mod protocol;
pub mod tcb;

pub use buffer::ByteBuf;
pub use error::{LicwireError, Result};
pub use protocol::{build_frame, frame_terminated, Frame, FrameBuffer};
