//! # Core Framing Components
//!
//! Byte-level packet building.
//!
//! ## Components
//! - **Writer**: big-endian primitives, length-prefixed strings, nested packets
//! - **Packet**: the two-segment request envelope
//! - **Codec**: `tokio_util` encoder for envelopes
//!
//! ## Wire Format
//! ```text
//! [u32 len+4][command][u32 8][session id][extra]   head segment
//! [u32 len+4][body]                                body segment
//! ```

pub mod codec;
pub mod packet;
pub mod writer;
