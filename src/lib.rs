//! # im-protocol
//!
//! Binary framing and wire-element encoding for an instant-messaging client protocol.
//!
//! The crate is write-only: it turns domain message elements into wire elements and
//! assembles the length-prefixed request envelope that every outbound request uses.
//! Socket I/O, sessions and the final protobuf serialization of element lists belong
//! to the layers above.
//!
//! ## Layout
//! - [`utils::buffer_pool`]: reusable byte buffers handed out as [`Writer`]s
//! - [`core::writer`]: big-endian primitives, length-prefixed strings, nested packets
//! - [`core::packet`] / [`core::codec`]: the two-segment request envelope
//! - [`message`]: domain elements and their wire encodings
//!
//! ## Example
//! ```rust
//! use im_protocol::core::packet::UniPacket;
//! use im_protocol::utils::buffer_pool::BufferPool;
//!
//! let pool = BufferPool::default();
//! let packet = UniPacket::new("OidbSvc.0x88d_0", vec![0x00, 0x01], Vec::new(), vec![0xBB]);
//! let bytes = packet.to_bytes(&pool);
//! // The head segment's length field counts its own four bytes.
//! assert_eq!(&bytes[..4], &33u32.to_be_bytes());
//! assert_eq!(bytes.len(), 33 + 5);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod utils;

pub use crate::core::writer::{Diagnostic, Writer};
pub use crate::error::{ProtocolError, Result};
pub use crate::message::{Element, ElementEncoder, WireElement};
pub use crate::utils::buffer_pool::BufferPool;
