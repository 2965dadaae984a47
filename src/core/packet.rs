//! # Request Envelope
//!
//! Every outbound request is wrapped in two independently length-prefixed segments:
//!
//! ```text
//! head: u32(len + 4) [ u32(len(cmd) + 4) cmd ] [ u32(8) ] [ session id ] [ extra ]
//! body: u32(len + 4) [ body bytes ]
//!
//! extra: u32(4)                        when there is no extra data
//!        u32(len + 4) extra data       otherwise
//! ```
//!
//! The receiving side routes on the head segment and treats the body as opaque.

use crate::config::{EMPTY_EXTRA_DATA, UNI_HEAD_MARKER, UNI_SEGMENT_OFFSET};
use crate::core::writer::Writer;
use crate::utils::buffer_pool::BufferPool;

impl Writer {
    /// Appends the two-segment request envelope
    pub fn write_uni_packet(
        &mut self,
        command_name: &str,
        session_id: &[u8],
        extra_data: &[u8],
        body: &[u8],
    ) {
        self.write_int_lv_packet(UNI_SEGMENT_OFFSET, |w| {
            w.write_string(command_name);
            w.write_u32(UNI_HEAD_MARKER);
            w.write_bytes(session_id);
            if extra_data.is_empty() {
                w.write_u32(EMPTY_EXTRA_DATA);
            } else {
                w.write_u32((extra_data.len() as u32).wrapping_add(4));
                w.write_bytes(extra_data);
            }
        });
        self.write_int_lv_packet(UNI_SEGMENT_OFFSET, |w| {
            w.write_bytes(body);
        });
    }
}

/// An outbound request ready to be framed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UniPacket {
    pub command_name: String,
    pub session_id: Vec<u8>,
    pub extra_data: Vec<u8>,
    pub body: Vec<u8>,
}

impl UniPacket {
    pub fn new(
        command_name: impl Into<String>,
        session_id: Vec<u8>,
        extra_data: Vec<u8>,
        body: Vec<u8>,
    ) -> Self {
        Self {
            command_name: command_name.into(),
            session_id,
            extra_data,
            body,
        }
    }

    /// Exact encoded length of the envelope
    pub fn encoded_len(&self) -> usize {
        let extra = if self.extra_data.is_empty() {
            4
        } else {
            4 + self.extra_data.len()
        };
        let head = 4 + (4 + self.command_name.len()) + 4 + self.session_id.len() + extra;
        head + 4 + self.body.len()
    }

    /// Appends the envelope to `writer`
    pub fn write_to(&self, writer: &mut Writer) {
        writer.write_uni_packet(
            &self.command_name,
            &self.session_id,
            &self.extra_data,
            &self.body,
        );
    }

    /// Serialize the envelope using a pooled writer
    pub fn to_bytes(&self, pool: &BufferPool) -> Vec<u8> {
        pool.build(|w| self.write_to(w))
    }
}
