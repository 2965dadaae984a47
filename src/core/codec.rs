//! # Envelope Codec
//!
//! `tokio_util` encoder that writes [`UniPacket`] envelopes into a `BytesMut`, so the
//! transport layer can wrap a socket in a `FramedWrite`. Write-only: there is no
//! matching decoder.

use bytes::BytesMut;
use tokio_util::codec::Encoder;

use crate::core::packet::UniPacket;
use crate::error::ProtocolError;
use crate::utils::buffer_pool::BufferPool;

#[derive(Debug, Clone, Default)]
pub struct UniPacketCodec {
    pool: BufferPool,
}

impl UniPacketCodec {
    /// Codec drawing its scratch buffers from `pool`
    pub fn new(pool: BufferPool) -> Self {
        Self { pool }
    }
}

impl Encoder<UniPacket> for UniPacketCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: UniPacket, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(item.encoded_len());
        let mut writer = self.pool.acquire();
        item.write_to(&mut writer);
        dst.extend_from_slice(writer.bytes());
        Ok(())
    }
}
