//! # Compression Seam
//!
//! Rich-content payloads (service cards, light apps) are zlib streams. The element
//! encoder talks to a [`Compressor`]; [`ZlibCompressor`] is the stock one.

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use tracing::error;

use crate::config::{CompressionConfig, DEFAULT_COMPRESSION_LEVEL, MAX_PAYLOAD_SIZE};
use crate::error::{ProtocolError, Result};

/// Deflate-family compression used for rich-content payloads
pub trait Compressor: Send + Sync {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// zlib (RFC 1950) compressor
#[derive(Debug, Clone, Copy)]
pub struct ZlibCompressor {
    level: u32,
}

impl ZlibCompressor {
    /// Compressor at the given level (clamped to 0-9)
    pub fn new(level: u32) -> Self {
        Self {
            level: level.min(9),
        }
    }

    pub fn from_config(config: &CompressionConfig) -> Self {
        Self::new(config.level)
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Default for ZlibCompressor {
    fn default() -> Self {
        Self::new(DEFAULT_COMPRESSION_LEVEL)
    }
}

impl Compressor for ZlibCompressor {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(self.level));
        encoder
            .write_all(data)
            .map_err(|e| compression_failed(e, data.len()))?;
        encoder
            .finish()
            .map_err(|e| compression_failed(e, data.len()))
    }
}

fn compression_failed(e: std::io::Error, input_len: usize) -> ProtocolError {
    error!(error = %e, input_len, "zlib compression failed");
    ProtocolError::CompressionFailure
}

/// Inflates a zlib stream, refusing output larger than `MAX_PAYLOAD_SIZE`
///
/// The wire layer never reads packets; this exists so payloads built here can be
/// checked by callers and tests.
///
/// # Errors
/// Returns `ProtocolError::DecompressionFailure` for corrupt input and
/// `ProtocolError::OversizedPayload` when the limit is hit.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut decoder = ZlibDecoder::new(data).take(MAX_PAYLOAD_SIZE as u64 + 1);
    decoder
        .read_to_end(&mut out)
        .map_err(|_| ProtocolError::DecompressionFailure)?;

    if out.len() > MAX_PAYLOAD_SIZE {
        return Err(ProtocolError::OversizedPayload(out.len()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_zlib_roundtrip() {
        let original = b"<?xml version='1.0' encoding='UTF-8'?><msg serviceID=\"1\"></msg>";
        let compressed = ZlibCompressor::default().compress(original).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), original);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_zlib_header() {
        let compressed = ZlibCompressor::default().compress(b"abc").unwrap();
        // CMF byte: deflate with a 32K window
        assert_eq!(compressed[0], 0x78);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_level_zero_stores() {
        let data = vec![0u8; 1024];
        let stored = ZlibCompressor::new(0).compress(&data).unwrap();
        let packed = ZlibCompressor::new(9).compress(&data).unwrap();
        assert!(stored.len() > data.len());
        assert!(packed.len() < data.len());
    }

    #[test]
    fn test_level_is_clamped() {
        assert_eq!(ZlibCompressor::new(42).level(), 9);
    }

    #[test]
    fn test_corrupt_input_rejected() {
        let result = decompress(&[0x78, 0x9C, 0xFF, 0xFF, 0xFF]);
        assert!(matches!(result, Err(ProtocolError::DecompressionFailure)));
    }
}
