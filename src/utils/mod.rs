//! # Utility Modules
//!
//! Supporting pieces around the packet writer.
//!
//! ## Components
//! - **Buffer Pool**: reusable packet buffers with a capacity ceiling
//! - **Compression**: zlib for rich-content payloads
//! - **Crypto**: the cipher seam used for encrypted regions
//! - **Logging**: `tracing-subscriber` setup
//! - **Metrics**: per-pool usage counters

pub mod buffer_pool;
pub mod compression;
pub mod crypto;
pub mod logging;
pub mod metrics;

pub use buffer_pool::BufferPool;
pub use compression::{Compressor, ZlibCompressor};
pub use crypto::Cipher;
