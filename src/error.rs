//! # Error Types
//!
//! Error handling for the wire layer.
//!
//! Packet building itself never fails: malformed hex literals and oversized
//! short-length payloads are silent-loss paths reported through
//! [`Diagnostic`](crate::core::writer::Diagnostic) values instead. The variants here
//! cover what *can* abort a build or a setup step:
//!
//! ## Error Categories
//! - **Collaborator Errors**: the cipher or the compressor refused the input
//! - **Configuration Errors**: unreadable or invalid configuration
//! - **I/O Errors**: file system failures while loading configuration
//!
//! ## Example Usage
//! ```rust
//! use im_protocol::config::WireConfig;
//! use im_protocol::error::{ProtocolError, Result};
//!
//! fn load(text: &str) -> Result<WireConfig> {
//!     let config = WireConfig::from_toml(text)?;
//!     config.validate_strict()?;
//!     Ok(config)
//! }
//!
//! assert!(matches!(load("[pool"), Err(ProtocolError::ConfigError(_))));
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Collaborator errors
    pub const ERR_ENCRYPTION_FAILED: &str = "Encryption failed";
    pub const ERR_COMPRESSION_FAILED: &str = "Compression failed";
    pub const ERR_DECOMPRESSION_FAILED: &str = "Decompression failed";

    /// Configuration errors
    pub const ERR_CONFIG_OPEN: &str = "Failed to open config file";
    pub const ERR_CONFIG_READ: &str = "Failed to read config file";
    pub const ERR_CONFIG_PARSE: &str = "Failed to parse TOML";
    pub const ERR_CONFIG_SERIALIZE: &str = "Failed to serialize config";
    pub const ERR_CONFIG_WRITE: &str = "Failed to write config file";
    pub const ERR_CONFIG_INVALID: &str = "Configuration validation failed";
}

// ProtocolError is the error type for every fallible operation in the crate
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    #[error("{}", constants::ERR_ENCRYPTION_FAILED)]
    EncryptionFailure,

    #[error("{}", constants::ERR_COMPRESSION_FAILED)]
    CompressionFailure,

    #[error("{}", constants::ERR_DECOMPRESSION_FAILED)]
    DecompressionFailure,

    #[error("Payload too large: {0} bytes")]
    OversizedPayload(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
