//! # Configuration Management
//!
//! Protocol constants and the tunable settings of the wire layer.
//!
//! The byte layout itself is not configurable: the constants below are fixed by the
//! remote side. What *is* tunable is resource behaviour (buffer pool sizing, deflate
//! level) and logging.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()` / `from_toml()`
//! - Environment variables via `from_env()`
//! - Direct instantiation with defaults

use crate::error::constants::{
    ERR_CONFIG_INVALID, ERR_CONFIG_OPEN, ERR_CONFIG_PARSE, ERR_CONFIG_READ, ERR_CONFIG_SERIALIZE,
    ERR_CONFIG_WRITE,
};
use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Buffers whose retained capacity exceeds this are dropped instead of pooled (64 KiB)
pub const MAX_POOLED_CAPACITY: usize = 1 << 16;

/// Capacity of freshly allocated pool buffers
pub const DEFAULT_BUFFER_CAPACITY: usize = 256;

/// Fixed marker written after the command name in the request head segment
pub const UNI_HEAD_MARKER: u32 = 8;

/// Value written in place of the extra-data block when there is none
pub const EMPTY_EXTRA_DATA: u32 = 4;

/// Offset applied to both request envelope segments (the length field counts itself)
pub const UNI_SEGMENT_OFFSET: u32 = 4;

/// Face indexes from this value upward are sent as service-type 33 common elements
pub const FACE_SERVTYPE33_THRESHOLD: i32 = 260;

/// Base value of the legacy face "old" field
pub const FACE_OLD_BASE: i32 = 0x1445 - 4;

/// Trailing buffer attached to every legacy face element
pub const FACE_LEGACY_BUF: [u8; 8] = [0x00, 0x01, 0x00, 0x04, 0x52, 0xCC, 0xF5, 0xD0];

/// Default deflate level (zlib's own default)
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Upper bound for payloads inflated by the verification helpers (16 MB)
pub const MAX_PAYLOAD_SIZE: usize = 16 * 1024 * 1024;

/// Main configuration structure for the wire layer
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct WireConfig {
    /// Buffer pool configuration
    #[serde(default)]
    pub pool: PoolConfig,

    /// Rich-content compression configuration
    #[serde(default)]
    pub compression: CompressionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WireConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_OPEN}: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_READ}: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_PARSE}: {e}")))
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(capacity) = std::env::var("IM_PROTOCOL_POOL_INITIAL_CAPACITY") {
            if let Ok(val) = capacity.parse::<usize>() {
                config.pool.initial_capacity = val;
            }
        }

        if let Ok(ceiling) = std::env::var("IM_PROTOCOL_POOL_MAX_CAPACITY") {
            if let Ok(val) = ceiling.parse::<usize>() {
                config.pool.max_pooled_capacity = val;
            }
        }

        if let Ok(preallocate) = std::env::var("IM_PROTOCOL_POOL_PREALLOCATE") {
            if let Ok(val) = preallocate.parse::<usize>() {
                config.pool.preallocate = val;
            }
        }

        if let Ok(level) = std::env::var("IM_PROTOCOL_COMPRESSION_LEVEL") {
            if let Ok(val) = level.parse::<u32>() {
                config.compression.level = val;
            }
        }

        if let Ok(level) = std::env::var("IM_PROTOCOL_LOG_LEVEL") {
            if let Ok(val) = level.parse::<Level>() {
                config.logging.log_level = val;
            }
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_SERIALIZE}: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| ProtocolError::ConfigError(format!("{ERR_CONFIG_WRITE}: {e}")))?;

        Ok(())
    }

    /// Validate the configuration
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.pool.validate());
        errors.extend(self.compression.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "{ERR_CONFIG_INVALID}:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Buffer pool configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PoolConfig {
    /// Capacity reserved for buffers the pool has to allocate
    pub initial_capacity: usize,

    /// Released buffers with a larger capacity are dropped
    pub max_pooled_capacity: usize,

    /// Number of buffers allocated up front
    pub preallocate: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_BUFFER_CAPACITY,
            max_pooled_capacity: MAX_POOLED_CAPACITY,
            preallocate: 0,
        }
    }
}

impl PoolConfig {
    /// Validate pool configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_pooled_capacity == 0 {
            errors.push("Max pooled capacity must be greater than 0".to_string());
        }

        if self.initial_capacity > self.max_pooled_capacity {
            errors.push(format!(
                "Initial buffer capacity {} exceeds max pooled capacity {} (buffers would never be reused)",
                self.initial_capacity, self.max_pooled_capacity
            ));
        }

        if self.preallocate > 10_000 {
            errors.push(format!(
                "Preallocated buffer count too large: {} (max recommended: 10,000)",
                self.preallocate
            ));
        }

        errors
    }
}

/// Rich-content compression configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompressionConfig {
    /// Deflate level, 0 (store) to 9 (best)
    pub level: u32,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl CompressionConfig {
    /// Validate compression configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.level > 9 {
            errors.push(format!(
                "Invalid compression level: {} (valid range: 0-9)",
                self.level
            ));
        }
        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("im-protocol"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
