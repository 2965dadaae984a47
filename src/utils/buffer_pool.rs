//! # Buffer Pool
//!
//! Pool of reusable byte buffers for packet building. Every [`Writer`] handed out by
//! [`BufferPool::acquire`] draws its buffer from the idle set (or allocates one) and
//! puts it back when released or dropped.
//!
//! ## Eviction
//! A released buffer keeps its capacity and loses its content. Buffers that grew past
//! the configured ceiling (64 KiB by default) are dropped instead, so one oversized
//! build cannot pin that memory in the pool forever.
//!
//! ## Usage
//! ```rust
//! use im_protocol::utils::buffer_pool::BufferPool;
//!
//! let pool = BufferPool::new(4);
//! let bytes = pool.build(|w| {
//!     w.write_u16(1);
//!     w.write_string("AB");
//! });
//! assert_eq!(bytes, [0x00, 0x01, 0x00, 0x00, 0x00, 0x06, 0x41, 0x42]);
//! assert_eq!(pool.available(), 4);
//! ```

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::config::{PoolConfig, DEFAULT_BUFFER_CAPACITY, MAX_POOLED_CAPACITY};
use crate::core::writer::Writer;
use crate::error::Result;
use crate::utils::metrics::PoolMetrics;

struct PoolInner {
    idle: Mutex<Vec<Vec<u8>>>,
    initial_capacity: usize,
    max_pooled_capacity: usize,
    metrics: PoolMetrics,
}

/// Thread-safe pool of packet-building buffers
///
/// Cloning the pool is cheap and yields a handle to the same idle set.
#[derive(Clone)]
pub struct BufferPool {
    inner: Arc<PoolInner>,
}

impl BufferPool {
    /// Create a new buffer pool with `pool_size` buffers allocated up front
    pub fn new(pool_size: usize) -> Self {
        Self::with_config(&PoolConfig {
            preallocate: pool_size,
            ..PoolConfig::default()
        })
    }

    /// Create a pool from configuration
    pub fn with_config(config: &PoolConfig) -> Self {
        let mut idle = Vec::with_capacity(config.preallocate);
        for _ in 0..config.preallocate {
            idle.push(Vec::with_capacity(config.initial_capacity));
        }

        Self {
            inner: Arc::new(PoolInner {
                idle: Mutex::new(idle),
                initial_capacity: config.initial_capacity,
                max_pooled_capacity: config.max_pooled_capacity,
                metrics: PoolMetrics::new(),
            }),
        }
    }

    /// Acquire an empty writer (reusing an idle buffer when there is one)
    pub fn acquire(&self) -> Writer {
        let reused = if let Ok(mut idle) = self.inner.idle.lock() {
            idle.pop()
        } else {
            None
        };

        self.inner.metrics.acquisition(reused.is_some());
        let buffer = reused.unwrap_or_else(|| Vec::with_capacity(self.inner.initial_capacity));
        Writer::pooled(buffer, self.clone())
    }

    /// Return a writer's buffer to the pool it was acquired from
    ///
    /// Equivalent to dropping the writer. Writers not created by a pool just free
    /// their buffer.
    pub fn release(&self, writer: Writer) {
        drop(writer);
    }

    /// Run `f` against a pooled writer and return an owned copy of what it wrote
    pub fn build<F>(&self, f: F) -> Vec<u8>
    where
        F: FnOnce(&mut Writer),
    {
        let mut writer = self.acquire();
        f(&mut writer);
        writer.finish()
    }

    /// Fallible variant of [`BufferPool::build`]; the buffer is released either way
    pub fn try_build<F>(&self, f: F) -> Result<Vec<u8>>
    where
        F: FnOnce(&mut Writer) -> Result<()>,
    {
        let mut writer = self.acquire();
        f(&mut writer)?;
        Ok(writer.finish())
    }

    /// Get the current number of idle buffers in the pool
    pub fn available(&self) -> usize {
        self.inner.idle.lock().map(|idle| idle.len()).unwrap_or(0)
    }

    /// Capacity above which released buffers are dropped
    pub fn max_pooled_capacity(&self) -> usize {
        self.inner.max_pooled_capacity
    }

    /// Usage counters for this pool
    pub fn metrics(&self) -> &PoolMetrics {
        &self.inner.metrics
    }

    pub(crate) fn recycle(&self, mut buffer: Vec<u8>) {
        if buffer.capacity() > self.inner.max_pooled_capacity {
            debug!(
                capacity = buffer.capacity(),
                ceiling = self.inner.max_pooled_capacity,
                "Dropping oversized buffer instead of pooling it"
            );
            self.inner.metrics.buffer_discarded();
            return;
        }

        buffer.clear();
        if let Ok(mut idle) = self.inner.idle.lock() {
            idle.push(buffer);
            self.inner.metrics.buffer_released();
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::with_config(&PoolConfig {
            initial_capacity: DEFAULT_BUFFER_CAPACITY,
            max_pooled_capacity: MAX_POOLED_CAPACITY,
            preallocate: 0,
        })
    }
}

impl std::fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferPool")
            .field("available", &self.available())
            .field("initial_capacity", &self.inner.initial_capacity)
            .field("max_pooled_capacity", &self.inner.max_pooled_capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_pool_basic() {
        let pool = BufferPool::new(10);
        assert_eq!(pool.available(), 10);

        let mut writer = pool.acquire();
        assert_eq!(pool.available(), 9);

        writer.write_byte(42);
        assert_eq!(writer.bytes(), &[42]);

        pool.release(writer);
        assert_eq!(pool.available(), 10);
    }

    #[test]
    fn test_buffer_pool_reuse_keeps_capacity() {
        let pool = BufferPool::new(0);

        let capacity = {
            let mut writer = pool.acquire();
            writer.write_bytes(&[7u8; 1000]);
            writer.capacity()
        };

        let writer = pool.acquire();
        assert!(writer.is_empty());
        assert_eq!(writer.capacity(), capacity);
        assert_eq!(pool.metrics().snapshot().reused, 1);
    }

    #[test]
    fn test_buffer_pool_empty_allocates() {
        let pool = BufferPool::new(1);
        let _w1 = pool.acquire();
        let w2 = pool.acquire();

        assert!(w2.is_empty());
        assert_eq!(pool.available(), 0);
        assert_eq!(pool.metrics().snapshot().allocated, 1);
    }

    #[test]
    fn test_oversized_buffer_is_discarded() {
        let pool = BufferPool::new(0);

        {
            let mut writer = pool.acquire();
            writer.write_bytes(&vec![0u8; MAX_POOLED_CAPACITY + 1]);
            assert!(writer.capacity() > MAX_POOLED_CAPACITY);
        }

        assert_eq!(pool.available(), 0);
        assert_eq!(pool.metrics().snapshot().discarded, 1);

        let writer = pool.acquire();
        assert!(writer.capacity() <= MAX_POOLED_CAPACITY);
    }

    fn tiny_pool(initial_capacity: usize) -> BufferPool {
        BufferPool::with_config(&PoolConfig {
            initial_capacity,
            max_pooled_capacity: 64,
            preallocate: 0,
        })
    }

    // Only capacity strictly above the ceiling is dropped; a buffer sitting exactly
    // at 64 KiB stays pooled under the default ceiling.
    #[test]
    fn test_ceiling_sized_buffer_is_kept() {
        let pool = tiny_pool(64);

        let mut writer = pool.acquire();
        writer.write_bytes(&[1u8; 64]);
        assert_eq!(writer.capacity(), pool.max_pooled_capacity());
        pool.release(writer);

        assert_eq!(pool.available(), 1);
        assert_eq!(pool.metrics().snapshot().discarded, 0);
    }

    #[test]
    fn test_one_past_ceiling_is_discarded() {
        let pool = tiny_pool(65);

        let mut writer = pool.acquire();
        writer.write_bytes(&[1u8; 65]);
        assert_eq!(writer.capacity(), 65);
        pool.release(writer);

        assert_eq!(pool.available(), 0);
        assert_eq!(pool.metrics().snapshot().discarded, 1);
    }

    #[test]
    fn test_build_returns_owned_copy() {
        let pool = BufferPool::new(1);
        let bytes = pool.build(|w| w.write_u32(0xDEADBEEF));
        assert_eq!(bytes, [0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(pool.available(), 1);
    }

    #[test]
    fn test_try_build_releases_on_error() {
        let pool = BufferPool::new(1);
        let result = pool.try_build(|w| {
            w.write_byte(1);
            Err(crate::error::ProtocolError::CompressionFailure)
        });
        assert!(result.is_err());
        assert_eq!(pool.available(), 1);
    }
}
