//! Observability and Metrics
//!
//! Counters describing how a [`BufferPool`](crate::utils::buffer_pool::BufferPool)
//! is being used. Every pool owns one [`PoolMetrics`]; there is no global instance.
//!
//! Uses atomic counters for thread-safe metrics collection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::info;

/// Metrics collector for a single buffer pool
#[derive(Debug)]
pub struct PoolMetrics {
    /// Total writers handed out
    pub acquired: AtomicU64,
    /// Acquisitions served from the idle set
    pub reused: AtomicU64,
    /// Acquisitions that had to allocate
    pub allocated: AtomicU64,
    /// Buffers returned to the idle set
    pub released: AtomicU64,
    /// Buffers dropped because they outgrew the pooling ceiling
    pub discarded: AtomicU64,
    /// Bytes copied out by finished writers
    pub bytes_built: AtomicU64,
    /// Silent-loss events (bad hex, truncation) seen by pooled writers
    pub silent_losses: AtomicU64,
    start_time: Instant,
}

impl PoolMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            acquired: AtomicU64::new(0),
            reused: AtomicU64::new(0),
            allocated: AtomicU64::new(0),
            released: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
            bytes_built: AtomicU64::new(0),
            silent_losses: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record an acquisition; `reused` tells whether an idle buffer served it
    pub fn acquisition(&self, reused: bool) {
        self.acquired.fetch_add(1, Ordering::Relaxed);
        if reused {
            self.reused.fetch_add(1, Ordering::Relaxed);
        } else {
            self.allocated.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a buffer going back to the idle set
    pub fn buffer_released(&self) {
        self.released.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an oversized buffer being dropped
    pub fn buffer_discarded(&self) {
        self.discarded.fetch_add(1, Ordering::Relaxed);
    }

    /// Record bytes copied out of a finished writer
    pub fn bytes_finished(&self, byte_count: u64) {
        self.bytes_built.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a silent-loss event
    pub fn silent_loss(&self) {
        self.silent_losses.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> PoolMetricsSnapshot {
        PoolMetricsSnapshot {
            acquired: self.acquired.load(Ordering::Relaxed),
            reused: self.reused.load(Ordering::Relaxed),
            allocated: self.allocated.load(Ordering::Relaxed),
            released: self.released.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            bytes_built: self.bytes_built.load(Ordering::Relaxed),
            silent_losses: self.silent_losses.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_metrics(&self) {
        let snapshot = self.snapshot();
        info!(
            acquired = snapshot.acquired,
            reused = snapshot.reused,
            allocated = snapshot.allocated,
            released = snapshot.released,
            discarded = snapshot.discarded,
            bytes_built = snapshot.bytes_built,
            silent_losses = snapshot.silent_losses,
            uptime_seconds = snapshot.uptime_seconds,
            "Buffer pool metrics snapshot"
        );
    }
}

impl Default for PoolMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of pool metrics at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolMetricsSnapshot {
    pub acquired: u64,
    pub reused: u64,
    pub allocated: u64,
    pub released: u64,
    pub discarded: u64,
    pub bytes_built: u64,
    pub silent_losses: u64,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquisition_split() {
        let metrics = PoolMetrics::new();
        metrics.acquisition(true);
        metrics.acquisition(false);
        metrics.acquisition(false);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.acquired, 3);
        assert_eq!(snapshot.reused, 1);
        assert_eq!(snapshot.allocated, 2);
    }

    #[test]
    fn test_release_and_discard() {
        let metrics = PoolMetrics::default();
        metrics.buffer_released();
        metrics.buffer_discarded();
        metrics.bytes_finished(42);
        metrics.silent_loss();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.released, 1);
        assert_eq!(snapshot.discarded, 1);
        assert_eq!(snapshot.bytes_built, 42);
        assert_eq!(snapshot.silent_losses, 1);
    }
}
