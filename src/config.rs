//! Balancer configuration
//!
//! Runtime-mutable settings consulted by the split-check heuristic.
//!
//! The maximum chunk size can be changed while the process is running (it is
//! ultimately sourced from a cluster-wide config service), so consumers must
//! read it fresh on every use rather than caching it. The accessor is a
//! relaxed atomic load — readers never take a lock.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, ShardError};

/// Default maximum chunk size: 64 MiB
pub const DEFAULT_MAX_CHUNK_SIZE_BYTES: u64 = 64 * 1024 * 1024;

/// Smallest accepted maximum chunk size: 1 MiB
pub const MIN_CHUNK_SIZE_BYTES: u64 = 1024 * 1024;

/// Largest accepted maximum chunk size: 1 GiB
pub const MAX_CHUNK_SIZE_BYTES: u64 = 1024 * 1024 * 1024;

/// Cluster balancer settings visible to this process
///
/// ## Concurrency:
/// - `max_chunk_size_bytes`: Atomic (lock-free reads on the write path)
#[derive(Debug)]
pub struct BalancerConfig {
    /// Size at which a chunk becomes a split candidate (in bytes)
    max_chunk_size_bytes: AtomicU64,
}

impl BalancerConfig {
    /// Create a config with the given maximum chunk size
    ///
    /// The size is validated the same way [`set_max_chunk_size_bytes`] does.
    ///
    /// [`set_max_chunk_size_bytes`]: BalancerConfig::set_max_chunk_size_bytes
    pub fn new(max_chunk_size_bytes: u64) -> Result<Self> {
        Self::validate_chunk_size(max_chunk_size_bytes)?;
        Ok(Self {
            max_chunk_size_bytes: AtomicU64::new(max_chunk_size_bytes),
        })
    }

    /// Current maximum chunk size in bytes
    pub fn max_chunk_size_bytes(&self) -> u64 {
        self.max_chunk_size_bytes.load(Ordering::Relaxed)
    }

    /// Update the maximum chunk size
    ///
    /// Rejects sizes outside `[1 MiB, 1 GiB]` with [`ShardError::Config`].
    pub fn set_max_chunk_size_bytes(&self, bytes: u64) -> Result<()> {
        Self::validate_chunk_size(bytes)?;
        self.max_chunk_size_bytes.store(bytes, Ordering::Relaxed);
        Ok(())
    }

    fn validate_chunk_size(bytes: u64) -> Result<()> {
        if !(MIN_CHUNK_SIZE_BYTES..=MAX_CHUNK_SIZE_BYTES).contains(&bytes) {
            return Err(ShardError::Config(format!(
                "max chunk size must be between {} and {} bytes, got {}",
                MIN_CHUNK_SIZE_BYTES, MAX_CHUNK_SIZE_BYTES, bytes
            )));
        }
        Ok(())
    }
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            max_chunk_size_bytes: AtomicU64::new(DEFAULT_MAX_CHUNK_SIZE_BYTES),
        }
    }
}
