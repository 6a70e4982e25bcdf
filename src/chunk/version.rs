//! Chunk version stamps
//!
//! Assigned by the catalog whenever a chunk is created, split, or moved.
//! This crate only compares versions; it never increments them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Monotonically comparable version stamp for a chunk
///
/// `epoch` identifies one generation of a collection's sharding (it changes
/// when the collection is dropped and resharded); `ordinal` orders chunk
/// metadata changes within an epoch. The derived `Ord` compares epoch first,
/// so stamps from different generations never interleave.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ChunkVersion {
    /// Collection sharding generation
    pub epoch: u64,

    /// Ordering of metadata changes within the epoch
    pub ordinal: u64,
}

impl ChunkVersion {
    /// Create a version stamp
    pub fn new(epoch: u64, ordinal: u64) -> Self {
        Self { epoch, ordinal }
    }
}

impl fmt::Display for ChunkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.epoch, self.ordinal)
    }
}
