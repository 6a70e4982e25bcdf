//! Persisted chunk records
//!
//! The catalog stores one record per chunk. Records are loaded when a
//! collection's routing table is built and turned into [`Chunk`] descriptors;
//! a record that fails structural validation aborts that load, since the rest
//! of the system is built on the catalog being internally consistent.
//!
//! [`Chunk`]: super::Chunk

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShardError};
use crate::key::ShardKey;

use super::ChunkVersion;

/// Fully-qualified collection namespace, e.g. `app.users`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(ns: impl Into<String>) -> Self {
        Self(ns.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Namespace {
    fn from(ns: &str) -> Self {
        Self(ns.to_string())
    }
}

/// Identifier of a storage node (shard)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShardId(String);

impl ShardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ShardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ShardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One chunk's record as persisted in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// Collection this chunk partitions
    pub ns: Namespace,

    /// Inclusive lower boundary
    pub min: ShardKey,

    /// Exclusive upper boundary
    pub max: ShardKey,

    /// Shard currently owning the range
    pub shard: ShardId,

    /// Version stamp assigned by the catalog
    pub version: ChunkVersion,

    /// Whether the chunk has been declared unsplittable
    #[serde(default)]
    pub jumbo: bool,
}

impl ChunkRecord {
    /// Check structural consistency of the record
    ///
    /// Returns [`ShardError::InvalidChunk`] when a required field is empty or
    /// the boundaries are not strictly ordered (`min < max`; the global
    /// min/max sentinels are ordinary key values under the shard key order,
    /// so a full-range chunk passes this check too).
    pub fn validate(&self) -> Result<()> {
        if self.ns.is_empty() {
            return Err(ShardError::InvalidChunk("missing namespace".to_string()));
        }
        if self.shard.is_empty() {
            return Err(ShardError::InvalidChunk("missing shard id".to_string()));
        }
        if self.min.is_empty() || self.max.is_empty() {
            return Err(ShardError::InvalidChunk("missing range boundary".to_string()));
        }
        if self.min >= self.max {
            return Err(ShardError::InvalidChunk(format!(
                "range boundaries out of order: min {} >= max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Derive the catalog document identifier for a chunk
    ///
    /// Deterministic function of the collection namespace and the chunk's
    /// minimum boundary, e.g. `app.users-10_"east"`. Both the jumbo update
    /// path and catalog implementations address chunk documents by this id,
    /// so distinct min keys must never collide; the key rendering guarantees
    /// that (see [`ShardKey::id_fragment`]).
    pub fn gen_id(ns: &Namespace, min: &ShardKey) -> String {
        format!("{}-{}", ns, min.id_fragment())
    }

    /// Identifier of this record's document
    pub fn id(&self) -> String {
        Self::gen_id(&self.ns, &self.min)
    }
}
