//! Chunk metadata
//!
//! A chunk is one contiguous half-open range `[min, max)` of a collection's
//! shard key space, owned by a single shard. This module holds:
//! - The persisted catalog record and its validation ([`ChunkRecord`])
//! - The catalog version stamp ([`ChunkVersion`])
//! - The in-memory descriptor with routing and split-heuristic state
//!   ([`Chunk`])

mod descriptor;
mod record;
mod version;

pub use descriptor::Chunk;
pub use record::{ChunkRecord, Namespace, ShardId};
pub use version::ChunkVersion;
