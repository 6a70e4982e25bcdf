//! In-memory chunk descriptor
//!
//! ## Responsibilities
//! - Answer key-membership queries for request routing
//! - Track bytes written since the last split-check
//! - Latch the jumbo flag and propagate it to the catalog best-effort
//!
//! The descriptor is two things glued together: an immutable range identity
//! (boundaries, owner, version — never mutated; a reassignment or re-version
//! replaces the whole descriptor) and runtime-local mutable state (the write
//! counter and jumbo latch, which are never persisted and are rebuilt fresh
//! on process restart).

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::catalog::{CatalogClient, CatalogPatch, WriteConcern};
use crate::config::BalancerConfig;
use crate::error::Result;
use crate::key::ShardKey;

use super::{ChunkRecord, ChunkVersion, Namespace, ShardId};

/// A split-check is due once roughly `data_written * SPLIT_TEST_FACTOR`
/// exceeds the maximum chunk size
const SPLIT_TEST_FACTOR: u64 = 5;

/// Draw a fresh jittered seed for the write counter
///
/// Uniform over `[0, max_chunk_size_bytes / SPLIT_TEST_FACTOR)`, RNG seeded
/// from the wall clock at call time, config read fresh at call time. Without
/// the jitter, every descriptor loaded at process start would hit its
/// split-check threshold at the same write volume, and a fleet of routers
/// restarting together would fire synchronized split-check storms. Not
/// cryptographic randomness; only the distribution matters.
fn mk_data_written(config: &BalancerConfig) -> u64 {
    let ceiling = (config.max_chunk_size_bytes() / SPLIT_TEST_FACTOR).max(1);
    let mut rng = StdRng::seed_from_u64(wall_clock_nanos());
    rng.random_range(0..ceiling)
}

fn wall_clock_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// One contiguous range `[min, max)` of a collection's key space
///
/// ## Concurrency:
/// - Boundaries, owner, and version are immutable after construction, so
///   `contains_key` is safe for unsynchronized concurrent readers
/// - `data_written`: Atomic fetch-add (no lost updates; it only gates when a
///   split-check fires, but exact counting costs nothing here)
/// - `jumbo`: Atomic one-way latch, visible to all readers in this process
/// - All methods take `&self`
pub struct Chunk {
    /// Collection whose key space this chunk partitions (back-reference)
    ns: Namespace,

    /// Inclusive lower boundary
    min: ShardKey,

    /// Exclusive upper boundary
    max: ShardKey,

    /// Owning shard
    shard: ShardId,

    /// Catalog version stamp (compared by routers, never incremented here)
    version: ChunkVersion,

    /// One-way latch: set once the range is declared unsplittable
    jumbo: AtomicBool,

    /// Bytes observed by the write path since the last split-check
    data_written: AtomicU64,
}

impl Chunk {
    /// Build a descriptor from a persisted catalog record
    ///
    /// Boundaries are copied out of the record, so the descriptor does not
    /// borrow from catalog storage. A record that fails [`validation`] aborts
    /// construction with [`ShardError::InvalidChunk`] — malformed catalog
    /// state is not recoverable here. The write counter starts at a fresh
    /// jittered seed.
    ///
    /// [`validation`]: ChunkRecord::validate
    /// [`ShardError::InvalidChunk`]: crate::error::ShardError::InvalidChunk
    pub fn from_record(record: &ChunkRecord, config: &BalancerConfig) -> Result<Self> {
        record.validate()?;

        Ok(Self {
            ns: record.ns.clone(),
            min: record.min.clone(),
            max: record.max.clone(),
            shard: record.shard.clone(),
            version: record.version,
            jumbo: AtomicBool::new(record.jumbo),
            data_written: AtomicU64::new(mk_data_written(config)),
        })
    }

    /// Build a descriptor from explicit parts
    ///
    /// Used when synthesizing descriptors programmatically (e.g. the ranges
    /// produced by a split). The caller vouches for the boundaries; nothing
    /// is validated. Jumbo starts false and the write counter starts at
    /// `initial_data_written` (a split typically passes a share of the parent
    /// counter rather than a fresh seed).
    pub fn new(
        ns: Namespace,
        min: ShardKey,
        max: ShardKey,
        shard: ShardId,
        version: ChunkVersion,
        initial_data_written: u64,
    ) -> Self {
        Self {
            ns,
            min,
            max,
            shard,
            version,
            jumbo: AtomicBool::new(false),
            data_written: AtomicU64::new(initial_data_written),
        }
    }

    // =========================================================================
    // Range Identity
    // =========================================================================

    /// Namespace of the owning collection
    pub fn ns(&self) -> &Namespace {
        &self.ns
    }

    /// Inclusive lower boundary
    pub fn min(&self) -> &ShardKey {
        &self.min
    }

    /// Exclusive upper boundary
    pub fn max(&self) -> &ShardKey {
        &self.max
    }

    /// Shard currently owning this range
    pub fn shard(&self) -> &ShardId {
        &self.shard
    }

    /// Catalog version stamp
    pub fn version(&self) -> ChunkVersion {
        self.version
    }

    /// Whether `key` falls inside `[min, max)`
    ///
    /// Pure and allocation-free; this is the hot routing path.
    pub fn contains_key(&self, key: &ShardKey) -> bool {
        self.min <= *key && *key < self.max
    }

    // =========================================================================
    // Write Accounting
    // =========================================================================

    /// Bytes observed since the last split-check
    pub fn get_bytes_written(&self) -> u64 {
        self.data_written.load(Ordering::Relaxed)
    }

    /// Record `bytes` written to this range and return the new total
    ///
    /// The caller compares the return value against the split threshold;
    /// whether to actually split is decided elsewhere.
    pub fn add_bytes_written(&self, bytes: u64) -> u64 {
        self.data_written.fetch_add(bytes, Ordering::Relaxed) + bytes
    }

    /// Reset the counter to zero (split-check ran, no split needed)
    pub fn clear_bytes_written(&self) {
        self.data_written.store(0, Ordering::Relaxed);
    }

    /// Reset the counter to a fresh jittered seed
    ///
    /// Used after resets where restarting every chunk at zero would bias the
    /// fleet back toward synchronized re-checks (e.g. after a move).
    pub fn randomize_bytes_written(&self, config: &BalancerConfig) {
        self.data_written.store(mk_data_written(config), Ordering::Relaxed);
    }

    // =========================================================================
    // Jumbo Latch
    // =========================================================================

    /// Whether this range has been declared unsplittable
    pub fn is_jumbo(&self) -> bool {
        self.jumbo.load(Ordering::Relaxed)
    }

    /// Declare this range unsplittable
    ///
    /// The in-memory flag is latched first and unconditionally — even if the
    /// catalog can't be reached, this process must stop trying to split or
    /// move the range. The catalog update (a single-field patch addressed by
    /// the derived document id, majority write concern) then runs on a
    /// detached thread: a failure there is logged and swallowed, and no
    /// ordering is guaranteed between its completion and this method's
    /// return. Callers normally drop the returned handle; tests join it to
    /// observe the update.
    ///
    /// Calling this twice is harmless: the flag stays latched and the catalog
    /// update is simply issued again.
    pub fn mark_as_jumbo(&self, catalog: Arc<dyn CatalogClient>) -> thread::JoinHandle<()> {
        info!(chunk = %self, "marking chunk as jumbo");

        // Latch before the catalog call, not after it succeeds.
        self.jumbo.store(true, Ordering::Relaxed);

        let id = ChunkRecord::gen_id(&self.ns, &self.min);
        let ns = self.ns.clone();

        thread::spawn(move || {
            let update = catalog.update_document(
                &ns,
                &id,
                CatalogPatch::SetJumbo(true),
                WriteConcern::Majority,
            );
            if let Err(e) = update {
                warn!(chunk = %id, error = %e, "couldn't set jumbo flag in catalog");
            }
        })
    }
}

impl fmt::Display for Chunk {
    /// Diagnostic summary; not a stable serialization format
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shard: {}, version: {}, min: {}, max: {}",
            self.shard, self.version, self.min, self.max
        )
    }
}
