//! # ShardKV
//!
//! Chunk metadata and split heuristics for a sharded key-value store:
//! - Half-open key range ("chunk") membership testing for request routing
//! - Jittered write-accounting that staggers split-checks across restarts
//! - One-way "jumbo" marking with best-effort catalog propagation
//! - Pluggable catalog client boundary
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Request Router                           │
//! │              (contains_key on hot path)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Chunk                                  │
//! │     (immutable range identity + runtime counters)            │
//! └─────────┬───────────────────────────────┬───────────────────┘
//!           │                               │
//!           ▼                               ▼
//!   ┌───────────────┐               ┌───────────────┐
//!   │ BalancerConfig│               │ CatalogClient │
//!   │ (chunk size)  │               │ (jumbo flag)  │
//!   └───────────────┘               └───────────────┘
//! ```
//!
//! Splitting and balancing themselves live elsewhere; this crate owns the
//! range model, the byte-accounting heuristic, and the jumbo state machine.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod key;
pub mod chunk;
pub mod catalog;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ShardError};
pub use config::BalancerConfig;
pub use key::{KeyValue, ShardKey};
pub use chunk::{Chunk, ChunkRecord, ChunkVersion, Namespace, ShardId};
pub use catalog::{CatalogClient, CatalogPatch, InMemoryCatalog, WriteConcern};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ShardKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
