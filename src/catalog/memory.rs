//! In-memory catalog
//!
//! Keeps chunk records in a process-local map. Useful for single-process
//! embeddings and as the catalog double in tests; write concern is accepted
//! and ignored since there are no replicas to acknowledge.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::chunk::{ChunkRecord, Namespace};
use crate::error::{Result, ShardError};

use super::{CatalogClient, CatalogPatch, WriteConcern};

/// Process-local catalog backed by a `RwLock<HashMap>`
///
/// ## Concurrency:
/// - `chunks`: RwLock (reads dominate; updates only on metadata changes)
/// - All methods use `&self`
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    /// Chunk documents keyed by their derived id (see [`ChunkRecord::gen_id`])
    chunks: RwLock<HashMap<String, ChunkRecord>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a chunk record, returning its document id
    pub fn insert(&self, record: ChunkRecord) -> String {
        let id = record.id();
        self.chunks.write().insert(id.clone(), record);
        id
    }

    /// Fetch a copy of a chunk record by document id
    pub fn get(&self, doc_id: &str) -> Option<ChunkRecord> {
        self.chunks.read().get(doc_id).cloned()
    }

    /// Number of chunk documents
    pub fn len(&self) -> usize {
        self.chunks.read().len()
    }

    /// Whether the catalog holds no documents
    pub fn is_empty(&self) -> bool {
        self.chunks.read().is_empty()
    }
}

impl CatalogClient for InMemoryCatalog {
    fn update_document(
        &self,
        ns: &Namespace,
        doc_id: &str,
        patch: CatalogPatch,
        _write_concern: WriteConcern,
    ) -> Result<()> {
        let mut chunks = self.chunks.write();

        let record = chunks.get_mut(doc_id).ok_or_else(|| {
            ShardError::Catalog(format!("no chunk document with id {}", doc_id))
        })?;

        if record.ns != *ns {
            return Err(ShardError::Catalog(format!(
                "chunk document {} belongs to {}, not {}",
                doc_id, record.ns, ns
            )));
        }

        match patch {
            CatalogPatch::SetJumbo(jumbo) => record.jumbo = jumbo,
        }

        Ok(())
    }
}
