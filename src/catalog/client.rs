//! Catalog client trait and update vocabulary

use crate::chunk::Namespace;
use crate::error::Result;

/// Acknowledgement strength requested from a catalog write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteConcern {
    /// Acknowledged by the node that received the write
    Local,

    /// Acknowledged by a majority of catalog replicas
    Majority,
}

/// A single-field update applied to one catalog document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogPatch {
    /// Set the chunk document's jumbo flag
    SetJumbo(bool),
}

/// Client for the cluster metadata store
///
/// Implementations own transport, timeouts, and any retry policy; callers in
/// this crate issue a single attempt and treat the result as advisory.
/// `Send + Sync` because the jumbo path issues updates from a detached
/// thread.
pub trait CatalogClient: Send + Sync {
    /// Apply `patch` to the document identified by `doc_id` in the chunk
    /// metadata for `ns`, with the requested write concern
    fn update_document(
        &self,
        ns: &Namespace,
        doc_id: &str,
        patch: CatalogPatch,
        write_concern: WriteConcern,
    ) -> Result<()>;
}
