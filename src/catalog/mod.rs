//! Catalog client boundary
//!
//! The catalog (cluster metadata store) is an external collaborator; this
//! crate only defines the slice of its interface the jumbo path needs, plus
//! an in-memory implementation for embedding and tests. Transport, retries,
//! and timeouts belong to the implementation behind the trait.

mod client;
mod memory;

pub use client::{CatalogClient, CatalogPatch, WriteConcern};
pub use memory::InMemoryCatalog;
