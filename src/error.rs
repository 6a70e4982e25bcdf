//! Error types for ShardKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ShardError
pub type Result<T> = std::result::Result<T, ShardError>;

/// Unified error type for ShardKV operations
#[derive(Debug, Error)]
pub enum ShardError {
    // -------------------------------------------------------------------------
    // Chunk Metadata Errors
    // -------------------------------------------------------------------------
    #[error("invalid chunk record: {0}")]
    InvalidChunk(String),

    // -------------------------------------------------------------------------
    // Catalog Errors
    // -------------------------------------------------------------------------
    #[error("catalog error: {0}")]
    Catalog(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}
