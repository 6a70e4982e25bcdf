//! Catalog and record tests
//!
//! Tests verify:
//! - Record validation details
//! - Document id derivation
//! - In-memory catalog behavior (lookups, patches, error cases)

use shardkv::{
    CatalogClient, CatalogPatch, ChunkRecord, ChunkVersion, InMemoryCatalog, KeyValue,
    Namespace, ShardError, ShardId, ShardKey, WriteConcern,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn test_record() -> ChunkRecord {
    ChunkRecord {
        ns: Namespace::from("app.users"),
        min: ShardKey::from(10),
        max: ShardKey::from(20),
        shard: ShardId::from("shard0001"),
        version: ChunkVersion::new(1, 3),
        jumbo: false,
    }
}

// =============================================================================
// Record Validation Tests
// =============================================================================

#[test]
fn test_valid_record_passes() {
    assert!(test_record().validate().is_ok());
}

#[test]
fn test_full_range_record_passes() {
    let mut record = test_record();
    record.min = ShardKey::global_min(1);
    record.max = ShardKey::global_max(1);

    assert!(record.validate().is_ok());
}

#[test]
fn test_inverted_boundaries_fail() {
    let mut record = test_record();
    std::mem::swap(&mut record.min, &mut record.max);

    let err = record.validate().unwrap_err();
    assert!(matches!(err, ShardError::InvalidChunk(_)));
    assert!(err.to_string().contains("out of order"));
}

#[test]
fn test_empty_fields_fail() {
    let mut record = test_record();
    record.ns = Namespace::from("");
    assert!(record.validate().is_err());

    let mut record = test_record();
    record.shard = ShardId::from("");
    assert!(record.validate().is_err());

    let mut record = test_record();
    record.max = ShardKey::new(vec![]);
    assert!(record.validate().is_err());
}

// =============================================================================
// Document Id Tests
// =============================================================================

#[test]
fn test_gen_id_combines_namespace_and_min() {
    let id = ChunkRecord::gen_id(&Namespace::from("app.users"), &ShardKey::from(10));
    assert_eq!(id, "app.users-10");
}

#[test]
fn test_gen_id_matches_record_id() {
    let record = test_record();
    assert_eq!(record.id(), ChunkRecord::gen_id(&record.ns, &record.min));
}

#[test]
fn test_gen_id_distinguishes_chunks_of_one_collection() {
    let ns = Namespace::from("app.users");
    let a = ChunkRecord::gen_id(&ns, &ShardKey::from(10));
    let b = ChunkRecord::gen_id(&ns, &ShardKey::from(20));
    assert_ne!(a, b);
}

#[test]
fn test_gen_id_never_aliases_distinct_min_keys() {
    // A jumbo update addressed by one chunk's id must not be able to land on
    // a sibling's document, even when text fields contain the join separator
    let ns = Namespace::from("app.users");
    let a = ChunkRecord::gen_id(
        &ns,
        &ShardKey::new(vec![KeyValue::Text("a".into()), KeyValue::Text("b_c".into())]),
    );
    let b = ChunkRecord::gen_id(
        &ns,
        &ShardKey::new(vec![KeyValue::Text("a_b".into()), KeyValue::Text("c".into())]),
    );

    assert_ne!(a, b);
}

// =============================================================================
// In-Memory Catalog Tests
// =============================================================================

#[test]
fn test_new_catalog_is_empty() {
    let catalog = InMemoryCatalog::new();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

#[test]
fn test_insert_and_get_roundtrip() {
    let catalog = InMemoryCatalog::new();
    let record = test_record();

    let id = catalog.insert(record.clone());

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(&id), Some(record));
    assert_eq!(catalog.get("app.users-999"), None);
}

#[test]
fn test_update_sets_jumbo_flag() {
    let catalog = InMemoryCatalog::new();
    let id = catalog.insert(test_record());

    catalog
        .update_document(
            &Namespace::from("app.users"),
            &id,
            CatalogPatch::SetJumbo(true),
            WriteConcern::Majority,
        )
        .unwrap();

    assert!(catalog.get(&id).unwrap().jumbo);
}

#[test]
fn test_update_unknown_document_fails() {
    let catalog = InMemoryCatalog::new();

    let result = catalog.update_document(
        &Namespace::from("app.users"),
        "app.users-10",
        CatalogPatch::SetJumbo(true),
        WriteConcern::Local,
    );

    assert!(matches!(result, Err(ShardError::Catalog(_))));
}

#[test]
fn test_update_checks_namespace() {
    let catalog = InMemoryCatalog::new();
    let id = catalog.insert(test_record());

    let result = catalog.update_document(
        &Namespace::from("app.orders"),
        &id,
        CatalogPatch::SetJumbo(true),
        WriteConcern::Majority,
    );

    assert!(matches!(result, Err(ShardError::Catalog(_))));
    assert!(!catalog.get(&id).unwrap().jumbo);
}
