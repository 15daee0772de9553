//! Tests for the workflow store implementations.
mod common;
use common::*;
use flowgen::prelude::*;
use std::thread;

#[test]
fn test_memory_store_create_list_find_delete() {
    let store = MemoryStore::new();
    assert!(store.list().unwrap().is_empty());

    let workflow = sample_workflow("post to slack");
    store.create(&workflow).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], workflow);

    assert_eq!(store.find_by_id(&workflow.id).unwrap(), Some(workflow.clone()));
    assert_eq!(store.find_by_id("missing").unwrap(), None);

    assert!(store.delete_by_id(&workflow.id).unwrap());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_delete_unknown_id_is_a_noop() {
    let store = MemoryStore::new();
    let workflow = sample_workflow("send a discord alert");
    store.create(&workflow).unwrap();

    // Scenario: deleting a nonexistent id returns false and changes nothing.
    assert!(!store.delete_by_id("nonexistent").unwrap());
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_list_returns_a_snapshot_copy() {
    let store = MemoryStore::new();
    let workflow = sample_workflow("save to database");
    store.create(&workflow).unwrap();

    let mut snapshot = store.list().unwrap();
    snapshot.clear();

    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_concurrent_creates_lose_no_appends() {
    let store = Arc::new(MemoryStore::new());
    let workflow = sample_workflow("slack it");

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            let mut record = workflow.clone();
            record.id = format!("workflow_{}", i);
            thread::spawn(move || {
                for _ in 0..50 {
                    store.create(&record).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.list().unwrap().len(), 8 * 50);
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workflows.json");
    let store = JsonFileStore::new(&path);

    // A missing file reads as an empty store.
    assert!(store.list().unwrap().is_empty());

    let first = sample_workflow("post to slack");
    let mut second = sample_workflow("ping discord");
    second.id = "workflow_2".to_string();

    store.create(&first).unwrap();
    store.create(&second).unwrap();
    assert!(path.exists());

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0], first);
    assert_eq!(listed[1], second);

    // A separate handle over the same file sees the same records.
    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.find_by_id(&second.id).unwrap(), Some(second.clone()));

    assert!(reopened.delete_by_id(&first.id).unwrap());
    assert!(!reopened.delete_by_id(&first.id).unwrap());
    assert_eq!(store.list().unwrap().len(), 1);
}

#[test]
fn test_file_store_rejects_corrupt_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workflows.json");
    std::fs::write(&path, "{ not json ]").unwrap();

    let store = JsonFileStore::new(&path);
    let err = store.list().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt(_)));

    // The failed read does not clobber the file.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json ]");
}

#[test]
fn test_engine_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workflows.json");

    let engine = deterministic_engine(Arc::new(JsonFileStore::new(&path)));
    let workflow = engine.generate("daily slack digest").unwrap();

    assert_eq!(engine.list().unwrap().len(), 1);
    assert_eq!(engine.find_by_id(&workflow.id).unwrap(), Some(workflow));
}
