//! Common test utilities for building engines with deterministic collaborators.
use chrono::{DateTime, TimeZone, Utc};
use flowgen::prelude::*;

/// The instant all deterministic test engines are frozen at.
#[allow(dead_code)]
pub fn test_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// A clock frozen at [`test_instant`].
#[allow(dead_code)]
pub fn fixed_clock() -> FixedClock {
    FixedClock(test_instant())
}

/// Builds an engine with a fixed clock and sequential ids over the given store.
#[allow(dead_code)]
pub fn deterministic_engine(store: Arc<dyn WorkflowStore>) -> Engine {
    Engine::builder()
        .with_store(store)
        .with_clock(Arc::new(fixed_clock()))
        .with_ids(Arc::new(SequentialIds::new()))
        .build()
}

/// Builds a deterministic engine over a fresh in-memory store, returning
/// both so tests can inspect the store directly.
#[allow(dead_code)]
pub fn memory_engine() -> (Engine, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let engine = deterministic_engine(store.clone());
    (engine, store)
}

/// Generates a small workflow for store-focused tests.
#[allow(dead_code)]
pub fn sample_workflow(description: &str) -> Workflow {
    let (engine, _store) = memory_engine();
    engine
        .generate(description)
        .expect("sample generation should succeed")
}
