//! Persistence of generated workflow documents.
//!
//! The store is an append-only collection keyed by workflow id: create
//! appends, delete removes by id, and no update operation exists. The trait
//! is the engine's injection seam; implementations differ only in where the
//! records live.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::workflow::Workflow;

/// Repository contract for workflow documents.
///
/// Implementations must serialize mutating operations so that concurrent
/// `create`/`delete` calls are linearizable and readers never observe a
/// partially written store. A failed write must leave the store in its
/// pre-write state.
pub trait WorkflowStore: Send + Sync {
    /// Appends a workflow to the store.
    fn create(&self, workflow: &Workflow) -> Result<(), StoreError>;

    /// Returns a snapshot copy of all stored workflows, in insertion order.
    fn list(&self) -> Result<Vec<Workflow>, StoreError>;

    /// Looks up a workflow by id. An unknown id is `Ok(None)`, not an error.
    fn find_by_id(&self, id: &str) -> Result<Option<Workflow>, StoreError>;

    /// Removes a workflow by id, returning whether a record was removed.
    /// Deleting an unknown id is a no-op, never an error.
    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;
}
