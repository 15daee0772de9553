use crate::error::StoreError;
use crate::store::WorkflowStore;
use crate::workflow::Workflow;
use parking_lot::RwLock;

/// In-memory workflow store backed by an `RwLock`-guarded vector.
///
/// Mutations take the write lock, so concurrent creates cannot lose appends;
/// reads take the read lock and return snapshot copies.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Workflow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkflowStore for MemoryStore {
    fn create(&self, workflow: &Workflow) -> Result<(), StoreError> {
        self.records.write().push(workflow.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Workflow>, StoreError> {
        Ok(self.records.read().clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Workflow>, StoreError> {
        Ok(self.records.read().iter().find(|w| w.id == id).cloned())
    }

    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|w| w.id != id);
        Ok(records.len() < before)
    }
}
