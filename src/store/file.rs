use crate::error::StoreError;
use crate::store::WorkflowStore;
use crate::workflow::Workflow;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed workflow store: one JSON file holding the ordered array of
/// workflow documents.
///
/// Every mutation runs a read-all/modify/write-all cycle under a single
/// mutex, so concurrent creates and deletes are serialized. The rewrite goes
/// through a temp file followed by a rename, so an interrupted or failed
/// write leaves the previous contents intact.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens a store at the given path. The file is created lazily on the
    /// first `create`; a missing file reads as an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Workflow>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, records: &[Workflow]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl WorkflowStore for JsonFileStore {
    fn create(&self, workflow: &Workflow) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();
        let mut records = self.read_all()?;
        records.push(workflow.clone());
        self.write_all(&records)
    }

    fn list(&self) -> Result<Vec<Workflow>, StoreError> {
        self.read_all()
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Workflow>, StoreError> {
        Ok(self.read_all()?.into_iter().find(|w| w.id == id))
    }

    fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock();
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|w| w.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.write_all(&records)?;
        Ok(true)
    }
}
