//! The end-to-end generation engine.
//!
//! `Engine` wires the catalog, classifier, assembler, envelope builder and
//! store together behind one `generate` call, and re-exposes the store's
//! read/delete surface. All ambient inputs (time, ids, storage) are injected
//! through the builder.

pub mod clock;
pub mod ids;

use crate::assembler::GraphAssembler;
use crate::catalog::NodeCatalog;
use crate::classifier::Classifier;
use crate::envelope::EnvelopeBuilder;
use crate::error::{GenerateError, StoreError};
use crate::store::{MemoryStore, WorkflowStore};
use crate::workflow::Workflow;
use clock::{Clock, SystemClock};
use ids::{IdGenerator, TimestampIds};
use std::sync::Arc;

/// The workflow generation engine.
pub struct Engine {
    catalog: NodeCatalog,
    store: Arc<dyn WorkflowStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

/// Builder for [`Engine`] with injectable collaborators.
///
/// Defaults: in-memory store, system clock, timestamp-based ids.
pub struct EngineBuilder {
    catalog: NodeCatalog,
    store: Arc<dyn WorkflowStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            catalog: NodeCatalog::new(),
            store: Arc::new(MemoryStore::new()),
            clock: Arc::new(SystemClock),
            ids: Arc::new(TimestampIds::new()),
        }
    }

    pub fn with_store(mut self, store: Arc<dyn WorkflowStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            catalog: self.catalog,
            store: self.store,
            clock: self.clock,
            ids: self.ids,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Builds an engine with all default collaborators.
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    /// Generates a workflow document from a free-text description and
    /// persists it.
    ///
    /// Fails with [`GenerateError::Classify`] on empty input before any side
    /// effect occurs. If the persistence write fails the error carries the
    /// fully computed document, so the caller can still use or retry it;
    /// the store itself is left unchanged by a failed write.
    pub fn generate(&self, description: &str) -> Result<Workflow, GenerateError> {
        let classifier = Classifier::new(&self.catalog);
        let templates = classifier.classify(description)?;

        let graph = GraphAssembler::assemble(&templates);
        let workflow =
            EnvelopeBuilder::new(self.clock.as_ref(), self.ids.as_ref()).wrap(description, graph);

        match self.store.create(&workflow) {
            Ok(()) => Ok(workflow),
            Err(source) => Err(GenerateError::Persistence {
                workflow: Box::new(workflow),
                source,
            }),
        }
    }

    /// Snapshot of all persisted workflows, in creation order.
    pub fn list(&self) -> Result<Vec<Workflow>, StoreError> {
        self.store.list()
    }

    /// Looks up a persisted workflow by id.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Workflow>, StoreError> {
        self.store.find_by_id(id)
    }

    /// Deletes a persisted workflow by id; unknown ids are a `false` no-op.
    pub fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        self.store.delete_by_id(id)
    }

    pub fn catalog(&self) -> &NodeCatalog {
        &self.catalog
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
