use thiserror::Error;

/// Errors that can occur when resolving a node template from the catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("no node template is registered for type tag '{0}'")]
    UnknownTemplate(String),
}

/// Errors that can occur during the classification phase.
#[derive(Error, Debug, Clone)]
pub enum ClassifyError {
    #[error("workflow description is empty")]
    EmptyDescription,

    /// The rule table selected a type tag the catalog does not know.
    /// This is a configuration bug, not a user input problem.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors that can occur inside a workflow store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access workflow storage: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored workflow data is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors that can occur while exporting a workflow document.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to serialize workflow document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write export file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Errors returned by the end-to-end generate operation.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    /// The workflow was fully computed but the persistence write failed.
    /// The computed document is carried alongside the storage error so the
    /// caller can retry the write or keep the in-memory result.
    #[error("workflow was generated but could not be persisted: {source}")]
    Persistence {
        workflow: Box<crate::workflow::Workflow>,
        source: StoreError,
    },
}

impl GenerateError {
    /// Recovers the computed workflow from a persistence failure, if any.
    pub fn into_workflow(self) -> Option<crate::workflow::Workflow> {
        match self {
            GenerateError::Persistence { workflow, .. } => Some(*workflow),
            GenerateError::Classify(_) => None,
        }
    }
}
