//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the flowgen crate. Import
//! this module to get access to the core functionality without having to
//! import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowgen::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let engine = Engine::new();
//! let workflow = engine.generate("Send a Slack message when a form is submitted")?;
//! println!("{}", flowgen::workflow::export::to_pretty_json(&workflow)?);
//! # Ok(())
//! # }
//! ```

// Core generation
pub use crate::engine::{Engine, EngineBuilder};

// Injected collaborators
pub use crate::engine::clock::{Clock, FixedClock, SystemClock};
pub use crate::engine::ids::{IdGenerator, SequentialIds, TimestampIds};

// Data model
pub use crate::catalog::{NodeCatalog, NodeTemplate, NodeTier};
pub use crate::workflow::{Connection, NodeLink, Position, Workflow, WorkflowMeta, WorkflowNode};

// Persistence
pub use crate::store::{JsonFileStore, MemoryStore, WorkflowStore};

// Error types
pub use crate::error::{CatalogError, ClassifyError, ExportError, GenerateError, StoreError};

// Standard library re-exports commonly used with this crate
pub use std::sync::Arc;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
