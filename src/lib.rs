//! # Flowgen - Workflow Generation Engine
//!
//! **Flowgen** converts a free-text description of a desired automation into
//! a structured, typed graph of nodes and connections: a workflow document
//! suitable for persistence and for re-import into an external automation
//! runtime.
//!
//! ## Core Workflow
//!
//! Generation is a fixed pipeline over the input description:
//!
//! 1.  **Classify**: the description is normalized and scanned against an
//!     ordered rule table in three tiers (trigger, processing, action). The
//!     trigger tier always selects exactly one template, falling back to the
//!     manual trigger; the other tiers fire every matching rule.
//! 2.  **Assemble**: each selected template is instantiated into a node with
//!     a unique id and a deterministic layout position, and the nodes are
//!     joined into the default linear connection chain.
//! 3.  **Wrap**: the graph is wrapped in an envelope carrying identity and
//!     provenance metadata (id, name, timestamps, schema version, generator
//!     tag).
//! 4.  **Persist**: the finished document is appended to the configured
//!     [`store::WorkflowStore`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowgen::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // An engine with default collaborators: in-memory store, system
//!     // clock, timestamp-based ids.
//!     let engine = Engine::new();
//!
//!     let workflow = engine.generate(
//!         "Send a Slack message when a new GitHub issue is created",
//!     )?;
//!
//!     // The trigger node is always first; the linear chain connects each
//!     // node to its successor.
//!     println!("generated '{}' with {} nodes", workflow.name, workflow.nodes.len());
//!     for connection in &workflow.connections {
//!         println!("  {} -> {}", connection.source, connection.target);
//!     }
//!
//!     // Export the document in its wire shape.
//!     let json = flowgen::workflow::export::to_pretty_json(&workflow)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! For durable storage, inject a [`store::JsonFileStore`]; for reproducible
//! output under test, inject [`engine::clock::FixedClock`] and
//! [`engine::ids::SequentialIds`] through [`engine::EngineBuilder`].

pub mod assembler;
pub mod catalog;
pub mod classifier;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod prelude;
pub mod store;
pub mod workflow;
