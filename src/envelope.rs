//! Wrapping of assembled graphs into complete workflow documents.

use crate::assembler::AssembledGraph;
use crate::engine::clock::Clock;
use crate::engine::ids::IdGenerator;
use crate::workflow::{Workflow, WorkflowMeta};

/// Schema version stamped onto every generated document.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// The `meta.generator` tag identifying this engine.
pub const GENERATOR_TAG: &str = "flowgen";

/// Attaches identity and provenance metadata to an assembled graph.
///
/// Pure composition: given a valid graph this never fails. All ambient
/// inputs (time, ids) come from the injected collaborators.
pub struct EnvelopeBuilder<'e> {
    clock: &'e dyn Clock,
    ids: &'e dyn IdGenerator,
}

impl<'e> EnvelopeBuilder<'e> {
    pub fn new(clock: &'e dyn Clock, ids: &'e dyn IdGenerator) -> Self {
        Self { clock, ids }
    }

    /// Wraps the graph. The description is carried verbatim (untrimmed) as
    /// both `description` and `meta.generatedFrom`.
    pub fn wrap(&self, description: &str, graph: AssembledGraph) -> Workflow {
        let now = self.clock.now();
        Workflow {
            id: self.ids.next_id(),
            name: format!("Generated Workflow - {}", now.format("%Y-%m-%d")),
            description: description.to_string(),
            nodes: graph.nodes,
            connections: graph.connections,
            created_at: now,
            version: SCHEMA_VERSION.to_string(),
            meta: WorkflowMeta {
                generator: GENERATOR_TAG.to_string(),
                generated_from: description.to_string(),
            },
        }
    }
}
