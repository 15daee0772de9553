use crate::workflow::node::WorkflowNode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A connection between two nodes in the top-level connection list,
/// serialized as `{source, target, type}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub channel: String,
}

/// Provenance metadata attached to every generated workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowMeta {
    /// Identifies the engine that produced the document.
    pub generator: String,
    /// The original description, verbatim and untrimmed.
    #[serde(rename = "generatedFrom")]
    pub generated_from: String,
}

/// A complete generated workflow document.
///
/// Field names are the wire/export contract and round-trip through JSON
/// unchanged. A workflow is created whole by one engine invocation and is
/// immutable afterwards; the only lifecycle operation is deletion from the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub nodes: Vec<WorkflowNode>,
    pub connections: Vec<Connection>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    pub version: String,
    pub meta: WorkflowMeta,
}

impl Workflow {
    /// The trigger node, which always occupies index 0.
    pub fn trigger(&self) -> Option<&WorkflowNode> {
        self.nodes.first()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The ordered sequence of node type tags, useful for comparing the
    /// topology of two workflows while ignoring ids and timestamps.
    pub fn node_types(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.node_type.as_str()).collect()
    }
}
