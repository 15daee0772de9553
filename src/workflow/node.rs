use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The connection channel used by the default linear chain.
pub const MAIN_CHANNEL: &str = "main";

/// Canvas position of a node. Positions are assigned deterministically by
/// the assembler: one column per tier, one lane per node within a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

/// An outgoing link from one node to another, serialized on the node itself
/// as `{node, type, index}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLink {
    /// Id of the target node.
    pub node: String,
    /// Connection channel, `"main"` for the default chain.
    #[serde(rename = "type")]
    pub channel: String,
    /// Input index on the target node.
    pub index: u32,
}

impl NodeLink {
    /// Builds a main-channel link to the given node's first input.
    pub fn main(target_id: impl Into<String>) -> Self {
        Self {
            node: target_id.into(),
            channel: MAIN_CHANNEL.to_string(),
            index: 0,
        }
    }
}

/// A single node instance inside a generated workflow document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Unique within the owning workflow.
    pub id: String,
    pub name: String,
    /// The template's type tag (wire field `type`).
    #[serde(rename = "type")]
    pub node_type: String,
    pub position: Position,
    /// Parameter map copied verbatim from the node template.
    pub parameters: Map<String, Value>,
    /// Ordered outgoing links. Under the default linear topology every node
    /// except the last has exactly one link.
    pub connections: Vec<NodeLink>,
}
