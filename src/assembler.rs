//! Assembly of classified templates into a node/connection graph.
//!
//! The assembler instantiates one [`WorkflowNode`] per selected template,
//! assigns per-graph sequential ids and deterministic layout positions, and
//! derives the default linear connection chain. It performs no validation
//! beyond its non-empty precondition; the classifier guarantees the input
//! sequence is well formed.

use crate::catalog::{NodeTemplate, NodeTier};
use crate::workflow::{Connection, MAIN_CHANNEL, NodeLink, Position, WorkflowNode};
use itertools::Itertools;

const TRIGGER_X: i64 = 100;
const PROCESSING_X: i64 = 300;
const PROCESSING_SPACING: i64 = 200;
const ACTION_X: i64 = 700;
const ACTION_SPACING: i64 = 100;
const BASE_Y: i64 = 100;

/// The raw node/connection pair produced by assembly, before the envelope
/// metadata is attached.
#[derive(Debug, Clone)]
pub struct AssembledGraph {
    pub nodes: Vec<WorkflowNode>,
    pub connections: Vec<Connection>,
}

/// Builds an [`AssembledGraph`] from an ordered template sequence.
pub struct GraphAssembler;

impl GraphAssembler {
    /// Assembles the graph.
    ///
    /// # Panics
    ///
    /// Panics if `templates` is empty. The classifier's fallback trigger
    /// makes an empty selection unreachable; hitting this is a bug.
    pub fn assemble(templates: &[&NodeTemplate]) -> AssembledGraph {
        assert!(
            !templates.is_empty(),
            "classification produced no templates; the fallback trigger rule must always fire"
        );

        let mut nodes: Vec<WorkflowNode> = Vec::with_capacity(templates.len());
        let mut processing_count: i64 = 0;
        let mut action_count: i64 = 0;

        for (index, template) in templates.iter().enumerate() {
            let position = match template.tier {
                NodeTier::Trigger => Position {
                    x: TRIGGER_X,
                    y: BASE_Y,
                },
                NodeTier::Processing => {
                    let nth = processing_count;
                    processing_count += 1;
                    Position {
                        x: PROCESSING_X + PROCESSING_SPACING * nth,
                        y: BASE_Y,
                    }
                }
                NodeTier::Action => {
                    let nth = action_count;
                    action_count += 1;
                    Position {
                        x: ACTION_X,
                        y: BASE_Y + ACTION_SPACING * nth,
                    }
                }
            };

            nodes.push(WorkflowNode {
                id: format!("node_{}", index + 1),
                name: template.display_name.to_string(),
                node_type: template.type_tag.to_string(),
                position,
                parameters: template.default_parameters.clone(),
                connections: Vec::new(),
            });
        }

        // Default linear chain: node[i] -> node[i+1].
        let connections: Vec<Connection> = nodes
            .iter()
            .tuple_windows()
            .map(|(source, target)| Connection {
                source: source.id.clone(),
                target: target.id.clone(),
                channel: MAIN_CHANNEL.to_string(),
            })
            .collect();

        let successor_ids: Vec<String> = nodes.iter().skip(1).map(|n| n.id.clone()).collect();
        for (node, target_id) in nodes.iter_mut().zip(successor_ids) {
            node.connections.push(NodeLink::main(target_id));
        }

        AssembledGraph { nodes, connections }
    }
}
