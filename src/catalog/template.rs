use serde_json::{Map, Value};

/// The layout tier a node belongs to. Tiers decide both the classification
/// priority (trigger rules run first) and the layout lane a node is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeTier {
    /// Entry point of a workflow. Exactly one per graph, always at index 0.
    Trigger,
    /// Transform/condition style nodes between the trigger and the actions.
    Processing,
    /// External-service effects (messaging, storage, file writes).
    Action,
}

/// A static catalog entry used to instantiate a workflow node.
///
/// Templates are pure data: a type tag (the wire `type` field), a display
/// name, the tier they belong to, and the default parameter map copied
/// verbatim onto every instantiated node.
#[derive(Debug, Clone)]
pub struct NodeTemplate {
    pub type_tag: &'static str,
    pub display_name: &'static str,
    pub tier: NodeTier,
    pub default_parameters: Map<String, Value>,
}

impl NodeTemplate {
    pub fn is_trigger(&self) -> bool {
        self.tier == NodeTier::Trigger
    }
}
