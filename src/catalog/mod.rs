//! Static registry of node templates.
//!
//! The catalog is loaded once and never mutated. The classifier's rule table
//! refers to templates by type tag; a lookup miss means the rule table and
//! the catalog have drifted apart, which is a configuration bug rather than
//! a runtime condition.

mod template;

pub use template::{NodeTemplate, NodeTier};

use crate::error::CatalogError;
use ahash::AHashMap;
use serde_json::{Map, Value, json};

/// Read-only registry of all node templates known to the engine.
pub struct NodeCatalog {
    templates: AHashMap<&'static str, NodeTemplate>,
}

impl NodeCatalog {
    /// Builds the catalog with the full default template set.
    pub fn new() -> Self {
        let mut templates = AHashMap::new();
        for template in default_templates() {
            templates.insert(template.type_tag, template);
        }
        Self { templates }
    }

    /// Resolves a template by its type tag.
    pub fn lookup(&self, type_tag: &str) -> Result<&NodeTemplate, CatalogError> {
        self.templates
            .get(type_tag)
            .ok_or_else(|| CatalogError::UnknownTemplate(type_tag.to_string()))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for NodeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// The default template set. Parameter defaults are part of the document
/// contract and are copied verbatim onto generated nodes.
fn default_templates() -> Vec<NodeTemplate> {
    vec![
        NodeTemplate {
            type_tag: "webhook",
            display_name: "Webhook Trigger",
            tier: NodeTier::Trigger,
            default_parameters: params(json!({
                "httpMethod": "POST",
                "path": "/webhook"
            })),
        },
        NodeTemplate {
            type_tag: "email",
            display_name: "Gmail Trigger",
            tier: NodeTier::Trigger,
            default_parameters: params(json!({
                "trigger": "new_email",
                "folder": "INBOX"
            })),
        },
        NodeTemplate {
            type_tag: "schedule",
            display_name: "Schedule Trigger",
            tier: NodeTier::Trigger,
            default_parameters: params(json!({
                "rule": "0 9 * * *",
                "timezone": "UTC"
            })),
        },
        NodeTemplate {
            type_tag: "trigger",
            display_name: "Manual Trigger",
            tier: NodeTier::Trigger,
            default_parameters: Map::new(),
        },
        NodeTemplate {
            type_tag: "transform",
            display_name: "Data Transform",
            tier: NodeTier::Processing,
            default_parameters: params(json!({
                "operation": "map",
                "fields": ["name", "email", "message"]
            })),
        },
        NodeTemplate {
            type_tag: "condition",
            display_name: "Condition Check",
            tier: NodeTier::Processing,
            default_parameters: params(json!({
                "field": "priority",
                "operator": "equals",
                "value": "high"
            })),
        },
        NodeTemplate {
            type_tag: "slack",
            display_name: "Send Slack Message",
            tier: NodeTier::Action,
            default_parameters: params(json!({
                "channel": "#general",
                "text": "New notification: {{$json.message}}"
            })),
        },
        NodeTemplate {
            type_tag: "discord",
            display_name: "Send Discord Message",
            tier: NodeTier::Action,
            default_parameters: params(json!({
                "webhook": "https://discord.com/api/webhooks/...",
                "content": "Alert: {{$json.message}}"
            })),
        },
        NodeTemplate {
            type_tag: "database",
            display_name: "Save to Database",
            tier: NodeTier::Action,
            default_parameters: params(json!({
                "table": "contacts",
                "operation": "insert",
                "data": {
                    "name": "{{$json.name}}",
                    "email": "{{$json.email}}",
                    "created_at": "{{$now}}"
                }
            })),
        },
        NodeTemplate {
            type_tag: "file",
            display_name: "Save to Drive",
            tier: NodeTier::Action,
            default_parameters: params(json!({
                "folder": "Automations",
                "filename": "{{$json.filename}}",
                "content": "{{$json.content}}"
            })),
        },
    ]
}
