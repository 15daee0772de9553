//! Lexical classification of workflow descriptions.
//!
//! The classifier scans a normalized description against the ordered rule
//! table in [`rules`] and selects the node templates that make up the
//! generated workflow: exactly one trigger, then zero-or-more processing
//! nodes, then zero-or-more action nodes.

pub mod rules;

use crate::catalog::{NodeCatalog, NodeTemplate};
use crate::error::ClassifyError;
use rules::{ACTION_RULES, FALLBACK_TRIGGER, PROCESSING_RULES, TRIGGER_RULES};

/// Selects node templates for a description using the declarative rule table.
pub struct Classifier<'c> {
    catalog: &'c NodeCatalog,
}

impl<'c> Classifier<'c> {
    pub fn new(catalog: &'c NodeCatalog) -> Self {
        Self { catalog }
    }

    /// Classifies a description into an ordered template sequence.
    ///
    /// The result is never empty: the trigger tier falls back to the manual
    /// trigger when no trigger keyword is present. Classification is
    /// deterministic; two calls with the same normalized input select the
    /// same templates in the same order.
    pub fn classify(&self, description: &str) -> Result<Vec<&'c NodeTemplate>, ClassifyError> {
        let normalized = description.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ClassifyError::EmptyDescription);
        }

        let mut selected = Vec::new();

        // Trigger tier: first match wins, fallback guarantees one node.
        let trigger_tag = TRIGGER_RULES
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.type_tag)
            .unwrap_or(FALLBACK_TRIGGER);
        selected.push(self.catalog.lookup(trigger_tag)?);

        // Processing and action tiers: every matching rule fires.
        for rule in PROCESSING_RULES.iter().chain(ACTION_RULES) {
            if rule.matches(&normalized) {
                selected.push(self.catalog.lookup(rule.type_tag)?);
            }
        }

        Ok(selected)
    }
}
