//! The declarative classification rule table.
//!
//! Rules are evaluated against the normalized (lower-cased, trimmed)
//! description. Order within each table is significant: the trigger tier is
//! first-match-wins, while the processing and action tiers fire every
//! matching rule in table order.

/// A single keyword rule: if any keyword occurs in the normalized
/// description, the rule selects the template with the given type tag.
pub struct ClassificationRule {
    pub keywords: &'static [&'static str],
    pub type_tag: &'static str,
}

impl ClassificationRule {
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|kw| contains_term(normalized, kw))
    }
}

/// Keyword containment check. Multi-word phrases match as substrings;
/// single words must match on word boundaries so that short keywords like
/// `if` do not fire inside unrelated words such as "notify".
fn contains_term(normalized: &str, term: &str) -> bool {
    if term.contains(' ') {
        return normalized.contains(term);
    }
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == term)
}

/// Trigger tier. First matching rule wins; [`FALLBACK_TRIGGER`] is selected
/// when none match, so the trigger tier always produces exactly one node.
pub const TRIGGER_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        keywords: &["webhook", "form"],
        type_tag: "webhook",
    },
    ClassificationRule {
        keywords: &["email", "gmail"],
        type_tag: "email",
    },
    ClassificationRule {
        keywords: &["schedule", "daily"],
        type_tag: "schedule",
    },
];

/// Type tag of the manual trigger selected when no trigger rule matches.
pub const FALLBACK_TRIGGER: &str = "trigger";

/// Processing tier. All matching rules fire, in table order.
pub const PROCESSING_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        keywords: &["transform", "process"],
        type_tag: "transform",
    },
    ClassificationRule {
        keywords: &["condition", "if"],
        type_tag: "condition",
    },
];

/// Action tier. All matching rules fire, in table order.
pub const ACTION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        keywords: &["slack"],
        type_tag: "slack",
    },
    ClassificationRule {
        keywords: &["discord"],
        type_tag: "discord",
    },
    ClassificationRule {
        keywords: &["database", "airtable"],
        type_tag: "database",
    },
    ClassificationRule {
        keywords: &["google drive", "file"],
        type_tag: "file",
    },
];
