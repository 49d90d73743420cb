// Rust guideline compliant 2026-10-14

//! Content schema for artwork records.
//!
//! Mirrors the collection schema the site generator applies when it loads
//! `src/content/artworks`. Keys outside the schema are allowed and ignored,
//! except `subjects`, which must stay inside the controlled vocabulary.

use crate::models::keys;
use crate::record::{FieldValue, Header};
use serde::Serialize;
use std::fmt;

/// Expected kind of a header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// `true` or `false`.
    Bool,
    /// List of vocabulary tags.
    SubjectList,
}

impl FieldKind {
    fn name(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Bool => "boolean",
            FieldKind::SubjectList => "list",
        }
    }
}

/// Rule for one header key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Header key.
    pub key: &'static str,
    /// Expected value kind.
    pub kind: FieldKind,
    /// Whether the key must be present.
    pub required: bool,
}

const fn rule(key: &'static str, kind: FieldKind, required: bool) -> FieldRule {
    FieldRule {
        key,
        kind,
        required,
    }
}

const ARTWORK_RULES: [FieldRule; 11] = [
    rule(keys::TITLE, FieldKind::Text, true),
    rule(keys::DESCRIPTION, FieldKind::Text, false),
    rule(keys::IMAGE, FieldKind::Text, true),
    rule(keys::CATEGORY, FieldKind::Text, false),
    rule(keys::YEAR, FieldKind::Text, false),
    rule(keys::FEATURED, FieldKind::Bool, false),
    rule(keys::MEDIUM, FieldKind::Text, false),
    rule(keys::SIZE, FieldKind::Text, false),
    rule(keys::PRICE, FieldKind::Text, false),
    rule(keys::SOLD, FieldKind::Bool, false),
    rule(keys::SUBJECTS, FieldKind::SubjectList, false),
];

/// A single schema problem found in a record header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    /// Offending header key.
    pub field: String,
    /// What is wrong with it.
    pub problem: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

/// Schema applied to artwork record headers.
#[derive(Debug, Clone)]
pub struct ContentSchema {
    rules: Vec<FieldRule>,
    vocabulary: Vec<String>,
}

impl ContentSchema {
    /// Creates the artwork collection schema for a subject vocabulary.
    #[must_use]
    pub fn artworks(vocabulary: &[String]) -> Self {
        Self {
            rules: ARTWORK_RULES.to_vec(),
            vocabulary: vocabulary.to_vec(),
        }
    }

    /// Validates a header against the schema.
    ///
    /// # Returns
    ///
    /// Every violation found, in rule order. Empty when the header is valid.
    #[must_use]
    pub fn validate(&self, header: &Header) -> Vec<SchemaViolation> {
        let mut violations = Vec::new();
        for rule in &self.rules {
            let Some(value) = header.get(rule.key) else {
                if rule.required {
                    violations.push(violation(rule.key, "required field is missing"));
                }
                continue;
            };

            match (rule.kind, value) {
                (FieldKind::Text, FieldValue::Text(_)) | (FieldKind::Bool, FieldValue::Bool(_)) => {}
                (FieldKind::SubjectList, FieldValue::List(items)) => {
                    for item in items {
                        if !self.vocabulary.iter().any(|allowed| allowed == item) {
                            violations.push(violation(
                                rule.key,
                                &format!("`{item}` is not in the subject vocabulary"),
                            ));
                        }
                    }
                }
                (kind, other) => violations.push(violation(
                    rule.key,
                    &format!("expected {}, found {}", kind.name(), other.kind()),
                )),
            }
        }
        violations
    }
}

fn violation(field: &str, problem: &str) -> SchemaViolation {
    SchemaViolation {
        field: field.to_string(),
        problem: problem.to_string(),
    }
}
