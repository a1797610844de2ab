//! Change report types.
//!
//! Collections are ordered sets and maps so reports serialize
//! deterministically.

use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};

use crate::model::{DocumentKey, Statement};

/// Which documents a change created, modified and removed
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ChangeReport {
    /// Description of the change that produced this report
    pub description: String,
    /// Keys present only after the change
    pub created: BTreeSet<DocumentKey>,
    /// Keys present on both sides with different graph content
    pub modified: BTreeSet<DocumentKey>,
    /// Keys present only before the change
    pub removed: BTreeSet<DocumentKey>,
    /// Per-document statement deltas; empty unless the report is detailed
    #[serde(serialize_with = "serialize_deltas")]
    pub deltas: BTreeMap<DocumentKey, StatementDelta>,
}

impl ChangeReport {
    /// True if no document was created, modified or removed
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }

    /// Number of documents the change touched
    pub fn touched(&self) -> usize {
        self.created.len() + self.modified.len() + self.removed.len()
    }
}

// JSON object keys must be strings
fn serialize_deltas<S: Serializer>(
    deltas: &BTreeMap<DocumentKey, StatementDelta>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(deltas.iter().map(|(key, delta)| (key.to_string(), delta)))
}

/// Statements added to and removed from one document
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StatementDelta {
    pub added: Vec<Statement>,
    pub removed: Vec<Statement>,
}

impl StatementDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
