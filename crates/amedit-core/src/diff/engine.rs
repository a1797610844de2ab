//! Snapshot diff computation.
//!
//! Documents are matched by identity key, not by content: a key only in
//! `before` is removed, a key only in `after` is created, and a key on both
//! sides is modified iff its graph differs. A document whose location changed
//! therefore shows up as removed plus created.

use std::collections::BTreeSet;

use crate::diff::model::{ChangeReport, StatementDelta};
use crate::graph::Graph;
use crate::model::DocumentKey;
use crate::snapshot::Snapshot;

/// Diff two snapshots into a report
///
/// With `detailed`, the report also carries the statement delta of every
/// created, modified and removed document.
pub fn compute_report(
    before: &Snapshot,
    after: &Snapshot,
    detailed: bool,
    description: impl Into<String>,
) -> ChangeReport {
    let mut report = ChangeReport {
        description: description.into(),
        ..ChangeReport::default()
    };

    let keys: BTreeSet<&DocumentKey> = before.keys().chain(after.keys()).collect();
    for key in keys {
        let old = before.get(key).map(|entry| &entry.graph);
        let new = after.get(key).map(|entry| &entry.graph);
        match (old, new) {
            (Some(_), None) => {
                report.removed.insert(key.clone());
            }
            (None, Some(_)) => {
                report.created.insert(key.clone());
            }
            (Some(old), Some(new)) if old != new => {
                report.modified.insert(key.clone());
            }
            _ => continue,
        }
        if detailed {
            let empty = Graph::new();
            let delta = statement_delta(old.unwrap_or(&empty), new.unwrap_or(&empty));
            report.deltas.insert(key.clone(), delta);
        }
    }
    report
}

/// Statements only in `new` (added) and only in `old` (removed)
pub fn statement_delta(old: &Graph, new: &Graph) -> StatementDelta {
    StatementDelta {
        added: new.iter().filter(|st| !old.contains(st)).cloned().collect(),
        removed: old.iter().filter(|st| !new.contains(st)).cloned().collect(),
    }
}
