//! Workspace snapshots
//!
//! A snapshot is a full, independent copy of every document in a workspace
//! at one instant, kept in workspace order and addressable by identity key.
//! Snapshots are never mutated; undo and redo restore them.

pub mod digest;

use amedit_core_types::DocumentToken;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::graph::Graph;
use crate::model::{Document, DocumentKey};
use crate::workspace::Workspace;

pub use digest::{graph_digest, snapshot_digest};

/// One document as captured in a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotEntry {
    pub key: DocumentKey,
    pub token: DocumentToken,
    pub location: Option<String>,
    pub graph: Graph,
    pub header: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    captured_at: DateTime<Utc>,
    entries: Vec<SnapshotEntry>,
    // key -> position in `entries`
    index: BTreeMap<DocumentKey, usize>,
}

impl Snapshot {
    /// Deep-copy the current state of a workspace
    pub fn capture(workspace: &Workspace) -> Self {
        let entries: Vec<SnapshotEntry> = workspace
            .documents()
            .iter()
            .map(|doc| SnapshotEntry {
                key: doc.key(),
                token: doc.token(),
                location: doc.location().map(str::to_string),
                graph: doc.graph().clone(),
                header: doc.header().to_vec(),
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.key.clone(), position))
            .collect();
        Self {
            captured_at: Utc::now(),
            entries,
            index,
        }
    }

    /// Build a workspace holding exactly the captured documents
    pub fn restore(&self) -> Workspace {
        let documents = self
            .entries
            .iter()
            .map(|entry| {
                Document::restored(
                    entry.token,
                    entry.location.clone(),
                    entry.graph.clone(),
                    entry.header.clone(),
                )
            })
            .collect();
        Workspace::from_documents_unchecked(documents)
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    pub fn get(&self, key: &DocumentKey) -> Option<&SnapshotEntry> {
        self.index.get(key).and_then(|&position| self.entries.get(position))
    }

    pub fn keys(&self) -> impl Iterator<Item = &DocumentKey> {
        self.entries.iter().map(|entry| &entry.key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Content digest of the captured state, see [`snapshot_digest`]
    pub fn digest(&self) -> String {
        snapshot_digest(self)
    }
}

/// Snapshots are equal when they capture the same documents; the capture
/// time is ignored
impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}
