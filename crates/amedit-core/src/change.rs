//! Change types: every edit the engine can apply to a workspace
//!
//! Changes are plain values processed by [`crate::apply::apply`]. None of them
//! carries an inverse; undo restores the snapshot taken before the change.

use crate::graph::Graph;
use crate::model::{Document, DocumentKey, ElementUrn, NamespaceScope, VersionPart};

#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// Insert a document; its identity key must be unused
    AddFile { document: Document },

    /// Remove a document
    RemoveFile { key: DocumentKey },

    /// Replace a document's source location, keeping its content
    MoveRenameFile { key: DocumentKey, location: String },

    /// Insert a definition subgraph for a not yet defined element
    AddElementDefinition {
        target: DocumentKey,
        urn: ElementUrn,
        definition: Graph,
    },

    /// Change an element's local name everywhere it occurs
    RenameElement { urn: ElementUrn, name: String },

    /// Change an element's full identifier everywhere it occurs
    RenameUrn { from: ElementUrn, to: ElementUrn },

    /// Move an element's definition closure into a new document
    MoveElementToNewFile {
        urn: ElementUrn,
        location: String,
        header: Option<Vec<String>>,
    },

    /// Move an element's definition closure into an existing document
    MoveElementToExistingFile {
        urn: ElementUrn,
        target: DocumentKey,
    },

    /// Move an element into a new document under another namespace scope
    MoveElementToOtherNamespaceNewFile {
        urn: ElementUrn,
        scope: NamespaceScope,
        location: String,
        header: Option<Vec<String>>,
    },

    /// Move an element into an existing document of another namespace scope
    MoveElementToOtherNamespaceExistingFile {
        urn: ElementUrn,
        scope: NamespaceScope,
        target: DocumentKey,
    },

    /// Add a copy of a document with its namespace version bumped
    CopyFileWithIncreasedNamespaceVersion { key: DocumentKey, part: VersionPart },

    /// Copy every document of a namespace scope with the version bumped
    CopyNamespaceWithIncreasedVersion {
        scope: NamespaceScope,
        part: VersionPart,
    },

    /// Ordered changes applied as one unit
    Group(ChangeGroup),
}

impl Change {
    /// Stable name of the change type, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Change::AddFile { .. } => "AddFile",
            Change::RemoveFile { .. } => "RemoveFile",
            Change::MoveRenameFile { .. } => "MoveRenameFile",
            Change::AddElementDefinition { .. } => "AddElementDefinition",
            Change::RenameElement { .. } => "RenameElement",
            Change::RenameUrn { .. } => "RenameUrn",
            Change::MoveElementToNewFile { .. } => "MoveElementToNewFile",
            Change::MoveElementToExistingFile { .. } => "MoveElementToExistingFile",
            Change::MoveElementToOtherNamespaceNewFile { .. } => {
                "MoveElementToOtherNamespaceNewFile"
            }
            Change::MoveElementToOtherNamespaceExistingFile { .. } => {
                "MoveElementToOtherNamespaceExistingFile"
            }
            Change::CopyFileWithIncreasedNamespaceVersion { .. } => {
                "CopyFileWithIncreasedNamespaceVersion"
            }
            Change::CopyNamespaceWithIncreasedVersion { .. } => "CopyNamespaceWithIncreasedVersion",
            Change::Group(_) => "ChangeGroup",
        }
    }

    /// One-line human-readable description
    pub fn describe(&self) -> String {
        match self {
            Change::AddFile { document } => format!("Add file {}", document.key()),
            Change::RemoveFile { key } => format!("Remove file {}", key),
            Change::MoveRenameFile { key, location } => {
                format!("Move file {} to {}", key, location)
            }
            Change::AddElementDefinition { target, urn, .. } => {
                format!("Add definition of {} to {}", urn, target)
            }
            Change::RenameElement { urn, name } => format!("Rename {} to {}", urn, name),
            Change::RenameUrn { from, to } => format!("Rename {} to {}", from, to),
            Change::MoveElementToNewFile { urn, location, .. } => {
                format!("Move {} to new file {}", urn, location)
            }
            Change::MoveElementToExistingFile { urn, target } => {
                format!("Move {} to {}", urn, target)
            }
            Change::MoveElementToOtherNamespaceNewFile {
                urn,
                scope,
                location,
                ..
            } => format!(
                "Move {} to namespace {} in new file {}",
                urn, scope, location
            ),
            Change::MoveElementToOtherNamespaceExistingFile { urn, scope, target } => {
                format!("Move {} to namespace {} in {}", urn, scope, target)
            }
            Change::CopyFileWithIncreasedNamespaceVersion { key, part } => {
                format!("Copy file {} with {:?} version increase", key, part)
            }
            Change::CopyNamespaceWithIncreasedVersion { scope, part } => {
                format!("Copy namespace {} with {:?} version increase", scope, part)
            }
            Change::Group(group) => group.describe(),
        }
    }
}

impl From<ChangeGroup> for Change {
    fn from(group: ChangeGroup) -> Self {
        Change::Group(group)
    }
}

/// Ordered list of changes that is applied, and undone, as a whole
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangeGroup {
    pub summary: Option<String>,
    pub changes: Vec<Change>,
}

impl ChangeGroup {
    pub fn new(changes: Vec<Change>) -> Self {
        Self {
            summary: None,
            changes,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn describe(&self) -> String {
        match &self.summary {
            Some(summary) => summary.clone(),
            None => {
                let members: Vec<String> = self.changes.iter().map(Change::describe).collect();
                format!("Group [{}]", members.join("; "))
            }
        }
    }
}
