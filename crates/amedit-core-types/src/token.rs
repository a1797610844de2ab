//! Identity tokens for documents and history entries
//!
//! A document that has never been saved has no source location, yet it still
//! has to be trackable by the change engine. Every document therefore gets a
//! `DocumentToken` at creation time which stays with it for its whole life,
//! including across snapshot restores.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable per-instance identity of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentToken(Uuid);

impl DocumentToken {
    /// Generate a fresh token using UUIDv7 (time-ordered)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wrap an existing UUID (for deserialization and fixtures)
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DocumentToken {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "doc:{}", self.0)
    }
}

/// Identifier of one applied change in the undo/redo history
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeId(String);

impl ChangeId {
    /// Generate a new ChangeId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for ChangeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ChangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
