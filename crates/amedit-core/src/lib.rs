//! amedit core - in-memory kernel for editing aspect model workspaces
//!
//! This crate provides:
//! - A value-semantics statement graph with pattern lookup and atomic rewrites
//! - Element identifiers (`urn:samm:<namespace>:<version>#<name>`) and kinds
//! - Definition closure extraction
//! - Documents, the workspace and its element/namespace views
//! - The change catalog and the `apply()` entry point
//! - Snapshots, digests and change reports
//!
//! Undo/redo and lifecycle logging live in `amedit-engine`.

pub mod apply;
pub mod change;
pub mod closure;
pub mod diff;
pub mod errors;
pub mod graph;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod snapshot;
pub mod vocab;
pub mod workspace;

// Re-export commonly used types
pub use apply::apply;
pub use change::{Change, ChangeGroup};
pub use diff::{ChangeReport, StatementDelta};
pub use errors::{EditError, ExError, ExErrorKind, Result};
pub use graph::Graph;
pub use model::{Document, DocumentKey, Element, ElementKind, ElementUrn, NamespaceScope};
pub use policy::{DefaultFilePolicy, FilePolicy};
pub use snapshot::Snapshot;
pub use workspace::Workspace;
