//! Change catalog operations
//!
//! Each operation checks all of its preconditions before touching the
//! workspace. Lifecycle logging belongs to the change engine; operations only
//! emit `debug` details.

pub mod element_ops;
pub mod file_ops;
pub mod namespace_ops;

use crate::model::DocumentKey;
use crate::policy::FilePolicy;
use crate::workspace::Workspace;

/// Drop the source document of a move if the move emptied it and the policy allows it
pub(crate) fn remove_if_emptied(
    workspace: &mut Workspace,
    key: &DocumentKey,
    policy: &dyn FilePolicy,
) {
    if !policy.remove_emptied_files() {
        return;
    }
    let emptied = workspace
        .find(key)
        .map(|doc| doc.graph().is_empty())
        .unwrap_or(false);
    if emptied && workspace.remove(key).is_ok() {
        tracing::debug!(document_key = %key, "removed emptied document");
    }
}
