//! Change application
//!
//! [`apply`] is the single entry point through which a workspace changes. It
//! takes the workspace by value and returns the changed workspace. On error
//! the value passed in may be partly changed, so callers that need to
//! recover keep a snapshot; the change engine restores the snapshot it took
//! before the call.
//!
//! ```
//! use amedit_core::apply::apply;
//! use amedit_core::change::Change;
//! use amedit_core::graph::Graph;
//! use amedit_core::model::Document;
//! use amedit_core::policy::DefaultFilePolicy;
//! use amedit_core::workspace::Workspace;
//!
//! let change = Change::AddFile {
//!     document: Document::at("Movement.ttl", Graph::new()),
//! };
//! let workspace = apply(Workspace::new(), &change, &DefaultFilePolicy).unwrap();
//! assert_eq!(workspace.len(), 1);
//! ```

use crate::change::{Change, ChangeGroup};
use crate::errors::{EditError, Result};
use crate::ops::element_ops::{self, Destination};
use crate::ops::{file_ops, namespace_ops};
use crate::policy::FilePolicy;
use crate::workspace::Workspace;

/// Apply a change and return the resulting workspace
///
/// # Errors
///
/// Returns the precondition violation of a single change, or
/// `GroupMemberFailed` carrying the index and description of the first group
/// member that failed. See `EditError` for the full taxonomy.
pub fn apply(
    mut workspace: Workspace,
    change: &Change,
    policy: &dyn FilePolicy,
) -> Result<Workspace> {
    match change {
        Change::AddFile { document } => {
            file_ops::add_file(&mut workspace, document.clone())?;
        }

        Change::RemoveFile { key } => {
            file_ops::remove_file(&mut workspace, key)?;
        }

        Change::MoveRenameFile { key, location } => {
            file_ops::move_rename_file(&mut workspace, key, location)?;
        }

        Change::AddElementDefinition {
            target,
            urn,
            definition,
        } => {
            element_ops::add_element_definition(&mut workspace, target, urn, definition)?;
        }

        Change::RenameElement { urn, name } => {
            element_ops::rename_element(&mut workspace, urn, name)?;
        }

        Change::RenameUrn { from, to } => {
            element_ops::rename_urn(&mut workspace, from, to)?;
        }

        Change::MoveElementToNewFile {
            urn,
            location,
            header,
        } => {
            element_ops::move_element(
                &mut workspace,
                policy,
                urn,
                None,
                Destination::NewFile {
                    location,
                    header: header.as_deref(),
                },
            )?;
        }

        Change::MoveElementToExistingFile { urn, target } => {
            element_ops::move_element(
                &mut workspace,
                policy,
                urn,
                None,
                Destination::ExistingFile(target),
            )?;
        }

        Change::MoveElementToOtherNamespaceNewFile {
            urn,
            scope,
            location,
            header,
        } => {
            element_ops::move_element(
                &mut workspace,
                policy,
                urn,
                Some(scope),
                Destination::NewFile {
                    location,
                    header: header.as_deref(),
                },
            )?;
        }

        Change::MoveElementToOtherNamespaceExistingFile { urn, scope, target } => {
            element_ops::move_element(
                &mut workspace,
                policy,
                urn,
                Some(scope),
                Destination::ExistingFile(target),
            )?;
        }

        Change::CopyFileWithIncreasedNamespaceVersion { key, part } => {
            namespace_ops::copy_file_with_increased_version(&mut workspace, policy, key, *part)?;
        }

        Change::CopyNamespaceWithIncreasedVersion { scope, part } => {
            let group = namespace_ops::namespace_copy_group(&workspace, scope, *part)?;
            workspace = apply_group(workspace, &group, policy)?;
        }

        Change::Group(group) => {
            workspace = apply_group(workspace, group, policy)?;
        }
    }
    Ok(workspace)
}

fn apply_group(
    mut workspace: Workspace,
    group: &ChangeGroup,
    policy: &dyn FilePolicy,
) -> Result<Workspace> {
    for (index, member) in group.changes.iter().enumerate() {
        workspace =
            apply(workspace, member, policy).map_err(|source| EditError::GroupMemberFailed {
                index,
                change: member.describe(),
                source: Box::new(source),
            })?;
    }
    Ok(workspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::model::{Document, DocumentKey};
    use crate::policy::DefaultFilePolicy;

    #[test]
    fn test_group_failure_reports_member() {
        let group = ChangeGroup::new(vec![
            Change::AddFile {
                document: Document::at("a.ttl", Graph::new()),
            },
            Change::RemoveFile {
                key: DocumentKey::location("missing.ttl"),
            },
        ]);
        let result = apply(Workspace::new(), &Change::Group(group), &DefaultFilePolicy);

        match result {
            Err(EditError::GroupMemberFailed { index, change, source }) => {
                assert_eq!(index, 1);
                assert_eq!(change, "Remove file missing.ttl");
                assert!(matches!(*source, EditError::DocumentNotFound { .. }));
            }
            other => panic!("expected group failure, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_group_is_a_no_op() {
        let ws = Workspace::new();
        let empty = Change::Group(ChangeGroup::default());
        let result = apply(ws.clone(), &empty, &DefaultFilePolicy);
        assert_eq!(result.unwrap(), ws);
    }
}
