use crate::change::{Change, ChangeGroup};
use crate::errors::{EditError, Result};
use crate::graph::Graph;
use crate::model::{Document, DocumentKey, ElementUrn, NamespaceScope, Node, VersionPart};
use crate::policy::FilePolicy;
use crate::workspace::Workspace;

/// Rewrite every named node in scope `from` to the same local name in `to`
///
/// Applies to all statement positions, including list members reached only
/// through blank-node chains.
///
/// # Errors
///
/// Never fails for named-to-named rewrites; propagates
/// [`Graph::rewrite_nodes`] errors.
pub fn rewrite_scope(
    graph: &mut Graph,
    from: &NamespaceScope,
    to: &NamespaceScope,
) -> Result<usize> {
    graph.rewrite_nodes(|node| {
        let urn = ElementUrn::try_from_iri(node.as_named()?)?;
        if urn.scope != *from {
            return None;
        }
        Some(Node::Named(urn.with_scope(to).to_string()))
    })
}

/// Add a copy of a document whose namespace scope has a bumped version
///
/// The original document is left untouched. The copy's location comes from
/// [`FilePolicy::bumped_location`].
///
/// # Errors
///
/// * `DocumentNotFound` - the document does not exist
/// * `DocumentWithoutNamespace` - it defines no namespaced element
/// * `ElementAlreadyDefined` - the bumped scope already defines a copied element
/// * `DocumentAlreadyExists` - the bumped location is taken
/// * `InvalidVersion` - the bumped version component would overflow
pub fn copy_file_with_increased_version(
    workspace: &mut Workspace,
    policy: &dyn FilePolicy,
    key: &DocumentKey,
    part: VersionPart,
) -> Result<DocumentKey> {
    let source = workspace.document(key)?;
    let from = source
        .namespace()
        .ok_or_else(|| EditError::DocumentWithoutNamespace {
            key: key.to_string(),
        })?;
    let to = from.bumped(part)?;

    let mut graph = source.graph().clone();
    let rewritten = rewrite_scope(&mut graph, &from, &to)?;
    let location = source
        .location()
        .and_then(|location| policy.bumped_location(location, &from, &to));
    let copy = Document::new(location, graph, source.header().to_vec());

    workspace.check_insertable(&copy)?;
    let copy_key = copy.key();
    tracing::debug!(
        document_key = %key,
        copy_key = %copy_key,
        from = %from,
        to = %to,
        rewritten,
        "copy file with increased version"
    );
    workspace.push(copy);
    Ok(copy_key)
}

/// The group that copies every document of `scope` with a bumped version
///
/// # Errors
///
/// * `NamespaceNotFound` - no document belongs to `scope`
/// * `InvalidVersion` - the bumped version component would overflow
pub fn namespace_copy_group(
    workspace: &Workspace,
    scope: &NamespaceScope,
    part: VersionPart,
) -> Result<ChangeGroup> {
    let members: Vec<Change> = workspace
        .documents_in(scope)
        .into_iter()
        .map(|doc| Change::CopyFileWithIncreasedNamespaceVersion {
            key: doc.key(),
            part,
        })
        .collect();
    if members.is_empty() {
        return Err(EditError::NamespaceNotFound {
            scope: scope.to_string(),
        });
    }
    let to = scope.bumped(part)?;
    let summary = format!("Copy namespace {} to {}", scope, to);
    Ok(ChangeGroup::new(members).with_summary(summary))
}
