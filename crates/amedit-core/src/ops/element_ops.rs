use crate::closure::extract_definition;
use crate::errors::{EditError, Result};
use crate::graph::Graph;
use crate::model::{Document, DocumentKey, ElementUrn, NamespaceScope, Resource};
use crate::ops::remove_if_emptied;
use crate::policy::FilePolicy;
use crate::vocab::RDF_TYPE;
use crate::workspace::Workspace;

/// Where a moved definition goes
#[derive(Debug, Clone, Copy)]
pub enum Destination<'a> {
    NewFile {
        location: &'a str,
        header: Option<&'a [String]>,
    },
    ExistingFile(&'a DocumentKey),
}

/// Insert a definition subgraph for `urn` into the target document
///
/// The definition must type `urn` and must not type any other named element.
///
/// # Errors
///
/// * `DocumentNotFound` - the target document does not exist
/// * `ElementAlreadyDefined` - some document already defines `urn`
/// * `InvalidDefinition` - the definition does not define exactly `urn`
pub fn add_element_definition(
    workspace: &mut Workspace,
    target: &DocumentKey,
    urn: &ElementUrn,
    definition: &Graph,
) -> Result<()> {
    workspace.document(target)?;
    workspace.ensure_undefined(urn)?;

    let iri = urn.to_string();
    let focus = Resource::Named(iri.clone());
    if definition
        .matching(Some(&focus), Some(RDF_TYPE), None)
        .next()
        .is_none()
    {
        return Err(EditError::InvalidDefinition {
            urn: iri,
            reason: "definition has no type assertion for the element".to_string(),
        });
    }
    let foreign = definition
        .matching(None, Some(RDF_TYPE), None)
        .filter_map(|st| st.subject.as_named())
        .find(|subject| *subject != iri);
    if let Some(other) = foreign {
        return Err(EditError::InvalidDefinition {
            urn: iri,
            reason: format!("definition also defines {}", other),
        });
    }

    let added = workspace
        .document_mut(target)?
        .graph_mut()
        .merge(definition);
    tracing::debug!(element_urn = %urn, document_key = %target, added, "add element definition");
    Ok(())
}

/// Change the local name of an element across the whole workspace
///
/// # Errors
///
/// * `InvalidUrn` - `name` is not a valid local name
/// * see [`rename_urn`]
pub fn rename_element(workspace: &mut Workspace, urn: &ElementUrn, name: &str) -> Result<()> {
    let renamed = ElementUrn::parse(&urn.with_name(name).to_string())?;
    rename_urn(workspace, urn, &renamed)
}

/// Replace an element identifier in every statement of every document
///
/// References from other documents are rewritten too, so cross-file
/// references stay consistent.
///
/// # Errors
///
/// * `ElementNotFound` / `AmbiguousOwner` - `from` has no single owner
/// * `ElementAlreadyDefined` - `to` is already defined
pub fn rename_urn(workspace: &mut Workspace, from: &ElementUrn, to: &ElementUrn) -> Result<()> {
    workspace.owner_of(from)?;
    if from == to {
        return Ok(());
    }
    workspace.ensure_undefined(to)?;
    rename_everywhere(workspace, from, to)
}

/// Move the definition closure of `urn` out of its owner
///
/// With `scope`, the element is also re-identified into that namespace scope
/// and every reference to it is rewritten in all documents.
///
/// # Errors
///
/// * `ElementNotFound` / `AmbiguousOwner` - `urn` has no single owner
/// * `ElementAlreadyDefined` - the re-identified element already exists
/// * `DocumentAlreadyExists` - a new file's location is taken
/// * `DocumentNotFound` - an existing target does not exist
/// * `SameDocument` - the target is the owner itself
/// * `NamespaceNotFound` / `NamespaceMismatch` - an existing target does not
///   belong to `scope`
pub fn move_element(
    workspace: &mut Workspace,
    policy: &dyn FilePolicy,
    urn: &ElementUrn,
    scope: Option<&NamespaceScope>,
    destination: Destination<'_>,
) -> Result<()> {
    let source_key = workspace.owner_of(urn)?.key();
    let moved_urn = match scope {
        Some(scope) => urn.with_scope(scope),
        None => urn.clone(),
    };
    if moved_urn != *urn {
        workspace.ensure_undefined(&moved_urn)?;
    }

    match destination {
        Destination::NewFile { location, .. } => {
            workspace.ensure_key_free(&DocumentKey::location(location))?;
        }
        Destination::ExistingFile(target) => {
            let target_doc = workspace.document(target)?;
            if let Some(scope) = scope {
                if !workspace.has_namespace(scope) {
                    return Err(EditError::NamespaceNotFound {
                        scope: scope.to_string(),
                    });
                }
                if let Some(actual) = target_doc.namespace() {
                    if actual != *scope {
                        return Err(EditError::NamespaceMismatch {
                            key: target.to_string(),
                            expected: scope.to_string(),
                            actual: actual.to_string(),
                        });
                    }
                }
            }
            if *target == source_key {
                return Err(EditError::SameDocument {
                    urn: urn.to_string(),
                    key: target.to_string(),
                });
            }
        }
    }

    let source = workspace.document_mut(&source_key)?;
    let mut closure = extract_definition(source.graph_mut(), &urn.to_string());
    if moved_urn != *urn {
        closure.rename_iri(&urn.to_string(), &moved_urn.to_string())?;
        rename_everywhere(workspace, urn, &moved_urn)?;
    }
    let statements = closure.len();

    match destination {
        Destination::NewFile { location, header } => {
            let header = header
                .map(<[String]>::to_vec)
                .unwrap_or_else(|| policy.default_header().to_vec());
            workspace.push(Document::at(location, closure).with_header(header));
        }
        Destination::ExistingFile(target) => {
            workspace.document_mut(target)?.graph_mut().merge(&closure);
        }
    }
    tracing::debug!(
        element_urn = %moved_urn,
        from = %source_key,
        statements,
        "move element"
    );

    remove_if_emptied(workspace, &source_key, policy);
    Ok(())
}

fn rename_everywhere(workspace: &mut Workspace, from: &ElementUrn, to: &ElementUrn) -> Result<()> {
    let (from, to) = (from.to_string(), to.to_string());
    let mut changed = 0;
    for doc in workspace.documents_mut() {
        changed += doc.graph_mut().rename_iri(&from, &to)?;
    }
    tracing::debug!(%from, %to, changed, "rename identifier");
    Ok(())
}
