//! The editable collection of documents and its derived views

use std::collections::BTreeMap;

use crate::errors::{EditError, Result};
use crate::model::{Document, DocumentKey, Element, ElementKind, ElementUrn, NamespaceScope};

/// Ordered list of documents
///
/// Invariants, enforced by [`Workspace::from_documents`] and kept by every
/// change in the catalog:
/// - identity keys are unique
/// - an element is defined by at most one document (its owner)
///
/// Callers read the workspace; only changes mutate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    documents: Vec<Document>,
}

impl Workspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a workspace from already-loaded documents
    ///
    /// # Errors
    ///
    /// * `DocumentAlreadyExists` - two documents share an identity key
    /// * `ElementAlreadyDefined` - two documents define the same element
    pub fn from_documents(documents: Vec<Document>) -> Result<Self> {
        let mut workspace = Workspace::new();
        for document in documents {
            workspace.check_insertable(&document)?;
            workspace.documents.push(document);
        }
        Ok(workspace)
    }

    /// Rebuild from documents known to satisfy the invariants
    pub(crate) fn from_documents_unchecked(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, key: &DocumentKey) -> bool {
        self.documents.iter().any(|doc| doc.has_key(key))
    }

    pub fn find(&self, key: &DocumentKey) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.has_key(key))
    }

    /// Get a document by identity key
    ///
    /// # Errors
    ///
    /// Returns `DocumentNotFound` if no document has this key.
    pub fn document(&self, key: &DocumentKey) -> Result<&Document> {
        self.find(key).ok_or_else(|| not_found(key))
    }

    /// Every element across all documents, in document order
    pub fn elements(&self) -> Vec<Element> {
        self.documents
            .iter()
            .flat_map(|doc| {
                let key = doc.key();
                doc.defined_elements().into_iter().map(move |urn| Element {
                    kind: doc.kind_of(&urn).unwrap_or(ElementKind::Other),
                    urn,
                    document: key.clone(),
                })
            })
            .collect()
    }

    pub fn aspects(&self) -> Vec<Element> {
        self.elements()
            .into_iter()
            .filter(|element| element.kind == ElementKind::Aspect)
            .collect()
    }

    /// Documents grouped by the namespace scope they belong to
    ///
    /// Documents that define no namespaced element are not listed.
    pub fn namespaces(&self) -> BTreeMap<NamespaceScope, Vec<DocumentKey>> {
        let mut namespaces: BTreeMap<NamespaceScope, Vec<DocumentKey>> = BTreeMap::new();
        for doc in &self.documents {
            if let Some(scope) = doc.namespace() {
                namespaces.entry(scope).or_default().push(doc.key());
            }
        }
        namespaces
    }

    pub fn has_namespace(&self, scope: &NamespaceScope) -> bool {
        self.documents
            .iter()
            .any(|doc| doc.namespace().as_ref() == Some(scope))
    }

    /// Documents whose namespace is `scope`, in workspace order
    pub fn documents_in(&self, scope: &NamespaceScope) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|doc| doc.namespace().as_ref() == Some(scope))
            .collect()
    }

    /// The document that defines `urn`, if exactly one does
    ///
    /// # Errors
    ///
    /// * `ElementNotFound` - no document defines the element
    /// * `AmbiguousOwner` - more than one document defines it
    pub fn owner_of(&self, urn: &ElementUrn) -> Result<&Document> {
        let mut owners = self.documents.iter().filter(|doc| doc.defines(urn));
        let first = owners.next().ok_or_else(|| EditError::ElementNotFound {
            urn: urn.to_string(),
        })?;
        let rest: Vec<&Document> = owners.collect();
        if rest.is_empty() {
            return Ok(first);
        }
        Err(EditError::AmbiguousOwner {
            urn: urn.to_string(),
            keys: std::iter::once(first)
                .chain(rest)
                .map(|doc| doc.key().to_string())
                .collect(),
        })
    }

    /// Whether any document defines `urn`
    pub fn is_defined(&self, urn: &ElementUrn) -> bool {
        self.documents.iter().any(|doc| doc.defines(urn))
    }

    /// Fail with `ElementAlreadyDefined` if some document defines `urn`
    pub(crate) fn ensure_undefined(&self, urn: &ElementUrn) -> Result<()> {
        match self.documents.iter().find(|doc| doc.defines(urn)) {
            Some(doc) => Err(EditError::ElementAlreadyDefined {
                urn: urn.to_string(),
                key: doc.key().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Fail with `DocumentAlreadyExists` if `key` is taken
    pub(crate) fn ensure_key_free(&self, key: &DocumentKey) -> Result<()> {
        if self.contains(key) {
            return Err(EditError::DocumentAlreadyExists {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_insertable(&self, document: &Document) -> Result<()> {
        self.ensure_key_free(&document.key())?;
        for urn in document.defined_elements() {
            self.ensure_undefined(&urn)?;
        }
        Ok(())
    }

    pub(crate) fn document_mut(&mut self, key: &DocumentKey) -> Result<&mut Document> {
        self.documents
            .iter_mut()
            .find(|doc| doc.has_key(key))
            .ok_or_else(|| not_found(key))
    }

    pub(crate) fn documents_mut(&mut self) -> impl Iterator<Item = &mut Document> {
        self.documents.iter_mut()
    }

    pub(crate) fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub(crate) fn remove(&mut self, key: &DocumentKey) -> Result<Document> {
        let index = self
            .documents
            .iter()
            .position(|doc| doc.has_key(key))
            .ok_or_else(|| not_found(key))?;
        Ok(self.documents.remove(index))
    }
}

fn not_found(key: &DocumentKey) -> EditError {
    EditError::DocumentNotFound {
        key: key.to_string(),
    }
}
