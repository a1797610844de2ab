//! Documents: one source unit of the workspace
//!
//! A document's identity for change tracking is its source location when it
//! has one, otherwise the token it received at creation. See [`DocumentKey`].

use amedit_core_types::DocumentToken;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::errors::Result;
use crate::graph::Graph;
use crate::model::element::ElementKind;
use crate::model::node::{Node, Resource};
use crate::model::urn::{ElementUrn, NamespaceScope};
use crate::vocab::RDF_TYPE;

/// Identity key used to track a document across snapshots
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentKey {
    Location(String),
    Token(DocumentToken),
}

impl DocumentKey {
    pub fn location(location: impl Into<String>) -> Self {
        DocumentKey::Location(location.into())
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKey::Location(location) => write!(f, "{}", location),
            DocumentKey::Token(token) => write!(f, "{}", token),
        }
    }
}

impl From<&str> for DocumentKey {
    fn from(location: &str) -> Self {
        DocumentKey::Location(location.to_string())
    }
}

/// A graph together with its source location and header lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    token: DocumentToken,
    location: Option<String>,
    graph: Graph,
    header: Vec<String>,
}

impl Document {
    /// Create a document with a fresh identity token
    pub fn new(location: Option<String>, graph: Graph, header: Vec<String>) -> Self {
        Self {
            token: DocumentToken::new(),
            location,
            graph,
            header,
        }
    }

    /// Document loaded from (or destined for) a source location
    pub fn at(location: impl Into<String>, graph: Graph) -> Self {
        Self::new(Some(location.into()), graph, Vec::new())
    }

    /// Document that has never been saved
    pub fn unsaved(graph: Graph) -> Self {
        Self::new(None, graph, Vec::new())
    }

    pub fn with_header(mut self, header: Vec<String>) -> Self {
        self.header = header;
        self
    }

    /// Rebuild a document with a known identity, used when restoring snapshots
    pub(crate) fn restored(
        token: DocumentToken,
        location: Option<String>,
        graph: Graph,
        header: Vec<String>,
    ) -> Self {
        Self {
            token,
            location,
            graph,
            header,
        }
    }

    /// Identity key: the source location if present, otherwise the token
    pub fn key(&self) -> DocumentKey {
        match &self.location {
            Some(location) => DocumentKey::Location(location.clone()),
            None => DocumentKey::Token(self.token),
        }
    }

    /// Whether `key` identifies this document
    pub fn has_key(&self, key: &DocumentKey) -> bool {
        match (key, &self.location) {
            (DocumentKey::Location(wanted), Some(location)) => wanted == location,
            (DocumentKey::Token(wanted), None) => *wanted == self.token,
            _ => false,
        }
    }

    pub fn token(&self) -> DocumentToken {
        self.token
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub(crate) fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub(crate) fn set_location(&mut self, location: Option<String>) {
        self.location = location;
    }

    /// Element URNs this document defines (named subjects with a type assertion)
    pub fn defined_elements(&self) -> BTreeSet<ElementUrn> {
        self.graph
            .matching(None, Some(RDF_TYPE), None)
            .filter_map(|st| st.subject.as_named())
            .filter_map(ElementUrn::try_from_iri)
            .collect()
    }

    /// Whether this document holds the type assertion of `urn`
    pub fn defines(&self, urn: &ElementUrn) -> bool {
        let subject = Resource::Named(urn.to_string());
        self.graph
            .matching(Some(&subject), Some(RDF_TYPE), None)
            .next()
            .is_some()
    }

    /// Kind of a defined element, from its first classifiable type assertion
    pub fn kind_of(&self, urn: &ElementUrn) -> Option<ElementKind> {
        let subject = Resource::Named(urn.to_string());
        let mut kinds = self
            .graph
            .objects(&subject, RDF_TYPE)
            .filter_map(Node::as_named)
            .map(ElementKind::from_type_iri)
            .peekable();
        kinds.peek()?;
        let mut fallback = ElementKind::Other;
        for kind in kinds {
            if kind != ElementKind::Other {
                return Some(kind);
            }
            fallback = kind;
        }
        Some(fallback)
    }

    /// Namespace scope of the elements this document defines
    ///
    /// Documents are expected to hold a single scope; if they do not, the
    /// smallest scope wins.
    pub fn namespace(&self) -> Option<NamespaceScope> {
        self.defined_elements()
            .into_iter()
            .map(|urn| urn.scope)
            .min()
    }

    /// Encode as JSON, identity token included
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a document written by [`Document::to_json`]
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the text is not a JSON-encoded document.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
