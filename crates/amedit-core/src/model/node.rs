//! Graph nodes and statements

use serde::{Deserialize, Serialize};
use std::fmt;

/// Blank node identifier, local to the Graph that allocated it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlankId(pub u64);

impl fmt::Display for BlankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:b{}", self.0)
    }
}

/// Datatype or language annotation of a literal
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LiteralAnnotation {
    Plain,
    Datatype(String),
    Language(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    pub lexical: String,
    pub annotation: LiteralAnnotation,
}

impl Literal {
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            annotation: LiteralAnnotation::Plain,
        }
    }

    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            annotation: LiteralAnnotation::Datatype(datatype.into()),
        }
    }

    pub fn lang(lexical: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            annotation: LiteralAnnotation::Language(tag.into()),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.lexical)?;
        match &self.annotation {
            LiteralAnnotation::Plain => Ok(()),
            LiteralAnnotation::Datatype(dt) => write!(f, "^^<{}>", dt),
            LiteralAnnotation::Language(tag) => write!(f, "@{}", tag),
        }
    }
}

/// A node allowed in subject position
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    Named(String),
    Blank(BlankId),
}

impl Resource {
    pub fn named(iri: impl Into<String>) -> Self {
        Resource::Named(iri.into())
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            Resource::Named(iri) => Some(iri),
            Resource::Blank(_) => None,
        }
    }

    pub fn to_node(&self) -> Node {
        match self {
            Resource::Named(iri) => Node::Named(iri.clone()),
            Resource::Blank(id) => Node::Blank(*id),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Named(iri) => write!(f, "<{}>", iri),
            Resource::Blank(id) => write!(f, "{}", id),
        }
    }
}

/// Any graph node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Node {
    Named(String),
    Blank(BlankId),
    Literal(Literal),
}

impl Node {
    pub fn named(iri: impl Into<String>) -> Self {
        Node::Named(iri.into())
    }

    pub fn literal(lexical: impl Into<String>) -> Self {
        Node::Literal(Literal::plain(lexical))
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            Node::Named(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_blank(&self) -> Option<BlankId> {
        match self {
            Node::Blank(id) => Some(*id),
            _ => None,
        }
    }

    /// The node as a subject, if it may be one
    pub fn to_resource(&self) -> Option<Resource> {
        match self {
            Node::Named(iri) => Some(Resource::Named(iri.clone())),
            Node::Blank(id) => Some(Resource::Blank(*id)),
            Node::Literal(_) => None,
        }
    }
}

impl From<Resource> for Node {
    fn from(resource: Resource) -> Self {
        match resource {
            Resource::Named(iri) => Node::Named(iri),
            Resource::Blank(id) => Node::Blank(id),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Named(iri) => write!(f, "<{}>", iri),
            Node::Blank(id) => write!(f, "{}", id),
            Node::Literal(lit) => write!(f, "{}", lit),
        }
    }
}

/// A subject–predicate–object statement
///
/// Ordered by subject, then predicate, then object, which gives graphs a
/// deterministic iteration and digest order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Statement {
    pub subject: Resource,
    pub predicate: String,
    pub object: Node,
}

impl Statement {
    pub fn new(subject: Resource, predicate: impl Into<String>, object: Node) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }

    /// Statement whose subject is a named node
    pub fn named(subject: impl Into<String>, predicate: impl Into<String>, object: Node) -> Self {
        Self::new(Resource::Named(subject.into()), predicate, object)
    }

    /// Blank ids used in either subject or object position
    pub fn blank_ids(&self) -> impl Iterator<Item = BlankId> {
        let subject = match self.subject {
            Resource::Blank(id) => Some(id),
            Resource::Named(_) => None,
        };
        subject.into_iter().chain(self.object.as_blank())
    }

    /// Whether the IRI occurs in any position
    pub fn mentions(&self, iri: &str) -> bool {
        self.subject.as_named() == Some(iri)
            || self.predicate == iri
            || self.object.as_named() == Some(iri)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_cannot_be_subject() {
        assert!(Node::literal("42").to_resource().is_none());
        assert_eq!(
            Node::named("urn:x").to_resource(),
            Some(Resource::named("urn:x"))
        );
    }

    #[test]
    fn test_statement_display() {
        let st = Statement::new(
            Resource::Blank(BlankId(3)),
            "urn:p",
            Node::Literal(Literal::lang("Speed", "en")),
        );
        assert_eq!(st.to_string(), "_:b3 <urn:p> \"Speed\"@en .");
    }

    #[test]
    fn test_blank_ids_cover_both_positions() {
        let st = Statement::new(
            Resource::Blank(BlankId(1)),
            "urn:p",
            Node::Blank(BlankId(2)),
        );
        let ids: Vec<_> = st.blank_ids().collect();
        assert_eq!(ids, vec![BlankId(1), BlankId(2)]);
    }

    #[test]
    fn test_mentions_checks_every_position() {
        let st = Statement::named("urn:s", "urn:p", Node::named("urn:o"));
        assert!(st.mentions("urn:s"));
        assert!(st.mentions("urn:p"));
        assert!(st.mentions("urn:o"));
        assert!(!st.mentions("urn:other"));
    }
}
