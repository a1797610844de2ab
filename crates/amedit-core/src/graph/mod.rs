//! In-memory statement graph
//!
//! `Graph` is a value type: cloning it produces an independent deep copy, and
//! nothing outside the owning value can observe a mutation. Snapshots rely on
//! this.
//!
//! Blank node ids are allocated from a per-graph counter. They carry no
//! meaning outside the graph that allocated them, so inserting statements from
//! another graph goes through [`Graph::merge`], which renumbers them.

pub mod pattern;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::errors::{EditError, Result};
use crate::model::node::{BlankId, Node, Resource, Statement};

pub use pattern::Matching;

/// A deduplicated set of statements with pattern lookup
///
/// ```
/// use amedit_core::graph::Graph;
/// use amedit_core::model::{Node, Resource, Statement};
///
/// let mut graph = Graph::new();
/// let st = Statement::named("urn:samm:org.example:1.0.0#Speed", "urn:p", Node::literal("x"));
/// assert!(graph.add(st.clone()));
/// assert!(!graph.add(st)); // already present
///
/// let subject = Resource::named("urn:samm:org.example:1.0.0#Speed");
/// assert_eq!(graph.matching(Some(&subject), None, None).count(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Statement>", into = "Vec<Statement>")]
pub struct Graph {
    statements: BTreeSet<Statement>,
    next_blank: u64,
    // scan start once the counter is exhausted
    reuse_from: u64,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterate statements in subject–predicate–object order
    pub fn iter(&self) -> impl Iterator<Item = &Statement> + Clone {
        self.statements.iter()
    }

    pub fn contains(&self, statement: &Statement) -> bool {
        self.statements.contains(statement)
    }

    /// Insert a statement; returns `false` if it was already present
    pub fn add(&mut self, statement: Statement) -> bool {
        for id in statement.blank_ids() {
            self.reserve_blank(id);
        }
        self.statements.insert(statement)
    }

    /// Remove a statement; returns `false` if it was not present
    pub fn remove(&mut self, statement: &Statement) -> bool {
        self.statements.remove(statement)
    }

    /// Allocate a blank node id unused in this graph
    ///
    /// Ids come from a counter. Once a loaded statement has pushed the counter
    /// to `u64::MAX`, the lowest ids no statement holds are handed out instead.
    pub fn fresh_blank(&mut self) -> BlankId {
        if self.next_blank < u64::MAX {
            let id = BlankId(self.next_blank);
            self.next_blank += 1;
            return id;
        }
        let used: BTreeSet<BlankId> = self
            .statements
            .iter()
            .flat_map(Statement::blank_ids)
            .collect();
        let id = (self.reuse_from..u64::MAX)
            .map(BlankId)
            .find(|id| !used.contains(id))
            .unwrap_or(BlankId(u64::MAX));
        self.reuse_from = id.0.saturating_add(1);
        id
    }

    /// Statements matching a pattern; `None` is a wildcard
    ///
    /// The returned iterator is `Clone`, so a caller can restart it. Each
    /// matching statement is yielded exactly once.
    pub fn matching<'g, 'p>(
        &'g self,
        subject: Option<&'p Resource>,
        predicate: Option<&'p str>,
        object: Option<&'p Node>,
    ) -> Matching<'g, 'p> {
        Matching::new(&self.statements, subject, predicate, object)
    }

    /// Objects of all `(subject, predicate, *)` statements
    pub fn objects<'a>(
        &'a self,
        subject: &'a Resource,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.matching(Some(subject), Some(predicate), None)
            .map(|st| &st.object)
    }

    /// Distinct subjects, in order
    pub fn subjects(&self) -> Vec<&Resource> {
        let mut subjects: Vec<&Resource> = self.statements.iter().map(|st| &st.subject).collect();
        subjects.dedup();
        subjects
    }

    /// Whether the IRI occurs anywhere in the graph
    pub fn references(&self, iri: &str) -> bool {
        self.statements.iter().any(|st| st.mentions(iri))
    }

    /// Hex SHA256 of the sorted statement listing
    pub fn content_digest(&self) -> String {
        crate::snapshot::graph_digest(self)
    }

    /// Replace nodes across every statement position
    ///
    /// `f` returns `Some(replacement)` for nodes to rewrite and `None` to keep a
    /// node. The rewritten statement set is built first and swapped in at the
    /// end, so either the whole rewrite becomes visible or, on error, none of it
    /// does. Two statements may collapse into one if the rewrite makes them
    /// equal.
    ///
    /// Returns the number of statements that changed.
    ///
    /// # Errors
    ///
    /// `InvalidRewrite` if a subject would become a literal or a predicate would
    /// become anything but a named node.
    pub fn rewrite_nodes<F>(&mut self, f: F) -> Result<usize>
    where
        F: Fn(&Node) -> Option<Node>,
    {
        let mut rewritten = BTreeSet::new();
        let mut changed = 0;

        for st in &self.statements {
            let subject = match f(&st.subject.to_node()) {
                Some(node) => match node.to_resource() {
                    Some(resource) => Some(resource),
                    None => {
                        return Err(EditError::InvalidRewrite {
                            reason: format!("subject of `{}` would become a literal", st),
                        })
                    }
                },
                None => None,
            };
            let predicate = match f(&Node::Named(st.predicate.clone())) {
                Some(Node::Named(iri)) => Some(iri),
                Some(other) => {
                    return Err(EditError::InvalidRewrite {
                        reason: format!("predicate of `{}` would become {}", st, other),
                    })
                }
                None => None,
            };
            let object = f(&st.object);

            if subject.is_none() && predicate.is_none() && object.is_none() {
                rewritten.insert(st.clone());
                continue;
            }
            changed += 1;
            rewritten.insert(Statement {
                subject: subject.unwrap_or_else(|| st.subject.clone()),
                predicate: predicate.unwrap_or_else(|| st.predicate.clone()),
                object: object.unwrap_or_else(|| st.object.clone()),
            });
        }

        self.statements = rewritten;
        let max_blank = self
            .statements
            .iter()
            .flat_map(Statement::blank_ids)
            .map(|id| id.0.saturating_add(1))
            .max()
            .unwrap_or(0);
        self.next_blank = self.next_blank.max(max_blank);
        Ok(changed)
    }

    /// Replace every occurrence of one IRI with another
    ///
    /// # Errors
    ///
    /// Never fails in practice (named nodes are valid in every position); the
    /// `Result` comes from [`Graph::rewrite_nodes`].
    pub fn rename_iri(&mut self, from: &str, to: &str) -> Result<usize> {
        if !self.references(from) {
            return Ok(0);
        }
        self.rewrite_nodes(|node| match node {
            Node::Named(iri) if iri == from => Some(Node::Named(to.to_string())),
            _ => None,
        })
    }

    /// Insert all statements of `other`, renumbering its blank nodes
    ///
    /// Every blank id of `other` is mapped to a fresh id of `self`, so the
    /// merged statements never collide with blank nodes already present.
    /// Returns the number of statements added.
    pub fn merge(&mut self, other: &Graph) -> usize {
        let mut remap: BTreeMap<BlankId, BlankId> = BTreeMap::new();
        let mut added = 0;
        for st in &other.statements {
            let subject = match &st.subject {
                Resource::Blank(id) => Resource::Blank(self.remapped(&mut remap, *id)),
                named => named.clone(),
            };
            let object = match &st.object {
                Node::Blank(id) => Node::Blank(self.remapped(&mut remap, *id)),
                other => other.clone(),
            };
            if self.statements.insert(Statement {
                subject,
                predicate: st.predicate.clone(),
                object,
            }) {
                added += 1;
            }
        }
        added
    }

    /// Remove every statement of `other`; returns the number removed
    pub fn remove_all(&mut self, other: &Graph) -> usize {
        other
            .statements
            .iter()
            .filter(|st| self.statements.remove(*st))
            .count()
    }

    fn remapped(&mut self, remap: &mut BTreeMap<BlankId, BlankId>, id: BlankId) -> BlankId {
        if let Some(mapped) = remap.get(&id) {
            return *mapped;
        }
        let fresh = self.fresh_blank();
        remap.insert(id, fresh);
        fresh
    }

    fn reserve_blank(&mut self, id: BlankId) {
        if id.0 >= self.next_blank {
            self.next_blank = id.0.saturating_add(1);
        }
    }
}

/// Graphs are equal when they hold the same statements
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.statements == other.statements
    }
}

impl Eq for Graph {}

impl FromIterator<Statement> for Graph {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<Statement> for Graph {
    fn extend<T: IntoIterator<Item = Statement>>(&mut self, iter: T) {
        for st in iter {
            self.add(st);
        }
    }
}

impl From<Vec<Statement>> for Graph {
    fn from(statements: Vec<Statement>) -> Self {
        statements.into_iter().collect()
    }
}

impl From<Graph> for Vec<Statement> {
    fn from(graph: Graph) -> Self {
        graph.statements.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Statement;
    type IntoIter = std::collections::btree_set::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
