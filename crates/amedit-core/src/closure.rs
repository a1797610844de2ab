//! Definition closure extraction
//!
//! The definition of a named element is every statement whose subject is the
//! element, plus, transitively, every statement whose subject is a blank node
//! reached from there. Named objects are kept as references and never
//! followed, so the closure holds exactly one type assertion, the element's own.
//!
//! Lists are chains of blank nodes and so travel with the definition; named
//! list members stay references.

use std::collections::{BTreeSet, VecDeque};

use crate::graph::Graph;
use crate::model::node::{BlankId, Node, Resource, Statement};

/// Statements that make up the definition of `focus` in `graph`
///
/// Returns an empty graph if `focus` is not a subject in `graph`.
pub fn definition_closure(graph: &Graph, focus: &str) -> Graph {
    collect(graph, focus).into_iter().cloned().collect()
}

/// Remove the definition of `focus` from `graph` and return it
///
/// Blank nodes of the closure are owned by the definition, so after
/// extraction nothing left in `graph` points at them.
pub fn extract_definition(graph: &mut Graph, focus: &str) -> Graph {
    let closure = definition_closure(graph, focus);
    graph.remove_all(&closure);
    closure
}

fn collect<'a>(graph: &'a Graph, focus: &str) -> Vec<&'a Statement> {
    let mut result = Vec::new();
    let mut visited: BTreeSet<BlankId> = BTreeSet::new();
    let mut queue: VecDeque<Resource> = VecDeque::new();
    queue.push_back(Resource::named(focus));

    while let Some(subject) = queue.pop_front() {
        for st in graph.matching(Some(&subject), None, None) {
            if let Node::Blank(id) = st.object {
                if visited.insert(id) {
                    queue.push_back(Resource::Blank(id));
                }
            }
            result.push(st);
        }
    }
    result
}
