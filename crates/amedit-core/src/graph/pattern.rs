//! Pattern lookup over a statement set

use std::collections::btree_set::Range;
use std::collections::BTreeSet;

use crate::model::node::{Node, Resource, Statement};

/// Iterator over the statements matching a `(subject?, predicate?, object?)` pattern
///
/// With a bound subject the scan starts at the first statement of that
/// subject and stops after its last one, because statements are ordered by
/// subject first.
#[derive(Clone)]
pub struct Matching<'g, 'p> {
    inner: Range<'g, Statement>,
    subject: Option<&'p Resource>,
    predicate: Option<&'p str>,
    object: Option<&'p Node>,
}

impl<'g, 'p> Matching<'g, 'p> {
    pub(crate) fn new(
        statements: &'g BTreeSet<Statement>,
        subject: Option<&'p Resource>,
        predicate: Option<&'p str>,
        object: Option<&'p Node>,
    ) -> Self {
        let inner = match subject {
            Some(s) => statements.range(lowest_for(s)..),
            None => statements.range::<Statement, _>(..),
        };
        Self {
            inner,
            subject,
            predicate,
            object,
        }
    }
}

/// Smallest possible statement with the given subject
fn lowest_for(subject: &Resource) -> Statement {
    Statement {
        subject: subject.clone(),
        predicate: String::new(),
        object: Node::Named(String::new()),
    }
}

impl<'g, 'p> Iterator for Matching<'g, 'p> {
    type Item = &'g Statement;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let st = self.inner.next()?;
            if let Some(subject) = self.subject {
                if &st.subject != subject {
                    return None;
                }
            }
            if self.predicate.is_some_and(|p| st.predicate != p) {
                continue;
            }
            if self.object.is_some_and(|o| &st.object != o) {
                continue;
            }
            return Some(st);
        }
    }
}
