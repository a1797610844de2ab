//! File policy trait and default implementation
//!
//! A `FilePolicy` is injected into [`crate::apply::apply`] and answers the
//! questions a change cannot answer from the workspace alone: which header a
//! newly created document gets, whether a move may delete the document it
//! emptied, and where a version-bumped copy of a document should live.

use crate::model::NamespaceScope;

pub trait FilePolicy {
    /// Header lines for documents created by moves when the change supplies none
    fn default_header(&self) -> &[String];

    /// Whether a move that leaves its source document without statements
    /// also removes that document
    fn remove_emptied_files(&self) -> bool;

    /// Source location for a copy of the document at `location` whose
    /// namespace scope changes from `from` to `to`
    ///
    /// `None` creates the copy without a location; it is then keyed by its
    /// token until a collaborator saves it.
    fn bumped_location(
        &self,
        location: &str,
        from: &NamespaceScope,
        to: &NamespaceScope,
    ) -> Option<String>;
}

/// Policy with no default header that never removes emptied documents
///
/// Locations are bumped by [`bump_location_segments`].
///
/// ```
/// use amedit_core::model::NamespaceScope;
/// use amedit_core::policy::{DefaultFilePolicy, FilePolicy};
///
/// let from = NamespaceScope::parse("org.example:1.0.0").unwrap();
/// let to = NamespaceScope::parse("org.example:2.0.0").unwrap();
/// let policy = DefaultFilePolicy;
/// assert_eq!(
///     policy.bumped_location("models/org.example/1.0.0/Movement.ttl", &from, &to),
///     Some("models/org.example/2.0.0/Movement.ttl".to_string())
/// );
/// assert_eq!(policy.bumped_location("Movement.ttl", &from, &to), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFilePolicy;

impl FilePolicy for DefaultFilePolicy {
    fn default_header(&self) -> &[String] {
        &[]
    }

    fn remove_emptied_files(&self) -> bool {
        false
    }

    fn bumped_location(
        &self,
        location: &str,
        from: &NamespaceScope,
        to: &NamespaceScope,
    ) -> Option<String> {
        bump_location_segments(location, from, to)
    }
}

/// Replace the last `/`-separated segment equal to the old version
///
/// If the segment before it names the old namespace, it is replaced too, so
/// the `<namespace>/<version>/` directory layout of model repositories moves
/// as a pair. Returns `None` if no segment equals the old version.
pub fn bump_location_segments(
    location: &str,
    from: &NamespaceScope,
    to: &NamespaceScope,
) -> Option<String> {
    let old_version = from.version.to_string();
    let mut segments: Vec<String> = location.split('/').map(str::to_string).collect();
    let index = segments.iter().rposition(|segment| *segment == old_version)?;
    segments[index] = to.version.to_string();
    if index > 0 && segments[index - 1] == from.namespace {
        segments[index - 1] = to.namespace.clone();
    }
    Some(segments.join("/"))
}
