pub mod document;
pub mod element;
pub mod node;
pub mod urn;

pub use document::{Document, DocumentKey};
pub use element::{Element, ElementKind};
pub use node::{BlankId, Literal, LiteralAnnotation, Node, Resource, Statement};
pub use urn::{ElementUrn, NamespaceScope, Version, VersionPart};
