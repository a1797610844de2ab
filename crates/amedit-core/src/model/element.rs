//! Element kinds
//!
//! Consumers such as generators dispatch on `ElementKind` with an exhaustive
//! `match`; adding a kind is a compile-time-checked change for all of them.

use serde::{Deserialize, Serialize};

use crate::model::document::DocumentKey;
use crate::model::urn::ElementUrn;
use crate::vocab::{CHARACTERISTIC_PREFIX, META_MODEL_PREFIX, UNIT_PREFIX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementKind {
    Aspect,
    Property,
    Characteristic,
    Constraint,
    Entity,
    AbstractEntity,
    Operation,
    Event,
    Unit,
    QuantityKind,
    /// Typed with a class outside the meta-model
    Other,
}

impl ElementKind {
    /// Classify an element by the object of its type assertion
    pub fn from_type_iri(iri: &str) -> Self {
        if let Some(class) = class_after(iri, META_MODEL_PREFIX) {
            return match class {
                "Aspect" => ElementKind::Aspect,
                "Property" | "AbstractProperty" => ElementKind::Property,
                "Characteristic" => ElementKind::Characteristic,
                "Constraint" => ElementKind::Constraint,
                "Entity" => ElementKind::Entity,
                "AbstractEntity" => ElementKind::AbstractEntity,
                "Operation" => ElementKind::Operation,
                "Event" => ElementKind::Event,
                "Unit" => ElementKind::Unit,
                "QuantityKind" => ElementKind::QuantityKind,
                _ => ElementKind::Other,
            };
        }
        if let Some(class) = class_after(iri, CHARACTERISTIC_PREFIX) {
            return if class.ends_with("Constraint") {
                ElementKind::Constraint
            } else {
                ElementKind::Characteristic
            };
        }
        if class_after(iri, UNIT_PREFIX).is_some() {
            return ElementKind::Unit;
        }
        ElementKind::Other
    }

    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Aspect => "Aspect",
            ElementKind::Property => "Property",
            ElementKind::Characteristic => "Characteristic",
            ElementKind::Constraint => "Constraint",
            ElementKind::Entity => "Entity",
            ElementKind::AbstractEntity => "AbstractEntity",
            ElementKind::Operation => "Operation",
            ElementKind::Event => "Event",
            ElementKind::Unit => "Unit",
            ElementKind::QuantityKind => "QuantityKind",
            ElementKind::Other => "Other",
        }
    }
}

/// `<prefix><version>#<Class>` → `Class`
fn class_after<'a>(iri: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = iri.strip_prefix(prefix)?;
    let (_version, class) = rest.split_once('#')?;
    Some(class)
}

/// A named, typed element and the document that owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub urn: ElementUrn,
    pub kind: ElementKind,
    pub document: DocumentKey,
}
