//! Vocabulary IRIs the kernel needs to interpret a model graph

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Scheme prefix shared by element and meta-model URNs
pub const URN_PREFIX: &str = "urn:samm:";

/// Meta-model namespace prefixes, version-independent (`...:<version>#<Class>` follows)
pub const META_MODEL_PREFIX: &str = "urn:samm:org.eclipse.esmf.samm:meta-model:";
pub const CHARACTERISTIC_PREFIX: &str = "urn:samm:org.eclipse.esmf.samm:characteristic:";
pub const UNIT_PREFIX: &str = "urn:samm:org.eclipse.esmf.samm:unit:";

/// Current meta-model version used by fixtures and new definitions
pub const META_MODEL_VERSION: &str = "2.1.0";

/// Build the IRI of a meta-model class, e.g. `meta_model("Aspect")`
pub fn meta_model(class: &str) -> String {
    format!("{META_MODEL_PREFIX}{META_MODEL_VERSION}#{class}")
}

/// Build the IRI of a characteristic-namespace class, e.g. `characteristic("List")`
pub fn characteristic(class: &str) -> String {
    format!("{CHARACTERISTIC_PREFIX}{META_MODEL_VERSION}#{class}")
}

/// Build the IRI of a unit-namespace class or instance
pub fn unit(name: &str) -> String {
    format!("{UNIT_PREFIX}{META_MODEL_VERSION}#{name}")
}
