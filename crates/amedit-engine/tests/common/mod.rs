#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use amedit_core::graph::Graph;
use amedit_core::model::{
    BlankId, Document, DocumentKey, ElementUrn, NamespaceScope, Node, Resource, Statement,
};
use amedit_core::vocab::{meta_model, RDF_FIRST, RDF_NIL, RDF_REST, RDF_TYPE};
use amedit_core::workspace::Workspace;
use amedit_engine::{ChangeContext, ChangeContextConfig};

pub const LOCATION_A: &str = "models/org.example.fleet/1.0.0/Fleet.ttl";
pub const LOCATION_B: &str = "models/org.example.fleet/1.0.0/Range.ttl";

pub fn scope() -> NamespaceScope {
    NamespaceScope::parse("org.example.fleet:1.0.0").unwrap()
}

pub fn urn(name: &str) -> ElementUrn {
    scope().element(name)
}

pub fn iri(name: &str) -> String {
    urn(name).to_string()
}

pub fn key(location: &str) -> DocumentKey {
    DocumentKey::location(location)
}

/// A fleet aspect listing `range` and `vehicleCount`; `range` uses `Range`
pub fn fleet_graph() -> Graph {
    let mut g = Graph::new();
    for (name, class) in [
        ("Fleet", "Aspect"),
        ("range", "Property"),
        ("vehicleCount", "Property"),
        ("Range", "Characteristic"),
    ] {
        let class = Node::named(meta_model(class));
        g.add(Statement::named(iri(name), RDF_TYPE, class));
    }

    let second = g.fresh_blank();
    g.add(cell(second, RDF_FIRST, Node::named(iri("vehicleCount"))));
    g.add(cell(second, RDF_REST, Node::named(RDF_NIL)));
    let first = g.fresh_blank();
    g.add(cell(first, RDF_FIRST, Node::named(iri("range"))));
    g.add(cell(first, RDF_REST, Node::Blank(second)));
    let fleet = iri("Fleet");
    let properties = meta_model("properties");
    g.add(Statement::named(fleet, properties, Node::Blank(first)));

    g.add(Statement::named(
        iri("range"),
        meta_model("characteristic"),
        Node::named(iri("Range")),
    ));
    g.add(Statement::named(
        iri("Range"),
        meta_model("dataType"),
        Node::named("http://www.w3.org/2001/XMLSchema#int"),
    ));
    g
}

fn cell(id: BlankId, predicate: &str, object: Node) -> Statement {
    Statement::new(Resource::Blank(id), predicate, object)
}

pub fn fleet_workspace() -> Workspace {
    Workspace::from_documents(vec![Document::at(LOCATION_A, fleet_graph())]).unwrap()
}

pub fn context() -> ChangeContext {
    ChangeContext::new(fleet_workspace(), ChangeContextConfig::default()).unwrap()
}

/// Definition subgraph of a fresh property in scope
pub fn property_definition(name: &str) -> Graph {
    vec![
        Statement::named(iri(name), RDF_TYPE, Node::named(meta_model("Property"))),
        Statement::named(
            iri(name),
            meta_model("characteristic"),
            Node::named(iri("Range")),
        ),
    ]
    .into()
}
