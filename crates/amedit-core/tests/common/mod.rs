#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use amedit_core::graph::Graph;
use amedit_core::model::{
    Document, DocumentKey, ElementUrn, Literal, NamespaceScope, Node, Resource, Statement,
};
use amedit_core::vocab::{characteristic, meta_model, RDF_FIRST, RDF_NIL, RDF_REST, RDF_TYPE};
use amedit_core::workspace::Workspace;

pub const NAMESPACE: &str = "org.eclipse.esmf.examples.movement";
pub const MOVEMENT_LOCATION: &str = "models/org.eclipse.esmf.examples.movement/1.0.0/Movement.ttl";
pub const SPEED_LOCATION: &str = "models/org.eclipse.esmf.examples.movement/1.0.0/Speed.ttl";

pub fn scope() -> NamespaceScope {
    NamespaceScope::parse(&format!("{NAMESPACE}:1.0.0")).unwrap()
}

/// Element identifier in the fixture scope
pub fn urn(name: &str) -> ElementUrn {
    scope().element(name)
}

pub fn iri(name: &str) -> String {
    urn(name).to_string()
}

pub fn key(location: &str) -> DocumentKey {
    DocumentKey::location(location)
}

/// Add an RDF list of `items` to `graph` and return its head
pub fn add_list(graph: &mut Graph, items: Vec<Node>) -> Node {
    let mut tail = Node::named(RDF_NIL);
    for item in items.into_iter().rev() {
        let cell = graph.fresh_blank();
        graph.add(Statement::new(Resource::Blank(cell), RDF_FIRST, item));
        graph.add(Statement::new(Resource::Blank(cell), RDF_REST, tail));
        tail = Node::Blank(cell);
    }
    tail
}

fn typed(graph: &mut Graph, name: &str, class: &str) {
    let class = Node::named(meta_model(class));
    graph.add(Statement::named(iri(name), RDF_TYPE, class));
}

/// The Movement aspect with its properties and the Speed characteristic
///
/// `Movement` lists `isMoving`, `speed` and `position` through a blank-node
/// list; `position` uses a characteristic with an inline (blank) constraint.
pub fn movement_graph() -> Graph {
    let mut g = Graph::new();

    typed(&mut g, "Movement", "Aspect");
    g.add(Statement::named(
        iri("Movement"),
        meta_model("preferredName"),
        Node::Literal(Literal::lang("movement", "en")),
    ));
    let properties = add_list(
        &mut g,
        vec![
            Node::named(iri("isMoving")),
            Node::named(iri("speed")),
            Node::named(iri("position")),
        ],
    );
    g.add(Statement::named(
        iri("Movement"),
        meta_model("properties"),
        properties,
    ));
    let operations = add_list(&mut g, vec![]);
    g.add(Statement::named(
        iri("Movement"),
        meta_model("operations"),
        operations,
    ));

    typed(&mut g, "isMoving", "Property");
    g.add(Statement::named(
        iri("isMoving"),
        meta_model("characteristic"),
        Node::named(characteristic("Boolean")),
    ));

    typed(&mut g, "speed", "Property");
    g.add(Statement::named(
        iri("speed"),
        meta_model("characteristic"),
        Node::named(iri("Speed")),
    ));

    typed(&mut g, "position", "Property");
    g.add(Statement::named(
        iri("position"),
        meta_model("characteristic"),
        Node::named(iri("PositionCharacteristic")),
    ));

    typed(&mut g, "PositionCharacteristic", "Characteristic");
    let constraint = g.fresh_blank();
    g.add(Statement::named(
        iri("PositionCharacteristic"),
        meta_model("constraint"),
        Node::Blank(constraint),
    ));
    g.add(Statement::new(
        Resource::Blank(constraint),
        RDF_TYPE,
        Node::named(characteristic("RangeConstraint")),
    ));
    g.add(Statement::new(
        Resource::Blank(constraint),
        characteristic("maxValue"),
        Node::Literal(Literal::typed(
            "100",
            "http://www.w3.org/2001/XMLSchema#float",
        )),
    ));

    typed(&mut g, "Speed", "Characteristic");
    g.add(Statement::named(
        iri("Speed"),
        meta_model("dataType"),
        Node::named("http://www.w3.org/2001/XMLSchema#float"),
    ));

    g
}

/// Single-document workspace holding [`movement_graph`]
pub fn movement_workspace() -> Workspace {
    Workspace::from_documents(vec![Document::at(MOVEMENT_LOCATION, movement_graph())]).unwrap()
}

/// Two documents: `Speed` lives in its own file and is referenced from Movement.ttl
pub fn split_workspace() -> Workspace {
    let mut movement = movement_graph();
    let speed: Graph = movement
        .matching(Some(&Resource::named(iri("Speed"))), None, None)
        .cloned()
        .collect();
    movement.remove_all(&speed);
    Workspace::from_documents(vec![
        Document::at(MOVEMENT_LOCATION, movement),
        Document::at(SPEED_LOCATION, speed),
    ])
    .unwrap()
}

/// Number of type assertions about `subject` in `graph`
pub fn type_assertions(graph: &Graph, subject: &str) -> usize {
    let subject = Resource::named(subject);
    graph.matching(Some(&subject), Some(RDF_TYPE), None).count()
}

/// Every IRI of element URNs in `graph` whose scope is `scope`
pub fn iris_in_scope(graph: &Graph, scope: &NamespaceScope) -> Vec<String> {
    let mut found = Vec::new();
    for st in graph {
        let nodes = [
            st.subject.to_node(),
            Node::named(st.predicate.clone()),
            st.object.clone(),
        ];
        for node in nodes {
            if let Some(element) = node.as_named().and_then(ElementUrn::try_from_iri) {
                if element.scope == *scope {
                    found.push(element.to_string());
                }
            }
        }
    }
    found
}
