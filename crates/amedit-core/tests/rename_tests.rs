//! Rename Tests
//!
//! ## Scenarios Covered
//!
//! 1. Renaming rewrites references in other documents
//! 2. No statement mentions the old identifier afterwards (property based)
//! 3. Renaming onto an existing identifier is rejected
//! 4. RenameUrn may change the namespace scope

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use amedit_core::model::{NamespaceScope, Node, Statement};
use amedit_core::policy::DefaultFilePolicy;
use amedit_core::vocab::meta_model;
use amedit_core::{apply, Change, EditError, Workspace};
use common::*;
use proptest::prelude::*;

const FIXTURE_NAMES: [&str; 6] = [
    "Movement",
    "isMoving",
    "speed",
    "position",
    "PositionCharacteristic",
    "Speed",
];

fn mentions_anywhere(ws: &Workspace, iri: &str) -> bool {
    ws.documents()
        .iter()
        .any(|doc| doc.graph().iter().any(|st| st.mentions(iri)))
}

#[test]
fn test_rename_rewrites_cross_file_references() {
    // GIVEN Speed defined in its own file and referenced from Movement.ttl
    let ws = split_workspace();

    // WHEN Speed is renamed
    let ws = apply(
        ws,
        &Change::RenameElement {
            urn: urn("Speed"),
            name: "Velocity".to_string(),
        },
        &DefaultFilePolicy,
    )
    .unwrap();

    // THEN the owner defines the new identifier
    let speed = ws.document(&key(SPEED_LOCATION)).unwrap();
    assert!(speed.defines(&urn("Velocity")));

    // AND the referencing document follows the rename
    let movement = ws.document(&key(MOVEMENT_LOCATION)).unwrap();
    assert!(movement.graph().contains(&Statement::named(
        iri("speed"),
        meta_model("characteristic"),
        Node::named(iri("Velocity")),
    )));
    assert!(!mentions_anywhere(&ws, &iri("Speed")));
}

#[test]
fn test_rename_list_member() {
    // GIVEN the Movement aspect listing `speed`
    let ws = movement_workspace();

    // WHEN the property is renamed
    let ws = apply(
        ws,
        &Change::RenameElement {
            urn: urn("speed"),
            name: "velocity".to_string(),
        },
        &DefaultFilePolicy,
    )
    .unwrap();

    // THEN the list cell points at the new identifier
    assert!(!mentions_anywhere(&ws, &iri("speed")));
    let graph = ws.document(&key(MOVEMENT_LOCATION)).unwrap().graph();
    assert!(graph.references(&iri("velocity")));
}

#[test]
fn test_rename_onto_existing_identifier_is_rejected() {
    // GIVEN the split workspace
    let ws = split_workspace();

    // WHEN speed would be renamed to the existing Speed
    let result = apply(
        ws,
        &Change::RenameElement {
            urn: urn("speed"),
            name: "Speed".to_string(),
        },
        &DefaultFilePolicy,
    );

    // THEN apply fails
    assert!(matches!(
        result,
        Err(EditError::ElementAlreadyDefined { .. })
    ));
}

#[test]
fn test_rename_urn_across_scopes() {
    // GIVEN the split workspace
    let ws = split_workspace();
    let other = NamespaceScope::parse("org.eclipse.esmf.examples.units:3.0.0").unwrap();

    // WHEN Speed gets an identifier in another scope
    let ws = apply(
        ws,
        &Change::RenameUrn {
            from: urn("Speed"),
            to: other.element("Speed"),
        },
        &DefaultFilePolicy,
    )
    .unwrap();

    // THEN the document now belongs to that scope
    let speed = ws.document(&key(SPEED_LOCATION)).unwrap();
    assert_eq!(speed.namespace(), Some(other.clone()));
    assert!(!mentions_anywhere(&ws, &iri("Speed")));
    assert!(ws
        .document(&key(MOVEMENT_LOCATION))
        .unwrap()
        .graph()
        .references(&other.element("Speed").to_string()));
}

#[test]
fn test_rename_to_same_name_changes_nothing() {
    // GIVEN the Movement workspace
    let ws = movement_workspace();

    // WHEN an element is renamed to its current name
    let renamed = apply(
        ws.clone(),
        &Change::RenameElement {
            urn: urn("Speed"),
            name: "Speed".to_string(),
        },
        &DefaultFilePolicy,
    )
    .unwrap();

    // THEN the workspace is unchanged
    assert_eq!(renamed, ws);
}

fn fresh_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_]{0,12}")
        .unwrap()
        .prop_filter("must not collide with fixture elements", |name| {
            !FIXTURE_NAMES.contains(&name.as_str())
        })
}

proptest! {
    #[test]
    fn prop_rename_leaves_no_mention_of_old_identifier(
        name in fresh_name(),
        index in 0usize..FIXTURE_NAMES.len(),
    ) {
        let old = FIXTURE_NAMES[index];
        let before = split_workspace();
        let statements: usize = before.documents().iter().map(|d| d.graph().len()).sum();

        let ws = apply(
            before,
            &Change::RenameElement {
                urn: urn(old),
                name: name.clone(),
            },
            &DefaultFilePolicy,
        )
        .unwrap();

        prop_assert!(!mentions_anywhere(&ws, &iri(old)));
        prop_assert!(ws.is_defined(&urn(&name)));
        let after: usize = ws.documents().iter().map(|d| d.graph().len()).sum();
        prop_assert_eq!(after, statements);
    }
}
