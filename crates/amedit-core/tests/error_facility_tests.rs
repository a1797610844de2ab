#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use amedit_core::errors::{EditError, ExError, ExErrorKind};
use amedit_core::model::NamespaceScope;
use amedit_core::policy::DefaultFilePolicy;
use amedit_core::{apply, Change};
use common::*;

#[test]
fn test_missing_document_verifiable_by_kind() {
    let err = apply(
        movement_workspace(),
        &Change::RemoveFile {
            key: key("missing.ttl"),
        },
        &DefaultFilePolicy,
    )
    .unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.document(), Some("missing.ttl"));
}

#[test]
fn test_duplicate_definition_distinct_from_existing_document() {
    let err = apply(
        movement_workspace(),
        &Change::RenameElement {
            urn: urn("speed"),
            name: "Speed".to_string(),
        },
        &DefaultFilePolicy,
    )
    .unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::DuplicateDefinition);
    assert_ne!(ex_err.kind(), ExErrorKind::AlreadyExists);
    assert_eq!(ex_err.element(), Some(iri("Speed").as_str()));
    assert_eq!(ex_err.document(), Some(MOVEMENT_LOCATION));
}

#[test]
fn test_namespace_errors_carry_scope() {
    let unknown = NamespaceScope::parse("org.example.unknown:1.0.0").unwrap();
    let err = apply(
        split_workspace(),
        &Change::MoveElementToOtherNamespaceExistingFile {
            urn: urn("Speed"),
            scope: unknown,
            target: key(SPEED_LOCATION),
        },
        &DefaultFilePolicy,
    )
    .unwrap_err();

    assert!(matches!(err, EditError::NamespaceNotFound { .. }));
    let ex_err: ExError = err.into();
    assert_eq!(ex_err.code(), "ERR_NAMESPACE_NOT_FOUND");
    assert!(ex_err.message().contains("org.example.unknown:1.0.0"));
}

#[test]
fn test_invalid_name_maps_to_invalid_urn() {
    let err = apply(
        movement_workspace(),
        &Change::RenameElement {
            urn: urn("speed"),
            name: "top speed".to_string(),
        },
        &DefaultFilePolicy,
    )
    .unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidUrn);
}

#[test]
fn test_error_kind_code_mapping() {
    // Each kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::InvalidUrn, "ERR_INVALID_URN"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::AlreadyExists, "ERR_ALREADY_EXISTS"),
        (ExErrorKind::DuplicateDefinition, "ERR_DUPLICATE_DEFINITION"),
        (ExErrorKind::AmbiguousOwner, "ERR_AMBIGUOUS_OWNER"),
        (ExErrorKind::NamespaceNotFound, "ERR_NAMESPACE_NOT_FOUND"),
        (ExErrorKind::NamespaceMismatch, "ERR_NAMESPACE_MISMATCH"),
        (ExErrorKind::MissingNamespace, "ERR_MISSING_NAMESPACE"),
        (ExErrorKind::InvalidRewrite, "ERR_INVALID_REWRITE"),
        (ExErrorKind::GroupAborted, "ERR_GROUP_ABORTED"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}
