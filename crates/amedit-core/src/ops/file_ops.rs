use crate::errors::Result;
use crate::model::{Document, DocumentKey};
use crate::workspace::Workspace;

/// Insert a document into the workspace
///
/// # Errors
///
/// * `DocumentAlreadyExists` - the document's identity key is taken
/// * `ElementAlreadyDefined` - the document defines an element another
///   document already owns
pub fn add_file(workspace: &mut Workspace, document: Document) -> Result<()> {
    workspace.check_insertable(&document)?;
    tracing::debug!(
        document_key = %document.key(),
        statements = document.graph().len(),
        "add file"
    );
    workspace.push(document);
    Ok(())
}

/// Remove a document from the workspace
///
/// # Errors
///
/// Returns `DocumentNotFound` if the document does not exist.
pub fn remove_file(workspace: &mut Workspace, key: &DocumentKey) -> Result<Document> {
    let removed = workspace.remove(key)?;
    tracing::debug!(document_key = %key, "remove file");
    Ok(removed)
}

/// Give a document a new source location
///
/// Moving a document onto its current location is a no-op.
///
/// # Errors
///
/// * `DocumentNotFound` - the document does not exist
/// * `DocumentAlreadyExists` - another document already has the location
pub fn move_rename_file(
    workspace: &mut Workspace,
    key: &DocumentKey,
    location: &str,
) -> Result<()> {
    workspace.document(key)?;
    let new_key = DocumentKey::location(location);
    if new_key == *key {
        return Ok(());
    }
    workspace.ensure_key_free(&new_key)?;

    workspace
        .document_mut(key)?
        .set_location(Some(location.to_string()));
    tracing::debug!(from = %key, to = %new_key, "move file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EditError;
    use crate::graph::Graph;

    #[test]
    fn test_add_file_rejects_taken_key() {
        let mut ws = Workspace::new();
        add_file(&mut ws, Document::at("a.ttl", Graph::new())).unwrap();
        let result = add_file(&mut ws, Document::at("a.ttl", Graph::new()));
        assert!(matches!(
            result,
            Err(EditError::DocumentAlreadyExists { .. })
        ));
        assert_eq!(ws.len(), 1);
    }

    #[test]
    fn test_move_rename_keeps_token() {
        let mut ws = Workspace::new();
        let doc = Document::at("a.ttl", Graph::new());
        let token = doc.token();
        add_file(&mut ws, doc).unwrap();

        move_rename_file(&mut ws, &DocumentKey::location("a.ttl"), "b.ttl").unwrap();
        let moved = ws.document(&DocumentKey::location("b.ttl")).unwrap();
        assert_eq!(moved.token(), token);
        assert!(!ws.contains(&DocumentKey::location("a.ttl")));
    }

    #[test]
    fn test_move_rename_gives_unsaved_document_a_location() {
        let mut ws = Workspace::new();
        let doc = Document::unsaved(Graph::new());
        let key = doc.key();
        add_file(&mut ws, doc).unwrap();

        move_rename_file(&mut ws, &key, "saved.ttl").unwrap();
        assert!(ws.contains(&DocumentKey::location("saved.ttl")));
        assert!(!ws.contains(&key));
    }

    #[test]
    fn test_remove_missing_file() {
        let mut ws = Workspace::new();
        let result = remove_file(&mut ws, &DocumentKey::location("missing.ttl"));
        assert!(matches!(result, Err(EditError::DocumentNotFound { .. })));
    }
}
