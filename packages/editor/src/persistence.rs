//! # Persistence
//!
//! The whole aggregate serializes to one opaque JSON blob and back. History
//! never persists; a restored session starts with empty undo/redo stacks.
//!
//! Restoration is deliberately forgiving: a missing blob, a parse failure,
//! or a structurally hollow document (no pages) falls back to the fresh
//! default document instead of surfacing an error. The editor must never
//! fail to open over a bad save.

use crate::document::EditorDocument;
use crate::errors::EditorError;

/// Serialize the aggregate to a JSON blob.
pub fn to_blob(document: &EditorDocument) -> Result<String, EditorError> {
    Ok(serde_json::to_string(document)?)
}

/// Restore from a blob, falling back to the default document when the blob
/// is absent or malformed. A stale `current_page_id` snaps back to the
/// first page.
pub fn from_blob(blob: Option<&str>) -> EditorDocument {
    let Some(raw) = blob else {
        return EditorDocument::default();
    };
    match serde_json::from_str::<EditorDocument>(raw) {
        Ok(mut doc) => {
            if doc.pages.is_empty() {
                tracing::warn!("persisted document has no pages, falling back to default");
                return EditorDocument::default();
            }
            if !doc.pages.iter().any(|p| p.id == doc.current_page_id) {
                doc.current_page_id = doc.pages[0].id.clone();
            }
            doc
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to restore persisted document, falling back to default");
            EditorDocument::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_dom::{ComponentNode, ComponentType, Page, ROOT_CONTAINER_ID};
    use std::sync::Arc;

    #[test]
    fn test_round_trip_preserves_document() {
        let mut doc = EditorDocument::default();
        let page = &mut doc.pages[0];
        let root = Arc::make_mut(&mut page.nodes[0]);
        root.children.push(Arc::new(
            ComponentNode::new("n1", ComponentType::Text).with_prop("text", "Hello"),
        ));
        doc.selected_node_id = Some("n1".to_string());

        let blob = to_blob(&doc).unwrap();
        let restored = from_blob(Some(&blob));
        assert_eq!(restored, doc);
    }

    #[test]
    fn test_missing_blob_yields_default() {
        let doc = from_blob(None);
        assert_eq!(doc, EditorDocument::default());
    }

    #[test]
    fn test_malformed_blob_yields_default() {
        for raw in ["", "not json", "{\"pages\": 42}", "[1,2,3]"] {
            let doc = from_blob(Some(raw));
            assert_eq!(doc, EditorDocument::default());
            assert_eq!(doc.pages[0].nodes[0].id, ROOT_CONTAINER_ID);
        }
    }

    #[test]
    fn test_pageless_blob_yields_default() {
        let mut doc = EditorDocument::default();
        doc.pages.clear();
        let blob = to_blob(&doc).unwrap();
        assert_eq!(from_blob(Some(&blob)), EditorDocument::default());
    }

    #[test]
    fn test_stale_current_page_id_snaps_to_first_page() {
        let mut doc = EditorDocument::default();
        doc.pages.push(Page::new("page-2", "About", "about"));
        doc.current_page_id = "ghost".to_string();

        let blob = to_blob(&doc).unwrap();
        let restored = from_blob(Some(&blob));
        assert_eq!(restored.current_page_id, "page-1");
    }
}
