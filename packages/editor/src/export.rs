//! Read-only snapshot of the current page for the external preview
//! renderer, which shares none of the store's mutation API.

use crate::document::EditorDocument;
use pagewright_dom::{ComponentNode, CustomStyle};
use serde::Serialize;
use std::sync::Arc;

/// Everything the render-only preview needs: the current page's tree plus
/// the global custom styles it may reference. Subtrees are `Arc`-shared
/// with the live document, so taking a snapshot copies no nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub page_id: String,
    pub page_name: String,
    pub slug: String,
    pub nodes: Vec<Arc<ComponentNode>>,
    pub custom_styles: Vec<CustomStyle>,
}

/// Snapshot the current page. `None` when the current page id is stale,
/// which a well-formed document never exhibits.
pub fn render_snapshot(document: &EditorDocument) -> Option<RenderSnapshot> {
    let page = document.current_page()?;
    Some(RenderSnapshot {
        page_id: page.id.clone(),
        page_name: page.name.clone(),
        slug: page.slug.clone(),
        nodes: page.nodes.clone(),
        custom_styles: document.custom_styles.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_dom::ROOT_CONTAINER_ID;

    #[test]
    fn test_snapshot_carries_current_page_and_styles() {
        let mut doc = EditorDocument::default();
        doc.custom_styles.push(CustomStyle {
            id: "cs1".to_string(),
            name: "Accent".to_string(),
            class_name: "accent".to_string(),
            css: "color: teal;".to_string(),
        });

        let snapshot = render_snapshot(&doc).unwrap();
        assert_eq!(snapshot.slug, "home");
        assert_eq!(snapshot.nodes[0].id, ROOT_CONTAINER_ID);
        assert_eq!(snapshot.custom_styles.len(), 1);

        // Shared, not copied.
        assert!(Arc::ptr_eq(&snapshot.nodes[0], &doc.pages[0].nodes[0]));
    }

    #[test]
    fn test_snapshot_is_serializable() {
        let doc = EditorDocument::default();
        let snapshot = render_snapshot(&doc).unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("root-container"));
    }
}
