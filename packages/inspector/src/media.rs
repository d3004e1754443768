//! Image-specific projection: object-fit and upload handoff.

use crate::dispatch;
use pagewright_dom::ComponentNode;
use pagewright_editor::EditorStore;
use pagewright_style::{classes, classify, Category};
use serde_json::Value;
use std::collections::HashMap;

/// Current `object-*` token, empty when unset.
pub fn object_fit(node: &ComponentNode) -> String {
    classes::extract_object_fit(node.class_name())
        .unwrap_or_default()
        .to_string()
}

pub fn set_object_fit(store: &mut EditorStore, node_id: &str, token: &str) -> bool {
    if !token.is_empty() && classify(token) != Category::ObjectFit {
        return false;
    }
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    let class = classes::replace(node.class_name(), Category::ObjectFit, token);
    dispatch::update_class(store, node_id, class)
}

/// Capture of which node an asynchronous file-read was started for.
///
/// Reading a dropped file to a data URL is the one async boundary around the
/// core: it resolves once, later, and must not clobber a newer selection.
/// The ticket pins the node id at start time and `apply_image_upload`
/// re-checks it at resolve time, discarding stale results.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadTicket {
    pub node_id: String,
}

/// Start an upload for the currently selected node. `None` when nothing is
/// selected.
pub fn begin_image_upload(store: &EditorStore) -> Option<UploadTicket> {
    let node_id = store.document().selected_node_id.clone()?;
    Some(UploadTicket { node_id })
}

/// Apply a resolved data URL. No-op when the selection moved on or the node
/// is gone.
pub fn apply_image_upload(
    store: &mut EditorStore,
    ticket: &UploadTicket,
    data_url: &str,
) -> bool {
    if store.document().selected_node_id.as_deref() != Some(ticket.node_id.as_str()) {
        tracing::debug!(node = %ticket.node_id, "discarding stale image upload result");
        return false;
    }
    if store.document().find_in_active(&ticket.node_id).is_none() {
        return false;
    }
    let mut props = HashMap::new();
    props.insert("src".to_string(), Value::String(data_url.to_string()));
    dispatch::update_props(store, &ticket.node_id, props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_dom::{ComponentType, ROOT_CONTAINER_ID};
    use pagewright_editor::Mutation;

    fn store_with_image() -> EditorStore {
        let mut store = EditorStore::new();
        store.apply(Mutation::AddNode {
            parent_id: Some(ROOT_CONTAINER_ID.to_string()),
            node: ComponentNode::new("img1", ComponentType::Image),
            index: None,
        });
        store.apply(Mutation::SelectNode {
            id: Some("img1".to_string()),
        });
        store
    }

    #[test]
    fn test_object_fit_round_trip() {
        let mut store = store_with_image();
        assert!(set_object_fit(&mut store, "img1", "object-cover"));
        let node = store.document().find_in_active("img1").unwrap();
        assert_eq!(object_fit(node), "object-cover");

        assert!(!set_object_fit(&mut store, "img1", "object-top"));
    }

    #[test]
    fn test_upload_applies_while_selection_holds() {
        let mut store = store_with_image();
        let ticket = begin_image_upload(&store).unwrap();

        assert!(apply_image_upload(&mut store, &ticket, "data:image/png;base64,AAA"));
        let node = store.document().find_in_active("img1").unwrap();
        assert_eq!(
            node.props.get("src").and_then(Value::as_str),
            Some("data:image/png;base64,AAA")
        );
    }

    #[test]
    fn test_stale_upload_is_discarded() {
        let mut store = store_with_image();
        let ticket = begin_image_upload(&store).unwrap();

        // Selection moved on before the file read resolved.
        store.apply(Mutation::SelectNode { id: None });
        assert!(!apply_image_upload(&mut store, &ticket, "data:stale"));

        let node = store.document().find_in_active("img1").unwrap();
        assert!(node.props.get("src").is_none());
    }

    #[test]
    fn test_upload_without_selection_never_starts() {
        let mut store = store_with_image();
        store.apply(Mutation::SelectNode { id: None });
        assert!(begin_image_upload(&store).is_none());
    }
}
