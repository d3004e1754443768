//! Shared plumbing between projections and the store.

use pagewright_dom::ComponentNode;
use pagewright_editor::{EditorStore, Mutation};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

pub(crate) fn find_node(store: &EditorStore, id: &str) -> Option<Arc<ComponentNode>> {
    store.document().find_in_active(id).cloned()
}

pub(crate) fn update_props(
    store: &mut EditorStore,
    id: &str,
    props: HashMap<String, Value>,
) -> bool {
    store
        .apply(Mutation::UpdateNode {
            id: id.to_string(),
            props,
        })
        .changed()
}

pub(crate) fn update_class(store: &mut EditorStore, id: &str, class: String) -> bool {
    let mut props = HashMap::new();
    props.insert("className".to_string(), Value::String(class));
    update_props(store, id, props)
}

/// The node's style object with one key set or cleared. The store merges
/// props shallowly, so setters always send the whole nested object back.
pub(crate) fn style_with(
    node: &ComponentNode,
    key: &str,
    value: Option<String>,
) -> Map<String, Value> {
    let mut style = node.style().cloned().unwrap_or_default();
    match value {
        Some(value) => {
            style.insert(key.to_string(), Value::String(value));
        }
        None => {
            style.remove(key);
        }
    }
    style
}

pub(crate) fn update_style(
    store: &mut EditorStore,
    node: &ComponentNode,
    key: &str,
    value: Option<String>,
) -> bool {
    let style = style_with(node, key, value);
    let mut props = HashMap::new();
    props.insert("style".to_string(), Value::Object(style));
    update_props(store, &node.id, props)
}

pub(crate) fn style_value<'a>(node: &'a ComponentNode, key: &str) -> Option<&'a str> {
    node.style()?.get(key)?.as_str()
}
