//! Shadow and opacity projection.

use crate::dispatch;
use pagewright_dom::ComponentNode;
use pagewright_editor::EditorStore;
use pagewright_style::{classes, classify, Category};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectFields {
    /// Current `shadow*` token, empty when unset.
    pub shadow: String,
    /// Current opacity percentage, `None` when unset.
    pub opacity: Option<u32>,
}

pub fn effect_fields(node: &ComponentNode) -> EffectFields {
    let class = node.class_name();
    EffectFields {
        shadow: classes::extract_shadow(class).unwrap_or_default().to_string(),
        opacity: classes::extract_opacity(class).and_then(classes::opacity_percent),
    }
}

/// Swap the shadow token (`shadow`, `shadow-lg`, ...). Empty clears; tokens
/// of another category are refused.
pub fn set_shadow(store: &mut EditorStore, node_id: &str, token: &str) -> bool {
    if !token.is_empty() && classify(token) != Category::Shadow {
        return false;
    }
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    let class = classes::replace(node.class_name(), Category::Shadow, token);
    dispatch::update_class(store, node_id, class)
}

/// Set the opacity percentage (clamped to 100). `None` clears.
pub fn set_opacity(store: &mut EditorStore, node_id: &str, percent: Option<u32>) -> bool {
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    let token = percent.map(classes::opacity_token).unwrap_or_default();
    let class = classes::replace(node.class_name(), Category::Opacity, &token);
    dispatch::update_class(store, node_id, class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_dom::{ComponentType, ROOT_CONTAINER_ID};
    use pagewright_editor::Mutation;

    fn store_with_node(class: &str) -> EditorStore {
        let mut store = EditorStore::new();
        store.apply(Mutation::AddNode {
            parent_id: Some(ROOT_CONTAINER_ID.to_string()),
            node: ComponentNode::new("n1", ComponentType::Image).with_prop("className", class),
            index: None,
        });
        store
    }

    #[test]
    fn test_fields_read_both_effects() {
        let store = store_with_node("shadow-md opacity-75 p-2");
        let node = store.document().find_in_active("n1").unwrap();
        let fields = effect_fields(node);
        assert_eq!(fields.shadow, "shadow-md");
        assert_eq!(fields.opacity, Some(75));
    }

    #[test]
    fn test_set_and_clear_shadow() {
        let mut store = store_with_node("shadow");
        assert!(set_shadow(&mut store, "n1", "shadow-xl"));
        let node = store.document().find_in_active("n1").unwrap();
        assert_eq!(node.class_name(), "shadow-xl");

        assert!(!set_shadow(&mut store, "n1", "opacity-50"));

        assert!(set_shadow(&mut store, "n1", ""));
        let node = store.document().find_in_active("n1").unwrap();
        assert_eq!(node.class_name(), "");
    }

    #[test]
    fn test_opacity_clamps_and_clears() {
        let mut store = store_with_node("");
        assert!(set_opacity(&mut store, "n1", Some(150)));
        let node = store.document().find_in_active("n1").unwrap();
        assert_eq!(node.class_name(), "opacity-100");

        assert!(set_opacity(&mut store, "n1", None));
        let node = store.document().find_in_active("n1").unwrap();
        assert_eq!(node.class_name(), "");
    }
}
