//! Per-component collection helpers: menu items, tab items, stepper steps.
//!
//! Tabs and steppers keep a positional correspondence between item N and
//! child content node N. Helpers here preserve it on both ends: appending
//! an item creates its backing content container, removing an item deletes
//! the child at the same index, and both land in history as one batched
//! undo step.

use crate::dispatch;
use pagewright_dom::{ComponentNode, ComponentType};
use pagewright_editor::{EditorStore, Mutation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of a Header/Footer navigation menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub href: String,
}

/// One tab of a Tabs component; content lives in the child at the same
/// index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabItem {
    pub id: String,
    pub label: String,
}

/// One step of a Stepper component; content lives in the child at the same
/// index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepItem {
    pub id: String,
    pub label: String,
}

fn items_from<T>(node: &ComponentNode, key: &str) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
{
    node.props
        .get(key)
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

fn write_items<T: Serialize>(
    store: &mut EditorStore,
    node_id: &str,
    key: &str,
    items: &[T],
) -> bool {
    let Ok(value) = serde_json::to_value(items) else {
        return false;
    };
    let mut props = HashMap::new();
    props.insert(key.to_string(), value);
    dispatch::update_props(store, node_id, props)
}

// ---- Menu items (Header / Footer) ----

pub fn menu_items(node: &ComponentNode) -> Vec<MenuItem> {
    items_from(node, "menuItems")
}

pub fn add_menu_item(store: &mut EditorStore, node_id: &str, label: &str, href: &str) -> bool {
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    if !matches!(node.kind, ComponentType::Header | ComponentType::Footer) {
        return false;
    }
    let mut items = menu_items(&node);
    items.push(MenuItem {
        id: store.fresh_node_id(),
        label: label.to_string(),
        href: href.to_string(),
    });
    write_items(store, node_id, "menuItems", &items)
}

pub fn update_menu_item(
    store: &mut EditorStore,
    node_id: &str,
    item_id: &str,
    label: &str,
    href: &str,
) -> bool {
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    let mut items = menu_items(&node);
    let Some(item) = items.iter_mut().find(|item| item.id == item_id) else {
        return false;
    };
    item.label = label.to_string();
    item.href = href.to_string();
    write_items(store, node_id, "menuItems", &items)
}

pub fn remove_menu_item(store: &mut EditorStore, node_id: &str, item_id: &str) -> bool {
    let Some(node) = dispatch::find_node(store, node_id) else {
        return false;
    };
    let mut items = menu_items(&node);
    let before = items.len();
    items.retain(|item| item.id != item_id);
    if items.len() == before {
        return false;
    }
    write_items(store, node_id, "menuItems", &items)
}

// ---- Tab items (Tabs) ----

pub fn tab_items(node: &ComponentNode) -> Vec<TabItem> {
    items_from(node, "items")
}

/// Append a tab and its backing content container in one undo step.
pub fn add_tab(store: &mut EditorStore, tabs_id: &str, label: &str) -> bool {
    let Some(node) = dispatch::find_node(store, tabs_id) else {
        return false;
    };
    if node.kind != ComponentType::Tabs {
        return false;
    }
    let mut items = tab_items(&node);
    items.push(TabItem {
        id: store.fresh_node_id(),
        label: label.to_string(),
    });
    let content = ComponentNode::new(store.fresh_node_id(), ComponentType::Container);

    store.begin_batch();
    let wrote = write_items(store, tabs_id, "items", &items);
    let added = store
        .apply(Mutation::AddNode {
            parent_id: Some(tabs_id.to_string()),
            node: content,
            index: Some(items.len() - 1),
        })
        .changed();
    store.end_batch();
    wrote && added
}

pub fn rename_tab(store: &mut EditorStore, tabs_id: &str, index: usize, label: &str) -> bool {
    let Some(node) = dispatch::find_node(store, tabs_id) else {
        return false;
    };
    let mut items = tab_items(&node);
    let Some(item) = items.get_mut(index) else {
        return false;
    };
    item.label = label.to_string();
    write_items(store, tabs_id, "items", &items)
}

/// Remove tab `index` and delete the content child at the same index, so
/// the remaining items and children stay positionally paired.
pub fn remove_tab(store: &mut EditorStore, tabs_id: &str, index: usize) -> bool {
    let Some(node) = dispatch::find_node(store, tabs_id) else {
        return false;
    };
    if node.kind != ComponentType::Tabs {
        return false;
    }
    let mut items = tab_items(&node);
    if index >= items.len() {
        return false;
    }
    items.remove(index);

    store.begin_batch();
    let wrote = write_items(store, tabs_id, "items", &items);
    if let Some(child) = node.children.get(index) {
        store.apply(Mutation::DeleteNode {
            id: child.id.clone(),
        });
    }
    store.end_batch();
    wrote
}

// ---- Steps (Stepper) ----

pub fn step_items(node: &ComponentNode) -> Vec<StepItem> {
    items_from(node, "steps")
}

/// Append a step; backfills content containers so every step has a backing
/// child at its index.
pub fn add_step(store: &mut EditorStore, stepper_id: &str, label: &str) -> bool {
    let Some(node) = dispatch::find_node(store, stepper_id) else {
        return false;
    };
    if node.kind != ComponentType::Stepper {
        return false;
    }
    let mut items = step_items(&node);
    items.push(StepItem {
        id: store.fresh_node_id(),
        label: label.to_string(),
    });

    store.begin_batch();
    let wrote = write_items(store, stepper_id, "steps", &items);
    let filled = ensure_step_contents(store, stepper_id);
    store.end_batch();
    wrote && filled
}

pub fn remove_step(store: &mut EditorStore, stepper_id: &str, index: usize) -> bool {
    let Some(node) = dispatch::find_node(store, stepper_id) else {
        return false;
    };
    if node.kind != ComponentType::Stepper {
        return false;
    }
    let mut items = step_items(&node);
    if index >= items.len() {
        return false;
    }
    items.remove(index);

    store.begin_batch();
    let wrote = write_items(store, stepper_id, "steps", &items);
    if let Some(child) = node.children.get(index) {
        store.apply(Mutation::DeleteNode {
            id: child.id.clone(),
        });
    }
    store.end_batch();
    wrote
}

/// Create missing content containers so the child count reaches the step
/// count, each inserted at its step's index. Already-satisfied steppers
/// come back `true` without dispatching anything.
pub fn ensure_step_contents(store: &mut EditorStore, stepper_id: &str) -> bool {
    let Some(node) = dispatch::find_node(store, stepper_id) else {
        return false;
    };
    if node.kind != ComponentType::Stepper {
        return false;
    }
    let steps = step_items(&node);
    let mut ok = true;
    for index in node.children.len()..steps.len() {
        let content = ComponentNode::new(store.fresh_node_id(), ComponentType::Container);
        ok &= store
            .apply(Mutation::AddNode {
                parent_id: Some(stepper_id.to_string()),
                node: content,
                index: Some(index),
            })
            .changed();
    }
    ok
}
