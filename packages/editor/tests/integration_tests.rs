//! End-to-end editing scenarios against the public store API.

use pagewright_dom::tree;
use pagewright_editor::{
    Applied, ComponentNode, ComponentType, EditingTarget, EditorStore, Mutation, SectionKind,
    ViewMode, ROOT_CONTAINER_ID,
};
use serde_json::Value;
use std::collections::HashMap;

fn add_container(store: &mut EditorStore, id: &str, parent: &str) {
    let applied = store.apply(Mutation::AddNode {
        parent_id: Some(parent.to_string()),
        node: ComponentNode::new(id, ComponentType::Container),
        index: None,
    });
    assert_eq!(applied, Applied::Changed, "failed to add {}", id);
}

fn set_label(store: &mut EditorStore, id: &str, label: &str) {
    let mut props = HashMap::new();
    props.insert("label".to_string(), Value::String(label.to_string()));
    store.apply(Mutation::UpdateNode {
        id: id.to_string(),
        props,
    });
}

fn active_ids(store: &EditorStore) -> Vec<String> {
    let mut out = Vec::new();
    tree::collect_ids(store.document().active_nodes().unwrap(), &mut out);
    out
}

#[test]
fn test_tree_integrity_across_mixed_operations() {
    let mut store = EditorStore::new();
    let initial = tree::count(store.document().active_nodes().unwrap());

    add_container(&mut store, "a", ROOT_CONTAINER_ID);
    add_container(&mut store, "b", ROOT_CONTAINER_ID);
    add_container(&mut store, "c", "a");
    set_label(&mut store, "b", "Sidebar");
    store.apply(Mutation::MoveNode {
        node_id: "c".to_string(),
        new_parent_id: Some("b".to_string()),
        index: Some(0),
    });
    store.apply(Mutation::DeleteNode {
        id: "a".to_string(),
    });

    let nodes = store.document().active_nodes().unwrap();
    assert_eq!(tree::count(nodes), initial + 3 - 1);

    let mut ids = active_ids(&store);
    let len = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), len, "no duplicate ids after the sequence");
}

#[test]
fn test_add_then_delete_scenario() {
    let mut store = EditorStore::new();

    store.apply(Mutation::AddNode {
        parent_id: Some(ROOT_CONTAINER_ID.to_string()),
        node: ComponentNode::new("n1", ComponentType::Text),
        index: None,
    });

    let root = store.document().find_in_active(ROOT_CONTAINER_ID).unwrap();
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].id, "n1");

    store.apply(Mutation::SelectNode {
        id: Some("n1".to_string()),
    });
    store.apply(Mutation::DeleteNode {
        id: "n1".to_string(),
    });

    let root = store.document().find_in_active(ROOT_CONTAINER_ID).unwrap();
    assert!(root.children.is_empty());
    assert!(store.document().selected_node_id.is_none());
}

#[test]
fn test_self_nesting_move_leaves_tree_unchanged() {
    let mut store = EditorStore::new();
    add_container(&mut store, "a", ROOT_CONTAINER_ID);
    add_container(&mut store, "b", "a");
    let before = active_ids(&store);

    let applied = store.apply(Mutation::MoveNode {
        node_id: "a".to_string(),
        new_parent_id: Some("b".to_string()),
        index: None,
    });

    assert_eq!(applied, Applied::Noop);
    assert_eq!(active_ids(&store), before);

    let a = store.document().find_in_active("a").unwrap();
    assert_eq!(a.children[0].id, "b");
}

#[test]
fn test_deleting_parent_of_selection_clears_selection() {
    let mut store = EditorStore::new();
    add_container(&mut store, "a", ROOT_CONTAINER_ID);
    add_container(&mut store, "b", "a");
    store.apply(Mutation::SelectNode {
        id: Some("b".to_string()),
    });

    store.apply(Mutation::DeleteNode {
        id: "a".to_string(),
    });
    assert!(store.document().selected_node_id.is_none());
}

#[test]
fn test_history_bound_of_fifty_structural_edits() {
    let mut store = EditorStore::new();
    add_container(&mut store, "n1", ROOT_CONTAINER_ID);

    for i in 1..=60 {
        set_label(&mut store, "n1", &format!("{}", i));
    }
    assert_eq!(store.history().past_len(), 50);

    let mut undos = 0;
    while store.undo() {
        undos += 1;
    }
    assert_eq!(undos, 50);

    // The oldest retained snapshot is the state after edit 10, not the
    // true initial document.
    let node = store.document().find_in_active("n1").unwrap();
    assert_eq!(node.props.get("label"), Some(&Value::String("10".into())));
}

#[test]
fn test_undo_redo_round_trip_over_page_creation() {
    let mut store = EditorStore::new();
    let before = store.document().snapshot();

    store.apply(Mutation::AddPage {
        name: "Pricing".to_string(),
    });
    let after = store.document().snapshot();
    assert_eq!(store.document().pages.len(), 2);

    assert!(store.undo());
    assert_eq!(store.document().snapshot(), before);
    assert_eq!(store.document().pages.len(), 1);

    assert!(store.redo());
    assert_eq!(store.document().snapshot(), after);
}

#[test]
fn test_new_edit_after_undo_discards_redo() {
    let mut store = EditorStore::new();
    add_container(&mut store, "a", ROOT_CONTAINER_ID);
    add_container(&mut store, "b", ROOT_CONTAINER_ID);

    store.undo();
    assert!(store.can_redo());

    add_container(&mut store, "c", ROOT_CONTAINER_ID);
    assert!(!store.can_redo());
    assert!(!store.document().contains_node_anywhere("b"));
}

#[test]
fn test_header_editing_is_isolated_from_pages() {
    let mut store = EditorStore::new();
    store.apply(Mutation::ToggleSiteSection {
        section: SectionKind::Header,
        enabled: true,
    });
    store.apply(Mutation::SetEditingTarget {
        target: EditingTarget::Header,
    });
    add_container(&mut store, "nav", ROOT_CONTAINER_ID);

    store.apply(Mutation::SetEditingTarget {
        target: EditingTarget::Page,
    });
    add_container(&mut store, "hero", ROOT_CONTAINER_ID);

    let doc = store.document();
    assert!(doc.header.enabled);
    assert_eq!(doc.header.nodes[0].children[0].id, "nav");
    let page_root = &doc.current_page().unwrap().nodes[0];
    assert_eq!(page_root.children.len(), 1);
    assert_eq!(page_root.children[0].id, "hero");
}

#[test]
fn test_page_switching_routes_edits() {
    let mut store = EditorStore::new();
    let first_page = store.document().current_page_id.clone();

    store.apply(Mutation::AddPage {
        name: "About".to_string(),
    });
    add_container(&mut store, "about-intro", ROOT_CONTAINER_ID);

    store.apply(Mutation::SwitchPage {
        id: first_page.clone(),
    });
    add_container(&mut store, "home-hero", ROOT_CONTAINER_ID);

    let doc = store.document();
    let home = doc.page(&first_page).unwrap();
    assert_eq!(home.nodes[0].children[0].id, "home-hero");

    let about = doc.pages.iter().find(|p| p.slug == "about").unwrap();
    assert_eq!(about.nodes[0].children[0].id, "about-intro");

    assert_eq!(
        store.apply(Mutation::SwitchPage {
            id: "ghost".to_string()
        }),
        Applied::Noop
    );
}

#[test]
fn test_view_mode_survives_undo() {
    let mut store = EditorStore::new();
    store.apply(Mutation::SetViewMode {
        mode: ViewMode::Tablet,
    });
    add_container(&mut store, "a", ROOT_CONTAINER_ID);

    store.undo();
    assert_eq!(store.document().view_mode, ViewMode::Tablet);
}

#[test]
fn test_persistence_round_trip_through_store() -> anyhow::Result<()> {
    let mut store = EditorStore::new();
    add_container(&mut store, "a", ROOT_CONTAINER_ID);
    store.apply(Mutation::AddPage {
        name: "Contact".to_string(),
    });

    let blob = pagewright_editor::to_blob(store.document())?;
    let restored = EditorStore::restore(Some(&blob));

    assert_eq!(restored.document(), store.document());
    assert!(!restored.can_undo(), "history never persists");

    let broken = EditorStore::restore(Some("{corrupt"));
    assert_eq!(broken.document().pages.len(), 1);
    assert_eq!(broken.document().pages[0].slug, "home");
    Ok(())
}

#[test]
fn test_fresh_ids_stay_unique_after_restore() -> anyhow::Result<()> {
    let mut store = EditorStore::new();
    let minted = store.fresh_node_id();
    store.apply(Mutation::AddNode {
        parent_id: Some(ROOT_CONTAINER_ID.to_string()),
        node: ComponentNode::new(minted.clone(), ComponentType::Text),
        index: None,
    });

    let blob = pagewright_editor::to_blob(store.document())?;
    let mut restored = EditorStore::restore(Some(&blob));

    let next = restored.fresh_node_id();
    assert_ne!(next, minted);
    assert!(!restored.document().contains_node_anywhere(&next));
    Ok(())
}

#[test]
fn test_render_snapshot_tracks_current_page() {
    let mut store = EditorStore::new();
    add_container(&mut store, "hero", ROOT_CONTAINER_ID);
    store.apply(Mutation::AddPage {
        name: "Blog".to_string(),
    });

    let snapshot = pagewright_editor::render_snapshot(store.document()).unwrap();
    assert_eq!(snapshot.slug, "blog");
    assert!(snapshot.nodes[0].children.is_empty());
}
