//! # Document Mutations
//!
//! The closed set of intents the store accepts.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation is one semantic operation, not a
//!    patch script.
//! 2. **Validated**: structural constraints are checked against the current
//!    document before anything is touched.
//! 3. **Serializable**: intents are plain data so a host can log, queue, or
//!    replay them.
//!
//! ## Mutation Semantics
//!
//! ### MoveNode
//! - Atomic extract-then-insert on the active surface
//! - Rejected when it would nest a node inside its own subtree
//! - Rejected for the reserved root container
//!
//! ### UpdateNode
//! - Shallow merge into `props`; a supplied `style` object replaces the old
//!   one whole (callers send the full nested object they want)
//!
//! ### DeleteNode
//! - Removes the node and all descendants
//! - Clears the selection when it pointed into the removed subtree

use crate::document::EditorDocument;
use pagewright_dom::{
    tree, ComponentNode, CustomStyle, EditingTarget, IdGenerator, Page, Popup, SectionKind,
    ViewMode, ROOT_CONTAINER_ID,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Semantic mutations over the editor document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Mutation {
    /// Switch the display-only canvas width preset.
    SetViewMode { mode: ViewMode },

    /// Switch which surface receives edits. Clears the selection.
    SetEditingTarget { target: EditingTarget },

    /// Enable or disable the site header/footer.
    ToggleSiteSection { section: SectionKind, enabled: bool },

    /// Insert a new node into the active surface.
    AddNode {
        parent_id: Option<String>,
        node: ComponentNode,
        index: Option<usize>,
    },

    /// Shallow-merge props into an existing node.
    UpdateNode {
        id: String,
        props: HashMap<String, Value>,
    },

    /// Re-parent a node within the active surface.
    MoveNode {
        node_id: String,
        new_parent_id: Option<String>,
        index: Option<usize>,
    },

    /// Remove a node and its subtree from the active surface.
    DeleteNode { id: String },

    /// Select a node of the active surface, or clear the selection.
    SelectNode { id: Option<String> },

    /// Create a page with a fresh root container and make it current.
    AddPage { name: String },

    /// Make another page current and target it for edits.
    SwitchPage { id: String },

    /// Create a popup surface and target it for edits.
    AddPopup { name: String },

    RenamePopup { id: String, name: String },

    /// Target an existing popup for edits.
    SwitchPopup { id: String },

    /// Register a global named style. Not part of undo history.
    AddCustomStyle { style: CustomStyle },

    /// Drop a global named style. Nodes referencing it keep their stale
    /// `customStyleId`; falling back to default styling is a renderer
    /// concern.
    RemoveCustomStyle { id: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),

    #[error("Would create cycle")]
    CycleDetected,

    #[error("The root container cannot be moved or deleted")]
    RootImmutable,

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Unknown popup: {0}")]
    UnknownPopup(String),

    #[error("Unknown custom style: {0}")]
    UnknownCustomStyle(String),

    #[error("No active surface for the current editing target")]
    NoActiveSurface,
}

impl Mutation {
    /// Debug name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetViewMode { .. } => "SetViewMode",
            Mutation::SetEditingTarget { .. } => "SetEditingTarget",
            Mutation::ToggleSiteSection { .. } => "ToggleSiteSection",
            Mutation::AddNode { .. } => "AddNode",
            Mutation::UpdateNode { .. } => "UpdateNode",
            Mutation::MoveNode { .. } => "MoveNode",
            Mutation::DeleteNode { .. } => "DeleteNode",
            Mutation::SelectNode { .. } => "SelectNode",
            Mutation::AddPage { .. } => "AddPage",
            Mutation::SwitchPage { .. } => "SwitchPage",
            Mutation::AddPopup { .. } => "AddPopup",
            Mutation::RenamePopup { .. } => "RenamePopup",
            Mutation::SwitchPopup { .. } => "SwitchPopup",
            Mutation::AddCustomStyle { .. } => "AddCustomStyle",
            Mutation::RemoveCustomStyle { .. } => "RemoveCustomStyle",
        }
    }

    /// Whether this mutation enters undo history. Cosmetic state changes
    /// (view mode, selection, target switches, section toggles) and
    /// custom-style edits deliberately do not.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Mutation::AddNode { .. }
                | Mutation::UpdateNode { .. }
                | Mutation::MoveNode { .. }
                | Mutation::DeleteNode { .. }
                | Mutation::AddPage { .. }
        )
    }

    /// Validate without applying.
    pub fn validate(&self, doc: &EditorDocument) -> Result<(), MutationError> {
        match self {
            Mutation::SetViewMode { .. }
            | Mutation::SetEditingTarget { .. }
            | Mutation::ToggleSiteSection { .. }
            | Mutation::AddPage { .. }
            | Mutation::AddPopup { .. }
            | Mutation::AddCustomStyle { .. } => Ok(()),

            Mutation::AddNode {
                parent_id, node, ..
            } => {
                let nodes = doc.active_nodes().ok_or(MutationError::NoActiveSurface)?;

                if let Some(parent_id) = parent_id {
                    let parent = tree::find(nodes, parent_id)
                        .ok_or_else(|| MutationError::ParentNotFound(parent_id.clone()))?;
                    if !parent.kind.accepts_children() {
                        return Err(MutationError::InvalidStructure(
                            "parent component cannot have children".to_string(),
                        ));
                    }
                }

                let mut incoming = vec![node.id.clone()];
                tree::collect_ids(&node.children, &mut incoming);
                for id in incoming {
                    if tree::contains(nodes, &id) {
                        return Err(MutationError::DuplicateNodeId(id));
                    }
                }
                Ok(())
            }

            Mutation::UpdateNode { id, .. } => {
                let nodes = doc.active_nodes().ok_or(MutationError::NoActiveSurface)?;
                tree::find(nodes, id)
                    .map(|_| ())
                    .ok_or_else(|| MutationError::NodeNotFound(id.clone()))
            }

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                ..
            } => {
                if node_id == ROOT_CONTAINER_ID {
                    return Err(MutationError::RootImmutable);
                }
                let nodes = doc.active_nodes().ok_or(MutationError::NoActiveSurface)?;
                let node = tree::find(nodes, node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;

                if let Some(parent_id) = new_parent_id {
                    if parent_id == node_id {
                        return Err(MutationError::CycleDetected);
                    }
                    // The destination must not live inside the moved subtree.
                    if tree::subtree_contains(node, parent_id) {
                        return Err(MutationError::CycleDetected);
                    }
                    let parent = tree::find(nodes, parent_id)
                        .ok_or_else(|| MutationError::ParentNotFound(parent_id.clone()))?;
                    if !parent.kind.accepts_children() {
                        return Err(MutationError::InvalidStructure(
                            "parent component cannot have children".to_string(),
                        ));
                    }
                }
                Ok(())
            }

            Mutation::DeleteNode { id } => {
                if id == ROOT_CONTAINER_ID {
                    return Err(MutationError::RootImmutable);
                }
                let nodes = doc.active_nodes().ok_or(MutationError::NoActiveSurface)?;
                tree::find(nodes, id)
                    .map(|_| ())
                    .ok_or_else(|| MutationError::NodeNotFound(id.clone()))
            }

            Mutation::SelectNode { id } => match id {
                None => Ok(()),
                Some(id) => {
                    let nodes = doc.active_nodes().ok_or(MutationError::NoActiveSurface)?;
                    tree::find(nodes, id)
                        .map(|_| ())
                        .ok_or_else(|| MutationError::NodeNotFound(id.clone()))
                }
            },

            Mutation::SwitchPage { id } => doc
                .page(id)
                .map(|_| ())
                .ok_or_else(|| MutationError::UnknownPage(id.clone())),

            Mutation::RenamePopup { id, .. } | Mutation::SwitchPopup { id } => doc
                .popup(id)
                .map(|_| ())
                .ok_or_else(|| MutationError::UnknownPopup(id.clone())),

            Mutation::RemoveCustomStyle { id } => {
                if doc.custom_styles.iter().any(|s| s.id == *id) {
                    Ok(())
                } else {
                    Err(MutationError::UnknownCustomStyle(id.clone()))
                }
            }
        }
    }

    /// Apply to the document. Assumes [`Mutation::validate`] passed; any
    /// residual failure leaves the caller responsible for restoring state.
    pub(crate) fn apply(
        &self,
        doc: &mut EditorDocument,
        ids: &mut IdGenerator,
    ) -> Result<(), MutationError> {
        match self {
            Mutation::SetViewMode { mode } => {
                doc.view_mode = *mode;
                Ok(())
            }

            Mutation::SetEditingTarget { target } => {
                doc.editing_target = target.clone();
                doc.selected_node_id = None;
                Ok(())
            }

            Mutation::ToggleSiteSection { section, enabled } => {
                match section {
                    SectionKind::Header => doc.header.enabled = *enabled,
                    SectionKind::Footer => doc.footer.enabled = *enabled,
                }
                Ok(())
            }

            Mutation::AddNode {
                parent_id,
                node,
                index,
            } => {
                let nodes = doc.active_nodes().ok_or(MutationError::NoActiveSurface)?;
                let next = tree::insert(
                    nodes,
                    parent_id.as_deref(),
                    Arc::new(node.clone()),
                    *index,
                );
                doc.set_active_nodes(next);
                Ok(())
            }

            Mutation::UpdateNode { id, props } => {
                let nodes = doc.active_nodes().ok_or(MutationError::NoActiveSurface)?;
                let next = tree::update(nodes, id, |node| {
                    let mut patched = node.clone();
                    for (key, value) in props {
                        patched.props.insert(key.clone(), value.clone());
                    }
                    patched
                });
                doc.set_active_nodes(next);
                Ok(())
            }

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                index,
            } => {
                let nodes = doc.active_nodes().ok_or(MutationError::NoActiveSurface)?;
                let (pruned, extracted) = tree::extract(nodes, node_id);
                let moved =
                    extracted.ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                let next = tree::insert(&pruned, new_parent_id.as_deref(), moved, *index);
                doc.set_active_nodes(next);
                Ok(())
            }

            Mutation::DeleteNode { id } => {
                let nodes = doc.active_nodes().ok_or(MutationError::NoActiveSurface)?;
                let (pruned, extracted) = tree::extract(nodes, id);
                doc.set_active_nodes(pruned);
                let selection_removed = match (&doc.selected_node_id, &extracted) {
                    (Some(selected), Some(removed)) => tree::subtree_contains(removed, selected),
                    _ => false,
                };
                if selection_removed {
                    doc.selected_node_id = None;
                }
                Ok(())
            }

            Mutation::SelectNode { id } => {
                doc.selected_node_id = id.clone();
                Ok(())
            }

            Mutation::AddPage { name } => {
                let slug = doc.unique_slug(name);
                let page = Page::new(ids.new_id(), name.clone(), slug);
                doc.current_page_id = page.id.clone();
                doc.pages.push(page);
                doc.editing_target = EditingTarget::Page;
                doc.selected_node_id = None;
                Ok(())
            }

            Mutation::SwitchPage { id } => {
                doc.current_page_id = id.clone();
                doc.editing_target = EditingTarget::Page;
                doc.selected_node_id = None;
                Ok(())
            }

            Mutation::AddPopup { name } => {
                let popup = Popup::new(ids.new_id(), name.clone());
                doc.editing_target = EditingTarget::Popup {
                    popup_id: popup.id.clone(),
                };
                doc.popups.push(popup);
                doc.selected_node_id = None;
                Ok(())
            }

            Mutation::RenamePopup { id, name } => {
                if let Some(popup) = doc.popups.iter_mut().find(|p| p.id == *id) {
                    popup.name = name.clone();
                }
                Ok(())
            }

            Mutation::SwitchPopup { id } => {
                doc.editing_target = EditingTarget::Popup {
                    popup_id: id.clone(),
                };
                doc.selected_node_id = None;
                Ok(())
            }

            Mutation::AddCustomStyle { style } => {
                doc.custom_styles.push(style.clone());
                Ok(())
            }

            Mutation::RemoveCustomStyle { id } => {
                doc.custom_styles.retain(|s| s.id != *id);
                Ok(())
            }
        }
    }
}
