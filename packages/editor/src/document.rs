//! # Editor Document
//!
//! The aggregate editing state: pages, site sections, popups, custom styles,
//! the active editing target, and the transient selection/view-mode flags.
//!
//! All node-bearing surfaces share one shape (a sequence of `Arc`-shared
//! root nodes), so the store can run every structural operation uniformly
//! against whichever surface is active and write the result back to the
//! right slot.

use pagewright_dom::{
    tree, ComponentNode, CustomStyle, EditingTarget, Page, Popup, SiteSection, ViewMode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The whole editor aggregate. `Default` is the fresh document: one "Home"
/// page holding a single root container, both site sections present but
/// disabled, nothing selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorDocument {
    pub pages: Vec<Page>,
    pub current_page_id: String,
    pub header: SiteSection,
    pub footer: SiteSection,
    #[serde(default)]
    pub popups: Vec<Popup>,
    #[serde(default)]
    pub custom_styles: Vec<CustomStyle>,
    pub editing_target: EditingTarget,
    #[serde(default)]
    pub selected_node_id: Option<String>,
    #[serde(default)]
    pub view_mode: ViewMode,
}

impl Default for EditorDocument {
    fn default() -> Self {
        let home = Page::new("page-1", "Home", "home");
        Self {
            current_page_id: home.id.clone(),
            pages: vec![home],
            header: SiteSection::default(),
            footer: SiteSection::default(),
            popups: Vec::new(),
            custom_styles: Vec::new(),
            editing_target: EditingTarget::Page,
            selected_node_id: None,
            view_mode: ViewMode::default(),
        }
    }
}

impl EditorDocument {
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == self.current_page_id)
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn popup(&self, id: &str) -> Option<&Popup> {
        self.popups.iter().find(|p| p.id == id)
    }

    /// The node sequence of whichever surface is the current editing target.
    /// `None` when the target points at a page or popup that no longer
    /// exists.
    pub fn active_nodes(&self) -> Option<&[Arc<ComponentNode>]> {
        match &self.editing_target {
            EditingTarget::Page => self.current_page().map(|p| p.nodes.as_slice()),
            EditingTarget::Header => Some(self.header.nodes.as_slice()),
            EditingTarget::Footer => Some(self.footer.nodes.as_slice()),
            EditingTarget::Popup { popup_id } => {
                self.popup(popup_id).map(|p| p.nodes.as_slice())
            }
        }
    }

    /// Write a transformed node sequence back to the active surface's slot.
    /// Returns false (leaving the document untouched) when the target
    /// surface is gone.
    pub(crate) fn set_active_nodes(&mut self, nodes: Vec<Arc<ComponentNode>>) -> bool {
        match self.editing_target.clone() {
            EditingTarget::Page => {
                let id = self.current_page_id.clone();
                match self.pages.iter_mut().find(|p| p.id == id) {
                    Some(page) => {
                        page.nodes = nodes;
                        true
                    }
                    None => false,
                }
            }
            EditingTarget::Header => {
                self.header.nodes = nodes;
                true
            }
            EditingTarget::Footer => {
                self.footer.nodes = nodes;
                true
            }
            EditingTarget::Popup { popup_id } => {
                match self.popups.iter_mut().find(|p| p.id == popup_id) {
                    Some(popup) => {
                        popup.nodes = nodes;
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Depth-first lookup within the active surface only.
    pub fn find_in_active(&self, id: &str) -> Option<&Arc<ComponentNode>> {
        tree::find(self.active_nodes()?, id)
    }

    /// Whether any surface (any page, either section, any popup) contains a
    /// node with this id. Used to keep freshly minted ids collision-free
    /// even after restoring a persisted blob.
    pub fn contains_node_anywhere(&self, id: &str) -> bool {
        self.pages.iter().any(|p| tree::contains(&p.nodes, id))
            || tree::contains(&self.header.nodes, id)
            || tree::contains(&self.footer.nodes, id)
            || self.popups.iter().any(|p| tree::contains(&p.nodes, id))
    }

    /// Derive a URL-safe slug from a page name, unique across pages.
    pub fn unique_slug(&self, name: &str) -> String {
        let base = slug::slugify(name);
        let base = if base.is_empty() {
            "page".to_string()
        } else {
            base
        };
        if !self.pages.iter().any(|p| p.slug == base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.pages.iter().any(|p| p.slug == candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Capture the structural state for history. Selection, view mode, and
    /// custom styles stay out: the first two are transient UI state, and
    /// custom-style edits deliberately bypass history.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            pages: self.pages.clone(),
            current_page_id: self.current_page_id.clone(),
            header: self.header.clone(),
            footer: self.footer.clone(),
            popups: self.popups.clone(),
            editing_target: self.editing_target.clone(),
        }
    }

    pub(crate) fn restore(&mut self, snapshot: DocumentSnapshot) {
        self.pages = snapshot.pages;
        self.current_page_id = snapshot.current_page_id;
        self.header = snapshot.header;
        self.footer = snapshot.footer;
        self.popups = snapshot.popups;
        self.editing_target = snapshot.editing_target;
    }
}

/// A whole-document structural snapshot. Cheap to take: every node subtree
/// is `Arc`-shared with the live document until one of them is edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub pages: Vec<Page>,
    pub current_page_id: String,
    pub header: SiteSection,
    pub footer: SiteSection,
    pub popups: Vec<Popup>,
    pub editing_target: EditingTarget,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_dom::ROOT_CONTAINER_ID;

    #[test]
    fn test_default_document_shape() {
        let doc = EditorDocument::default();
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(doc.pages[0].slug, "home");
        assert_eq!(doc.current_page_id, doc.pages[0].id);
        assert_eq!(doc.editing_target, EditingTarget::Page);
        assert!(doc.selected_node_id.is_none());

        let nodes = doc.active_nodes().unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, ROOT_CONTAINER_ID);
        assert!(nodes[0].children.is_empty());
    }

    #[test]
    fn test_active_nodes_follows_editing_target() {
        let mut doc = EditorDocument::default();

        doc.editing_target = EditingTarget::Header;
        let header_ptr = doc.header.nodes[0].id.clone();
        assert_eq!(doc.active_nodes().unwrap()[0].id, header_ptr);

        doc.editing_target = EditingTarget::Popup {
            popup_id: "missing".to_string(),
        };
        assert!(doc.active_nodes().is_none());

        doc.popups.push(Popup::new("popup-1", "Newsletter"));
        doc.editing_target = EditingTarget::Popup {
            popup_id: "popup-1".to_string(),
        };
        assert!(doc.active_nodes().is_some());
    }

    #[test]
    fn test_set_active_nodes_writes_back_to_the_right_slot() {
        let mut doc = EditorDocument::default();
        doc.editing_target = EditingTarget::Footer;

        let next = vec![std::sync::Arc::new(ComponentNode::root_container())];
        assert!(doc.set_active_nodes(next));

        doc.editing_target = EditingTarget::Popup {
            popup_id: "missing".to_string(),
        };
        let orphan = vec![std::sync::Arc::new(ComponentNode::root_container())];
        assert!(!doc.set_active_nodes(orphan));
    }

    #[test]
    fn test_unique_slug_derivation() {
        let mut doc = EditorDocument::default();
        assert_eq!(doc.unique_slug("About Us"), "about-us");
        assert_eq!(doc.unique_slug("Home"), "home-2");

        doc.pages.push(Page::new("page-2", "Home", "home-2"));
        assert_eq!(doc.unique_slug("Home"), "home-3");
        assert_eq!(doc.unique_slug(""), "page");
    }

    #[test]
    fn test_snapshot_excludes_transient_state() {
        let mut doc = EditorDocument::default();
        doc.selected_node_id = Some("n1".to_string());
        doc.view_mode = ViewMode::Mobile;

        let snapshot = doc.snapshot();
        let mut restored = EditorDocument::default();
        restored.restore(snapshot);

        assert_eq!(restored.pages, doc.pages);
        assert!(restored.selected_node_id.is_none());
        assert_eq!(restored.view_mode, ViewMode::Desktop);
    }
}
