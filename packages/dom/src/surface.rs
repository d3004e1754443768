use crate::node::ComponentNode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One page of the site. Created with a single root container; the slug is
/// derived from the name by the editor and unique across pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub nodes: Vec<Arc<ComponentNode>>,
}

impl Page {
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            nodes: vec![Arc::new(ComponentNode::root_container())],
        }
    }
}

/// Site-wide header or footer. Persists independently of pages and is shown
/// on every page once enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSection {
    pub enabled: bool,
    pub nodes: Vec<Arc<ComponentNode>>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            enabled: false,
            nodes: vec![Arc::new(ComponentNode::root_container())],
        }
    }
}

/// Selector for the two site sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    Header,
    Footer,
}

/// A popup surface, addressable as an editing target alongside pages and
/// site sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    pub id: String,
    pub name: String,
    pub nodes: Vec<Arc<ComponentNode>>,
}

impl Popup {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nodes: vec![Arc::new(ComponentNode::root_container())],
        }
    }
}

/// A named, globally reusable CSS rule. Nodes reference it by id via their
/// `customStyleId` prop; it is never embedded in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomStyle {
    pub id: String,
    pub name: String,
    #[serde(rename = "className")]
    pub class_name: String,
    pub css: String,
}

/// Which surface is currently the target of edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EditingTarget {
    Page,
    Header,
    Footer,
    Popup { popup_id: String },
}

/// Display-only canvas width preset. Never enters history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Desktop,
    Tablet,
    Mobile,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Desktop
    }
}
