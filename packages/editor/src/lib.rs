//! # Pagewright Editor
//!
//! Core document editing engine for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ dom: ComponentNode tree + pure tree ops     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorStore                         │
//! │  - One mutation entry point, closed intents │
//! │  - Validation first, invalid edits no-op    │
//! │  - Snapshot-based undo/redo (bounded past)  │
//! │  - Active-surface routing (page/section/    │
//! │    popup) with uniform node operations      │
//! │  - Persistence blob + render snapshot       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ inspector: typed property projections       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The document is the source of truth**: panels and canvases derive
//!    their views from [`EditorDocument`] and push edits back as
//!    [`Mutation`] intents.
//! 2. **Mutations never throw**: a missing target, a cycle-creating move, or
//!    a touch of the reserved root resolves to a no-op
//!    ([`Applied::Noop`]), never an error to the caller.
//! 3. **History is snapshots, not inverse ops**: subtrees are `Arc`-shared,
//!    so a whole-document snapshot costs one shallow copy.
//! 4. **Single writer**: every mutation completes before the next is
//!    accepted; there is no async mutation path in the core.
//!
//! ## Usage
//!
//! ```rust
//! use pagewright_editor::{EditorStore, Mutation};
//! use pagewright_dom::{ComponentNode, ComponentType, ROOT_CONTAINER_ID};
//!
//! let mut store = EditorStore::new();
//!
//! let node = ComponentNode::new("hero", ComponentType::Text)
//!     .with_prop("className", "text-lg");
//! store.apply(Mutation::AddNode {
//!     parent_id: Some(ROOT_CONTAINER_ID.to_string()),
//!     node,
//!     index: None,
//! });
//!
//! assert!(store.can_undo());
//! store.undo();
//! ```

mod document;
mod errors;
mod export;
mod history;
mod mutations;
mod persistence;
mod store;

pub use document::{DocumentSnapshot, EditorDocument};
pub use errors::EditorError;
pub use export::{render_snapshot, RenderSnapshot};
pub use history::History;
pub use mutations::{Mutation, MutationError};
pub use persistence::{from_blob, to_blob};
pub use store::{Applied, EditorStore};

// Re-export the data model for convenience
pub use pagewright_dom::{
    ComponentNode, ComponentType, CustomStyle, EditingTarget, Page, Popup, SectionKind,
    SiteSection, ViewMode, ROOT_CONTAINER_ID,
};
