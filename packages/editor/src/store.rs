//! # Editor Store
//!
//! The single mutation entry point over the editor document.
//!
//! The store is an explicit handle the host application owns and passes to
//! every consumer; there is no ambient singleton. Each [`Mutation`] is
//! validated against the current document first (an invalid edit resolves
//! to [`Applied::Noop`] with a debug trace, never an error), then applied
//! atomically, with structural edits recording their pre-mutation snapshot
//! into history.

use crate::document::{DocumentSnapshot, EditorDocument};
use crate::history::History;
use crate::mutations::Mutation;
use pagewright_dom::IdGenerator;

/// Result of handing a mutation to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The document changed.
    Changed,
    /// The mutation was rejected or had no effect; the document is
    /// untouched.
    Noop,
}

impl Applied {
    pub fn changed(self) -> bool {
        matches!(self, Applied::Changed)
    }
}

/// Owns the document, its history, and the id generator.
#[derive(Debug)]
pub struct EditorStore {
    document: EditorDocument,
    history: History,
    ids: IdGenerator,
    batch_depth: usize,
    pending_batch: Option<DocumentSnapshot>,
    batch_dirty: bool,
}

impl EditorStore {
    /// A store over the fresh default document.
    pub fn new() -> Self {
        Self::with_document(EditorDocument::default())
    }

    pub fn with_document(document: EditorDocument) -> Self {
        let ids = IdGenerator::new(&document.current_page_id);
        Self {
            document,
            history: History::new(),
            ids,
            batch_depth: 0,
            pending_batch: None,
            batch_dirty: false,
        }
    }

    /// Restore a store from a persisted blob, falling back to the default
    /// document when the blob is missing or malformed. History starts empty.
    pub fn restore(blob: Option<&str>) -> Self {
        Self::with_document(crate::persistence::from_blob(blob))
    }

    pub fn document(&self) -> &EditorDocument {
        &self.document
    }

    /// Validate and apply one mutation. Structural mutations record their
    /// pre-mutation snapshot; everything invalid degrades to a no-op.
    pub fn apply(&mut self, mutation: Mutation) -> Applied {
        if let Err(err) = mutation.validate(&self.document) {
            tracing::debug!(mutation = mutation.name(), error = %err, "mutation rejected");
            return Applied::Noop;
        }

        let snapshot = self.document.snapshot();
        match mutation.apply(&mut self.document, &mut self.ids) {
            Ok(()) => {
                if mutation.is_structural() {
                    self.record(snapshot);
                }
                Applied::Changed
            }
            Err(err) => {
                self.document.restore(snapshot);
                tracing::debug!(mutation = mutation.name(), error = %err, "mutation failed, state restored");
                Applied::Noop
            }
        }
    }

    /// Group the structural mutations issued until `end_batch` under one
    /// history entry, so a multi-mutation gesture undoes in one step.
    pub fn begin_batch(&mut self) {
        if self.batch_depth == 0 {
            self.pending_batch = Some(self.document.snapshot());
            self.batch_dirty = false;
        }
        self.batch_depth += 1;
    }

    pub fn end_batch(&mut self) {
        if self.batch_depth == 0 {
            return;
        }
        self.batch_depth -= 1;
        if self.batch_depth == 0 {
            if let Some(snapshot) = self.pending_batch.take() {
                if self.batch_dirty {
                    self.history.record(snapshot);
                }
            }
        }
    }

    fn record(&mut self, snapshot: DocumentSnapshot) {
        if self.batch_depth > 0 {
            self.batch_dirty = true;
        } else {
            self.history.record(snapshot);
        }
    }

    /// Swap back to the most recent past snapshot. Clears the selection; the
    /// restored tree may no longer contain the selected node.
    pub fn undo(&mut self) -> bool {
        let current = self.document.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.document.restore(previous);
                self.document.selected_node_id = None;
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let current = self.document.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.document.restore(next);
                self.document.selected_node_id = None;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Mint a node id that no surface currently uses. Restored blobs may
    /// carry ids from an older generator, so collisions re-roll.
    pub fn fresh_node_id(&mut self) -> String {
        loop {
            let id = self.ids.new_id();
            if !self.document.contains_node_anywhere(&id) {
                return id;
            }
        }
    }
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}
