//! # Undo/Redo History
//!
//! Linear history over whole-document structural snapshots.
//!
//! ## Design
//!
//! - Every structural mutation records the pre-mutation snapshot
//! - Recording clears the redo side (a new edit invalidates the future)
//! - The past is bounded; the oldest snapshot is evicted beyond the cap
//! - Undo/redo are snapshot swaps, not replays, so they are O(1) thanks to
//!   `Arc`-shared subtrees

use crate::document::DocumentSnapshot;

/// Bounded past / unbounded-but-derived future of document snapshots.
#[derive(Debug)]
pub struct History {
    past: Vec<DocumentSnapshot>,
    future: Vec<DocumentSnapshot>,
    max_levels: usize,
}

impl History {
    pub const DEFAULT_MAX_LEVELS: usize = 50;

    pub fn new() -> Self {
        Self::with_max_levels(Self::DEFAULT_MAX_LEVELS)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            max_levels,
        }
    }

    /// Record a pre-mutation snapshot. Evicts the oldest entry beyond the
    /// cap and clears the redo side.
    pub fn record(&mut self, snapshot: DocumentSnapshot) {
        self.past.push(snapshot);
        if self.max_levels > 0 && self.past.len() > self.max_levels {
            self.past.remove(0);
        }
        self.future.clear();
    }

    /// Pop the most recent past snapshot, parking `current` on the redo
    /// side. `None` when there is nothing to undo.
    pub fn undo(&mut self, current: DocumentSnapshot) -> Option<DocumentSnapshot> {
        let previous = self.past.pop()?;
        self.future.push(current);
        Some(previous)
    }

    /// Pop the next future snapshot, parking `current` back on the past
    /// side. `None` when there is nothing to redo.
    pub fn redo(&mut self, current: DocumentSnapshot) -> Option<DocumentSnapshot> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
