//! Linear undo/redo history over full mask snapshots.
//!
//! One snapshot per completed stroke or clear. Invariant: `index` always
//! points inside `snapshots`, and the entry at index 0 is the empty baseline
//! captured at load time and never replaced afterwards.

use crate::mask::{MaskLayer, MaskSnapshot};

#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<MaskSnapshot>,
    index: usize,
}

impl History {
    /// Seed the history with the layer's current (empty) state as baseline.
    pub fn new(layer: &MaskLayer) -> Self {
        Self {
            snapshots: vec![layer.capture()],
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// The submission guard: whether the state the history points at has any
    /// marked pixel. False at the baseline and right after a clear, even
    /// though both positions may still be undone or redone.
    pub fn has_marks(&self) -> bool {
        !self.snapshots[self.index].is_blank()
    }

    /// Snapshot the history currently points at.
    pub fn current(&self) -> &MaskSnapshot {
        &self.snapshots[self.index]
    }

    /// Capture the layer as the new head entry. Any entries after the
    /// current index (a stale future from a prior undo) are discarded first.
    pub fn record(&mut self, layer: &MaskLayer) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(layer.capture());
        self.index = self.snapshots.len() - 1;
    }

    /// Step back one entry and restore it into the layer. Returns false at
    /// the baseline (nothing to undo, layer untouched).
    pub fn undo(&mut self, layer: &mut MaskLayer) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.index -= 1;
        layer.restore(&self.snapshots[self.index]);
        true
    }

    /// Step forward one entry and restore it. Returns false at the newest
    /// entry (nothing to redo, layer untouched).
    pub fn redo(&mut self, layer: &mut MaskLayer) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.index += 1;
        layer.restore(&self.snapshots[self.index]);
        true
    }

    /// Restore the empty baseline into the layer and make that restoration
    /// itself the sole follow-up entry, so clearing is undoable. Afterwards
    /// the history holds exactly baseline + post-clear state.
    pub fn clear(&mut self, layer: &mut MaskLayer) {
        layer.restore(&self.snapshots[0]);
        self.snapshots.truncate(1);
        self.index = 0;
        self.record(layer);
    }
}
