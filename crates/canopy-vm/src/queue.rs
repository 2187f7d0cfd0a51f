//! Deferred action queue.
//!
//! Events matched during evaluation are recorded here instead of firing
//! immediately; the engine flushes the queue only after a whole match
//! succeeds. Backtracking discards speculative entries by truncating to a
//! watermark, so the backing storage is reused across attempts.

use canopy_graph::EventRef;

/// One recorded event occurrence, with the node the cursor stood on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueuedAction<N> {
    pub event: EventRef,
    pub node: Option<N>,
}

#[derive(Debug, Clone)]
pub struct ActionQueue<N> {
    entries: Vec<QueuedAction<N>>,
}

impl<N> ActionQueue<N> {
    pub fn new() -> Self {
        ActionQueue {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, event: EventRef, node: Option<N>) {
        self.entries.push(QueuedAction { event, node });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry recorded after `watermark`.
    pub(crate) fn truncate(&mut self, watermark: usize) {
        debug_assert!(watermark <= self.entries.len(), "stale queue watermark");
        self.entries.truncate(watermark);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn as_slice(&self) -> &[QueuedAction<N>] {
        &self.entries
    }
}

impl<N: Copy> ActionQueue<N> {
    pub(crate) fn get(&self, index: usize) -> Option<QueuedAction<N>> {
        self.entries.get(index).copied()
    }
}

impl<N> Default for ActionQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
