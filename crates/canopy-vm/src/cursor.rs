//! Two-level match cursor and restore points.

use std::fmt;

use crate::tree::TreeModel;

/// Where the matcher currently stands in the host tree.
///
/// `root` and `offset` describe the active sibling list (the parent being
/// walked and the host position token inside it); `current` is the node
/// combinators test. A standalone cursor has a `current` node but no list,
/// which is how a match starts and how `Children` re-enters a subtree.
pub struct Location<T: TreeModel> {
    pub root: Option<T::Node>,
    pub offset: Option<T::Mark>,
    pub current: Option<T::Node>,
}

impl<T: TreeModel> Location<T> {
    /// Cursor standing on `node` with no enclosing sibling list.
    pub fn standalone(node: T::Node) -> Self {
        Location {
            root: None,
            offset: None,
            current: Some(node),
        }
    }
}

// Manual impls: derives would demand T: Clone etc. even though only the
// associated types are stored, and those are already Copy.
impl<T: TreeModel> Clone for Location<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TreeModel> Copy for Location<T> {}

impl<T: TreeModel> PartialEq for Location<T> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.offset == other.offset && self.current == other.current
    }
}

impl<T: TreeModel> fmt::Debug for Location<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Location")
            .field("root", &self.root)
            .field("offset", &self.offset)
            .field("current", &self.current)
            .finish()
    }
}

/// Restore point taken before a speculative evaluation.
///
/// Captures the cursor and the action queue watermark together, so one
/// reset rolls back both.
pub struct Marker<T: TreeModel> {
    pub(crate) location: Location<T>,
    pub(crate) queue_mark: usize,
}

impl<T: TreeModel> Clone for Marker<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TreeModel> Copy for Marker<T> {}

impl<T: TreeModel> fmt::Debug for Marker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Marker")
            .field("location", &self.location)
            .field("queue_mark", &self.queue_mark)
            .finish()
    }
}
