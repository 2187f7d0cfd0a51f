//! Host tree abstraction.
//!
//! The engine never allocates, frees, or stores host nodes beyond the
//! current cursor and queued action captures. Navigation is expressed as
//! first-child / next-sibling probes over opaque handles; the position
//! token (`Mark`) is produced and consumed by the host, never interpreted.

use std::fmt::Debug;

pub trait TreeModel {
    /// Opaque node handle.
    ///
    /// `PartialEq`/`Debug` are required so cursor state can be compared and
    /// reported in tests and traces.
    type Node: Copy + PartialEq + Debug;

    /// Opaque sibling-position token under one parent.
    type Mark: Copy + PartialEq + Debug;

    /// Token for a structural node-type test.
    type TypeId: Copy;

    /// First child of `parent`, with its position token, if any.
    fn first_child(&self, parent: Self::Node) -> Option<(Self::Mark, Self::Node)>;

    /// Sibling following position `at` under `parent`, if any.
    fn next_sibling(&self, parent: Self::Node, at: Self::Mark)
    -> Option<(Self::Mark, Self::Node)>;

    /// Structural type test, used by `Code::Root`.
    fn node_is(&self, ty: Self::TypeId, node: Self::Node) -> bool;
}
