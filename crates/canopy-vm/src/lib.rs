//! Runtime matcher for Canopy combinator graphs.
//!
//! The engine evaluates a compiled combinator [`Graph`](canopy_graph::Graph)
//! against a host-supplied tree, reached only through the [`TreeModel`]
//! abstraction, and queues deferred actions that run after a fully
//! successful match.
//!
//! Every combinator honors one invariant: a failing evaluation leaves the
//! cursor and the action queue exactly as it found them. That is what makes
//! naive backtracking composable, and it is the property most of the tests
//! in this crate pin down.

mod bindings;
mod cursor;
mod engine;
mod error;
mod matcher;
mod queue;
mod trace;
mod tree;

#[cfg(test)]
mod fixture;


pub use bindings::{Bindings, EventFn, PredicateFn, Resolver};
pub use cursor::{Location, Marker};
pub use engine::Engine;
pub use error::{BindError, RuntimeError};
pub use matcher::Limits;
pub use queue::{ActionQueue, QueuedAction};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use tree::TreeModel;
