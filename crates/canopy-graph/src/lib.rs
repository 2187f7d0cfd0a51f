//! Combinator graph data model for Canopy tree matching.
//!
//! A grammar is compiled (by an external front-end) into an immutable arena
//! of [`Code`] combinators plus per-category name tables for the symbols the
//! grammar refers to: rules, node types, events, and predicates. The matcher
//! in `canopy-vm` walks a host tree against this graph.
//!
//! Nothing here is mutated after [`GraphBuilder::finish`]: a verified
//! [`Graph`] can be shared read-only across threads for the lifetime of the
//! process.

mod builder;
mod code;
mod dump;
mod error;
mod graph;
mod names;


pub use builder::GraphBuilder;
pub use code::{Code, CodeId};
pub use dump::dump;
pub use error::GraphError;
pub use graph::Graph;
pub use names::{EventRef, NameTable, PredicateRef, RuleRef, TypeRef};
