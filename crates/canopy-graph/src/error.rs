//! Structural graph errors.

/// Errors reported by [`Graph::verify`](crate::Graph::verify) and the
/// builder. These are compiler bugs or misassembled graphs, not match
/// failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A combinator references a slot outside the arena.
    #[error("code {at} references combinator slot {to} outside the graph")]
    DanglingCode { at: usize, to: usize },

    /// A bounded `Range` whose maximum is below its minimum.
    #[error("range at code {at} has maximum {maximum} below minimum {minimum}")]
    RangeBounds {
        at: usize,
        minimum: u32,
        maximum: u32,
    },

    /// The same rule name registered twice.
    #[error("rule `{0}` is defined twice")]
    DuplicateRule(String),

    /// A rule entry references a slot outside the arena.
    #[error("rule `{name}` references combinator slot {to} outside the graph")]
    DanglingRule { name: String, to: usize },
}
