use thiserror::Error;

/// A name in the graph that the resolver could not supply.
///
/// Binding is all-or-nothing: the first unresolved name aborts it, so a
/// grammar with a typo fails before any matching starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("unresolved rule `{0}`")]
    UnresolvedRule(String),
    #[error("unresolved node type `{0}`")]
    UnresolvedType(String),
    #[error("unresolved event `{0}`")]
    UnresolvedEvent(String),
    #[error("unresolved predicate `{0}`")]
    UnresolvedPredicate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("no rule named `{0}` in graph")]
    UnknownRule(String),
    #[error("recursion limit of {0} exceeded")]
    RecursionLimitExceeded(u32),
    #[error("action {index} (`{name}`) reported failure")]
    ActionFailed { index: usize, name: String },
}
