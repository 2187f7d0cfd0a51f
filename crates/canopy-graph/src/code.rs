//! The closed combinator instruction set.

use crate::names::{EventRef, PredicateRef, RuleRef, TypeRef};

/// Handle to a combinator slot in a [`Graph`](crate::Graph) arena.
///
/// Cycles occur only through `Apply`'s name indirection, so the arena itself
/// is acyclic and handles never need fixing up after construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CodeId(pub(crate) u32);

impl CodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw index for display/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// One combinator of a compiled grammar.
///
/// Node-level operators test the cursor's current node in place; list-level
/// operators (`Tuple`, the repetitions) advance across a run of siblings.
/// `Sequence`/`Select` are grammar-level aliases kept for readability; the
/// matcher evaluates them exactly as `And`/`Or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// Succeeds iff a current node exists.
    Any,
    /// Enter the current node's child list in place: its first child becomes
    /// the new current node.
    Begin,
    /// Succeeds iff no sibling follows the current position.
    End,
    /// Succeeds iff the current node has no children.
    Leaf,
    /// Both halves at the same position; second failure rolls back the first.
    And(CodeId, CodeId),
    /// Ordered choice: first success wins, second never attempted.
    Or(CodeId, CodeId),
    /// Alias of `And`.
    Sequence(CodeId, CodeId),
    /// Alias of `Or`.
    Select(CodeId, CodeId),
    /// First half at the current sibling, second at the next sibling.
    Tuple(CodeId, CodeId),
    /// Negative lookahead: no mutation ever survives.
    Not(CodeId),
    /// Positive lookahead: no mutation survives, even on success.
    Assert(CodeId),
    /// Greedy repetition over siblings; always succeeds.
    ZeroPlus(CodeId),
    /// Greedy repetition over siblings; at least one success required.
    OnePlus(CodeId),
    /// Attempt; always succeeds.
    Maybe(CodeId),
    /// Match the argument against the current node's child list in its own
    /// scope; the outer cursor is restored afterward either way.
    Children(CodeId),
    /// Bounded repetition over siblings. `maximum == 0` means unbounded.
    Range {
        argument: CodeId,
        minimum: u32,
        maximum: u32,
    },
    /// Invoke a named rule recursively. The sole recursion entry point.
    Apply(RuleRef),
    /// Test the current node against a named host type.
    Root(TypeRef),
    /// Call a named side-effect-free host test on the current node.
    Predicate(PredicateRef),
    /// Queue a named deferred action capturing the current node.
    Event(EventRef),
}

impl Code {
    /// Operator name for dumps and traces.
    pub fn op_name(&self) -> &'static str {
        match self {
            Code::Any => "Any",
            Code::Begin => "Begin",
            Code::End => "End",
            Code::Leaf => "Leaf",
            Code::And(..) => "And",
            Code::Or(..) => "Or",
            Code::Sequence(..) => "Sequence",
            Code::Select(..) => "Select",
            Code::Tuple(..) => "Tuple",
            Code::Not(..) => "Not",
            Code::Assert(..) => "Assert",
            Code::ZeroPlus(..) => "ZeroPlus",
            Code::OnePlus(..) => "OnePlus",
            Code::Maybe(..) => "Maybe",
            Code::Children(..) => "Children",
            Code::Range { .. } => "Range",
            Code::Apply(..) => "Apply",
            Code::Root(..) => "Root",
            Code::Predicate(..) => "Predicate",
            Code::Event(..) => "Event",
        }
    }
}
