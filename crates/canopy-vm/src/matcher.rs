//! Combinator evaluation.
//!
//! One `Matcher` lives for the duration of a single top-level match. Its
//! state is the cursor, the shared action queue, and a recursion depth
//! counter; everything else it touches is borrowed read-only.
//!
//! Failure discipline: whenever an evaluation returns `Ok(false)`, the
//! cursor and queue are exactly as they were on entry. Combinators that
//! mutate speculatively take a [`Marker`] first and reset on their own
//! failure; combinators that delegate rely on their children honoring the
//! same rule.

use canopy_graph::{Code, CodeId, Graph, RuleRef};

use crate::bindings::Bindings;
use crate::cursor::{Location, Marker};
use crate::error::RuntimeError;
use crate::queue::ActionQueue;
use crate::trace::Tracer;
use crate::tree::TreeModel;

/// Evaluation guards.
///
/// `Apply` is the only recursion entry point, so the depth counter ticks
/// once per rule invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub(crate) recursion_limit: u32,
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            recursion_limit: 1024,
        }
    }
}

pub(crate) struct Matcher<'r, T: TreeModel, C, Tr: Tracer> {
    pub(crate) graph: &'r Graph,
    pub(crate) bindings: &'r Bindings<T, C>,
    pub(crate) tree: &'r T,
    pub(crate) queue: &'r mut ActionQueue<T::Node>,
    pub(crate) location: Location<T>,
    pub(crate) depth: u32,
    pub(crate) limits: Limits,
    pub(crate) tracer: &'r mut Tr,
}

impl<T: TreeModel, C, Tr: Tracer> Matcher<'_, T, C, Tr> {
    pub(crate) fn mark(&self) -> Marker<T> {
        Marker {
            location: self.location,
            queue_mark: self.queue.len(),
        }
    }

    pub(crate) fn reset(&mut self, marker: Marker<T>) {
        let truncated = self.queue.len() - marker.queue_mark;
        self.location = marker.location;
        self.queue.truncate(marker.queue_mark);
        self.tracer.trace_reset(truncated, self.depth);
    }

    /// Step the cursor to the next sibling in the active list. Fails when
    /// the cursor is standalone or the list is exhausted.
    pub(crate) fn next_node(&mut self) -> bool {
        let (Some(root), Some(offset)) = (self.location.root, self.location.offset) else {
            return false;
        };
        match self.tree.next_sibling(root, offset) {
            Some((mark, node)) => {
                self.location.offset = Some(mark);
                self.location.current = Some(node);
                true
            }
            None => false,
        }
    }

    pub(crate) fn eval(&mut self, id: CodeId) -> Result<bool, RuntimeError> {
        let code = self.graph.code(id);
        self.tracer.trace_enter(id, code.op_name(), self.depth);
        let matched = match code {
            Code::Any => Ok(self.location.current.is_some()),
            Code::Begin => Ok(self.begin()),
            Code::End => Ok(self.end_of_list()),
            Code::Leaf => Ok(self.leaf()),
            Code::And(a, b) | Code::Sequence(a, b) => self.chain(a, b),
            Code::Or(a, b) | Code::Select(a, b) => self.choice(a, b),
            Code::Tuple(a, b) => self.tuple(a, b),
            Code::Not(x) => Ok(!self.lookahead(x)?),
            Code::Assert(x) => self.lookahead(x),
            Code::ZeroPlus(x) => {
                self.run_of(x, 0)?;
                Ok(true)
            }
            Code::OnePlus(x) => Ok(self.run_of(x, 0)? > 0),
            Code::Maybe(x) => {
                self.eval(x)?;
                Ok(true)
            }
            Code::Children(x) => self.children(x),
            Code::Range {
                argument,
                minimum,
                maximum,
            } => self.range(argument, minimum, maximum),
            Code::Apply(r) => self.apply(r),
            Code::Root(t) => {
                let ty = self.bindings.node_type(t);
                Ok(self
                    .location
                    .current
                    .is_some_and(|node| self.tree.node_is(ty, node)))
            }
            Code::Predicate(p) => {
                let test = self.bindings.predicate(p);
                Ok(self.location.current.is_some_and(|node| test(self.tree, node)))
            }
            Code::Event(e) => {
                self.tracer
                    .trace_event(self.graph.event_name(e), self.depth);
                self.queue.push(e, self.location.current);
                Ok(true)
            }
        };
        if let Ok(m) = &matched {
            self.tracer.trace_exit(id, code.op_name(), *m, self.depth);
        }
        matched
    }

    /// Both halves at the same position. The first half's failure needs no
    /// reset; the second half's does, to roll back what the first did.
    fn chain(&mut self, a: CodeId, b: CodeId) -> Result<bool, RuntimeError> {
        let marker = self.mark();
        if !self.eval(a)? {
            return Ok(false);
        }
        if !self.eval(b)? {
            self.reset(marker);
            return Ok(false);
        }
        Ok(true)
    }

    /// Ordered choice. A failed first alternative has already cleaned up
    /// after itself, so the second starts from pristine state.
    fn choice(&mut self, a: CodeId, b: CodeId) -> Result<bool, RuntimeError> {
        if self.eval(a)? {
            return Ok(true);
        }
        self.eval(b)
    }

    /// First half here, second half at the next sibling.
    fn tuple(&mut self, a: CodeId, b: CodeId) -> Result<bool, RuntimeError> {
        let marker = self.mark();
        if !self.eval(a)? {
            return Ok(false);
        }
        if !self.next_node() {
            self.reset(marker);
            return Ok(false);
        }
        if !self.eval(b)? {
            self.reset(marker);
            return Ok(false);
        }
        Ok(true)
    }

    /// Evaluate and discard every mutation, keeping only the verdict.
    fn lookahead(&mut self, x: CodeId) -> Result<bool, RuntimeError> {
        let marker = self.mark();
        let matched = self.eval(x)?;
        self.reset(marker);
        Ok(matched)
    }

    /// Greedy run of `x` across siblings, at most `maximum` times
    /// (`maximum == 0` is unbounded). Returns the count; the cursor rests
    /// on the last matched element's position.
    fn run_of(&mut self, x: CodeId, maximum: u32) -> Result<u32, RuntimeError> {
        let mut count = 0u32;
        let mut kept = self.mark();
        loop {
            if maximum != 0 && count >= maximum {
                break;
            }
            if count > 0 && !self.next_node() {
                break;
            }
            if !self.eval(x)? {
                self.reset(kept);
                break;
            }
            count += 1;
            kept = self.mark();
        }
        Ok(count)
    }

    fn range(&mut self, x: CodeId, minimum: u32, maximum: u32) -> Result<bool, RuntimeError> {
        let whole = self.mark();
        let count = self.run_of(x, maximum)?;
        if count < minimum {
            self.reset(whole);
            return Ok(false);
        }
        Ok(true)
    }

    /// Match `x` against the current node's child list in a fresh scope.
    /// The outer cursor is untouched whatever happens inside.
    fn children(&mut self, x: CodeId) -> Result<bool, RuntimeError> {
        let Some(node) = self.location.current else {
            return Ok(false);
        };
        let outer = self.location;
        self.location = match self.tree.first_child(node) {
            Some((mark, child)) => Location {
                root: Some(node),
                offset: Some(mark),
                current: Some(child),
            },
            None => Location {
                root: Some(node),
                offset: None,
                current: None,
            },
        };
        let matched = self.eval(x);
        self.location = outer;
        matched
    }

    /// Descend in place: the current node becomes the list root and its
    /// first child the new current node.
    fn begin(&mut self) -> bool {
        let Some(node) = self.location.current else {
            return false;
        };
        let Some((mark, child)) = self.tree.first_child(node) else {
            return false;
        };
        self.location = Location {
            root: Some(node),
            offset: Some(mark),
            current: Some(child),
        };
        true
    }

    /// True at the end of the active sibling list. A standalone cursor or
    /// an empty child list counts as at-end.
    fn end_of_list(&self) -> bool {
        match (self.location.root, self.location.offset) {
            (Some(root), Some(offset)) => self.tree.next_sibling(root, offset).is_none(),
            _ => true,
        }
    }

    fn leaf(&self) -> bool {
        self.location
            .current
            .is_some_and(|node| self.tree.first_child(node).is_none())
    }

    fn apply(&mut self, r: RuleRef) -> Result<bool, RuntimeError> {
        if self.depth >= self.limits.recursion_limit {
            return Err(RuntimeError::RecursionLimitExceeded(
                self.limits.recursion_limit,
            ));
        }
        self.tracer.trace_rule(self.graph.rule_name(r), self.depth);
        let entry = self.bindings.rule(r);
        self.depth += 1;
        let matched = self.eval(entry);
        self.depth -= 1;
        matched
    }
}
