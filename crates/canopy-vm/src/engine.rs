//! Match driver and action flush.

use canopy_graph::Graph;

use crate::bindings::{Bindings, Resolver};
use crate::cursor::Location;
use crate::error::{BindError, RuntimeError};
use crate::matcher::{Limits, Matcher};
use crate::queue::{ActionQueue, QueuedAction};
use crate::trace::{NoopTracer, Tracer};
use crate::tree::TreeModel;

/// A bound grammar ready to run matches.
///
/// Construction resolves every name the graph uses; after that, matching
/// needs no lookups by string except the top-level rule name. The queue is
/// owned here so its storage survives across matches.
pub struct Engine<'g, T: TreeModel, C> {
    graph: &'g Graph,
    bindings: Bindings<T, C>,
    queue: ActionQueue<T::Node>,
    limits: Limits,
}

impl<T: TreeModel, C> core::fmt::Debug for Engine<'_, T, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Engine")
            .field("graph", &self.graph)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl<'g, T: TreeModel, C> Engine<'g, T, C> {
    /// Binds `graph` against `resolver`, failing on the first name the
    /// resolver cannot supply.
    pub fn new<R>(graph: &'g Graph, resolver: &R) -> Result<Self, BindError>
    where
        R: Resolver<T, Context = C>,
    {
        let bindings = Bindings::resolve(graph, resolver)?;
        Ok(Engine {
            graph,
            bindings,
            queue: ActionQueue::new(),
            limits: Limits::default(),
        })
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Matches `rule` with the cursor standing on `root`, queuing events as
    /// a side effect of success. A failed or errored match leaves the queue
    /// as it was before the call.
    pub fn run_match(
        &mut self,
        tree: &T,
        rule: &str,
        root: T::Node,
    ) -> Result<bool, RuntimeError> {
        self.run_match_with(tree, rule, root, &mut NoopTracer)
    }

    /// [`run_match`](Self::run_match) with an explicit tracer.
    pub fn run_match_with<Tr: Tracer>(
        &mut self,
        tree: &T,
        rule: &str,
        root: T::Node,
        tracer: &mut Tr,
    ) -> Result<bool, RuntimeError> {
        let entry = self
            .graph
            .rule_entry(rule)
            .ok_or_else(|| RuntimeError::UnknownRule(rule.to_owned()))?;
        let queue_mark = self.queue.len();
        let mut matcher = Matcher {
            graph: self.graph,
            bindings: &self.bindings,
            tree,
            queue: &mut self.queue,
            location: Location::standalone(root),
            depth: 0,
            limits: self.limits,
            tracer,
        };
        match matcher.eval(entry) {
            Ok(matched) => Ok(matched),
            Err(err) => {
                self.queue.truncate(queue_mark);
                Err(err)
            }
        }
    }

    /// Actions queued so far, in match order.
    pub fn queued(&self) -> &[QueuedAction<T::Node>] {
        self.queue.as_slice()
    }

    /// Runs every queued action in order against `context`, then empties
    /// the queue. An action returning `false` aborts the flush; already-run
    /// actions are not undone, and the remainder is discarded.
    pub fn flush_actions(&mut self, context: &mut C) -> Result<usize, RuntimeError> {
        let mut index = 0;
        while let Some(action) = self.queue.get(index) {
            let run = self.bindings.event(action.event);
            if !run(context, action.node) {
                let name = self.graph.event_name(action.event).to_owned();
                self.queue.clear();
                return Err(RuntimeError::ActionFailed { index, name });
            }
            index += 1;
        }
        self.queue.clear();
        Ok(index)
    }
}
