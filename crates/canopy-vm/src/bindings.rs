//! Late binding of graph names to host-supplied implementations.
//!
//! A graph stores rule, type, event, and predicate references as interned
//! indices. Before matching, every name is resolved once against a
//! [`Resolver`] into plain arrays, so evaluation does a bounds-free index
//! lookup instead of a by-name search.

use canopy_graph::{CodeId, EventRef, Graph, PredicateRef, RuleRef, TypeRef};

use crate::error::BindError;
use crate::tree::TreeModel;

/// Structural test over the current node, beyond its type.
pub type PredicateFn<T> = fn(&T, <T as TreeModel>::Node) -> bool;

/// Deferred action callback. Returning `false` aborts the flush.
pub type EventFn<C, N> = fn(&mut C, Option<N>) -> bool;

/// Host side of late binding: maps names the grammar uses to concrete
/// type ids and callbacks.
pub trait Resolver<T: TreeModel> {
    /// State threaded through event callbacks during a flush.
    type Context;

    fn resolve_type(&self, name: &str) -> Option<T::TypeId>;

    fn resolve_predicate(&self, name: &str) -> Option<PredicateFn<T>>;

    fn resolve_event(&self, name: &str) -> Option<EventFn<Self::Context, T::Node>>;
}

/// Every name in a graph, resolved. Indexed by the `*Ref` handles the
/// graph's code nodes carry.
pub struct Bindings<T: TreeModel, C> {
    rules: Vec<CodeId>,
    types: Vec<T::TypeId>,
    predicates: Vec<PredicateFn<T>>,
    events: Vec<EventFn<C, T::Node>>,
}

impl<T: TreeModel, C> Bindings<T, C> {
    /// Resolves every name `graph` mentions, failing on the first miss.
    ///
    /// Rule names bind to graph entry points directly; `graph.verify()`
    /// already guarantees those exist, but an `Apply` of a name no rule
    /// defines still surfaces here.
    pub fn resolve<R>(graph: &Graph, resolver: &R) -> Result<Self, BindError>
    where
        R: Resolver<T, Context = C>,
    {
        let mut rules = Vec::with_capacity(graph.rule_names().len());
        for name in graph.rule_names().iter() {
            let entry = graph
                .rule_entry(name)
                .ok_or_else(|| BindError::UnresolvedRule(name.to_owned()))?;
            rules.push(entry);
        }

        let mut types = Vec::with_capacity(graph.type_names().len());
        for name in graph.type_names().iter() {
            let ty = resolver
                .resolve_type(name)
                .ok_or_else(|| BindError::UnresolvedType(name.to_owned()))?;
            types.push(ty);
        }

        let mut predicates = Vec::with_capacity(graph.predicate_names().len());
        for name in graph.predicate_names().iter() {
            let f = resolver
                .resolve_predicate(name)
                .ok_or_else(|| BindError::UnresolvedPredicate(name.to_owned()))?;
            predicates.push(f);
        }

        let mut events = Vec::with_capacity(graph.event_names().len());
        for name in graph.event_names().iter() {
            let f = resolver
                .resolve_event(name)
                .ok_or_else(|| BindError::UnresolvedEvent(name.to_owned()))?;
            events.push(f);
        }

        Ok(Bindings {
            rules,
            types,
            predicates,
            events,
        })
    }

    #[inline]
    pub(crate) fn rule(&self, r: RuleRef) -> CodeId {
        self.rules[r.index()]
    }

    #[inline]
    pub(crate) fn node_type(&self, t: TypeRef) -> T::TypeId {
        self.types[t.index()]
    }

    #[inline]
    pub(crate) fn predicate(&self, p: PredicateRef) -> PredicateFn<T> {
        self.predicates[p.index()]
    }

    #[inline]
    pub(crate) fn event(&self, e: EventRef) -> EventFn<C, T::Node> {
        self.events[e.index()]
    }
}
