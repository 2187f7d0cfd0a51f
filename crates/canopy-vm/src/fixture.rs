//! Shared test host: a slice-backed tree and a table-driven resolver.

use crate::bindings::{EventFn, PredicateFn, Resolver};
use crate::tree::TreeModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub usize);

#[derive(Debug)]
struct TestNode {
    ty: u16,
    children: Vec<usize>,
}

/// Arena tree with string-named node types. Children are stored as index
/// vectors, so the sibling mark is simply a position in the parent's list.
#[derive(Debug)]
pub struct TestTree {
    nodes: Vec<TestNode>,
    types: Vec<&'static str>,
}

impl TestTree {
    pub fn new(types: &[&'static str]) -> Self {
        TestTree {
            nodes: Vec::new(),
            types: types.to_vec(),
        }
    }

    pub fn type_id(&self, name: &str) -> Option<u16> {
        self.types
            .iter()
            .position(|&t| t == name)
            .map(|i| i as u16)
    }

    pub fn node(&mut self, ty: &'static str, children: &[NodeId]) -> NodeId {
        let ty = self.type_id(ty).expect("unregistered node type");
        let id = self.nodes.len();
        self.nodes.push(TestNode {
            ty,
            children: children.iter().map(|c| c.0).collect(),
        });
        NodeId(id)
    }
}

impl TreeModel for TestTree {
    type Node = NodeId;
    type Mark = usize;
    type TypeId = u16;

    fn first_child(&self, parent: NodeId) -> Option<(usize, NodeId)> {
        let first = *self.nodes[parent.0].children.first()?;
        Some((0, NodeId(first)))
    }

    fn next_sibling(&self, parent: NodeId, at: usize) -> Option<(usize, NodeId)> {
        let next = *self.nodes[parent.0].children.get(at + 1)?;
        Some((at + 1, NodeId(next)))
    }

    fn node_is(&self, ty: u16, node: NodeId) -> bool {
        self.nodes[node.0].ty == ty
    }
}

/// Event callbacks append their name to the context, so tests assert on
/// flush order directly.
pub type EventLog = Vec<&'static str>;

macro_rules! record_event {
    ($fn_name:ident, $label:literal) => {
        fn $fn_name(log: &mut EventLog, _node: Option<NodeId>) -> bool {
            log.push($label);
            true
        }
    };
}

record_event!(ev_begin, "begin");
record_event!(ev_end, "end");
record_event!(ev_lets, "lets");
record_event!(ev_value, "value");
record_event!(ev_assign, "assign");
record_event!(ev_symbol, "symbol");
record_event!(ev_statement, "statement");
record_event!(ev_a, "a");
record_event!(ev_b, "b");

fn ev_boom(log: &mut EventLog, _node: Option<NodeId>) -> bool {
    log.push("boom");
    false
}

fn has_children(tree: &TestTree, node: NodeId) -> bool {
    tree.first_child(node).is_some()
}

fn never(_tree: &TestTree, _node: NodeId) -> bool {
    false
}

pub struct TestResolver<'t> {
    tree: &'t TestTree,
}

impl<'t> TestResolver<'t> {
    pub fn new(tree: &'t TestTree) -> Self {
        TestResolver { tree }
    }
}

impl Resolver<TestTree> for TestResolver<'_> {
    type Context = EventLog;

    fn resolve_type(&self, name: &str) -> Option<u16> {
        self.tree.type_id(name)
    }

    fn resolve_predicate(&self, name: &str) -> Option<PredicateFn<TestTree>> {
        match name {
            "has_children" => Some(has_children),
            "never" => Some(never),
            _ => None,
        }
    }

    fn resolve_event(&self, name: &str) -> Option<EventFn<EventLog, NodeId>> {
        match name {
            "begin" => Some(ev_begin),
            "end" => Some(ev_end),
            "lets" => Some(ev_lets),
            "value" => Some(ev_value),
            "assign" => Some(ev_assign),
            "symbol" => Some(ev_symbol),
            "statement" => Some(ev_statement),
            "a" => Some(ev_a),
            "b" => Some(ev_b),
            "boom" => Some(ev_boom),
            _ => None,
        }
    }
}
