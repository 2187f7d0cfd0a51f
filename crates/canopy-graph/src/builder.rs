//! Construction surface for the external grammar compiler.
//!
//! The builder appends combinators to the arena and interns symbolic names
//! per category; handles returned by one call feed the next. `finish` runs
//! structural verification so a released [`Graph`] is always well-formed.

use indexmap::IndexMap;

use crate::code::{Code, CodeId};
use crate::error::GraphError;
use crate::graph::Graph;
use crate::names::{EventRef, NameTable, PredicateRef, RuleRef, TypeRef};

#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    codes: Vec<Code>,
    rules: IndexMap<String, CodeId>,
    rule_names: NameTable,
    type_names: NameTable,
    event_names: NameTable,
    predicate_names: NameTable,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, code: Code) -> CodeId {
        let id = CodeId(self.codes.len() as u32);
        self.codes.push(code);
        id
    }

    /// Succeeds iff a current node exists.
    pub fn any(&mut self) -> CodeId {
        self.push(Code::Any)
    }

    /// Enter the current node's child list in place.
    pub fn begin(&mut self) -> CodeId {
        self.push(Code::Begin)
    }

    /// End-of-siblings test.
    pub fn end(&mut self) -> CodeId {
        self.push(Code::End)
    }

    /// Childless-node test.
    pub fn leaf(&mut self) -> CodeId {
        self.push(Code::Leaf)
    }

    pub fn and(&mut self, before: CodeId, after: CodeId) -> CodeId {
        self.push(Code::And(before, after))
    }

    pub fn or(&mut self, before: CodeId, after: CodeId) -> CodeId {
        self.push(Code::Or(before, after))
    }

    pub fn sequence(&mut self, before: CodeId, after: CodeId) -> CodeId {
        self.push(Code::Sequence(before, after))
    }

    pub fn select(&mut self, before: CodeId, after: CodeId) -> CodeId {
        self.push(Code::Select(before, after))
    }

    /// `before` at the current sibling, `after` at the next.
    pub fn tuple(&mut self, before: CodeId, after: CodeId) -> CodeId {
        self.push(Code::Tuple(before, after))
    }

    /// Right-folded `And` chain over two or more steps.
    ///
    /// # Panics
    /// Panics on an empty slice.
    pub fn and_chain(&mut self, steps: &[CodeId]) -> CodeId {
        let (&last, rest) = steps.split_last().expect("and_chain of no steps");
        rest.iter()
            .rev()
            .fold(last, |after, &before| self.and(before, after))
    }

    /// Negative lookahead.
    pub fn not(&mut self, argument: CodeId) -> CodeId {
        self.push(Code::Not(argument))
    }

    /// Positive lookahead.
    pub fn assert(&mut self, argument: CodeId) -> CodeId {
        self.push(Code::Assert(argument))
    }

    pub fn zero_plus(&mut self, argument: CodeId) -> CodeId {
        self.push(Code::ZeroPlus(argument))
    }

    pub fn one_plus(&mut self, argument: CodeId) -> CodeId {
        self.push(Code::OnePlus(argument))
    }

    pub fn maybe(&mut self, argument: CodeId) -> CodeId {
        self.push(Code::Maybe(argument))
    }

    /// Scoped descent into the current node's child list.
    pub fn children(&mut self, argument: CodeId) -> CodeId {
        self.push(Code::Children(argument))
    }

    /// Bounded repetition. `maximum == 0` means unbounded.
    pub fn range(&mut self, argument: CodeId, minimum: u32, maximum: u32) -> CodeId {
        self.push(Code::Range {
            argument,
            minimum,
            maximum,
        })
    }

    /// Reference a rule by name. The rule may be defined later; resolution
    /// happens at bind time.
    pub fn apply(&mut self, name: &str) -> CodeId {
        let r = RuleRef(self.rule_names.intern(name));
        self.push(Code::Apply(r))
    }

    /// Test the current node against a named host type.
    pub fn root(&mut self, name: &str) -> CodeId {
        let t = TypeRef(self.type_names.intern(name));
        self.push(Code::Root(t))
    }

    /// Call a named host predicate on the current node.
    pub fn predicate(&mut self, name: &str) -> CodeId {
        let p = PredicateRef(self.predicate_names.intern(name));
        self.push(Code::Predicate(p))
    }

    /// Queue a named deferred action capturing the current node.
    pub fn event(&mut self, name: &str) -> CodeId {
        let e = EventRef(self.event_names.intern(name));
        self.push(Code::Event(e))
    }

    /// Register a rule definition.
    pub fn rule(&mut self, name: &str, entry: CodeId) -> Result<(), GraphError> {
        if self.rules.contains_key(name) {
            return Err(GraphError::DuplicateRule(name.to_owned()));
        }
        self.rules.insert(name.to_owned(), entry);
        Ok(())
    }

    /// Verify and release the graph.
    pub fn finish(self) -> Result<Graph, GraphError> {
        let graph = Graph {
            codes: self.codes,
            rules: self.rules,
            rule_names: self.rule_names,
            type_names: self.type_names,
            event_names: self.event_names,
            predicate_names: self.predicate_names,
        };
        graph.verify()?;
        Ok(graph)
    }
}
