//! Immutable combinator graph.

use indexmap::IndexMap;

use crate::code::{Code, CodeId};
use crate::error::GraphError;
use crate::names::{EventRef, NameTable, PredicateRef, RuleRef, TypeRef};

/// A compiled grammar: a combinator arena, the rules it defines, and the
/// name tables its action combinators refer to.
///
/// Read-only after construction. Rule lookups by name happen once per
/// top-level match; everything on the hot path is an index access.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) codes: Vec<Code>,
    /// Rule definitions in registration order.
    pub(crate) rules: IndexMap<String, CodeId>,
    pub(crate) rule_names: NameTable,
    pub(crate) type_names: NameTable,
    pub(crate) event_names: NameTable,
    pub(crate) predicate_names: NameTable,
}

impl Graph {
    /// Fetch a combinator by handle.
    ///
    /// # Panics
    /// Panics if the handle did not come from this graph.
    #[inline]
    pub fn code(&self, id: CodeId) -> Code {
        self.codes[id.index()]
    }

    /// Number of combinator slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Rule definitions in registration order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, CodeId)> {
        self.rules.iter().map(|(name, &entry)| (name.as_str(), entry))
    }

    /// Entry combinator of a defined rule.
    #[inline]
    pub fn rule_entry(&self, name: &str) -> Option<CodeId> {
        self.rules.get(name).copied()
    }

    /// Name referenced by an `Apply`.
    #[inline]
    pub fn rule_name(&self, r: RuleRef) -> &str {
        self.rule_names.get(r.0)
    }

    /// Name referenced by a `Root`.
    #[inline]
    pub fn type_name(&self, t: TypeRef) -> &str {
        self.type_names.get(t.0)
    }

    /// Name referenced by an `Event`.
    #[inline]
    pub fn event_name(&self, e: EventRef) -> &str {
        self.event_names.get(e.0)
    }

    /// Name referenced by a `Predicate`.
    #[inline]
    pub fn predicate_name(&self, p: PredicateRef) -> &str {
        self.predicate_names.get(p.0)
    }

    /// Rule names referenced by `Apply` combinators, in handle order.
    #[inline]
    pub fn rule_names(&self) -> &NameTable {
        &self.rule_names
    }

    /// Node-type names referenced by `Root` combinators.
    #[inline]
    pub fn type_names(&self) -> &NameTable {
        &self.type_names
    }

    /// Event names referenced by `Event` combinators.
    #[inline]
    pub fn event_names(&self) -> &NameTable {
        &self.event_names
    }

    /// Predicate names referenced by `Predicate` combinators.
    #[inline]
    pub fn predicate_names(&self) -> &NameTable {
        &self.predicate_names
    }

    /// Structural verification: every handle lands inside the arena and
    /// every bounded range is satisfiable. Run by the builder before a
    /// graph is released.
    pub fn verify(&self) -> Result<(), GraphError> {
        for (at, code) in self.codes.iter().enumerate() {
            match *code {
                Code::And(a, b)
                | Code::Or(a, b)
                | Code::Sequence(a, b)
                | Code::Select(a, b)
                | Code::Tuple(a, b) => {
                    self.check_slot(at, a)?;
                    self.check_slot(at, b)?;
                }
                Code::Not(x)
                | Code::Assert(x)
                | Code::ZeroPlus(x)
                | Code::OnePlus(x)
                | Code::Maybe(x)
                | Code::Children(x) => self.check_slot(at, x)?,
                Code::Range {
                    argument,
                    minimum,
                    maximum,
                } => {
                    self.check_slot(at, argument)?;
                    if maximum != 0 && maximum < minimum {
                        return Err(GraphError::RangeBounds {
                            at,
                            minimum,
                            maximum,
                        });
                    }
                }
                Code::Any
                | Code::Begin
                | Code::End
                | Code::Leaf
                | Code::Apply(..)
                | Code::Root(..)
                | Code::Predicate(..)
                | Code::Event(..) => {}
            }
        }

        for (name, &entry) in &self.rules {
            if entry.index() >= self.codes.len() {
                return Err(GraphError::DanglingRule {
                    name: name.clone(),
                    to: entry.index(),
                });
            }
        }

        Ok(())
    }

    fn check_slot(&self, at: usize, to: CodeId) -> Result<(), GraphError> {
        if to.index() >= self.codes.len() {
            return Err(GraphError::DanglingCode {
                at,
                to: to.index(),
            });
        }
        Ok(())
    }
}
