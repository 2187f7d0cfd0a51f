//! Per-category symbolic name tables.
//!
//! Action combinators reference names by cheap integer handle. Each category
//! (rules, node types, events, predicates) has its own table, deduplicated
//! and in insertion order, so the runtime can lay out a resolved-value array
//! index-for-index at bind time and never touch a string during matching.

use std::collections::HashMap;

/// Handle to a rule name, carried by `Code::Apply`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RuleRef(pub(crate) u32);

impl RuleRef {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a node-type name, carried by `Code::Root`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TypeRef(pub(crate) u32);

impl TypeRef {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to an event name, carried by `Code::Event`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EventRef(pub(crate) u32);

impl EventRef {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a predicate name, carried by `Code::Predicate`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PredicateRef(pub(crate) u32);

impl PredicateRef {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Deduplicating name table. Handles are indexes in insertion order.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    /// Map from name to index for deduplication.
    map: HashMap<String, u32>,
    /// Storage for names, indexed by handle.
    names: Vec<String>,
}

impl NameTable {
    /// Intern a name, returning its index. Re-interning returns the
    /// existing index.
    pub(crate) fn intern(&mut self, name: &str) -> u32 {
        if let Some(&index) = self.map.get(name) {
            return index;
        }

        let index = self.names.len() as u32;
        self.names.push(name.to_owned());
        self.map.insert(name.to_owned(), index);
        index
    }

    /// Resolve an index back to its name.
    ///
    /// # Panics
    /// Panics if the index did not come from this table.
    #[inline]
    pub fn get(&self, index: u32) -> &str {
        &self.names[index as usize]
    }

    /// Number of interned names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate names in handle order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}
