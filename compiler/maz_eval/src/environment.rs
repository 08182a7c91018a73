//! Lexical scopes.
//!
//! Each scope owns its bindings and borrows its parent. A child scope is
//! created on the Rust stack for every block or call the evaluator enters
//! and dropped when that block returns, so the chain never outlives the
//! frames that built it and can never form a cycle.

use rustc_hash::FxHashMap;

use crate::Value;

/// A single scope of name bindings.
#[derive(Debug, Default)]
pub struct Environment<'p> {
    /// Bindings in this scope (`FxHashMap` for faster hashing of short names).
    bindings: FxHashMap<String, Value>,
    /// Enclosing scope, if any.
    parent: Option<&'p Environment<'p>>,
}

impl<'p> Environment<'p> {
    /// Create a root scope with no parent.
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create an empty scope whose lookups fall back to `self`.
    ///
    /// The child can read but never write the bindings it inherits.
    pub fn child(&self) -> Environment<'_> {
        Environment {
            bindings: FxHashMap::default(),
            parent: Some(self),
        }
    }

    /// Bind `name` in this scope, replacing any earlier local binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look `name` up here, then in each enclosing scope.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        match self.bindings.get(name) {
            Some(value) => Some(value),
            None => self.parent.and_then(|parent| parent.lookup(name)),
        }
    }
}
