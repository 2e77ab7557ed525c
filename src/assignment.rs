//! Truth assignments (models).
//!
//! An [`Assignment`] maps symbols to truth values. The model checker grows
//! assignments one symbol at a time; [`Assignment::with`] returns an extended
//! copy so that the two branches of a split never see each other's bindings.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::types::Symbol;

/// A mapping from symbols to truth values, ordered by symbol name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: BTreeMap<Symbol, bool>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Returns the value bound to `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedSymbol`] if `symbol` is unbound.
    pub fn value(&self, symbol: &Symbol) -> Result<bool> {
        self.values
            .get(symbol)
            .copied()
            .ok_or_else(|| Error::UndefinedSymbol(symbol.clone()))
    }

    /// Binds `symbol` to `value`, returning the previous binding.
    pub fn insert(&mut self, symbol: Symbol, value: bool) -> Option<bool> {
        self.values.insert(symbol, value)
    }

    /// Returns a copy of this assignment extended with `symbol = value`.
    pub fn with(&self, symbol: Symbol, value: bool) -> Self {
        let mut extended = self.clone();
        extended.insert(symbol, value);
        extended
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the bindings in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, bool)> + '_ {
        self.values.iter().map(|(symbol, &value)| (symbol, value))
    }
}

impl FromIterator<(Symbol, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Symbol, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Symbol, bool)> for Assignment {
    fn extend<I: IntoIterator<Item = (Symbol, bool)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl IntoIterator for Assignment {
    type Item = (Symbol, bool);
    type IntoIter = btree_map::IntoIter<Symbol, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Renders the assignment as a set of literals, e.g. `{p, ¬q}`.
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (symbol, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if !value {
                write!(f, "¬")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, "}}")
    }
}
