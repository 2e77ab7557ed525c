//! Type-safe wrapper for atom names.
//!
//! A [`Symbol`] is the name of an irreducible proposition. Names are validated
//! once, at construction, so every other part of the crate (rendering,
//! assignments, the model checker) can rely on them being well-formed.
use std::borrow::Borrow;
use std::fmt;

use crate::error::{Error, Result};

/// An atom name.
///
/// # Invariants
///
/// - The name is non-empty.
/// - Every character is alphanumeric or `_`, so a rendered atom never needs
///   parentheses and never collides with connective glyphs.
///
/// Symbols compare, order and hash by name only: two symbols built from the
/// same string are interchangeable.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperand`] if `name` is not a valid atom name
    /// (see [`Symbol::is_valid_name`]).
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !Self::is_valid_name(&name) {
            return Err(Error::InvalidOperand(format!("`{}` is not a valid atom name", name)));
        }
        Ok(Symbol(name))
    }

    /// Checks whether `name` can be used as an atom name.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
    }

    /// Returns the name of the symbol.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Symbol {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Symbol::new(name)
    }
}

impl TryFrom<String> for Symbol {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Symbol::new(name)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}
