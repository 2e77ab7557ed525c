//! Propositional sentences.
//!
//! A [`Sentence`] is a tree over a closed set of variants: atoms and the five
//! connectives NOT, AND, OR, IMPLIES and IFF. Children are owned, so a tree is
//! acyclic by construction; to reuse a sub-formula in several parents, clone it.
//!
//! Equality and hashing are structural: two sentences are equal iff they are
//! the same variant with recursively equal children, in the same order.
//!
//! ```
//! use entail_rs::sentence::Sentence;
//!
//! let p = Sentence::atom("p")?;
//! let q = Sentence::atom("q")?;
//! let f = Sentence::implication(p.clone(), Sentence::disjunction([p, q])?);
//! assert_eq!(f.formula(), "p ⇒ (p ∨ q)");
//! # Ok::<(), entail_rs::error::Error>(())
//! ```

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::types::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sentence {
    /// Atomic proposition.
    Atom(Symbol),
    /// Negation `¬a`.
    Not(Box<Sentence>),
    /// Conjunction `a ∧ b ∧ ...`.
    And(Conjunction),
    /// Disjunction `a ∨ b ∨ ...`.
    Or(Disjunction),
    /// Implication `a ⇒ b`.
    Implies(Box<Sentence>, Box<Sentence>),
    /// Biconditional `a ⇔ b`.
    Iff(Box<Sentence>, Box<Sentence>),
}

impl Sentence {
    /// Creates an atom with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperand`] if `name` is not a valid atom name.
    pub fn atom(name: impl Into<String>) -> Result<Self> {
        Ok(Sentence::Atom(Symbol::new(name)?))
    }

    pub fn negation(operand: Sentence) -> Self {
        Sentence::Not(Box::new(operand))
    }

    /// Creates a conjunction of the given operands, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperand`] if `operands` is empty.
    pub fn conjunction(operands: impl IntoIterator<Item = Sentence>) -> Result<Self> {
        Ok(Sentence::And(Conjunction::new(operands)?))
    }

    /// Creates a disjunction of the given operands, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperand`] if `operands` is empty.
    pub fn disjunction(operands: impl IntoIterator<Item = Sentence>) -> Result<Self> {
        Ok(Sentence::Or(Disjunction::new(operands)?))
    }

    pub fn implication(antecedent: Sentence, consequent: Sentence) -> Self {
        Sentence::Implies(Box::new(antecedent), Box::new(consequent))
    }

    pub fn biconditional(left: Sentence, right: Sentence) -> Self {
        Sentence::Iff(Box::new(left), Box::new(right))
    }

    /// `self ⇒ consequent`.
    pub fn implies(self, consequent: Sentence) -> Self {
        Sentence::implication(self, consequent)
    }

    /// `self ⇔ other`.
    pub fn iff(self, other: Sentence) -> Self {
        Sentence::biconditional(self, other)
    }

    /// Returns the symbol if this sentence is an atom.
    pub fn as_atom(&self) -> Option<&Symbol> {
        match self {
            Sentence::Atom(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Returns the direct children of this sentence, left to right.
    pub fn children(&self) -> Vec<&Sentence> {
        match self {
            Sentence::Atom(_) => vec![],
            Sentence::Not(a) => vec![a.as_ref()],
            Sentence::And(c) => c.operands().iter().collect(),
            Sentence::Or(d) => d.operands().iter().collect(),
            Sentence::Implies(a, b) | Sentence::Iff(a, b) => vec![a.as_ref(), b.as_ref()],
        }
    }

    /// Returns all distinct symbols referenced by this sentence.
    ///
    /// The set is recomputed on every call, since a conjunction may have
    /// grown since the last one.
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, symbols: &mut BTreeSet<Symbol>) {
        match self {
            Sentence::Atom(symbol) => {
                if !symbols.contains(symbol) {
                    symbols.insert(symbol.clone());
                }
            }
            _ => {
                for child in self.children() {
                    child.collect_symbols(symbols);
                }
            }
        }
    }

    /// Depth of the sentence tree (0 for atoms).
    pub fn depth(&self) -> usize {
        match self.children().into_iter().map(Sentence::depth).max() {
            None => 0,
            Some(d) => 1 + d,
        }
    }

    /// Number of nodes in the sentence tree.
    pub fn size(&self) -> usize {
        1 + self.children().into_iter().map(Sentence::size).sum::<usize>()
    }
}

impl From<Symbol> for Sentence {
    fn from(symbol: Symbol) -> Self {
        Sentence::Atom(symbol)
    }
}

impl From<Conjunction> for Sentence {
    fn from(conjunction: Conjunction) -> Self {
        Sentence::And(conjunction)
    }
}

impl From<Disjunction> for Sentence {
    fn from(disjunction: Disjunction) -> Self {
        Sentence::Or(disjunction)
    }
}

/// An ordered, non-empty list of conjuncts.
///
/// This is the only sentence that can change after construction: [`add`]
/// appends a conjunct, which is handy for building a knowledge base
/// incrementally.
///
/// [`add`]: Conjunction::add
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Conjunction {
    operands: Vec<Sentence>,
}

impl Conjunction {
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperand`] if `operands` is empty.
    pub fn new(operands: impl IntoIterator<Item = Sentence>) -> Result<Self> {
        let operands: Vec<Sentence> = operands.into_iter().collect();
        if operands.is_empty() {
            return Err(Error::InvalidOperand("conjunction needs at least one operand".into()));
        }
        Ok(Self { operands })
    }

    pub(crate) fn pair(a: Sentence, b: Sentence) -> Self {
        Self { operands: vec![a, b] }
    }

    /// Appends one more conjunct.
    pub fn add(&mut self, operand: Sentence) {
        self.operands.push(operand);
    }

    pub fn operands(&self) -> &[Sentence] {
        &self.operands
    }

    pub fn len(&self) -> usize {
        self.operands.len()
    }

    /// Always `false`: a conjunction has at least one operand.
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }
}

/// An ordered, non-empty list of disjuncts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Disjunction {
    operands: Vec<Sentence>,
}

impl Disjunction {
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperand`] if `operands` is empty.
    pub fn new(operands: impl IntoIterator<Item = Sentence>) -> Result<Self> {
        let operands: Vec<Sentence> = operands.into_iter().collect();
        if operands.is_empty() {
            return Err(Error::InvalidOperand("disjunction needs at least one operand".into()));
        }
        Ok(Self { operands })
    }

    pub(crate) fn pair(a: Sentence, b: Sentence) -> Self {
        Self { operands: vec![a, b] }
    }

    pub fn operands(&self) -> &[Sentence] {
        &self.operands
    }

    pub fn len(&self) -> usize {
        self.operands.len()
    }

    /// Always `false`: a disjunction has at least one operand.
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }
}
