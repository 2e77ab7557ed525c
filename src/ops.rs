//! Operator sugar for building sentences.
//!
//! - `!a` is `¬a`
//! - `a & b` is the two-operand conjunction `a ∧ b`
//! - `a | b` is the two-operand disjunction `a ∨ b`
//!
//! Operands are never flattened: `a & b & c` is `(a ∧ b) ∧ c`, which is
//! structurally different from the three-operand conjunction `a ∧ b ∧ c`.

use std::ops::{BitAnd, BitOr, Not};

use crate::sentence::{Conjunction, Disjunction, Sentence};
use crate::types::Symbol;

impl Not for Sentence {
    type Output = Sentence;

    fn not(self) -> Self::Output {
        Sentence::negation(self)
    }
}

impl BitAnd for Sentence {
    type Output = Sentence;

    fn bitand(self, rhs: Self) -> Self::Output {
        Sentence::And(Conjunction::pair(self, rhs))
    }
}

impl BitOr for Sentence {
    type Output = Sentence;

    fn bitor(self, rhs: Self) -> Self::Output {
        Sentence::Or(Disjunction::pair(self, rhs))
    }
}

impl Not for Symbol {
    type Output = Sentence;

    fn not(self) -> Self::Output {
        Sentence::negation(self.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Sentence {
        Sentence::atom(name).unwrap()
    }

    #[test]
    fn test_not() {
        assert_eq!(!atom("p"), Sentence::negation(atom("p")));
        let p = Symbol::new("p").unwrap();
        assert_eq!(!p, Sentence::negation(atom("p")));
    }

    #[test]
    fn test_and() {
        let f = atom("p") & atom("q");
        assert_eq!(f, Sentence::conjunction([atom("p"), atom("q")]).unwrap());
    }

    #[test]
    fn test_or() {
        let f = atom("p") | atom("q");
        assert_eq!(f, Sentence::disjunction([atom("p"), atom("q")]).unwrap());
    }

    #[test]
    fn test_no_flattening() {
        let nested = atom("p") & atom("q") & atom("r");
        let flat = Sentence::conjunction([atom("p"), atom("q"), atom("r")]).unwrap();
        assert_ne!(nested, flat);
        assert_eq!(nested.formula(), "(p ∧ q) ∧ r");
    }

    #[test]
    fn test_mixed() {
        let f = (atom("bbc") | atom("unimayor")) & !(atom("bbc") & atom("unimayor"));
        assert_eq!(f.formula(), "(bbc ∨ unimayor) ∧ (¬(bbc ∧ unimayor))");
    }
}
