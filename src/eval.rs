use crate::assignment::Assignment;
use crate::error::Result;
use crate::sentence::{Conjunction, Disjunction, Sentence};
use crate::types::Symbol;

/// Two-valued evaluation under a truth assignment.
pub trait Evaluate {
    /// Evaluates `self` under `model`.
    ///
    /// # Errors
    ///
    /// Returns [`UndefinedSymbol`][crate::error::Error::UndefinedSymbol] if a
    /// symbol that is actually reached during evaluation is missing from
    /// `model`.
    fn evaluate(&self, model: &Assignment) -> Result<bool>;
}

impl Sentence {
    /// Evaluates the sentence under `model`.
    ///
    /// See [`Evaluate::evaluate`].
    pub fn evaluate(&self, model: &Assignment) -> Result<bool> {
        Evaluate::evaluate(self, model)
    }
}

impl Evaluate for Symbol {
    fn evaluate(&self, model: &Assignment) -> Result<bool> {
        model.value(self)
    }
}

impl Evaluate for Conjunction {
    fn evaluate(&self, model: &Assignment) -> Result<bool> {
        for operand in self.operands() {
            if !operand.evaluate(model)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Evaluate for Disjunction {
    fn evaluate(&self, model: &Assignment) -> Result<bool> {
        for operand in self.operands() {
            if operand.evaluate(model)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Evaluate for Sentence {
    fn evaluate(&self, model: &Assignment) -> Result<bool> {
        match self {
            Sentence::Atom(symbol) => symbol.evaluate(model),
            Sentence::Not(a) => Ok(!a.evaluate(model)?),
            Sentence::And(c) => c.evaluate(model),
            Sentence::Or(d) => d.evaluate(model),
            // The consequent is only reached when the antecedent holds.
            Sentence::Implies(a, b) => Ok(!a.evaluate(model)? || b.evaluate(model)?),
            Sentence::Iff(a, b) => Ok(a.evaluate(model)? == b.evaluate(model)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::error::Error;

    fn sym(name: &str) -> Symbol {
        Symbol::new(name).unwrap()
    }

    fn atom(name: &str) -> Sentence {
        Sentence::Atom(sym(name))
    }

    fn model(bindings: &[(&str, bool)]) -> Assignment {
        bindings.iter().map(|&(name, value)| (sym(name), value)).collect()
    }

    /// All four assignments over `p` and `q`.
    fn all_pq() -> Vec<Assignment> {
        let mut models = vec![];
        for p in [false, true] {
            for q in [false, true] {
                models.push(model(&[("p", p), ("q", q)]));
            }
        }
        models
    }

    #[test]
    fn test_eval_atom() {
        let p = atom("p");
        assert_eq!(p.evaluate(&model(&[("p", true)])), Ok(true));
        assert_eq!(p.evaluate(&model(&[("p", false)])), Ok(false));
    }

    #[test]
    fn test_eval_undefined_symbol() {
        let f = Sentence::conjunction([atom("p"), atom("q")]).unwrap();
        let res = f.evaluate(&model(&[("p", true)]));
        assert_eq!(res, Err(Error::UndefinedSymbol(sym("q"))));
    }

    #[test]
    fn test_eval_not() {
        let f = Sentence::negation(atom("p"));
        assert_eq!(f.evaluate(&model(&[("p", true)])), Ok(false));
        assert_eq!(f.evaluate(&model(&[("p", false)])), Ok(true));
    }

    #[test]
    fn test_eval_connectives_truth_tables() {
        let and = Sentence::conjunction([atom("p"), atom("q")]).unwrap();
        let or = Sentence::disjunction([atom("p"), atom("q")]).unwrap();
        let implies = Sentence::implication(atom("p"), atom("q"));
        let iff = Sentence::biconditional(atom("p"), atom("q"));

        for m in all_pq() {
            let p = m.get("p").unwrap();
            let q = m.get("q").unwrap();
            assert_eq!(and.evaluate(&m), Ok(p && q), "and under {}", m);
            assert_eq!(or.evaluate(&m), Ok(p || q), "or under {}", m);
            assert_eq!(implies.evaluate(&m), Ok(!p || q), "implies under {}", m);
            assert_eq!(iff.evaluate(&m), Ok(p == q), "iff under {}", m);
        }
    }

    #[test]
    fn test_eval_single_operand() {
        let and = Sentence::conjunction([atom("p")]).unwrap();
        let or = Sentence::disjunction([atom("p")]).unwrap();
        for value in [false, true] {
            let m = model(&[("p", value)]);
            assert_eq!(and.evaluate(&m), Ok(value));
            assert_eq!(or.evaluate(&m), Ok(value));
        }
    }

    #[test]
    fn test_eval_false_antecedent_skips_consequent() {
        // `q` is unbound, but never reached.
        let f = Sentence::implication(atom("p"), atom("q"));
        assert_eq!(f.evaluate(&model(&[("p", false)])), Ok(true));
        assert_eq!(
            f.evaluate(&model(&[("p", true)])),
            Err(Error::UndefinedSymbol(sym("q")))
        );
    }

    #[test]
    fn test_eval_short_circuit() {
        let and = Sentence::conjunction([atom("p"), atom("q")]).unwrap();
        let or = Sentence::disjunction([atom("p"), atom("q")]).unwrap();
        assert_eq!(and.evaluate(&model(&[("p", false)])), Ok(false));
        assert_eq!(or.evaluate(&model(&[("p", true)])), Ok(true));
    }

    #[test]
    fn test_eval_iff_needs_both_sides() {
        let f = Sentence::biconditional(atom("p"), atom("q"));
        assert!(f.evaluate(&model(&[("p", false)])).is_err());
    }
}
