//! Entailment by model checking.
//!
//! `knowledge ⊨ query` holds iff `query` is true in every assignment that
//! makes `knowledge` true. The checker decides this by brute force: it
//! enumerates all `2^n` assignments to the `n` symbols mentioned by either
//! sentence and evaluates both sentences at each leaf.
//!
//! # Search
//!
//! Symbols are taken in sorted order. At each level the current partial
//! assignment is split into a "true" copy and a "false" copy of the next
//! symbol, and the entailment must hold in both sub-trees. At a leaf (every
//! symbol bound):
//!
//! - if `knowledge` is false, the leaf holds vacuously;
//! - otherwise the leaf holds iff `query` is true.
//!
//! By default the search stops at the first leaf that fails (a
//! *counterexample*). With [`CheckConfig::exhaustive`] it visits every leaf.
//!
//! ```
//! use entail_rs::check::model_check;
//! use entail_rs::sentence::Sentence;
//!
//! let p = Sentence::atom("p")?;
//! let q = Sentence::atom("q")?;
//! let kb = Sentence::conjunction([p.clone().implies(q.clone()), p.clone()])?;
//! assert!(model_check(&kb, &q)?);
//! assert!(!model_check(&q, &p)?);
//! # Ok::<(), entail_rs::error::Error>(())
//! ```

use log::{debug, trace};

use crate::assignment::Assignment;
use crate::error::Result;
use crate::sentence::Sentence;
use crate::types::Symbol;

/// Which value of a split symbol is explored first.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum BranchOrder {
    #[default]
    TrueFirst,
    FalseFirst,
}

impl BranchOrder {
    fn values(self) -> [bool; 2] {
        match self {
            BranchOrder::TrueFirst => [true, false],
            BranchOrder::FalseFirst => [false, true],
        }
    }
}

/// Configuration options for [`ModelChecker`].
///
/// The defaults give the classic procedure: true branch first, stop at the
/// first counterexample.
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Order in which the two values of each symbol are explored (default: true first).
    pub branch_order: BranchOrder,
    /// Visit all leaves even after a counterexample is found (default: false).
    pub exhaustive: bool,
}

/// Counters collected during one [`ModelChecker::check`] run.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CheckStats {
    /// Total assignments evaluated.
    pub leaves: u64,
    /// Assignments in which the knowledge base was true.
    pub models: u64,
    /// Assignments in which the knowledge base was true but the query false.
    pub counterexamples: u64,
}

/// A configurable entailment checker for one knowledge base and query.
#[derive(Debug)]
pub struct ModelChecker<'a> {
    knowledge: &'a Sentence,
    query: &'a Sentence,
    symbols: Vec<Symbol>,
    config: CheckConfig,
    stats: CheckStats,
    counterexample: Option<Assignment>,
}

impl<'a> ModelChecker<'a> {
    pub fn new(knowledge: &'a Sentence, query: &'a Sentence) -> Self {
        Self::with_config(knowledge, query, CheckConfig::default())
    }

    pub fn with_config(knowledge: &'a Sentence, query: &'a Sentence, config: CheckConfig) -> Self {
        Self {
            knowledge,
            query,
            symbols: Vec::new(),
            config,
            stats: CheckStats::default(),
            counterexample: None,
        }
    }

    /// Decides whether the knowledge base entails the query.
    ///
    /// Statistics and the recorded counterexample are reset on every call.
    /// The symbol set is recollected as well, so a knowledge base that grew
    /// since the last call is taken into account.
    ///
    /// # Errors
    ///
    /// Only those of [`Sentence::evaluate`]. Every leaf assignment is total
    /// over both sentences, so none are expected in practice.
    pub fn check(&mut self) -> Result<bool> {
        let mut symbols = self.knowledge.symbols();
        symbols.extend(self.query.symbols());
        self.symbols = symbols.into_iter().collect();
        self.stats = CheckStats::default();
        self.counterexample = None;

        debug!(
            "check(knowledge = {}, query = {}) over {} symbols",
            self.knowledge,
            self.query,
            self.symbols.len()
        );

        let symbols = std::mem::take(&mut self.symbols);
        let res = self.check_all(&symbols, Assignment::new());
        self.symbols = symbols;
        let holds = res?;

        debug!("check: entailment {}, stats = {:?}", if holds { "holds" } else { "fails" }, self.stats);
        Ok(holds)
    }

    fn check_all(&mut self, symbols: &[Symbol], model: Assignment) -> Result<bool> {
        let Some((p, rest)) = symbols.split_first() else {
            return self.check_leaf(model);
        };

        let [first, second] = self.config.branch_order.values();

        let holds_first = self.check_all(rest, model.with(p.clone(), first))?;
        if !holds_first && !self.config.exhaustive {
            return Ok(false);
        }
        let holds_second = self.check_all(rest, model.with(p.clone(), second))?;

        Ok(holds_first && holds_second)
    }

    fn check_leaf(&mut self, model: Assignment) -> Result<bool> {
        self.stats.leaves += 1;

        // A false knowledge base puts no constraint on the query.
        if !self.knowledge.evaluate(&model)? {
            return Ok(true);
        }
        self.stats.models += 1;

        if self.query.evaluate(&model)? {
            return Ok(true);
        }
        self.stats.counterexamples += 1;
        trace!("check_leaf: counterexample {}", model);
        if self.counterexample.is_none() {
            self.counterexample = Some(model);
        }
        Ok(false)
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Statistics of the last [`check`][ModelChecker::check] run.
    pub fn stats(&self) -> CheckStats {
        self.stats
    }

    /// The first assignment found in the last run that satisfies the
    /// knowledge base but falsifies the query.
    pub fn counterexample(&self) -> Option<&Assignment> {
        self.counterexample.as_ref()
    }

    /// Sorted symbols enumerated by the last run.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

/// Checks whether `knowledge` entails `query`.
///
/// Shorthand for [`ModelChecker::new`] followed by [`ModelChecker::check`].
pub fn model_check(knowledge: &Sentence, query: &Sentence) -> Result<bool> {
    ModelChecker::new(knowledge, query).check()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn atom(name: &str) -> Sentence {
        Sentence::atom(name).unwrap()
    }

    #[test]
    fn test_atom_entails_itself() {
        let p = atom("p");
        assert!(model_check(&p, &p).unwrap());
    }

    #[test]
    fn test_atom_does_not_entail_negation() {
        let p = atom("p");
        let not_p = !atom("p");
        let mut checker = ModelChecker::new(&p, &not_p);
        assert!(!checker.check().unwrap());

        let expected: Assignment = [(Symbol::new("p").unwrap(), true)].into_iter().collect();
        assert_eq!(checker.counterexample(), Some(&expected));
    }

    #[test]
    fn test_modus_ponens() {
        let kb = Sentence::conjunction([atom("p").implies(atom("q")), atom("p")]).unwrap();
        assert!(model_check(&kb, &atom("q")).unwrap());
        assert!(model_check(&kb, &atom("p")).unwrap());
        assert!(!model_check(&kb, &!atom("q")).unwrap());
    }

    #[test]
    fn test_unsatisfiable_knowledge_entails_anything() {
        let kb = atom("p") & !atom("p");
        let query = atom("q");
        let mut checker = ModelChecker::new(&kb, &query);
        assert!(checker.check().unwrap());
        assert_eq!(checker.stats().models, 0);
        assert_eq!(checker.counterexample(), None);
    }

    #[test]
    fn test_tautology_is_entailed_by_anything() {
        let taut = atom("q") | !atom("q");
        assert!(model_check(&atom("p"), &taut).unwrap());
    }

    #[test]
    fn test_symbols_are_sorted_union() {
        let kb = atom("r") & atom("b");
        let query = atom("a") | atom("r");
        let mut checker = ModelChecker::new(&kb, &query);
        checker.check().unwrap();
        let names: Vec<&str> = checker.symbols().iter().map(Symbol::name).collect();
        assert_eq!(names, ["a", "b", "r"]);
    }

    #[test]
    fn test_leaf_count_when_entailment_holds() {
        // p ∧ q ⊨ p ∨ r: three symbols, eight leaves.
        let kb = atom("p") & atom("q");
        let query = atom("p") | atom("r");
        let mut checker = ModelChecker::new(&kb, &query);
        assert!(checker.check().unwrap());
        assert_eq!(
            checker.stats(),
            CheckStats {
                leaves: 8,
                models: 2,
                counterexamples: 0
            }
        );
    }

    #[test]
    fn test_leaf_count_exhaustive() {
        // p ∨ q ⊭ r, but exhaustive mode still visits all eight leaves.
        let kb = atom("p") | atom("q");
        let query = atom("r");
        let config = CheckConfig {
            exhaustive: true,
            ..Default::default()
        };
        let mut checker = ModelChecker::with_config(&kb, &query, config);
        assert!(!checker.check().unwrap());
        assert_eq!(
            checker.stats(),
            CheckStats {
                leaves: 8,
                models: 6,
                counterexamples: 3
            }
        );
    }

    #[test]
    fn test_stops_at_first_counterexample() {
        let kb = atom("p") | atom("q");
        let query = atom("r");
        let mut checker = ModelChecker::new(&kb, &query);
        assert!(!checker.check().unwrap());
        // p = q = true, r = true holds; r = false is the second leaf.
        assert_eq!(checker.stats().leaves, 2);
        assert_eq!(checker.stats().counterexamples, 1);
        assert_eq!(checker.counterexample().map(|m| m.to_string()), Some("{p, q, ¬r}".to_string()));
    }

    #[test]
    fn test_branch_order() {
        let kb = atom("p") | atom("q");
        let query = atom("r");
        let config = CheckConfig {
            branch_order: BranchOrder::FalseFirst,
            ..Default::default()
        };
        let mut checker = ModelChecker::with_config(&kb, &query, config);
        assert!(!checker.check().unwrap());
        // p = q = false falsifies the knowledge base on both leaves, then p = false, q = true, r = false fails.
        assert_eq!(checker.stats().leaves, 3);
        assert_eq!(checker.counterexample().map(|m| m.to_string()), Some("{¬p, q, ¬r}".to_string()));
    }

    #[test]
    fn test_check_is_repeatable() {
        let kb = atom("p");
        let query = atom("p") | atom("q");
        let mut checker = ModelChecker::new(&kb, &query);
        assert!(checker.check().unwrap());
        let first = checker.stats();
        assert!(checker.check().unwrap());
        assert_eq!(checker.stats(), first);
        assert_eq!(first.leaves, 4);
    }
}
