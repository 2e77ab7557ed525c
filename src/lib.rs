//! # entail-rs: Propositional Entailment by Model Checking
//!
//! **`entail-rs`** is a small library for building propositional formulas and deciding whether
//! a knowledge base *entails* a query, i.e. whether the query is true in every possible world
//! in which the knowledge base is true.
//!
//! ## How does it work?
//!
//! Entailment is decided by **model checking**: the checker collects every symbol mentioned by
//! the knowledge base and the query, and enumerates all `2^n` truth assignments to them with a
//! depth-first binary search. Any assignment that makes the knowledge base true but the query
//! false is a *counterexample*; entailment holds iff there is none.
//!
//! This is a brute-force procedure, exponential in the number of symbols. It is meant for small
//! problems (tens of symbols, not hundreds).
//!
//! ## Key Features
//!
//! - **Closed Sentence Model**: A [`Sentence`][crate::sentence::Sentence] is an enum over atoms and
//!   the connectives ¬, ∧, ∨, ⇒ and ⇔, with structural equality and hashing.
//! - **Checked Construction**: Invalid atom names and empty n-ary connectives are rejected
//!   up front with [`Error::InvalidOperand`][crate::error::Error::InvalidOperand].
//! - **Unambiguous Rendering**: [`formula()`][crate::sentence::Sentence::formula] parenthesizes
//!   every compound sub-formula, in Unicode or ASCII notation.
//! - **Introspectable Search**: [`ModelChecker`][crate::check::ModelChecker] reports leaf counts
//!   and the first counterexample it found.
//!
//! ## Basic Usage
//!
//! ```rust
//! use entail_rs::check::model_check;
//! use entail_rs::sentence::Sentence;
//!
//! // 1. Create atoms
//! let rain = Sentence::atom("rain")?;
//! let wet = Sentence::atom("wet")?;
//!
//! // 2. Build a knowledge base: (rain ⇒ wet) ∧ rain
//! let kb = Sentence::conjunction([rain.clone().implies(wet.clone()), rain.clone()])?;
//! assert_eq!(kb.formula(), "(rain ⇒ wet) ∧ rain");
//!
//! // 3. Ask questions
//! assert!(model_check(&kb, &wet)?);
//! assert!(!model_check(&wet, &rain)?);
//! # Ok::<(), entail_rs::error::Error>(())
//! ```
//!
//! ## Core Components
//!
//! - **[`sentence`]**: The sentence enum and its constructors.
//! - **[`eval`]**: Evaluation under an [`Assignment`][crate::assignment::Assignment].
//! - **[`formula`]**: Rendering and the parenthesization rule.
//! - **[`check`]**: The entailment checker.

pub mod assignment;
pub mod check;
pub mod error;
pub mod eval;
pub mod formula;
pub mod ops;
pub mod sentence;
pub mod types;
