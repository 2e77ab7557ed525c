//! Error types for sentence construction and evaluation.

use thiserror::Error;

use crate::types::Symbol;

/// Result type alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur when building or evaluating sentences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A constructor was given something that cannot be an operand:
    /// an invalid atom name, or an empty operand list for an n-ary connective.
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    /// The assignment has no value for a symbol the sentence refers to.
    #[error("symbol `{0}` is not in the assignment")]
    UndefinedSymbol(Symbol),
}
