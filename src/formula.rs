//! Rendering sentences as formula strings.
//!
//! Every sub-formula goes through [`parenthesize`] before it is joined with a
//! connective, so the output is unambiguous without relying on precedence:
//!
//! ```
//! use entail_rs::sentence::Sentence;
//! use entail_rs::formula::Notation;
//!
//! let p = Sentence::atom("p")?;
//! let q = Sentence::atom("q")?;
//! let f = Sentence::negation(Sentence::conjunction([p, q])?);
//! assert_eq!(f.formula(), "¬(p ∧ q)");
//! assert_eq!(f.formula_with(Notation::Ascii), "~(p & q)");
//! # Ok::<(), entail_rs::error::Error>(())
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::sentence::Sentence;
use crate::types::Symbol;

/// Connective glyphs used when rendering.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Notation {
    /// `¬`, `∧`, `∨`, `⇒`, `⇔`
    #[default]
    Unicode,
    /// `~`, `&`, `|`, `=>`, `<=>`
    Ascii,
}

impl Notation {
    pub fn not(self) -> &'static str {
        match self {
            Notation::Unicode => "¬",
            Notation::Ascii => "~",
        }
    }

    pub fn and(self) -> &'static str {
        match self {
            Notation::Unicode => " ∧ ",
            Notation::Ascii => " & ",
        }
    }

    pub fn or(self) -> &'static str {
        match self {
            Notation::Unicode => " ∨ ",
            Notation::Ascii => " | ",
        }
    }

    pub fn implies(self) -> &'static str {
        match self {
            Notation::Unicode => " ⇒ ",
            Notation::Ascii => " => ",
        }
    }

    pub fn iff(self) -> &'static str {
        match self {
            Notation::Unicode => " ⇔ ",
            Notation::Ascii => " <=> ",
        }
    }
}

/// Checks that parentheses in `s` are balanced: the running depth never
/// drops below zero and ends at zero.
pub fn is_balanced(s: &str) -> bool {
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}

/// Wraps `s` in parentheses unless it is already safe to embed as-is.
///
/// `s` is left alone if it is empty, a bare atom name, or already enclosed in
/// a single outer pair of parentheses (starts with `(`, ends with `)`, and the
/// interior is balanced).
///
/// ```
/// use entail_rs::formula::parenthesize;
///
/// assert_eq!(parenthesize("a"), "a");
/// assert_eq!(parenthesize("a ∧ b"), "(a ∧ b)");
/// assert_eq!(parenthesize("(a ∧ b)"), "(a ∧ b)");
/// assert_eq!(parenthesize("(a) ∧ (b)"), "((a) ∧ (b))");
/// ```
pub fn parenthesize(s: &str) -> Cow<'_, str> {
    if s.is_empty() || Symbol::is_valid_name(s) || is_wrapped(s) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("({})", s))
    }
}

fn is_wrapped(s: &str) -> bool {
    s.strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some_and(is_balanced)
}

impl Sentence {
    /// Renders the sentence using [`Notation::Unicode`].
    pub fn formula(&self) -> String {
        self.formula_with(Notation::Unicode)
    }

    /// Renders the sentence using the given notation.
    pub fn formula_with(&self, notation: Notation) -> String {
        match self {
            Sentence::Atom(symbol) => symbol.name().to_string(),
            Sentence::Not(a) => {
                format!("{}{}", notation.not(), parenthesize(&a.formula_with(notation)))
            }
            Sentence::And(c) => join(c.operands(), notation.and(), notation),
            Sentence::Or(d) => join(d.operands(), notation.or(), notation),
            Sentence::Implies(a, b) => binary(a, b, notation.implies(), notation),
            Sentence::Iff(a, b) => binary(a, b, notation.iff(), notation),
        }
    }
}

fn join(operands: &[Sentence], sep: &str, notation: Notation) -> String {
    if let [single] = operands {
        return single.formula_with(notation);
    }
    operands
        .iter()
        .map(|s| parenthesize(&s.formula_with(notation)).into_owned())
        .collect::<Vec<_>>()
        .join(sep)
}

fn binary(a: &Sentence, b: &Sentence, sep: &str, notation: Notation) -> String {
    let left = a.formula_with(notation);
    let right = b.formula_with(notation);
    format!("{}{}{}", parenthesize(&left), sep, parenthesize(&right))
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}
