//! The closed set of predicate kinds.

use std::fmt;

/// Tag identifying which test or connective a predicate node performs.
///
/// `Undefined` is the zero value. No builder ever produces it; it exists so
/// code holding a kind before it is known has something to hold.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// assert_eq!(exists().kind(), PredicateKind::Exists);
/// assert_eq!(PredicateKind::default(), PredicateKind::Undefined);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PredicateKind {
    /// Zero-value guard.
    #[default]
    Undefined,
    /// Input is the absent sentinel.
    Exists,
    /// Input equals a literal.
    Equals,
    /// Input is a number strictly below a literal.
    LessThan,
    /// Input is a string with a given prefix.
    BeginsWith,
    /// Input is a string with a given suffix.
    EndsWith,
    /// Input is a string containing a given substring.
    Contains,
    /// Input is a string matched by a regular expression.
    RegexMatch,
    /// Conjunction of two or more children.
    And,
    /// Disjunction of two or more children.
    Or,
    /// Negation of exactly one child.
    Not,
}

impl PredicateKind {
    /// Returns true for the connectives `Not`, `And` and `Or`.
    pub fn is_composite(self) -> bool {
        matches!(self, PredicateKind::And | PredicateKind::Or | PredicateKind::Not)
    }

    /// The name used for this kind in serialized text.
    pub fn name(self) -> &'static str {
        match self {
            PredicateKind::Undefined => "Undefined",
            PredicateKind::Exists => "Exists",
            PredicateKind::Equals => "Equals",
            PredicateKind::LessThan => "LessThan",
            PredicateKind::BeginsWith => "BeginsWith",
            PredicateKind::EndsWith => "EndsWith",
            PredicateKind::Contains => "Contains",
            PredicateKind::RegexMatch => "Matches",
            PredicateKind::And => "And",
            PredicateKind::Or => "Or",
            PredicateKind::Not => "Not",
        }
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
