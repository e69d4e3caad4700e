//! Predicate trees and their builders
//!
//! A [`Predicate`] is an immutable boolean test over a dynamic [`Value`]. Leaves
//! test existence, equality, string shape or numeric order; the connectives
//! [`not`], [`and`] and [`or`] compose them into trees.
//!
//! Every predicate is evaluated with [`Predicate::check`], which returns a
//! [`Verdict`]: the boolean result plus any failure seen on the way. A leaf
//! given an input of the wrong runtime type answers `false` with
//! [`Failure::TypeMismatch`](crate::Failure::TypeMismatch).
//!
//! # Example
//!
//! ```rust
//! use ruler::prelude::*;
//!
//! let rule = and!(begins_with("img_"), not(equals("img_0")));
//!
//! assert_eq!(rule.check(&Value::from("img_7")).into_result(), Ok(true));
//! assert_eq!(rule.check(&Value::from("img_0")).into_result(), Ok(false));
//! assert!(rule.check(&Value::from(7.0)).failure().is_some());
//! ```

mod basic;
mod combinators;
mod number;
mod string;

pub mod prelude;

pub use basic::{equals, exists, Literal};
pub use combinators::{and, not, or};
pub use number::{greater_than, less_than, near_equal};
pub use string::{begins_with, contains, ends_with, matches_regex, Pattern};

use crate::error::Failure;
use crate::kind::PredicateKind;
use crate::outcome::{Outcome, Verdict};
use crate::value::Value;

/// An immutable, composable boolean test over a [`Value`].
///
/// Build predicates with the functions in this module. The payload and kind of
/// a predicate never change after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Predicate {
    node: Node,
}

/// Variant payloads. `And`/`Or` always hold at least two children.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Node {
    Exists,
    Equals(Literal),
    LessThan(f64),
    BeginsWith(String),
    EndsWith(String),
    Contains(String),
    RegexMatch(Pattern),
    Not(Box<Predicate>),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub(crate) fn from_node(node: Node) -> Self {
        Predicate { node }
    }

    pub(crate) fn node(&self) -> &Node {
        &self.node
    }

    pub(crate) fn into_node(self) -> Node {
        self.node
    }

    /// The kind tag of this node.
    pub fn kind(&self) -> PredicateKind {
        match &self.node {
            Node::Exists => PredicateKind::Exists,
            Node::Equals(_) => PredicateKind::Equals,
            Node::LessThan(_) => PredicateKind::LessThan,
            Node::BeginsWith(_) => PredicateKind::BeginsWith,
            Node::EndsWith(_) => PredicateKind::EndsWith,
            Node::Contains(_) => PredicateKind::Contains,
            Node::RegexMatch(_) => PredicateKind::RegexMatch,
            Node::Not(_) => PredicateKind::Not,
            Node::And(_) => PredicateKind::And,
            Node::Or(_) => PredicateKind::Or,
        }
    }

    /// Evaluate against an input.
    ///
    /// Leaves perform one type check and one comparison. `and`/`or` evaluate
    /// children left to right and stop at the first decisive child; only
    /// failures from visited children are reported.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ruler::prelude::*;
    ///
    /// let p = less_than(3.0);
    /// assert_eq!(p.check(&Value::from(2.0)).into_parts(), (true, None));
    /// assert_eq!(
    ///     p.check(&Value::from("2")).into_parts(),
    ///     (false, Some(Failure::TypeMismatch))
    /// );
    /// ```
    pub fn check(&self, value: &Value) -> Verdict {
        match &self.node {
            Node::Exists => Outcome::clean(value.is_absent()),
            Node::Equals(literal) => literal.check(value),
            Node::LessThan(bound) => number::check_number(self.kind(), value, |n| n < *bound),
            Node::BeginsWith(prefix) => {
                string::check_str(self.kind(), value, |s| s.starts_with(prefix.as_str()))
            }
            Node::EndsWith(suffix) => {
                string::check_str(self.kind(), value, |s| s.ends_with(suffix.as_str()))
            }
            Node::Contains(needle) => {
                string::check_str(self.kind(), value, |s| s.contains(needle.as_str()))
            }
            Node::RegexMatch(pattern) => {
                string::check_str(self.kind(), value, |s| pattern.is_match(s))
            }
            Node::Not(child) => combinators::negate(child, value),
            Node::And(children) => combinators::scan(PredicateKind::And, children, value),
            Node::Or(children) => combinators::scan(PredicateKind::Or, children, value),
        }
    }

    /// The string literal of `Equals` over a string, `BeginsWith`, `EndsWith`,
    /// `Contains`, or the pattern source of a regex match.
    pub fn string_value(&self) -> Option<&str> {
        match &self.node {
            Node::Equals(Literal::Str(s))
            | Node::BeginsWith(s)
            | Node::EndsWith(s)
            | Node::Contains(s) => Some(s),
            Node::RegexMatch(pattern) => Some(pattern.as_str()),
            _ => None,
        }
    }

    /// The numeric literal of `Equals` over a number or `LessThan`.
    pub fn numeric_value(&self) -> Option<f64> {
        match &self.node {
            Node::Equals(Literal::Number(n)) | Node::LessThan(n) => Some(*n),
            _ => None,
        }
    }

    /// The literal of an `Equals` node.
    pub fn literal(&self) -> Option<&Literal> {
        match &self.node {
            Node::Equals(literal) => Some(literal),
            _ => None,
        }
    }

    /// Children of a connective, in order. Empty for leaves.
    pub fn components(&self) -> &[Predicate] {
        match &self.node {
            Node::Not(child) => std::slice::from_ref(child.as_ref()),
            Node::And(children) | Node::Or(children) => children,
            _ => &[],
        }
    }

    /// Combine with AND logic.
    ///
    /// ```rust
    /// use ruler::prelude::*;
    ///
    /// let p = begins_with("a").and(ends_with("z"));
    /// assert_eq!(p.kind(), PredicateKind::And);
    /// assert!(p.check(&Value::from("a to z")).into_result().unwrap());
    /// ```
    pub fn and(self, other: Predicate) -> Predicate {
        and(self, other, [])
    }

    /// Combine with OR logic.
    pub fn or(self, other: Predicate) -> Predicate {
        or(self, other, [])
    }
}

impl std::ops::Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Predicate {
        not(self)
    }
}

/// Report a type mismatch from a leaf of `kind`.
pub(crate) fn mismatch(kind: PredicateKind, value: &Value) -> Verdict {
    #[cfg(feature = "tracing")]
    tracing::debug!(kind = %kind, found = value.type_name(), "type mismatch");
    #[cfg(not(feature = "tracing"))]
    let _ = (kind, value);
    Outcome::failed(false, Failure::TypeMismatch)
}
