//! Logical connectives
//!
//! `and` and `or` evaluate their children left to right and stop at the first
//! decisive child: `false` for `and`, `true` for `or`. Failures are collected
//! from every child visited up to and including the decisive one; children
//! after it are never evaluated.

use std::ops::ControlFlow;

use super::{Node, Predicate};
use crate::aggregate::AggregateFailure;
use crate::kind::PredicateKind;
use crate::outcome::{Outcome, Verdict};
use crate::value::Value;

/// Negate a predicate.
///
/// Negating a `not` node returns its child instead of wrapping it again, so
/// `not(not(p)) == p`. Only this exact shape is simplified.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// let p = not(equals("foo"));
/// assert!(p.check(&Value::from("bar")).into_result().unwrap());
/// assert_eq!(not(p), equals("foo"));
/// ```
pub fn not(predicate: Predicate) -> Predicate {
    match predicate.into_node() {
        Node::Not(inner) => *inner,
        node => Predicate::from_node(Node::Not(Box::new(Predicate::from_node(node)))),
    }
}

/// Conjunction over `[first, second, rest...]`.
///
/// The two leading parameters make the two-operand minimum part of the
/// signature. See also the [`and!`](crate::and!) macro.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// let p = and(begins_with("a"), ends_with("z"), [contains("m")]);
/// assert!(p.check(&Value::from("a..m..z")).into_result().unwrap());
/// assert!(!p.check(&Value::from("a....z")).into_result().unwrap());
/// ```
pub fn and(
    first: Predicate,
    second: Predicate,
    rest: impl IntoIterator<Item = Predicate>,
) -> Predicate {
    Predicate::from_node(Node::And(collect(first, second, rest)))
}

/// Disjunction over `[first, second, rest...]`.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// let p = or(equals("a"), equals("b"), [equals("c")]);
/// assert!(p.check(&Value::from("c")).into_result().unwrap());
/// assert!(!p.check(&Value::from("d")).into_result().unwrap());
/// ```
pub fn or(
    first: Predicate,
    second: Predicate,
    rest: impl IntoIterator<Item = Predicate>,
) -> Predicate {
    Predicate::from_node(Node::Or(collect(first, second, rest)))
}

fn collect(
    first: Predicate,
    second: Predicate,
    rest: impl IntoIterator<Item = Predicate>,
) -> Vec<Predicate> {
    let rest = rest.into_iter();
    let mut all = Vec::with_capacity(2 + rest.size_hint().0);
    all.push(first);
    all.push(second);
    all.extend(rest);
    all
}

/// Build an `and` predicate from two or more operands.
///
/// ```rust
/// use ruler::prelude::*;
///
/// let p = and!(begins_with("a"), contains("b"), ends_with("c"));
/// assert_eq!(p.components().len(), 3);
/// ```
#[macro_export]
macro_rules! and {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {{
        let rest: ::std::vec::Vec<$crate::Predicate> = ::std::vec![$($rest),*];
        $crate::predicate::and($first, $second, rest)
    }};
}

/// Build an `or` predicate from two or more operands.
///
/// ```rust
/// use ruler::prelude::*;
///
/// let p = or!(equals("x"), equals("y"));
/// assert!(p.check(&Value::from("y")).into_result().unwrap());
/// ```
#[macro_export]
macro_rules! or {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {{
        let rest: ::std::vec::Vec<$crate::Predicate> = ::std::vec![$($rest),*];
        $crate::predicate::or($first, $second, rest)
    }};
}

pub(crate) fn negate(child: &Predicate, value: &Value) -> Verdict {
    match child.check(value).into_parts() {
        (verdict, None) => Outcome::clean(!verdict),
        (_, Some(failure)) => Outcome::failed(false, failure),
    }
}

/// Accumulator threaded through a short-circuit scan.
#[derive(Debug, Default)]
pub(crate) struct Scan {
    pub(crate) failures: AggregateFailure,
    pub(crate) decided: bool,
}

impl Scan {
    /// Fold one child's verdict in. Breaks once `decisive` is seen.
    pub(crate) fn step(mut self, verdict: Verdict, decisive: bool) -> ControlFlow<Scan, Scan> {
        let (matched, failure) = verdict.into_parts();
        self.failures.append_opt(failure);
        if matched == decisive {
            self.decided = true;
            ControlFlow::Break(self)
        } else {
            ControlFlow::Continue(self)
        }
    }

    /// Final verdict: the decisive value if one was seen, its negation otherwise.
    pub(crate) fn finish(self, decisive: bool) -> Verdict {
        let verdict = if self.decided { decisive } else { !decisive };
        Outcome::new(verdict, self.failures.collapse())
    }
}

pub(crate) fn scan(kind: PredicateKind, children: &[Predicate], value: &Value) -> Verdict {
    let decisive = matches!(kind, PredicateKind::Or);
    let state = match children
        .iter()
        .try_fold(Scan::default(), |state, child| {
            state.step(child.check(value), decisive)
        }) {
        ControlFlow::Break(state) | ControlFlow::Continue(state) => state,
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        kind = %kind,
        children = children.len(),
        decided = state.decided,
        failures = state.failures.len(),
        "short-circuit scan finished"
    );

    state.finish(decisive)
}
