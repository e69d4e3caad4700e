//! Number predicates
//!
//! Only [`Value::Number`] inputs are numbers; integers and every other type are
//! a type mismatch. `greater_than` and `near_equal` are built from
//! `less_than`, `equals` and the connectives, so their trees serialize that way.

use super::basic::equals;
use super::combinators::{not, or};
use super::{mismatch, Node, Predicate};
use crate::kind::PredicateKind;
use crate::outcome::{Outcome, Verdict};
use crate::value::Value;

pub(crate) fn check_number<F>(kind: PredicateKind, value: &Value, test: F) -> Verdict
where
    F: FnOnce(f64) -> bool,
{
    match value.as_number() {
        Some(n) => Outcome::clean(test(n)),
        None => mismatch(kind, value),
    }
}

/// Create a predicate that checks if a number is strictly less than `bound`.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// assert!(less_than(5.0).check(&Value::from(4.0)).into_result().unwrap());
/// assert!(!less_than(5.0).check(&Value::from(5.0)).into_result().unwrap());
/// ```
pub fn less_than(bound: f64) -> Predicate {
    Predicate::from_node(Node::LessThan(bound))
}

/// Create a predicate that checks if a number is strictly greater than `bound`.
///
/// Built as `not(or(less_than(bound), equals(bound)))`.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// let p = greater_than(10.0);
/// assert!(p.check(&Value::from(10.1)).into_result().unwrap());
/// assert!(!p.check(&Value::from(10.0)).into_result().unwrap());
/// assert!(!p.check(&Value::from(9.9)).into_result().unwrap());
/// ```
pub fn greater_than(bound: f64) -> Predicate {
    not(or(less_than(bound), equals(bound), []))
}

/// Create a predicate that checks if a number lies in
/// `[value - epsilon, value + epsilon]`, bounds included.
///
/// Built as `not(or(greater_than(value + epsilon), less_than(value - epsilon)))`.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// let p = near_equal(1.0, 0.1);
/// assert!(p.check(&Value::from(1.05)).into_result().unwrap());
/// assert!(!p.check(&Value::from(1.11)).into_result().unwrap());
/// ```
pub fn near_equal(value: f64, epsilon: f64) -> Predicate {
    not(or(
        greater_than(value + epsilon),
        less_than(value - epsilon),
        [],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Failure;

    fn verdict(p: &Predicate, n: f64) -> bool {
        p.check(&Value::from(n)).into_result().unwrap()
    }

    #[test]
    fn test_less_than() {
        let p = less_than(0.0);
        assert!(verdict(&p, -0.5));
        assert!(!verdict(&p, 0.0));
        assert!(!verdict(&p, f64::NAN));
    }

    #[test]
    fn test_less_than_rejects_non_numbers() {
        assert_eq!(
            less_than(1.0).check(&Value::from(0)).into_parts(),
            (false, Some(Failure::TypeMismatch))
        );
        assert_eq!(
            less_than(1.0).check(&Value::from("0")).into_parts(),
            (false, Some(Failure::TypeMismatch))
        );
    }

    #[test]
    fn test_greater_than() {
        let p = greater_than(10.0);
        assert!(verdict(&p, 10.1));
        assert!(!verdict(&p, 9.9));
        assert!(!verdict(&p, 10.0));
    }

    #[test]
    fn test_greater_than_shape() {
        let p = greater_than(3.0);
        assert_eq!(p.kind(), PredicateKind::Not);
        let inner = &p.components()[0];
        assert_eq!(inner.kind(), PredicateKind::Or);
        assert_eq!(inner.components(), &[less_than(3.0), equals(3.0)]);
    }

    #[test]
    fn test_near_equal() {
        let p = near_equal(1.0, 0.1);
        for v in [0.90, 0.95, 1.0, 1.05, 1.1] {
            assert!(verdict(&p, v), "{v} should be near 1.0");
        }
        for v in [0.89, 1.11] {
            assert!(!verdict(&p, v), "{v} should not be near 1.0");
        }
    }

    #[test]
    fn test_greater_than_type_mismatch_propagates() {
        let (matched, failure) = greater_than(1.0).check(&Value::from("x")).into_parts();
        assert!(!matched);
        assert!(failure.is_some());
    }
}
