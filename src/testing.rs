//! Testing utilities for code that builds and checks predicates
//!
//! Assertion macros for [`Verdict`](crate::Verdict)s and, with the `proptest`
//! feature, an `Arbitrary` implementation for [`Value`](crate::Value).
//!
//! # Example
//!
//! ```rust
//! use ruler::prelude::*;
//! use ruler::{assert_clean, assert_type_mismatch, assert_verdict};
//!
//! let p = begins_with("a");
//! assert_verdict!(p.check(&Value::from("abc")), true);
//! assert_clean!(p.check(&Value::from("xyz")));
//! assert_type_mismatch!(p.check(&Value::from(1.0)));
//! ```

/// Assert that a verdict is clean and has the expected boolean.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
/// use ruler::assert_verdict;
///
/// assert_verdict!(exists().check(&Value::Absent), true);
/// assert_verdict!(exists().check(&Value::from(0.0)), false);
/// ```
#[macro_export]
macro_rules! assert_verdict {
    ($verdict:expr, $expected:expr) => {
        match $crate::Outcome::into_parts($verdict) {
            (matched, None) => assert_eq!(matched, $expected, "unexpected verdict"),
            (matched, Some(failure)) => {
                panic!(
                    "Expected clean verdict {:?}, got {:?} with failure: {}",
                    $expected, matched, failure
                );
            }
        }
    };
}

/// Assert that an outcome carries no failure.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
/// use ruler::assert_clean;
///
/// assert_clean!(serialize(&exists()));
/// ```
#[macro_export]
macro_rules! assert_clean {
    ($outcome:expr) => {
        if let Some(failure) = $crate::Outcome::failure(&$outcome) {
            panic!("Expected clean outcome, got failure: {}", failure);
        }
    };
}

/// Assert that a verdict failed with a type mismatch, directly or inside an
/// aggregate.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
/// use ruler::assert_type_mismatch;
///
/// assert_type_mismatch!(less_than(1.0).check(&Value::from("1")));
/// assert_type_mismatch!(or!(less_than(1.0), exists()).check(&Value::from("1")));
/// ```
#[macro_export]
macro_rules! assert_type_mismatch {
    ($verdict:expr) => {
        match $crate::Outcome::failure(&$verdict) {
            Some(failure) => assert!(
                $crate::testing::contains_type_mismatch(failure),
                "Expected a type mismatch, got: {}",
                failure
            ),
            None => panic!("Expected a type mismatch, got a clean outcome"),
        }
    };
}

/// Returns true if `failure` is, or transitively contains, a type mismatch.
pub fn contains_type_mismatch(failure: &crate::Failure) -> bool {
    match failure {
        crate::Failure::TypeMismatch => true,
        crate::Failure::Aggregate(agg) => agg.failures().iter().any(contains_type_mismatch),
        crate::Failure::Unserializable { .. } => false,
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Generates scalar values: absent, bools, integers, finite numbers and strings.
#[cfg(feature = "proptest")]
impl Arbitrary for crate::Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use crate::Value;

        prop_oneof![
            Just(Value::Absent),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Integer),
            (-1.0e9..1.0e9f64).prop_map(Value::Number),
            ".{0,16}".prop_map(Value::Str),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{equals, exists, less_than, or};
    use crate::{AggregateFailure, Failure, Outcome, Value};

    #[test]
    fn assert_verdict_macro() {
        assert_verdict!(equals("a").check(&Value::from("a")), true);
        assert_verdict!(equals("a").check(&Value::from("b")), false);
    }

    #[test]
    fn assert_clean_macro() {
        assert_clean!(exists().check(&Value::from(1.0)));
    }

    #[test]
    fn assert_type_mismatch_macro() {
        assert_type_mismatch!(equals("a").check(&Value::from(1.0)));
        assert_type_mismatch!(or(less_than(1.0), exists(), []).check(&Value::from("a")));
    }

    #[test]
    #[should_panic(expected = "Expected clean verdict")]
    fn assert_verdict_panics_on_failure() {
        assert_verdict!(equals("a").check(&Value::from(1.0)), false);
    }

    #[test]
    #[should_panic(expected = "unexpected verdict")]
    fn assert_verdict_panics_on_wrong_value() {
        assert_verdict!(equals("a").check(&Value::from("a")), false);
    }

    #[test]
    #[should_panic(expected = "Expected clean outcome")]
    fn assert_clean_panics_on_failure() {
        assert_clean!(Outcome::failed((), Failure::TypeMismatch));
    }

    #[test]
    #[should_panic(expected = "Expected a type mismatch, got a clean outcome")]
    fn assert_type_mismatch_panics_on_clean() {
        assert_type_mismatch!(exists().check(&Value::Absent));
    }

    #[test]
    fn contains_type_mismatch_looks_into_aggregates() {
        let nested: AggregateFailure = std::iter::once(Failure::from(
            std::iter::once(Failure::TypeMismatch).collect::<AggregateFailure>(),
        ))
        .collect();
        assert!(contains_type_mismatch(&Failure::from(nested)));
        assert!(!contains_type_mismatch(&Failure::Unserializable {
            kind: crate::PredicateKind::Equals,
            type_name: "map",
        }));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;

        proptest! {
            #[test]
            fn value_arbitrary_is_scalar(value in any::<Value>()) {
                prop_assert!(!matches!(value, Value::Opaque(_) | Value::List(_) | Value::Map(_)));
            }

            #[test]
            fn exists_never_fails(value in any::<Value>()) {
                let (matched, failure) = exists().check(&value).into_parts();
                prop_assert!(failure.is_none());
                prop_assert_eq!(matched, value.is_absent());
            }
        }
    }
}
