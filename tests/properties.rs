//! Property-based tests for evaluation and construction

use proptest::prelude::*;
use ruler::prelude::*;

fn leaf() -> impl Strategy<Value = Predicate> {
    prop_oneof![
        Just(exists()),
        "[a-c]{0,3}".prop_map(|s: String| equals(s)),
        "[a-c]{0,2}".prop_map(|s: String| begins_with(s)),
        "[a-c]{0,2}".prop_map(|s: String| ends_with(s)),
        "[a-c]{0,2}".prop_map(|s: String| contains(s)),
    ]
}

fn tree() -> impl Strategy<Value = Predicate> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(not),
            prop::collection::vec(inner.clone(), 2..4).prop_map(|mut ps| {
                let first = ps.remove(0);
                let second = ps.remove(0);
                and(first, second, ps)
            }),
            prop::collection::vec(inner, 2..4).prop_map(|mut ps| {
                let first = ps.remove(0);
                let second = ps.remove(0);
                or(first, second, ps)
            }),
        ]
    })
}

fn reversed(p: &Predicate) -> Option<Predicate> {
    if !matches!(p.kind(), PredicateKind::And | PredicateKind::Or) {
        return None;
    }
    let mut children = p.components().to_vec();
    children.reverse();
    let first = children.remove(0);
    let second = children.remove(0);
    match p.kind() {
        PredicateKind::And => Some(and(first, second, children)),
        _ => Some(or(first, second, children)),
    }
}

proptest! {
    #[test]
    fn prop_equals_matches_itself(s in ".*") {
        prop_assert_eq!(equals(s.as_str()).check(&Value::from(s.as_str())).into_parts(), (true, None));
    }

    #[test]
    fn prop_equals_rejects_extension(s in ".*") {
        let longer = format!("{s}x");
        prop_assert_eq!(equals(s.as_str()).check(&Value::from(longer)).into_parts(), (false, None));
    }

    #[test]
    fn prop_equals_string_on_number_is_type_mismatch(s in ".*", n in any::<f64>()) {
        let (_, failure) = equals(s).check(&Value::from(n)).into_parts();
        prop_assert_eq!(failure, Some(Failure::TypeMismatch));
    }

    #[test]
    fn prop_double_negation_is_identity(p in tree()) {
        prop_assert_eq!(not(not(p.clone())), p);
    }

    #[test]
    fn prop_not_inverts_clean_verdicts(p in tree(), input in "[a-c]{0,4}") {
        let value = Value::from(input);
        let (matched, failure) = p.check(&value).into_parts();
        let (negated, negated_failure) = not(p).check(&value).into_parts();
        prop_assert_eq!(negated_failure.is_some(), failure.is_some());
        if failure.is_none() {
            prop_assert_eq!(negated, !matched);
        }
    }

    #[test]
    fn prop_connective_verdict_ignores_child_order(p in tree(), input in "[a-c]{0,4}") {
        // String-only trees never fail on string inputs.
        let value = Value::from(input);
        if let Some(q) = reversed(&p) {
            let (a, fa) = p.check(&value).into_parts();
            let (b, fb) = q.check(&value).into_parts();
            prop_assert!(fa.is_none() && fb.is_none());
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn prop_string_tree_on_number_never_panics(p in tree(), n in any::<f64>()) {
        let _ = p.check(&Value::from(n));
    }

    #[test]
    fn prop_less_than_agrees_with_operator(a in -1.0e6..1.0e6f64, b in -1.0e6..1.0e6f64) {
        prop_assert_eq!(less_than(b).check(&Value::from(a)).into_parts(), (a < b, None));
        prop_assert_eq!(greater_than(b).check(&Value::from(a)).into_parts(), (a > b, None));
    }

    #[test]
    fn prop_serialization_is_always_clean_for_string_trees(p in tree()) {
        prop_assert!(serialize(&p).is_clean());
        prop_assert!(indented_serialize(&p).value().ends_with("\r\n"));
    }

    #[test]
    fn prop_display_matches_compact(p in tree()) {
        prop_assert_eq!(p.to_string(), serialize(&p).value().clone());
    }
}
