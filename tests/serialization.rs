//! Integration tests for the compact and indented renderings.

use ruler::prelude::*;
use ruler::{assert_clean, DecodeError};

#[test]
fn compact_negated_disjunction() {
    let rule = not(or!(equals("foo"), equals("bar")));
    assert_eq!(
        serialize(&rule).into_result().unwrap(),
        r#"Not(Or(Equals("foo"), Equals("bar")))"#
    );
}

#[test]
fn compact_double_negation() {
    let neg = not(equals("foo"));
    let double = not(neg.clone());
    assert_eq!(serialize(&neg).value(), r#"Not(Equals("foo"))"#);
    assert_eq!(serialize(&double).value(), r#"Equals("foo")"#);
}

#[test]
fn compact_near_equal() {
    let rule = near_equal(1.0, 0.1);
    assert_eq!(
        serialize(&rule).into_result().unwrap(),
        "Not(Or(Not(Or(LessThan(1.100000), Equals(1.100000))), LessThan(0.900000)))"
    );
}

#[test]
fn indented_conjunction() {
    let rule = and!(equals("a"), equals("b"));
    let text = indented_serialize(&rule).into_result().unwrap();
    assert_eq!(text, "And(\n\tEquals(\"a\"),\n\tEquals(\"b\")\n)\r\n");
}

#[test]
fn indented_leaf_only_gets_terminator() {
    assert_eq!(indented_serialize(&less_than(2.0)).value(), "LessThan(2.000000)\r\n");
}

#[test]
fn indented_with_spaces() {
    let rule = or!(begins_with("a"), not(contains("b")));
    let codec = Indented::new().with_indent("  ").with_terminator("\n");
    let expected = concat!(
        "Or(\n",
        "  BeginsWith(\"a\"),\n",
        "  Not(\n",
        "    Contains(\"b\")\n",
        "  )\n",
        ")\n",
    );
    assert_eq!(codec.serialize(&rule).into_result().unwrap(), expected);
}

#[test]
fn serializers_collect_every_unserializable_leaf() {
    let rule = and!(
        equals(Value::Absent),
        not(equals(Value::List(vec![]))),
        equals("ok")
    );

    let (compact, failure) = serialize(&rule).into_parts();
    assert_eq!(
        compact,
        r#"And(Equals(<absent>), Not(Equals(<list>)), Equals("ok"))"#
    );
    let failure = failure.unwrap();
    let agg = failure.as_aggregate().unwrap();
    assert_eq!(agg.len(), 2);
    // Serializing a `not` wraps its child's failure in its own aggregate.
    assert!(agg.failures()[1].as_aggregate().is_some());

    let (_, failure) = indented_serialize(&rule).into_parts();
    assert_eq!(failure.unwrap().as_aggregate().unwrap().len(), 2);
}

#[test]
fn scalar_generic_literals_render_natively() {
    assert_clean!(serialize(&equals(true)));
    assert_eq!(serialize(&equals(false)).value(), "Equals(false)");
    assert_eq!(serialize(&equals(-7)).value(), "Equals(-7)");
}

#[test]
fn deserialization_is_not_implemented() {
    assert_eq!(
        Compact.deserialize(r#"Equals("foo")"#),
        Err(DecodeError::NotImplemented)
    );
    assert_eq!(
        Indented::default().deserialize("Exists()\r\n"),
        Err(DecodeError::NotImplemented)
    );
}
