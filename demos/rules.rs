//! Predicate Rules Example
//!
//! Builds a few filter rules, checks them against inputs and prints both
//! textual renderings.
//!
//! Run with: cargo run --example rules

use ruler::prelude::*;

fn main() {
    println!("=== Predicate Rules Example ===\n");

    string_rules();
    numeric_rules();
    failures();
    rendering();
}

fn string_rules() {
    println!("--- String Rules ---\n");

    let rule = not(or!(equals("foo"), equals("bar"), equals("hello")));
    for input in ["hello", "world"] {
        let (matched, failure) = rule.check(&Value::from(input)).into_parts();
        println!("  {rule} on {input:?}: {matched} ({failure:?})");
    }

    let image = and!(begins_with("img_"), ends_with(".png"), not(contains("tmp")));
    for input in ["img_01.png", "img_tmp.png", "doc.png"] {
        println!("  image rule on {input:?}: {}", image.check(&Value::from(input)).value());
    }
    println!();
}

fn numeric_rules() {
    println!("--- Numeric Rules ---\n");

    println!("  {}", greater_than(10.0));
    for v in [9.9, 10.0, 10.1] {
        println!("  greater_than(10.0) on {v}: {}", greater_than(10.0).check(&Value::from(v)).value());
    }

    let near = near_equal(1.0, 0.1);
    for v in [0.89, 0.90, 0.95, 1.0, 1.05, 1.1, 1.11] {
        println!("  near_equal(1.0, 0.1) on {v}: {}", near.check(&Value::from(v)).value());
    }
    println!();
}

fn failures() {
    println!("--- Failures ---\n");

    let rule = or!(less_than(1.0), less_than(2.0), equals("x"), less_than(3.0));
    let (matched, failure) = rule.check(&Value::from("x")).into_parts();
    println!("  verdict: {matched}");
    if let Some(failure) = failure {
        println!("  failure: {failure}");
    }

    match exists().check(&Value::Absent).into_result() {
        Ok(matched) => println!("  exists() on absent: {matched}"),
        Err(failure) => println!("  exists() failed: {failure}"),
    }
    println!();
}

fn rendering() {
    println!("--- Rendering ---\n");

    let rule = and!(begins_with("user_"), not(equals("user_root")), near_equal(5.0, 0.5));
    println!("  compact:  {}", serialize(&rule).value());
    print!("{}", Indented::new().with_indent("    ").serialize(&rule).value());

    let unserializable = equals(Value::List(vec![]));
    let (text, failure) = serialize(&unserializable).into_parts();
    println!("  {text} -> {failure:?}");
}
