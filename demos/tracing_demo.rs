//! Tracing Integration Example
//!
//! Shows the events emitted when the `tracing` feature is enabled.
//!
//! Run with: cargo run --example tracing_demo --features tracing

use ruler::prelude::*;
use tracing_subscriber::fmt;

fn main() {
    fmt().with_max_level(tracing::Level::TRACE).init();

    let rule = and!(begins_with("a"), less_than(5.0), ends_with("z"));

    // Short-circuits at the first child
    let _ = rule.check(&Value::from("zzz"));

    // Type mismatch on the second child, which decides the `and`
    let _ = rule.check(&Value::from("abz"));

    // Serialization with a placeholder
    let _ = serialize(&or!(equals(Value::Absent), exists()));
}
