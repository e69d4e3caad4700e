//! Single-line call notation.

use std::fmt;

use super::{gather, quote, Codec, DecodeError};
use crate::error::Failure;
use crate::kind::PredicateKind;
use crate::outcome::Outcome;
use crate::predicate::{Literal, Node, Predicate};
use crate::value::Value;

/// Compact renderer: `And(BeginsWith("a"), Not(Equals("ab")))`.
///
/// String literals are quoted and escaped, numbers use six fixed decimals and
/// children are separated by `", "`.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// let text = Compact.serialize(&and!(less_than(2.5), exists()));
/// assert_eq!(text.into_result().unwrap(), "And(LessThan(2.500000), Exists())");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Compact;

impl Codec for Compact {
    fn serialize(&self, predicate: &Predicate) -> Outcome<String> {
        let outcome = render(predicate);
        #[cfg(feature = "tracing")]
        super::trace_failure("compact", &outcome);
        outcome
    }

    fn deserialize(&self, _text: &str) -> Result<Predicate, DecodeError> {
        Err(DecodeError::NotImplemented)
    }
}

pub(crate) fn render(predicate: &Predicate) -> Outcome<String> {
    let kind = predicate.kind();
    match predicate.node() {
        Node::Exists => Outcome::clean(format!("{kind}()")),
        Node::Equals(literal) => render_literal(literal),
        Node::LessThan(n) => Outcome::clean(format!("{kind}({})", number(*n))),
        Node::BeginsWith(s) | Node::EndsWith(s) | Node::Contains(s) => {
            Outcome::clean(format!("{kind}({})", quote(s)))
        }
        Node::RegexMatch(pattern) => Outcome::clean(format!("{kind}({})", quote(pattern.as_str()))),
        Node::Not(child) => composite(kind, std::slice::from_ref(child.as_ref())),
        Node::And(children) | Node::Or(children) => composite(kind, children),
    }
}

fn composite(kind: PredicateKind, children: &[Predicate]) -> Outcome<String> {
    let (texts, failures) = gather(children.iter().map(render));
    Outcome::new(format!("{kind}({})", texts.join(", ")), failures.collapse())
}

fn render_literal(literal: &Literal) -> Outcome<String> {
    let kind = PredicateKind::Equals;
    match literal {
        Literal::Str(s) => Outcome::clean(format!("{kind}({})", quote(s))),
        Literal::Number(n) => Outcome::clean(format!("{kind}({})", number(*n))),
        Literal::Other(Value::Bool(b)) => Outcome::clean(format!("{kind}({b})")),
        Literal::Other(Value::Integer(i)) => Outcome::clean(format!("{kind}({i})")),
        Literal::Other(other) => {
            let type_name = other.type_name();
            Outcome::failed(
                format!("{kind}(<{type_name}>)"),
                Failure::Unserializable { kind, type_name },
            )
        }
    }
}

fn number(n: f64) -> String {
    format!("{n:.6}")
}

/// Renders the compact form, placeholders included.
impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(render(self).value())
    }
}
