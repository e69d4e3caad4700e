//! Multi-line tree notation.

use super::compact;
use super::{gather, Codec, DecodeError};
use crate::kind::PredicateKind;
use crate::outcome::Outcome;
use crate::predicate::{Node, Predicate};

/// Indented renderer.
///
/// Leaves render as in [`Compact`](super::Compact), prefixed by one indent unit
/// per nesting level. A connective opens on its own line, lists each child one
/// level deeper separated by `",\n"`, and closes at its own level. The whole
/// rendering ends with the terminator.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// let p = and!(equals("a"), equals("b"));
/// let text = Indented::default().serialize(&p).into_result().unwrap();
/// assert_eq!(text, "And(\n\tEquals(\"a\"),\n\tEquals(\"b\")\n)\r\n");
///
/// let text = Indented::new().with_indent("  ").with_terminator("\n").serialize(&p);
/// assert_eq!(text.value(), "And(\n  Equals(\"a\"),\n  Equals(\"b\")\n)\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indented {
    indent: String,
    terminator: String,
}

impl Default for Indented {
    fn default() -> Self {
        Indented {
            indent: "\t".to_string(),
            terminator: "\r\n".to_string(),
        }
    }
}

impl Indented {
    /// Tab indentation, `"\r\n"` terminator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the string repeated once per nesting level.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the string appended after the whole rendering.
    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// The per-level indent unit.
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// The trailing terminator.
    pub fn terminator(&self) -> &str {
        &self.terminator
    }

    fn render(&self, predicate: &Predicate, depth: usize) -> Outcome<String> {
        let pad = self.indent.repeat(depth);
        match predicate.node() {
            Node::Exists
            | Node::Equals(_)
            | Node::LessThan(_)
            | Node::BeginsWith(_)
            | Node::EndsWith(_)
            | Node::Contains(_)
            | Node::RegexMatch(_) => compact::render(predicate).map(|leaf| pad + &leaf),
            Node::Not(child) => self.block(
                &pad,
                predicate.kind(),
                std::slice::from_ref(child.as_ref()),
                depth,
            ),
            Node::And(children) | Node::Or(children) => {
                self.block(&pad, predicate.kind(), children, depth)
            }
        }
    }

    fn block(
        &self,
        pad: &str,
        kind: PredicateKind,
        children: &[Predicate],
        depth: usize,
    ) -> Outcome<String> {
        let (texts, failures) = gather(children.iter().map(|c| self.render(c, depth + 1)));
        Outcome::new(
            format!("{pad}{kind}(\n{}\n{pad})", texts.join(",\n")),
            failures.collapse(),
        )
    }
}

impl Codec for Indented {
    fn serialize(&self, predicate: &Predicate) -> Outcome<String> {
        let outcome = self
            .render(predicate, 0)
            .map(|text| text + &self.terminator);
        #[cfg(feature = "tracing")]
        super::trace_failure("indented", &outcome);
        outcome
    }

    fn deserialize(&self, _text: &str) -> Result<Predicate, DecodeError> {
        Err(DecodeError::NotImplemented)
    }
}
