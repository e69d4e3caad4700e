//! Textual renderings of predicate trees
//!
//! Two renderers walk a tree and produce text:
//!
//! - [`Compact`]: one line of nested call notation, `Not(Or(Equals("a"), Exists()))`
//! - [`Indented`]: one node per line, children indented one level deeper
//!
//! Rendering visits every node. A leaf without a textual form (an `Equals`
//! over a list, map, absent or opaque literal) still renders a placeholder and
//! contributes a [`Failure::Unserializable`](crate::Failure::Unserializable);
//! failures from siblings are aggregated the same way evaluation does.
//!
//! Parsing text back into a tree is not implemented:
//! [`Codec::deserialize`] always returns [`DecodeError::NotImplemented`].
//!
//! # Example
//!
//! ```rust
//! use ruler::prelude::*;
//!
//! let p = not(or!(equals("foo"), equals("bar")));
//! assert_eq!(serialize(&p).into_result().unwrap(), r#"Not(Or(Equals("foo"), Equals("bar")))"#);
//! ```

mod compact;
mod indented;

pub use compact::Compact;
pub use indented::Indented;

use std::error::Error as StdError;
use std::fmt;

use crate::aggregate::AggregateFailure;
use crate::outcome::Outcome;
use crate::predicate::Predicate;

/// A textual format for predicate trees.
pub trait Codec {
    /// Render a tree. The text is best-effort when a failure is attached.
    fn serialize(&self, predicate: &Predicate) -> Outcome<String>;

    /// Parse text back into a tree.
    fn deserialize(&self, text: &str) -> Result<Predicate, DecodeError>;
}

/// Error returned by [`Codec::deserialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// This codec cannot parse.
    NotImplemented,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::NotImplemented => f.write_str("deserialization is not implemented"),
        }
    }
}

impl StdError for DecodeError {}

/// Render in compact single-line form.
pub fn serialize(predicate: &Predicate) -> Outcome<String> {
    Compact.serialize(predicate)
}

/// Render in indented form with a tab per level and a trailing `"\r\n"`.
pub fn indented_serialize(predicate: &Predicate) -> Outcome<String> {
    Indented::default().serialize(predicate)
}

/// Quote a string literal, escaping quotes, backslashes and control characters.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' || c.is_control() {
            out.extend(c.escape_debug());
        } else {
            out.push(c);
        }
    }
    out.push('"');
    out
}

/// Split child renderings into their texts and the aggregate of their failures.
fn gather<I>(children: I) -> (Vec<String>, AggregateFailure)
where
    I: IntoIterator<Item = Outcome<String>>,
{
    children.into_iter().fold(
        (Vec::new(), AggregateFailure::new()),
        |(mut texts, mut failures), child| {
            let (text, failure) = child.into_parts();
            texts.push(text);
            failures.append_opt(failure);
            (texts, failures)
        },
    )
}

#[cfg(feature = "tracing")]
fn trace_failure(format: &'static str, outcome: &Outcome<String>) {
    if let Some(failure) = outcome.failure() {
        tracing::debug!(format, failure = %failure, "serialization incomplete");
    }
}
