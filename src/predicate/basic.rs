//! Existence and equality

use super::{mismatch, Node, Predicate};
use crate::kind::PredicateKind;
use crate::outcome::{Outcome, Verdict};
use crate::value::{Opaque, Value};

/// Create a predicate that is true when the input is [`Value::Absent`].
///
/// Note the polarity: `exists()` answers `true` for the absent sentinel and
/// `false` for every present value. It never fails.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// assert_eq!(exists().check(&Value::Absent).into_parts(), (true, None));
/// assert_eq!(exists().check(&Value::from("x")).into_parts(), (false, None));
/// ```
pub fn exists() -> Predicate {
    Predicate::from_node(Node::Exists)
}

/// The literal an `Equals` predicate compares against.
///
/// The variant is chosen from the argument's type when [`equals`] is called:
/// strings and floating-point numbers get their own specializations, every
/// other value compares by exact runtime type and then by equality.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// String equality.
    Str(String),
    /// Number equality.
    Number(f64),
    /// Exact-type equality over any other value.
    Other(Value),
}

impl Literal {
    pub(crate) fn check(&self, value: &Value) -> Verdict {
        match self {
            Literal::Str(expected) => match value.as_str() {
                Some(s) => Outcome::clean(s == expected),
                None => mismatch(PredicateKind::Equals, value),
            },
            Literal::Number(expected) => match value.as_number() {
                Some(n) => Outcome::clean(n == *expected),
                None => mismatch(PredicateKind::Equals, value),
            },
            Literal::Other(expected) if expected.same_type(value) => {
                Outcome::clean(expected == value)
            }
            Literal::Other(_) => mismatch(PredicateKind::Equals, value),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

impl From<&String> for Literal {
    fn from(value: &String) -> Self {
        Literal::Str(value.clone())
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Literal::Number(f64::from(value))
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Other(Value::Bool(value))
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Other(Value::Integer(value))
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Other(Value::Integer(i64::from(value)))
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Other(Value::Integer(i64::from(value)))
    }
}

impl From<Opaque> for Literal {
    fn from(value: Opaque) -> Self {
        Literal::Other(Value::Opaque(value))
    }
}

impl From<Value> for Literal {
    fn from(value: Value) -> Self {
        match value {
            Value::Str(s) => Literal::Str(s),
            Value::Number(n) => Literal::Number(n),
            other => Literal::Other(other),
        }
    }
}

/// Create a predicate that is true when the input equals `value`.
///
/// A string literal only accepts string inputs, a number literal only number
/// inputs, and any other literal only inputs of exactly its runtime type.
/// Inputs of another type are a type mismatch.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// assert_eq!(equals("foo").check(&Value::from("foo")).into_result(), Ok(true));
/// assert_eq!(equals(2.0).check(&Value::from(2.0)).into_result(), Ok(true));
/// assert_eq!(equals(true).check(&Value::from(false)).into_result(), Ok(false));
///
/// // Integer and Number are different types.
/// assert_eq!(
///     equals(2).check(&Value::from(2.0)).into_result(),
///     Err(Failure::TypeMismatch)
/// );
/// ```
pub fn equals<L: Into<Literal>>(value: L) -> Predicate {
    Predicate::from_node(Node::Equals(value.into()))
}
