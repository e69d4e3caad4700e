//! Dynamic input values
//!
//! Predicates are evaluated against a [`Value`], whose concrete runtime type is
//! only known when [`check`](crate::Predicate::check) is called. Every predicate
//! performs its own type test and reports a
//! [`Failure::TypeMismatch`](crate::Failure::TypeMismatch) when the input is of
//! the wrong kind.
//!
//! # Example
//!
//! ```rust
//! use ruler::Value;
//!
//! assert_eq!(Value::from("hello"), Value::Str("hello".to_string()));
//! assert_eq!(Value::from(None::<f64>), Value::Absent);
//! assert!(Value::from(1.5).same_type(&Value::from(2.0)));
//! assert!(!Value::from(1.5).same_type(&Value::from(2_i64)));
//! ```

#[cfg(feature = "serde")]
mod serde_impl;

use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::fmt;
use std::mem::discriminant;
use std::sync::Arc;

/// A runtime value a predicate can be checked against.
///
/// `Integer` and `Number` are distinct types: number predicates only accept
/// `Number`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absent sentinel.
    #[default]
    Absent,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating-point number.
    Number(f64),
    /// A string.
    Str(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// A string-keyed map of values.
    Map(BTreeMap<String, Value>),
    /// Any caller-defined comparable type.
    Opaque(Opaque),
}

impl Value {
    /// Wrap a caller-defined type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ruler::Value;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Port(u16);
    ///
    /// assert_eq!(Value::opaque(Port(80)), Value::opaque(Port(80)));
    /// assert_ne!(Value::opaque(Port(80)), Value::opaque(Port(443)));
    /// ```
    pub fn opaque<T: Comparable>(value: T) -> Self {
        Value::Opaque(Opaque::new(value))
    }

    /// Returns true if this is the absent sentinel.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Borrow the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The number payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Exact runtime-type comparison.
    ///
    /// Two values have the same type when they are the same variant and, for
    /// [`Value::Opaque`], wrap the same concrete Rust type.
    pub fn same_type(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Opaque(a), Value::Opaque(b)) => a.type_id() == b.type_id(),
            _ => discriminant(self) == discriminant(other),
        }
    }

    /// Human-readable name of the runtime type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Opaque(o) => o.type_name(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Absent, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

/// Capability required of caller types wrapped in [`Value::Opaque`].
///
/// Implemented for every `PartialEq + Debug + Send + Sync + 'static` type.
pub trait Comparable: Any + fmt::Debug + Send + Sync {
    /// Upcast for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Equality against another type-erased value. Values of different
    /// concrete types are never equal.
    fn eq_dyn(&self, other: &dyn Comparable) -> bool;

    /// Name of the concrete type.
    fn type_name(&self) -> &'static str;
}

impl<T> Comparable for T
where
    T: Any + PartialEq + fmt::Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn Comparable) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A shared, immutable, type-erased comparable value.
#[derive(Clone)]
pub struct Opaque(Arc<dyn Comparable>);

impl Opaque {
    /// Wrap a value.
    pub fn new<T: Comparable>(value: T) -> Self {
        Opaque(Arc::new(value))
    }

    /// Downcast to the concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// `TypeId` of the wrapped concrete type.
    pub fn type_id(&self) -> TypeId {
        self.0.as_any().type_id()
    }

    /// Name of the wrapped concrete type.
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_dyn(other.0.as_ref())
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Opaque").field(&self.0).finish()
    }
}
