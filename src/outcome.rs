//! Best-effort results with an optional failure attached.

use crate::error::Failure;

/// A value paired with the failure, if any, seen while producing it.
///
/// Unlike `Result`, an `Outcome` always carries its value. A composite
/// predicate can reach a verdict even though one of its children failed, and a
/// serializer still renders every node it can.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// let verdict = or!(equals("a"), begins_with("b")).check(&Value::from("bee"));
/// assert_eq!(verdict.value(), &true);
/// assert!(verdict.is_clean());
/// assert_eq!(verdict.into_result(), Ok(true));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    value: T,
    failure: Option<Failure>,
}

/// The outcome of checking a predicate.
pub type Verdict = Outcome<bool>;

impl<T> Outcome<T> {
    /// Pair a value with an optional failure.
    pub fn new(value: T, failure: Option<Failure>) -> Self {
        Outcome { value, failure }
    }

    /// A value with no failure.
    pub fn clean(value: T) -> Self {
        Self::new(value, None)
    }

    /// A value produced alongside a failure.
    pub fn failed(value: T, failure: Failure) -> Self {
        Self::new(value, Some(failure))
    }

    /// The best-effort value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The failure, if any.
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Returns true if no failure occurred.
    pub fn is_clean(&self) -> bool {
        self.failure.is_none()
    }

    /// Split into the value and the failure.
    pub fn into_parts(self) -> (T, Option<Failure>) {
        (self.value, self.failure)
    }

    /// `Ok(value)` when clean, otherwise the failure. The value is dropped.
    pub fn into_result(self) -> Result<T, Failure> {
        match self.failure {
            None => Ok(self.value),
            Some(failure) => Err(failure),
        }
    }

    /// Transform the value, keeping the failure.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            failure: self.failure,
        }
    }
}
