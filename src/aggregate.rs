//! Aggregation of failures from several sub-evaluations
//!
//! Composite predicates and the serializers visit several children and may see
//! a failure from each. [`AggregateFailure`] collects them in visiting order and
//! [`collapse`](AggregateFailure::collapse)s to "no failure" when nothing failed.
//!
//! # Example
//!
//! ```rust
//! use ruler::{AggregateFailure, Failure};
//!
//! let mut agg = AggregateFailure::new();
//! assert_eq!(agg.clone().collapse(), None);
//!
//! agg.append(Failure::TypeMismatch);
//! agg.append(Failure::TypeMismatch);
//! assert_eq!(agg.message(), r#"composite error {"type error, type error"}"#);
//! assert!(agg.collapse().is_some());
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::encoding::quote;
use crate::error::Failure;

/// An ordered bundle of zero or more failures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateFailure {
    failures: Vec<Failure>,
}

impl AggregateFailure {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one failure at the end.
    pub fn append(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    /// Add a failure if there is one.
    pub fn append_opt(&mut self, failure: Option<Failure>) {
        if let Some(failure) = failure {
            self.append(failure);
        }
    }

    /// `None` when empty, otherwise the aggregate itself as a failure.
    pub fn collapse(self) -> Option<Failure> {
        if self.failures.is_empty() {
            None
        } else {
            Some(Failure::Aggregate(self))
        }
    }

    /// Number of contained failures.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if no failure has been appended.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// The contained failures in the order they were appended.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Each failure's text joined by `", "`, wrapped as `composite error {"..."}`.
    pub fn message(&self) -> String {
        let joined = self
            .failures
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("composite error {{{}}}", quote(&joined))
    }
}

impl fmt::Display for AggregateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl StdError for AggregateFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.failures.first().map(|f| f as &(dyn StdError + 'static))
    }
}

impl FromIterator<Failure> for AggregateFailure {
    fn from_iter<I: IntoIterator<Item = Failure>>(iter: I) -> Self {
        AggregateFailure {
            failures: iter.into_iter().collect(),
        }
    }
}

impl Extend<Failure> for AggregateFailure {
    fn extend<I: IntoIterator<Item = Failure>>(&mut self, iter: I) {
        self.failures.extend(iter);
    }
}

impl IntoIterator for AggregateFailure {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}
