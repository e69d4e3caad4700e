//! Failures reported by evaluation and serialization
//!
//! A failure never replaces a result. [`check`](crate::Predicate::check) and the
//! serializers always return their best-effort value and attach a failure next
//! to it; the caller decides whether the value is still trustworthy.

use std::error::Error as StdError;
use std::fmt;

use crate::aggregate::AggregateFailure;
use crate::kind::PredicateKind;

/// A failure attached to an [`Outcome`](crate::Outcome).
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// let (matched, failure) = begins_with("a").check(&Value::from(1.0)).into_parts();
/// assert!(!matched);
/// assert_eq!(failure, Some(Failure::TypeMismatch));
/// assert_eq!(Failure::TypeMismatch.to_string(), "type error");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// The input's runtime type is incompatible with the predicate.
    TypeMismatch,
    /// Failures gathered from several children.
    Aggregate(AggregateFailure),
    /// A leaf has no textual form. Only serializers produce this.
    Unserializable {
        /// Kind of the leaf that could not be rendered.
        kind: PredicateKind,
        /// Runtime type of its literal.
        type_name: &'static str,
    },
}

impl Failure {
    /// Returns true if this is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Failure::TypeMismatch)
    }

    /// The aggregate, if this failure bundles several.
    pub fn as_aggregate(&self) -> Option<&AggregateFailure> {
        match self {
            Failure::Aggregate(agg) => Some(agg),
            _ => None,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::TypeMismatch => f.write_str("type error"),
            Failure::Aggregate(agg) => fmt::Display::fmt(agg, f),
            Failure::Unserializable { kind, type_name } => {
                write!(f, "no serialization known for {kind} over {type_name}")
            }
        }
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Failure::Aggregate(agg) => agg.source(),
            _ => None,
        }
    }
}

impl From<AggregateFailure> for Failure {
    fn from(agg: AggregateFailure) -> Self {
        Failure::Aggregate(agg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        assert_eq!(Failure::TypeMismatch.to_string(), "type error");
        assert!(Failure::TypeMismatch.is_type_mismatch());
    }

    #[test]
    fn test_unserializable_message() {
        let failure = Failure::Unserializable {
            kind: PredicateKind::Equals,
            type_name: "list",
        };
        assert_eq!(
            failure.to_string(),
            "no serialization known for Equals over list"
        );
    }

    #[test]
    fn test_aggregate_source_is_first_failure() {
        let mut agg = AggregateFailure::new();
        agg.append(Failure::TypeMismatch);
        let failure = Failure::from(agg);

        let source = failure.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("type error"));
        assert!(failure.as_aggregate().is_some());
    }
}
