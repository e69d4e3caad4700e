//! # Ruler
//!
//! A small engine for declarative predicates over dynamic values.
//!
//! Build rules bottom-up from leaf tests (existence, equality, string shape,
//! numeric order) and the connectives `not`, `and` and `or`; check them
//! against [`Value`]s whose type is only known at run time; render them as
//! text.
//!
//! ## Quick Example
//!
//! ```rust
//! use ruler::prelude::*;
//!
//! let rule = and!(begins_with("user_"), not(equals("user_root")));
//!
//! // Check
//! assert_eq!(rule.check(&Value::from("user_ada")).into_parts(), (true, None));
//! assert_eq!(rule.check(&Value::from("user_root")).into_parts(), (false, None));
//!
//! // Wrong input type: best-effort verdict plus a failure
//! let (matched, failure) = rule.check(&Value::from(3.0)).into_parts();
//! assert!(!matched);
//! assert_eq!(failure.unwrap().to_string(), r#"composite error {"type error"}"#);
//!
//! // Render
//! assert_eq!(
//!     serialize(&rule).into_result().unwrap(),
//!     r#"And(BeginsWith("user_"), Not(Equals("user_root")))"#
//! );
//! ```
//!
//! ## Evaluation
//!
//! Every check returns a [`Verdict`]: a boolean plus an optional [`Failure`].
//! `and`/`or` short-circuit, and report the failures of every child they
//! visited before the deciding one.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for short-circuit decisions, type
//!   mismatches and incomplete serializations
//! - `serde`: `Serialize`/`Deserialize` for [`Value`]
//! - `proptest`: an `Arbitrary` implementation for [`Value`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aggregate;
pub mod encoding;
pub mod error;
pub mod kind;
pub mod outcome;
pub mod predicate;
pub mod testing;
pub mod value;

// Re-exports
pub use aggregate::AggregateFailure;
pub use encoding::{indented_serialize, serialize, Codec, Compact, DecodeError, Indented};
pub use error::Failure;
pub use kind::PredicateKind;
pub use outcome::{Outcome, Verdict};
pub use predicate::Predicate;
pub use value::{Comparable, Opaque, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregate::AggregateFailure;
    pub use crate::encoding::{indented_serialize, serialize, Codec, Compact, Indented};
    pub use crate::error::Failure;
    pub use crate::kind::PredicateKind;
    pub use crate::outcome::{Outcome, Verdict};
    pub use crate::predicate::prelude::*;
    pub use crate::value::Value;
}
