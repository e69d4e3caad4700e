//! Predicate prelude for convenient imports
//!
//! Brings the builders, the `and!`/`or!` macros and [`Predicate`] into scope.
//!
//! # Example
//!
//! ```rust
//! use ruler::predicate::prelude::*;
//! use ruler::Value;
//!
//! let rule = or!(equals("admin"), begins_with("ops-"));
//! assert!(rule.check(&Value::from("ops-eu")).into_result().unwrap());
//! ```

pub use super::Predicate;

// Leaves
pub use super::basic::{equals, exists, Literal};
pub use super::number::{greater_than, less_than, near_equal};
pub use super::string::{begins_with, contains, ends_with, matches_regex};

// Connectives
pub use super::combinators::{and, not, or};
pub use crate::{and, or};
