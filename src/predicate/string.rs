//! String predicates
//!
//! All string predicates accept only [`Value::Str`] inputs; anything else is a
//! type mismatch.

use regex::Regex;
use std::fmt;

use super::{mismatch, Node, Predicate};
use crate::kind::PredicateKind;
use crate::outcome::{Outcome, Verdict};
use crate::value::Value;

pub(crate) fn check_str<F>(kind: PredicateKind, value: &Value, test: F) -> Verdict
where
    F: FnOnce(&str) -> bool,
{
    match value.as_str() {
        Some(s) => Outcome::clean(test(s)),
        None => mismatch(kind, value),
    }
}

/// Create a predicate that checks if a string starts with `prefix`.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// assert!(begins_with("http").check(&Value::from("https://example.com")).into_result().unwrap());
/// assert!(!begins_with("http").check(&Value::from("ftp://example.com")).into_result().unwrap());
/// ```
pub fn begins_with(prefix: impl Into<String>) -> Predicate {
    Predicate::from_node(Node::BeginsWith(prefix.into()))
}

/// Create a predicate that checks if a string ends with `suffix`.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// assert!(ends_with(".rs").check(&Value::from("main.rs")).into_result().unwrap());
/// ```
pub fn ends_with(suffix: impl Into<String>) -> Predicate {
    Predicate::from_node(Node::EndsWith(suffix.into()))
}

/// Create a predicate that checks if a string contains `substring`.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// assert!(contains("@").check(&Value::from("user@example.com")).into_result().unwrap());
/// ```
pub fn contains(substring: impl Into<String>) -> Predicate {
    Predicate::from_node(Node::Contains(substring.into()))
}

/// Create a predicate that checks if a regular expression matches anywhere in
/// a string. Anchor the pattern with `^`/`$` to match the whole input.
///
/// # Errors
///
/// Returns the compile error if `pattern` is not a valid regular expression.
///
/// # Example
///
/// ```rust
/// use ruler::prelude::*;
///
/// let p = matches_regex(r"^v\d+\.\d+$").unwrap();
/// assert!(p.check(&Value::from("v1.20")).into_result().unwrap());
/// assert!(!p.check(&Value::from("v1")).into_result().unwrap());
/// assert!(matches_regex("(").is_err());
/// ```
pub fn matches_regex(pattern: &str) -> Result<Predicate, regex::Error> {
    let pattern = Pattern::new(pattern)?;
    Ok(Predicate::from_node(Node::RegexMatch(pattern)))
}

/// A compiled regular expression. Two patterns are equal when their sources are.
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compile a pattern.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Pattern)
    }

    /// The pattern source.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns true if the pattern matches anywhere in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Failure;

    fn verdict(p: &Predicate, input: &str) -> bool {
        p.check(&Value::from(input)).into_result().unwrap()
    }

    #[test]
    fn test_begins_with() {
        let p = begins_with("foo");
        assert!(verdict(&p, "foobar"));
        assert!(verdict(&p, "foo"));
        assert!(!verdict(&p, "barfoo"));
        assert!(verdict(&begins_with(""), "anything"));
    }

    #[test]
    fn test_ends_with() {
        let p = ends_with("bar");
        assert!(verdict(&p, "foobar"));
        assert!(!verdict(&p, "barfoo"));
    }

    #[test]
    fn test_contains() {
        let p = contains("ob");
        assert!(verdict(&p, "foobar"));
        assert!(!verdict(&p, "o b ar"));
        assert!(!verdict(&p, "bar"));
    }

    #[test]
    fn test_unicode() {
        assert!(verdict(&begins_with("héllo"), "héllo wörld"));
        assert!(verdict(&ends_with("wörld"), "héllo wörld"));
        assert!(verdict(&contains("o w"), "héllo wörld"));
    }

    #[test]
    fn test_non_string_is_type_mismatch() {
        for p in [begins_with("a"), ends_with("a"), contains("a")] {
            assert_eq!(
                p.check(&Value::from(1.0)).into_parts(),
                (false, Some(Failure::TypeMismatch))
            );
            assert_eq!(
                p.check(&Value::Absent).into_parts(),
                (false, Some(Failure::TypeMismatch))
            );
        }
    }

    #[test]
    fn test_regex() {
        let p = matches_regex("[0-9]{3}").unwrap();
        assert!(verdict(&p, "call 555 now"));
        assert!(!verdict(&p, "call 55 now"));
        assert_eq!(
            p.check(&Value::from(555)).into_parts(),
            (false, Some(Failure::TypeMismatch))
        );
    }

    #[test]
    fn test_invalid_regex() {
        assert!(matches_regex("[unclosed").is_err());
    }

    #[test]
    fn test_pattern_equality_by_source() {
        assert_eq!(Pattern::new("a+").unwrap(), Pattern::new("a+").unwrap());
        assert_ne!(Pattern::new("a+").unwrap(), Pattern::new("a*").unwrap());
        assert_eq!(
            matches_regex("a+").unwrap().string_value(),
            Some("a+")
        );
    }
}
