//! Stock validator constructors.
//!
//! Common write gates, ready to hand to
//! [`AttrBuilder::validator`](crate::AttrBuilder::validator):
//! length and range checks, pattern matching, allowed-value sets and
//! null rejection. A candidate of a non-applicable type is rejected.

use crate::AttrStore;
use attra_core::Value;
use regex_lite::Regex;

/// Accept strings of at least `n` characters.
pub fn min_len(n: usize) -> impl Fn(&mut AttrStore, &Value) -> bool {
    move |_, v| v.as_str().map_or(false, |s| s.chars().count() >= n)
}

/// Accept strings of at most `n` characters.
pub fn max_len(n: usize) -> impl Fn(&mut AttrStore, &Value) -> bool {
    move |_, v| v.as_str().map_or(false, |s| s.chars().count() <= n)
}

/// Accept values within `[min, max]` per `Value::gte`/`Value::lte`.
/// Incomparable candidates are rejected.
pub fn in_range(min: impl Into<Value>, max: impl Into<Value>) -> impl Fn(&mut AttrStore, &Value) -> bool {
    let min = min.into();
    let max = max.into();
    move |_, v| v.gte(&min) && v.lte(&max)
}

/// Accept strings matching the pattern. An invalid pattern rejects every
/// candidate.
pub fn matches(pattern: &str) -> impl Fn(&mut AttrStore, &Value) -> bool {
    let re = Regex::new(pattern).ok();
    move |_, v| match (&re, v.as_str()) {
        (Some(re), Some(s)) => re.is_match(s),
        _ => false,
    }
}

/// Accept only the listed values.
pub fn one_of(values: Vec<Value>) -> impl Fn(&mut AttrStore, &Value) -> bool {
    move |_, v| values.contains(v)
}

/// Reject `Value::Null`.
pub fn not_null() -> impl Fn(&mut AttrStore, &Value) -> bool {
    |_, v| !v.is_null()
}
