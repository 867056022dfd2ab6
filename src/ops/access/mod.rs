//! Operators that pick a single element out of a sequence by position or by predicate.
//!
//! The operators without an `_or_default` suffix are strict: if no element qualifies they fail,
//! rather than quietly producing a value. The `_or_default` variants instead fall back to
//! [`Default::default`] and only fail if the sequence is absent.

mod access;

pub use access::*;
