//! Operators that combine two sequences, or a sequence and an element, into a new sequence.
//!
//! The set-like operators accept an [`EqualityComparer`](crate::comparer::EqualityComparer) via
//! their `_by` variants and otherwise compare elements with [`PartialEq`].

mod combine;
mod tests;

pub use combine::*;
