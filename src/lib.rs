//! This crate is my take on a query-operator library: a flat set of operators for filtering,
//! projecting, combining, reordering and materializing ordered sequences, in the vocabulary of
//! LINQ's `Enumerable` extensions.
//!
//! # Purpose
//! Rust's [`Iterator`] already covers most of this ground, but lazily and with its own naming.
//! This crate instead gives every operator an exact, eager contract: what it accepts, what it
//! returns, in which order it calls its callbacks and how it fails. Edge cases (empty sequences,
//! missing matches, duplicates and custom equality) are part of each operator's documentation
//! rather than an afterthought.
//!
//! # Method
//! Everything is built on the [`Sequence`](sequence::Sequence) trait, a read-only, repeatable
//! traversal over borrowed elements. The operators are default methods on a handful of extension
//! traits, blanket-implemented for every sequence, so bringing the [`prelude`] into scope is
//! enough to use them on [`Vec`]s, arrays, slices, [`VecDeque`](std::collections::VecDeque)s and
//! optional sequences.
//!
//! Operators never mutate their inputs and always return newly allocated results, so the output
//! never aliases the input. Each one runs to completion before returning: there is no deferred
//! execution, which means callbacks are invoked exactly when the operator is called, once per
//! visited element and in sequence order.
//!
//! # Error Handling
//! Every failure is reported through a [`Result`], using small error types from
//! [`util::error`] that are combined into enums for the operators that can fail in more than one
//! way. There are three kinds of failure:
//! - [`InvalidArgument`](util::error::InvalidArgument): a sequence argument was absent. In Rust
//!   this can only happen with an [`Option`] that is [`None`], because predicates, selectors and
//!   comparers are generic parameters that can't be missing.
//! - [`IndexOutOfRange`](util::error::IndexOutOfRange): an index (or a range) was out of bounds.
//! - [`EmptySequence`](util::error::EmptySequence): a strict `first` or `last` found nothing.
//!
//! The strict operators are intentionally loud about missing elements. Callers who expect absence
//! should reach for the `_or_default` variants, or for [`any`](ops::Filtering::any),
//! [`all`](ops::Filtering::all) and [`count`](ops::Filtering::count).
//!
//! # Quirks
//! Two operators behave differently to what their names might suggest, and this is deliberate:
//! - [`intersect`](ops::Combining::intersect) keeps duplicates from the first sequence.
//! - [`range`](ops::range) produces default values, not a sequence of integers.
//!
//! # Features
//! Each operator family sits behind a feature (`access`, `filter`, `combine` and `order`), all of
//! which are enabled by the default `ops-all` feature.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod comparer;
#[cfg(feature = "ops")]
pub mod ops;
pub mod prelude;
pub mod sequence;
pub mod util;
