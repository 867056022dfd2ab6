//! The sequence operators, grouped by family.
//!
//! # Method
//! Each family is an extension trait with default methods, implemented for every
//! [`Sequence`](crate::sequence::Sequence). None of the traits have any required methods, so
//! importing them (usually through the [`prelude`](crate::prelude)) is all it takes to use the
//! operators on a [`Vec`], array, [`VecDeque`](std::collections::VecDeque) or optional sequence.
//!
//! Every operator is eager: it traverses its inputs, calls any callbacks and allocates its result
//! before returning. Nothing is deferred, so callbacks with side effects run exactly when the
//! operator is invoked.
//!
//! Note that slices have inherent methods named `first`, `last`, `reverse` and `concat`, which
//! take priority when the receiver is a `&[T]`. Use fully qualified syntax, such as
//! `ElementAccess::first(slice)`, to reach the operators in that case.

#[cfg(feature = "access")]
pub mod access;
#[cfg(feature = "combine")]
pub mod combine;
#[cfg(feature = "filter")]
pub mod filter;
#[cfg(feature = "order")]
pub mod order;

#[cfg(feature = "access")]
#[doc(inline)]
pub use access::ElementAccess;
#[cfg(feature = "combine")]
#[doc(inline)]
pub use combine::Combining;
#[cfg(feature = "filter")]
#[doc(inline)]
pub use filter::Filtering;
#[cfg(feature = "order")]
#[doc(inline)]
pub use order::{Materialize, empty, range};
