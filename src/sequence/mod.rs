//! A module containing the [`Sequence`] trait, the abstraction every operator in this crate
//! consumes.
//!
//! [`Sequence`] is implemented for the ordered std collections (slices, arrays, [`Vec`],
//! [`Box<[T]>`](Box) and [`VecDeque`](std::collections::VecDeque)), for references to any
//! sequence and for [`Option`]s of a sequence. An [`Option`] that is [`None`] is an *absent*
//! sequence, which operators reject with an
//! [`InvalidArgument`](crate::util::error::InvalidArgument) error.
#![warn(missing_docs)]

mod impls;
mod sequence;

pub use sequence::*;
