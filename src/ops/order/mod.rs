//! Operators that reorder or materialize a sequence, along with the constructors [`range`] and
//! [`empty`].

mod order;

pub use order::*;
