//! Operators that filter, project, count or test the elements of a sequence.

mod filter;
mod tests;

pub use filter::*;
