use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A required sequence argument was absent. The contained name identifies the argument (`source`,
/// `first` or `second`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgument {
    pub name: &'static str,
}

impl InvalidArgument {
    pub const fn new(name: &'static str) -> InvalidArgument {
        InvalidArgument { name }
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Required argument `{}` is absent!", self.name)
    }
}

impl Error for InvalidArgument {}

/// A positional request fell outside of the valid bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum IndexOutOfRange {
    /// An index was not within `[0, len)`.
    #[display("Index {index} out of range for sequence with {len} elements!")]
    Index { index: usize, len: usize },
    /// A range was requested with `end < start`.
    #[display("Range end {end} is before range start {start}!")]
    Range { start: usize, end: usize },
}

/// No element qualified for a `first` or `last` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySequence;

impl Display for EmptySequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence contains no matching element!")
    }
}

impl Error for EmptySequence {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum InvalidOrOutOfRange {
    InvalidArgument(InvalidArgument),
    IndexOutOfRange(IndexOutOfRange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum InvalidOrEmpty {
    InvalidArgument(InvalidArgument),
    EmptySequence(EmptySequence),
}

/// Every error an operator in this crate can produce. Operators return the narrowest error type
/// that applies to them, all of which convert into this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum SequenceError {
    InvalidArgument(InvalidArgument),
    IndexOutOfRange(IndexOutOfRange),
    EmptySequence(EmptySequence),
}

impl From<InvalidOrOutOfRange> for SequenceError {
    fn from(value: InvalidOrOutOfRange) -> Self {
        match value {
            InvalidOrOutOfRange::InvalidArgument(err) => err.into(),
            InvalidOrOutOfRange::IndexOutOfRange(err) => err.into(),
        }
    }
}

impl From<InvalidOrEmpty> for SequenceError {
    fn from(value: InvalidOrEmpty) -> Self {
        match value {
            InvalidOrEmpty::InvalidArgument(err) => err.into(),
            InvalidOrEmpty::EmptySequence(err) => err.into(),
        }
    }
}
