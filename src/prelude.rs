//! Re-exports of everything needed to call the operators.
//!
//! ```
//! use sequence_ops::prelude::*;
//!
//! let fruits = vec!["Apple", "Mango", "Lemon", "Banana"];
//! assert_eq!(fruits.count(), Ok(4));
//! assert_eq!(fruits.any_by(|x| *x == "Banana"), Ok(true));
//! ```

pub use crate::comparer::{DefaultEquality, EqualityComparer, IgnoreAsciiCase};
#[cfg(feature = "access")]
pub use crate::ops::ElementAccess;
#[cfg(feature = "combine")]
pub use crate::ops::Combining;
#[cfg(feature = "filter")]
pub use crate::ops::Filtering;
#[cfg(feature = "order")]
pub use crate::ops::{Materialize, empty, range};
pub use crate::sequence::Sequence;
pub use crate::util::error::{
    EmptySequence, IndexOutOfRange, InvalidArgument, InvalidOrEmpty, InvalidOrOutOfRange,
    SequenceError,
};
pub use crate::util::result::ResultExtension;
