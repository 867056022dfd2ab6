use std::iter;

use crate::sequence::Sequence;
use crate::util::error::{IndexOutOfRange, InvalidArgument};
use crate::util::iter::{collect_cloned, count_of, require};
use crate::util::result::ResultExtension;

/// Reordering and materialization, implemented for every [`Sequence`].
///
/// The results are always newly allocated, so mutating one never affects the source.
pub trait Materialize: Sequence {
    /// Creates a new Vec containing the elements of the sequence in reverse order.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if the sequence is absent.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let numbers = vec![1, 2, 3];
    /// assert_eq!(numbers.reverse(), Ok(vec![3, 2, 1]));
    /// assert_eq!(numbers, [1, 2, 3]);
    /// ```
    fn reverse(&self) -> Result<Vec<Self::Item>, InvalidArgument>
    where
        Self::Item: Clone,
    {
        let mut reversed = collect_cloned(require(self, "source")?, 0);
        reversed.as_mut_slice().reverse();
        Ok(reversed)
    }

    /// Copies the sequence into a new fixed-size boxed slice.
    ///
    /// The sequence is counted first so that the allocation is exact, then traversed again to
    /// fill it.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if the sequence is absent.
    fn to_array(&self) -> Result<Box<[Self::Item]>, InvalidArgument>
    where
        Self::Item: Clone,
    {
        let len = count_of(self, "source")?;
        let mut array = Vec::with_capacity(len);
        array.extend(require(self, "source")?.cloned());
        Ok(array.into_boxed_slice())
    }

    /// Copies the sequence into a new Vec.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if the sequence is absent.
    fn to_list(&self) -> Result<Vec<Self::Item>, InvalidArgument>
    where
        Self::Item: Clone,
    {
        Ok(collect_cloned(require(self, "source")?, 0))
    }
}

impl<S: Sequence + ?Sized> Materialize for S {}

/// Creates a Vec of `end - start` default values.
///
/// Note that the values are *not* the integers from `start` to `end`. Only the length of the range
/// is used.
///
/// # Errors
/// Returns [`IndexOutOfRange::Range`] if `end < start`.
///
/// # Panics
/// Panics if the memory needed for `end - start` elements exceeds [`isize::MAX`] bytes or can't
/// be allocated. The allocation is made up front, before any value is created.
///
/// # Examples
/// ```
/// # use sequence_ops::prelude::*;
/// assert_eq!(range::<u8>(2, 5), Ok(vec![0, 0, 0]));
/// assert!(range::<u8>(5, 2).is_err());
/// ```
pub fn range<T: Default>(start: usize, end: usize) -> Result<Vec<T>, IndexOutOfRange> {
    let len = end
        .checked_sub(start)
        .ok_or(IndexOutOfRange::Range { start, end })?;

    let mut values = Vec::new();
    values.try_reserve_exact(len).throw();
    values.extend(iter::repeat_with(T::default).take(len));
    Ok(values)
}

/// Creates an empty Vec. This never allocates.
pub const fn empty<T>() -> Vec<T> {
    Vec::new()
}
