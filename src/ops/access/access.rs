use crate::sequence::Sequence;
use crate::util::error::{
    EmptySequence, IndexOutOfRange, InvalidArgument, InvalidOrEmpty, InvalidOrOutOfRange,
};
use crate::util::iter::{self, require};

/// Positional and predicate-based element access, implemented for every [`Sequence`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the sequence.
/// - `i`: The requested index.
/// - `m`: The position of the first matching element.
///
/// | Method | Complexity |
/// |-|-|
/// | `element_at` | `O(i)`, `O(n)`* |
/// | `element_at_or_default` | `O(i)`, `O(n)`* |
/// | `first` | `O(1)` |
/// | `first_by` | `O(m)` |
/// | `last` | `O(n)` |
/// | `last_by` | `O(n)` |
///
/// \* If the index is out of range, the whole sequence is traversed.
pub trait ElementAccess: Sequence {
    /// Returns a clone of the element at `index`, counting from 0 in sequence order.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange::Index`] if `index` isn't less than the number of elements, or
    /// [`InvalidArgument`] if the sequence is absent.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let fruits = vec!["Apple", "Mango", "Lemon"];
    /// assert_eq!(fruits.element_at(1), Ok("Mango"));
    /// assert!(fruits.element_at(3).is_err());
    /// ```
    fn element_at(&self, index: usize) -> Result<Self::Item, InvalidOrOutOfRange>
    where
        Self::Item: Clone,
    {
        match iter::nth_or_len(require(self, "source")?, index) {
            Ok(item) => Ok(item.clone()),
            Err(len) => Err(IndexOutOfRange::Index { index, len }.into()),
        }
    }

    /// Returns a clone of the element at `index`, or the element type's default value if the
    /// index is out of range.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if the sequence is absent.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let fruits = vec!["Apple", "Mango", "Lemon", "Banana"];
    /// assert_eq!(fruits.element_at_or_default(10), Ok(""));
    /// ```
    fn element_at_or_default(&self, index: usize) -> Result<Self::Item, InvalidArgument>
    where
        Self::Item: Clone + Default,
    {
        Ok(iter::nth_or_len(require(self, "source")?, index)
            .cloned()
            .unwrap_or_default())
    }

    /// Returns a clone of the first element.
    ///
    /// # Errors
    /// Returns [`EmptySequence`] if the sequence has no elements, or [`InvalidArgument`] if it is
    /// absent.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// assert_eq!(vec![3, 4].first(), Ok(3));
    /// assert!(empty::<u8>().first().is_err());
    /// ```
    fn first(&self) -> Result<Self::Item, InvalidOrEmpty>
    where
        Self::Item: Clone,
    {
        require(self, "source")?
            .next()
            .cloned()
            .ok_or_else(|| EmptySequence.into())
    }

    /// Returns a clone of the first element for which `predicate` returns true. Elements after
    /// the first match aren't visited.
    ///
    /// # Errors
    /// Returns [`EmptySequence`] if no element matches, or [`InvalidArgument`] if the sequence is
    /// absent.
    fn first_by<P>(&self, mut predicate: P) -> Result<Self::Item, InvalidOrEmpty>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        require(self, "source")?
            .find(|item| predicate(item))
            .cloned()
            .ok_or_else(|| EmptySequence.into())
    }

    /// Returns a clone of the first element, or the default value if the sequence is empty. This
    /// is equivalent to `element_at_or_default(0)`.
    fn first_or_default(&self) -> Result<Self::Item, InvalidArgument>
    where
        Self::Item: Clone + Default,
    {
        self.element_at_or_default(0)
    }

    /// Returns a clone of the first element for which `predicate` returns true, or the default
    /// value if none match.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let numbers = vec![1, 3, 4, 6];
    /// assert_eq!(numbers.first_or_default_by(|n| n % 2 == 0), Ok(4));
    /// assert_eq!(numbers.first_or_default_by(|n| *n > 10), Ok(0));
    /// ```
    fn first_or_default_by<P>(&self, mut predicate: P) -> Result<Self::Item, InvalidArgument>
    where
        Self::Item: Clone + Default,
        P: FnMut(&Self::Item) -> bool,
    {
        Ok(require(self, "source")?
            .find(|item| predicate(item))
            .cloned()
            .unwrap_or_default())
    }

    /// Returns a clone of the last element.
    ///
    /// # Errors
    /// Returns [`EmptySequence`] if the sequence has no elements, or [`InvalidArgument`] if it is
    /// absent.
    fn last(&self) -> Result<Self::Item, InvalidOrEmpty>
    where
        Self::Item: Clone,
    {
        iter::last_matching(require(self, "source")?, |_| true)
            .cloned()
            .ok_or_else(|| EmptySequence.into())
    }

    /// Returns a clone of the last element for which `predicate` returns true.
    ///
    /// The whole sequence is scanned from the start, so `predicate` is invoked once for every
    /// element, even those before the final match.
    ///
    /// # Errors
    /// Returns [`EmptySequence`] if no element matches, or [`InvalidArgument`] if the sequence is
    /// absent.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let numbers = vec![1, 2, 3, 4, 5];
    /// assert_eq!(numbers.last_by(|n| n % 2 == 0), Ok(4));
    /// assert!(numbers.last_by(|n| *n > 5).is_err());
    /// ```
    fn last_by<P>(&self, predicate: P) -> Result<Self::Item, InvalidOrEmpty>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        iter::last_matching(require(self, "source")?, predicate)
            .cloned()
            .ok_or_else(|| EmptySequence.into())
    }

    /// Returns a clone of the last element, or the default value if the sequence is empty.
    fn last_or_default(&self) -> Result<Self::Item, InvalidArgument>
    where
        Self::Item: Clone + Default,
    {
        Ok(iter::last_matching(require(self, "source")?, |_| true)
            .cloned()
            .unwrap_or_default())
    }

    /// Returns a clone of the last element for which `predicate` returns true, or the default
    /// value if none match. Like [`last_by`](ElementAccess::last_by), this always scans the whole
    /// sequence.
    fn last_or_default_by<P>(&self, predicate: P) -> Result<Self::Item, InvalidArgument>
    where
        Self::Item: Clone + Default,
        P: FnMut(&Self::Item) -> bool,
    {
        Ok(iter::last_matching(require(self, "source")?, predicate)
            .cloned()
            .unwrap_or_default())
    }
}

impl<S: Sequence + ?Sized> ElementAccess for S {}
