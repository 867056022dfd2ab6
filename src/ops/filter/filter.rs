use crate::sequence::Sequence;
use crate::util::error::InvalidArgument;
use crate::util::iter::{count_of, require};

/// Filtering, projection and quantifier operators, implemented for every [`Sequence`].
///
/// Callbacks are invoked in sequence order, once per visited element. [`all`](Filtering::all)
/// and [`any_by`](Filtering::any_by) stop visiting elements as soon as their result is known; the
/// other operators visit every element.
pub trait Filtering: Sequence {
    /// Creates a new Vec containing clones of every element for which `predicate` returns true,
    /// preserving their relative order. (LINQ's `Where`, renamed because `where` is a keyword.)
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if the sequence is absent.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let numbers = vec![1, 2, 3, 4, 5, 6];
    /// assert_eq!(numbers.where_(|n| n % 3 == 0), Ok(vec![3, 6]));
    /// ```
    fn where_<P>(&self, mut predicate: P) -> Result<Vec<Self::Item>, InvalidArgument>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        Ok(require(self, "source")?
            .filter(|item| predicate(item))
            .cloned()
            .collect())
    }

    /// Like [`where_`](Filtering::where_), but `predicate` is also given the 0-based position of
    /// each element.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let numbers = vec![0, 30, 20, 15, 90, 85, 40, 75];
    /// assert_eq!(
    ///     numbers.where_indexed(|n, i| *n <= i as i32 * 10),
    ///     Ok(vec![0, 20, 15, 40])
    /// );
    /// ```
    fn where_indexed<P>(&self, mut predicate: P) -> Result<Vec<Self::Item>, InvalidArgument>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item, usize) -> bool,
    {
        Ok(require(self, "source")?
            .enumerate()
            .filter(|(index, item)| predicate(item, *index))
            .map(|(_, item)| item.clone())
            .collect())
    }

    /// Creates a new Vec of the same length as the sequence, with each element replaced by the
    /// result of `selector`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let words = ["Apple", "Fig"];
    /// assert_eq!(words.select(|w| w.len()), Ok(vec![5, 3]));
    /// ```
    fn select<R, F>(&self, selector: F) -> Result<Vec<R>, InvalidArgument>
    where
        F: FnMut(&Self::Item) -> R,
    {
        Ok(require(self, "source")?.map(selector).collect())
    }

    /// Like [`select`](Filtering::select), but `selector` is also given the 0-based position of
    /// each element.
    fn select_indexed<R, F>(&self, mut selector: F) -> Result<Vec<R>, InvalidArgument>
    where
        F: FnMut(&Self::Item, usize) -> R,
    {
        Ok(require(self, "source")?
            .enumerate()
            .map(|(index, item)| selector(item, index))
            .collect())
    }

    /// Returns true if `predicate` holds for every element, stopping at the first element for
    /// which it doesn't. An empty sequence always returns true.
    fn all<P>(&self, mut predicate: P) -> Result<bool, InvalidArgument>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        // Spelled out so that it can't resolve to this trait's own `all`.
        Ok(Iterator::all(&mut require(self, "source")?, |item| predicate(item)))
    }

    /// Returns true if the sequence contains any elements.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// assert_eq!(vec!["Apple"].any(), Ok(true));
    /// assert_eq!(empty::<&str>().any(), Ok(false));
    /// ```
    fn any(&self) -> Result<bool, InvalidArgument> {
        Ok(require(self, "source")?.next().is_some())
    }

    /// Returns true if `predicate` holds for at least one element, stopping at the first element
    /// for which it does. An empty sequence always returns false.
    fn any_by<P>(&self, mut predicate: P) -> Result<bool, InvalidArgument>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Ok(Iterator::any(&mut require(self, "source")?, |item| predicate(item)))
    }

    /// Returns the number of elements in the sequence, found by traversing all of them.
    fn count(&self) -> Result<usize, InvalidArgument> {
        count_of(self, "source")
    }
}

impl<S: Sequence + ?Sized> Filtering for S {}
