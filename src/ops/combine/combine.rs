use crate::comparer::{DefaultEquality, EqualityComparer};
use crate::sequence::Sequence;
use crate::util::error::InvalidArgument;
use crate::util::iter::{collect_cloned, contains_by, require};

/// Operators combining a sequence with a second sequence or an extra element, implemented for
/// every [`Sequence`].
///
/// Both sequences are checked for presence before either is traversed. An absent receiver is
/// reported as `first` (or `source` for [`append`](Combining::append)) and an absent argument as
/// `second`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in `self`.
/// - `m`: The number of elements in `second`.
///
/// | Method | Complexity |
/// |-|-|
/// | `concat` | `O(n+m)` |
/// | `append` | `O(n)` |
/// | `intersect` | `O(n*m)` |
/// | `union` | `O((n+m)^2)` |
///
/// The set-like operators compare elements pairwise, so they work with any
/// [`EqualityComparer`] and never require [`Hash`](std::hash::Hash).
pub trait Combining: Sequence {
    /// Creates a new Vec containing every element of `self` followed by every element of
    /// `second`. Nothing is deduplicated.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let fruits = vec!["Apple", "Mango"];
    /// assert_eq!(
    ///     fruits.concat(&["Grapes", "Avocado"]),
    ///     Ok(vec!["Apple", "Mango", "Grapes", "Avocado"])
    /// );
    /// ```
    fn concat<S>(&self, second: &S) -> Result<Vec<Self::Item>, InvalidArgument>
    where
        Self::Item: Clone,
        S: Sequence<Item = Self::Item> + ?Sized,
    {
        let first = require(self, "first")?;
        let second = require(second, "second")?;

        let mut out = collect_cloned(first, second.size_hint().0);
        out.extend(second.cloned());
        Ok(out)
    }

    /// Creates a new Vec containing the elements of `self` that are equal to at least one element
    /// of `second`, in the order they appear in `self`. (`self ∩ second`)
    ///
    /// Unlike a set intersection, duplicates in `self` are kept: an element appearing twice in
    /// `self` with a match in `second` appears twice in the result. Duplicates in `second` have no
    /// effect.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let first = vec!["India", "USA", "UK", "Canada", "Srilanka"];
    /// let second = vec!["India", "uk", "Canada", "France", "Japan"];
    /// assert_eq!(first.intersect(&second), Ok(vec!["India", "Canada"]));
    /// ```
    fn intersect<S>(&self, second: &S) -> Result<Vec<Self::Item>, InvalidArgument>
    where
        Self::Item: Clone + PartialEq,
        S: Sequence<Item = Self::Item> + ?Sized,
    {
        self.intersect_by(second, &DefaultEquality)
    }

    /// Like [`intersect`](Combining::intersect), but elements are compared with `comparer`.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let first = vec!["India", "USA", "UK", "Canada", "Srilanka"];
    /// let second = vec!["India", "uk", "Canada", "France", "Japan"];
    /// assert_eq!(
    ///     first.intersect_by(&second, &IgnoreAsciiCase),
    ///     Ok(vec!["India", "UK", "Canada"])
    /// );
    /// ```
    fn intersect_by<S, C>(&self, second: &S, comparer: &C) -> Result<Vec<Self::Item>, InvalidArgument>
    where
        Self::Item: Clone,
        S: Sequence<Item = Self::Item> + ?Sized,
        C: EqualityComparer<Self::Item> + ?Sized,
    {
        let first = require(self, "first")?;
        let candidates: Vec<&Self::Item> = require(second, "second")?.collect();

        Ok(first
            .filter(|item| contains_by(candidates.iter().copied(), *item, comparer))
            .cloned()
            .collect())
    }

    /// Creates a new Vec containing every element of the sequence, followed by `element`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if the sequence is absent.
    fn append(&self, element: Self::Item) -> Result<Vec<Self::Item>, InvalidArgument>
    where
        Self::Item: Clone,
    {
        let mut out = collect_cloned(require(self, "source")?, 1);
        out.push(element);
        Ok(out)
    }

    /// Creates a new Vec containing every distinct element of `self` and then of `second`, in the
    /// order each is first encountered. (`self ∪ second`)
    ///
    /// When two elements are equal, the one encountered first is kept. Duplicates within `self`
    /// are removed too.
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let first = vec![5, 3, 9, 7, 5, 9, 3, 7];
    /// let second = vec![8, 3, 6, 4, 4, 9, 1, 0];
    /// assert_eq!(first.union(&second), Ok(vec![5, 3, 9, 7, 8, 6, 4, 1, 0]));
    /// ```
    fn union<S>(&self, second: &S) -> Result<Vec<Self::Item>, InvalidArgument>
    where
        Self::Item: Clone + PartialEq,
        S: Sequence<Item = Self::Item> + ?Sized,
    {
        self.union_by(second, &DefaultEquality)
    }

    /// Like [`union`](Combining::union), but elements are compared with `comparer`.
    fn union_by<S, C>(&self, second: &S, comparer: &C) -> Result<Vec<Self::Item>, InvalidArgument>
    where
        Self::Item: Clone,
        S: Sequence<Item = Self::Item> + ?Sized,
        C: EqualityComparer<Self::Item> + ?Sized,
    {
        let first = require(self, "first")?;
        let second = require(second, "second")?;

        let mut out: Vec<Self::Item> = Vec::new();
        for item in first.chain(second) {
            if !contains_by(out.iter(), item, comparer) {
                out.push(item.clone());
            }
        }
        Ok(out)
    }
}

impl<S: Sequence + ?Sized> Combining for S {}
