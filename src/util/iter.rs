//! Traversal and counting helpers shared by the operators.

use crate::comparer::EqualityComparer;
use crate::sequence::Sequence;
use crate::util::error::InvalidArgument;

/// Begins a traversal of `seq`, reporting the argument as `name` if it is absent.
pub(crate) fn require<'a, S>(seq: &'a S, name: &'static str) -> Result<S::Iter<'a>, InvalidArgument>
where
    S: Sequence + ?Sized,
{
    seq.traverse().ok_or(InvalidArgument::new(name))
}

/// Counts the elements of `seq` with a full traversal.
pub(crate) fn count_of<S>(seq: &S, name: &'static str) -> Result<usize, InvalidArgument>
where
    S: Sequence + ?Sized,
{
    Ok(require(seq, name)?.count())
}

/// Returns the element at `index`, or the number of elements visited if the iterator ran out
/// first.
pub(crate) fn nth_or_len<'a, T: 'a>(
    iter: impl Iterator<Item = &'a T>,
    index: usize,
) -> Result<&'a T, usize> {
    let mut len = 0;
    for item in iter {
        if len == index {
            return Ok(item);
        }
        len += 1;
    }
    Err(len)
}

/// Visits every element, keeping the last one for which `predicate` holds. This never stops
/// early, so `predicate` sees every element exactly once.
pub(crate) fn last_matching<'a, T: 'a>(
    iter: impl Iterator<Item = &'a T>,
    mut predicate: impl FnMut(&T) -> bool,
) -> Option<&'a T> {
    iter.fold(None, |last, item| if predicate(item) { Some(item) } else { last })
}

/// Clones every element into a new Vec, reserving room for `extra` additional elements.
pub(crate) fn collect_cloned<'a, T: Clone + 'a>(
    iter: impl Iterator<Item = &'a T>,
    extra: usize,
) -> Vec<T> {
    let mut out = Vec::with_capacity(iter.size_hint().0 + extra);
    out.extend(iter.cloned());
    out
}

/// Returns true if any element of `items` equals `item` according to `comparer`.
pub(crate) fn contains_by<'a, T: 'a, C>(
    mut items: impl Iterator<Item = &'a T>,
    item: &T,
    comparer: &C,
) -> bool
where
    C: EqualityComparer<T> + ?Sized,
{
    items.any(|other| comparer.equals(item, other))
}
