/// An ordered, finite collection of elements that can be traversed by reference, any number of
/// times, without being mutated.
///
/// Traversal is fallible in exactly one way: the sequence may be absent, in which case
/// [`traverse`](Sequence::traverse) returns [`None`]. Every collection in std that implements this
/// trait is always present; absence is only expressed through [`Option`].
///
/// # Examples
/// ```
/// # use sequence_ops::sequence::Sequence;
/// let numbers = vec![1, 2, 3];
/// let total: i32 = numbers.traverse().into_iter().flatten().sum();
/// assert_eq!(total, 6);
///
/// let absent: Option<Vec<i32>> = None;
/// assert!(absent.traverse().is_none());
/// ```
pub trait Sequence {
    /// The type of element contained in the sequence.
    type Item;

    /// The borrowed iterator produced by [`traverse`](Sequence::traverse).
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Returns an iterator over all elements, in sequence order, or [`None`] if the sequence is
    /// absent.
    fn traverse(&self) -> Option<Self::Iter<'_>>;

    /// Returns true if the sequence is present.
    fn is_present(&self) -> bool {
        self.traverse().is_some()
    }
}
