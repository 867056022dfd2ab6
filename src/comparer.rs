//! Injectable equality for the operators that compare elements.
//!
//! Any `Fn(&T, &T) -> bool` is an [`EqualityComparer`], so most callers can pass a closure.
//! [`DefaultEquality`] defers to [`PartialEq`] and is what the comparer-less operators use.

/// An equality capability that overrides an element type's default equality.
pub trait EqualityComparer<T: ?Sized> {
    /// Returns true if `left` and `right` should be considered the same element.
    fn equals(&self, left: &T, right: &T) -> bool;
}

/// Compares elements with their [`PartialEq`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultEquality;

impl<T: PartialEq + ?Sized> EqualityComparer<T> for DefaultEquality {
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Compares string-like elements while ignoring ASCII case.
///
/// # Examples
/// ```
/// # use sequence_ops::comparer::{EqualityComparer, IgnoreAsciiCase};
/// assert!(IgnoreAsciiCase.equals("UK", "uk"));
/// assert!(!IgnoreAsciiCase.equals("UK", "USA"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreAsciiCase;

impl<T: AsRef<str> + ?Sized> EqualityComparer<T> for IgnoreAsciiCase {
    fn equals(&self, left: &T, right: &T) -> bool {
        left.as_ref().eq_ignore_ascii_case(right.as_ref())
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> EqualityComparer<T> for F {
    fn equals(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}
