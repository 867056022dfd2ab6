use std::collections::{VecDeque, vec_deque};
use std::slice;

use super::Sequence;

impl<T> Sequence for [T] {
    type Item = T;

    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn traverse(&self) -> Option<Self::Iter<'_>> {
        Some(<[T]>::iter(self))
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn traverse(&self) -> Option<Self::Iter<'_>> {
        Some(self.as_slice().iter())
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn traverse(&self) -> Option<Self::Iter<'_>> {
        Some(self.as_slice().iter())
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;

    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn traverse(&self) -> Option<Self::Iter<'_>> {
        Some(<[T]>::iter(self))
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    fn traverse(&self) -> Option<Self::Iter<'_>> {
        Some(VecDeque::iter(self))
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    fn traverse(&self) -> Option<Self::Iter<'_>> {
        (**self).traverse()
    }
}

/// [`None`] is an absent sequence.
impl<S: Sequence> Sequence for Option<S> {
    type Item = S::Item;

    type Iter<'a>
        = S::Iter<'a>
    where
        Self: 'a;

    fn traverse(&self) -> Option<Self::Iter<'_>> {
        self.as_ref()?.traverse()
    }
}
