use std::error::Error;

pub trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself, rather than its debug output.
    ///
    /// Operators report every failure through a typed [`Result`], but some call sites know the
    /// failure is impossible: the demo binary reads only from fixtures it just built, and
    /// [`range`](crate::ops::range) treats a failed allocation as fatal. Those sites use this
    /// instead of [`Result::unwrap`] so that the panic reads like the operator's own error, for
    /// example "Sequence contains no matching element!".
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    ///
    /// # Examples
    /// ```
    /// # use sequence_ops::prelude::*;
    /// let fruits = vec!["Apple", "Mango"];
    /// assert_eq!(fruits.count().throw(), 2);
    /// ```
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}
