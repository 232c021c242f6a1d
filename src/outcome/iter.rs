use core::iter::FusedIterator;

use crate::outcome::core::Outcome;

/// Iterator over the success payload of an [`Outcome`], yielding zero or one
/// item.
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.inner.is_some() { 1 } else { 0 };
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable counterpart of [`Iter`].
pub struct IterMut<'a, T> {
    inner: Option<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.inner.is_some() { 1 } else { 0 };
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Iterator over the failure payload of an [`Outcome`], yielding zero or one
/// item.
pub struct ErrIter<'a, E> {
    inner: Option<&'a E>,
}

impl<'a, E> Iterator for ErrIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.inner.is_some() { 1 } else { 0 };
        (len, Some(len))
    }
}

impl<E> ExactSizeIterator for ErrIter<'_, E> {}
impl<E> FusedIterator for ErrIter<'_, E> {}

/// Mutable counterpart of [`ErrIter`].
pub struct ErrIterMut<'a, E> {
    inner: Option<&'a mut E>,
}

impl<'a, E> Iterator for ErrIterMut<'a, E> {
    type Item = &'a mut E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.inner.is_some() { 1 } else { 0 };
        (len, Some(len))
    }
}

impl<E> ExactSizeIterator for ErrIterMut<'_, E> {}
impl<E> FusedIterator for ErrIterMut<'_, E> {}

/// Owning iterator over the success payload of an [`Outcome`].
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.inner.is_some() { 1 } else { 0 };
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Outcome::Success(value) => IntoIter { inner: Some(value) },
            Outcome::Failure(_) => IntoIter { inner: None },
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E> Outcome<T, E> {
    /// Iterates over the success payload, yielding one item for a `Success`
    /// and none for a `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(7);
    /// assert_eq!(x.iter().count(), 1);
    ///
    /// let y: Outcome<i32, &str> = Failure("derailed");
    /// assert_eq!(y.iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        match self {
            Outcome::Success(value) => Iter { inner: Some(value) },
            Outcome::Failure(_) => Iter { inner: None },
        }
    }

    /// Mutable counterpart of [`iter`](Self::iter).
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        match self {
            Outcome::Success(value) => IterMut { inner: Some(value) },
            Outcome::Failure(_) => IterMut { inner: None },
        }
    }

    /// Iterates over the failure payload, yielding one item for a `Failure`
    /// and none for a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Failure("derailed");
    /// assert_eq!(x.iter_err().next(), Some(&"derailed"));
    ///
    /// let y: Outcome<i32, &str> = Success(7);
    /// assert_eq!(y.iter_err().next(), None);
    /// ```
    pub fn iter_err(&self) -> ErrIter<'_, E> {
        match self {
            Outcome::Success(_) => ErrIter { inner: None },
            Outcome::Failure(error) => ErrIter { inner: Some(error) },
        }
    }

    /// Mutable counterpart of [`iter_err`](Self::iter_err).
    pub fn iter_err_mut(&mut self) -> ErrIterMut<'_, E> {
        match self {
            Outcome::Success(_) => ErrIterMut { inner: None },
            Outcome::Failure(error) => ErrIterMut { inner: Some(error) },
        }
    }
}
