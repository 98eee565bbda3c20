//! The 0-or-1-element sequence view.
//!
//! A present container behaves as a single-element ordered sequence; an
//! absent one as empty. Iteration never fails; only indexed access can, and
//! the fault carries the absorbed diagnostic when the container is absent.
//! The view is read-only and restartable: each traversal starts fresh.

use std::iter::FusedIterator;

use crate::errors::{index_out_of_bounds, IndexError};
use crate::Maybe;

/// Borrowing iterator over a container: one element when present, none when
/// absent. Each call to [`Maybe::iter`] is an independent traversal.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    slot: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slot.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.slot.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slot.take()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator, consuming the container.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    slot: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.slot.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.slot.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.slot.take()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Maybe<T> {
    /// Sequence length: 1 when present, 0 when absent.
    pub fn len(&self) -> usize {
        usize::from(self.is_present())
    }

    /// True when the sequence view is empty, i.e. the container is absent.
    pub fn is_empty(&self) -> bool {
        self.is_absent()
    }

    /// A fresh borrowing traversal of the sequence view.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slot: match self {
                Maybe::Present(v) => Some(v),
                Maybe::Absent(_) => None,
            },
        }
    }

    /// Indexed access into the sequence view.
    ///
    /// Only index 0 on a present container succeeds. Any other index, or any
    /// index on an absent container, is an [`IndexError`]; the absent case
    /// carries the diagnostic as context.
    pub fn at(&self, index: usize) -> Result<&T, IndexError> {
        match self {
            Maybe::Present(v) if index == 0 => Ok(v),
            Maybe::Present(_) => Err(index_out_of_bounds(index, 1, None)),
            Maybe::Absent(d) => Err(index_out_of_bounds(index, 0, Some(d.clone()))),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            slot: match self {
                Maybe::Present(v) => Some(v),
                Maybe::Absent(_) => None,
            },
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
