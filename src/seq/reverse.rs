//! Fully reversed concatenation.

use super::concat::Concat;
use std::iter::FusedIterator;

/// Iterator over several materialized sequences, back to front.
///
/// Created by [`reverse`]. The last source comes first, and within each
/// source the last element comes first.
#[derive(Clone, Debug)]
pub struct Reverse<'a, T, S> {
    inner: Concat<'a, T, S>,
}

impl<'a, T, S: AsRef<[T]>> Iterator for Reverse<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T, S: AsRef<[T]>> DoubleEndedIterator for Reverse<'a, T, S> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next()
    }
}

impl<'a, T, S: AsRef<[T]>> FusedIterator for Reverse<'a, T, S> {}

/// Iterate over the elements of `seqs` in the exact reverse of
/// [`concat`](crate::seq::concat) order.
///
/// # Example
///
/// ```rust
/// use seqtools::reverse;
///
/// let out: Vec<i32> = reverse(&[[10, 20, 30], [40, 50, 60]]).copied().collect();
/// assert_eq!(out, vec![60, 50, 40, 30, 20, 10]);
/// ```
pub fn reverse<T, S: AsRef<[T]>>(seqs: &[S]) -> Reverse<'_, T, S> {
    Reverse {
        inner: Concat::new(seqs),
    }
}
