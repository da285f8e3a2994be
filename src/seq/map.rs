//! Index-aware mapping over a materialized sequence.

use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

/// Iterator of `(index, transformed)` pairs over a slice.
///
/// Created by [`map`].
pub struct Map<'a, T, F> {
    iter: Enumerate<slice::Iter<'a, T>>,
    f: F,
}

impl<'a, T, F> Iterator for Map<'a, T, F>
where
    F: FnMut(usize, &T) -> T,
{
    type Item = (usize, T);

    fn next(&mut self) -> Option<(usize, T)> {
        let (i, v) = self.iter.next()?;
        Some((i, (self.f)(i, v)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T, F> ExactSizeIterator for Map<'a, T, F> where F: FnMut(usize, &T) -> T {}

impl<'a, T, F> FusedIterator for Map<'a, T, F> where F: FnMut(usize, &T) -> T {}

impl<T: fmt::Debug, F> fmt::Debug for Map<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("iter", &self.iter).finish()
    }
}

/// Apply `f` to every element of `seq`, yielding `(index, f(index, element))`.
///
/// `f` always receives the original index and the original element, never
/// the output of an earlier call. The output element type is the input
/// element type.
///
/// # Example
///
/// ```rust
/// use seqtools::map;
///
/// let doubled: Vec<(usize, i32)> = map(&[1, 2, 3], |_, v| v * 2).collect();
/// assert_eq!(doubled, vec![(0, 2), (1, 4), (2, 6)]);
/// ```
pub fn map<T, F>(seq: &[T], f: F) -> Map<'_, T, F>
where
    F: FnMut(usize, &T) -> T,
{
    Map {
        iter: seq.iter().enumerate(),
        f,
    }
}
