//! Concatenation of materialized and lazy sequences.

use std::iter::{Fuse, FusedIterator};
use std::slice;

/// Iterator over several materialized sequences, one after another.
///
/// Created by [`concat`]. Yields every element of the first source in
/// order, then every element of the second, and so on. Empty sources
/// contribute nothing.
///
/// `Concat` is double-ended: pulling from the back walks the sources in
/// reverse, which is how [`reverse`](crate::seq::reverse) is built.
#[derive(Clone, Debug)]
pub struct Concat<'a, T, S> {
    sources: slice::Iter<'a, S>,
    front: Option<slice::Iter<'a, T>>,
    back: Option<slice::Iter<'a, T>>,
}

impl<'a, T, S: AsRef<[T]>> Concat<'a, T, S> {
    pub(crate) fn new(seqs: &'a [S]) -> Self {
        Self {
            sources: seqs.iter(),
            front: None,
            back: None,
        }
    }

    /// Elements left to yield, or `None` if the count overflows `usize`.
    fn remaining(&self) -> Option<usize> {
        let open = self.front.as_ref().map_or(0, |it| it.len());
        let open = open.checked_add(self.back.as_ref().map_or(0, |it| it.len()))?;
        self.sources
            .as_slice()
            .iter()
            .try_fold(open, |acc, seq| acc.checked_add(seq.as_ref().len()))
    }
}

impl<'a, T, S: AsRef<[T]>> Iterator for Concat<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(front) = &mut self.front {
                if let Some(v) = front.next() {
                    return Some(v);
                }
                self.front = None;
            }
            match self.sources.next() {
                Some(seq) => self.front = Some(seq.as_ref().iter()),
                // the back cursor may still hold the tail of the last source
                None => return self.back.as_mut()?.next(),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // slices of zero-sized types can hold usize::MAX elements each
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<'a, T, S: AsRef<[T]>> DoubleEndedIterator for Concat<'a, T, S> {
    fn next_back(&mut self) -> Option<&'a T> {
        loop {
            if let Some(back) = &mut self.back {
                if let Some(v) = back.next_back() {
                    return Some(v);
                }
                self.back = None;
            }
            match self.sources.next_back() {
                Some(seq) => self.back = Some(seq.as_ref().iter()),
                None => return self.front.as_mut()?.next_back(),
            }
        }
    }
}

impl<'a, T, S: AsRef<[T]>> FusedIterator for Concat<'a, T, S> {}

/// Iterate over `seqs` successively, in the order they are given.
///
/// Elements are yielded by reference; chain `.copied()` or `.cloned()` for
/// owned values.
///
/// # Example
///
/// ```rust
/// use seqtools::concat;
///
/// let all: Vec<i32> = concat(&[vec![1, 2, 3], vec![], vec![7, 8, 9]])
///     .copied()
///     .collect();
/// assert_eq!(all, vec![1, 2, 3, 7, 8, 9]);
/// ```
pub fn concat<T, S: AsRef<[T]>>(seqs: &[S]) -> Concat<'_, T, S> {
    Concat::new(seqs)
}

/// Iterator over several lazy sequences, one after another.
///
/// Created by [`concat_iter`]. Each source is opened only when the one
/// before it is exhausted.
#[derive(Clone, Debug)]
pub struct ConcatIter<I, U> {
    sources: Fuse<I>,
    current: Option<U>,
}

impl<I, U> Iterator for ConcatIter<I, U>
where
    I: Iterator,
    I::Item: IntoIterator<IntoIter = U, Item = U::Item>,
    U: Iterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<U::Item> {
        loop {
            if let Some(current) = &mut self.current {
                if let Some(v) = current.next() {
                    return Some(v);
                }
                self.current = None;
            }
            self.current = Some(self.sources.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self
            .current
            .as_ref()
            .map_or((0, Some(0)), |it| it.size_hint());
        // unopened sources could be any length
        match self.sources.size_hint() {
            (0, Some(0)) => (lo, hi),
            _ => (lo, None),
        }
    }
}

impl<I, U> FusedIterator for ConcatIter<I, U>
where
    I: Iterator,
    I::Item: IntoIterator<IntoIter = U, Item = U::Item>,
    U: Iterator,
{
}

/// Iterate over the elements of lazy sequences, in the order they are given.
///
/// A source is driven to exhaustion before the next one is opened. A source
/// that never ends therefore keeps every later source unreachable; stop
/// consuming (with `take`, `find`, a `break`, ...) to use infinite sources.
///
/// # Example
///
/// ```rust
/// use seqtools::concat_iter;
///
/// let evens = (0..).step_by(2).take(3);
/// let odds = (1..).step_by(2).take(3);
/// let all: Vec<u32> = concat_iter([evens, odds]).collect();
/// assert_eq!(all, vec![0, 2, 4, 1, 3, 5]);
/// ```
pub fn concat_iter<I>(seqs: I) -> ConcatIter<I::IntoIter, <I::Item as IntoIterator>::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    ConcatIter {
        sources: seqs.into_iter().fuse(),
        current: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn concat_yields_sources_in_order() {
        let out: Vec<i32> = concat(&[vec![1, 2, 3], vec![7, 8, 9]]).copied().collect();
        assert_eq!(out, vec![1, 2, 3, 7, 8, 9]);
    }

    #[test]
    fn concat_works_with_strings_and_floats() {
        let words: Vec<&str> = concat(&[vec!["hello", "world"], vec!["gophers"]])
            .copied()
            .collect();
        assert_eq!(words, vec!["hello", "world", "gophers"]);

        let floats: Vec<f64> = concat(&[vec![1.2, 10.44], vec![5.1]]).copied().collect();
        assert_eq!(floats, vec![1.2, 10.44, 5.1]);
    }

    #[test]
    fn concat_skips_empty_sources() {
        let empty: Vec<u8> = Vec::new();
        let out: Vec<u8> = concat(&[empty.clone(), vec![1], empty.clone(), vec![2, 3], empty])
            .copied()
            .collect();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn concat_of_nothing_is_empty() {
        let seqs: [Vec<i32>; 0] = [];
        assert_eq!(concat(&seqs).next(), None);
    }

    #[test]
    fn concat_accepts_borrowed_slices() {
        let a = [1, 2];
        let b = [3];
        let out: Vec<i32> = concat(&[&a[..], &b[..]]).copied().collect();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn concat_stops_mid_source() {
        let seqs = [vec![1, 2, 3], vec![4, 5]];
        let mut it = concat(&seqs);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.size_hint(), (3, Some(3)));
    }

    #[test]
    fn concat_meets_in_the_middle() {
        let seqs = [vec![1, 2], vec![3, 4], vec![5]];
        let mut it = concat(&seqs);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn concat_reports_exact_length() {
        let seqs = [vec![1, 2, 3], vec![], vec![4]];
        let it = concat(&seqs);
        assert_eq!(it.size_hint(), (4, Some(4)));
    }

    fn max_len_unit_slice() -> &'static [()] {
        // SAFETY: a dangling, aligned pointer is valid for any number of
        // zero-sized elements.
        unsafe {
            std::slice::from_raw_parts(std::ptr::NonNull::<()>::dangling().as_ptr(), usize::MAX)
        }
    }

    #[test]
    fn concat_size_hint_saturates_on_overflow() {
        let big = max_len_unit_slice();
        let seqs = [big, big];
        assert_eq!(concat(&seqs).size_hint(), (usize::MAX, None));
    }

    #[test]
    fn concat_size_hint_is_exact_at_the_limit() {
        let big = max_len_unit_slice();
        let empty: &[()] = &[];
        let seqs = [big, empty];
        let mut it = concat(&seqs);
        assert_eq!(it.size_hint(), (usize::MAX, Some(usize::MAX)));
        it.next();
        assert_eq!(it.size_hint(), (usize::MAX - 1, Some(usize::MAX - 1)));
    }

    #[test]
    fn concat_iter_yields_sources_in_order() {
        let out: Vec<i32> = concat_iter([vec![1, 2, 3], vec![7, 8, 9]]).collect();
        assert_eq!(out, vec![1, 2, 3, 7, 8, 9]);
    }

    #[test]
    fn concat_iter_opens_sources_lazily() {
        let opened = Cell::new(0);
        let sources = (0..3).map(|i| {
            opened.set(opened.get() + 1);
            vec![i; 2]
        });

        let mut it = concat_iter(sources);
        assert_eq!(opened.get(), 0);
        assert_eq!(it.next(), Some(0));
        assert_eq!(opened.get(), 1);
        assert_eq!(it.next(), Some(0));
        assert_eq!(opened.get(), 1);
        assert_eq!(it.next(), Some(1));
        assert_eq!(opened.get(), 2);
    }

    #[test]
    fn concat_iter_never_reaches_past_an_infinite_source() {
        let sources: Vec<Box<dyn Iterator<Item = u32>>> =
            vec![Box::new(std::iter::repeat(1)), Box::new(std::iter::once(2))];
        let out: Vec<u32> = concat_iter(sources).take(100).collect();
        assert_eq!(out, vec![1; 100]);
    }

    #[test]
    fn concat_iter_size_hint_is_exact_once_sources_run_out() {
        let mut it = concat_iter([vec![1, 2], vec![3]]);
        assert_eq!(it.size_hint().1, None);
        it.next();
        it.next();
        it.next();
        assert_eq!(it.size_hint(), (0, Some(0)));
    }
}
