//! Lazy in-place shuffle.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// Iterator over a slice that is shuffled in place on first pull.
///
/// Created by [`shuffle`] and [`shuffle_with`]. Until the first call to
/// `next`, the slice is untouched. That call runs a uniform Fisher-Yates
/// shuffle over the whole slice, and every element is then yielded in its
/// new position. When the iterator is dropped, the caller's slice keeps the
/// permuted order.
pub struct Shuffle<'a, T, R> {
    pending: Option<(&'a mut [T], R)>,
    iter: slice::Iter<'a, T>,
}

impl<'a, T, R: Rng> Shuffle<'a, T, R> {
    fn new(seq: &'a mut [T], rng: R) -> Self {
        Self {
            pending: Some((seq, rng)),
            iter: <&[T]>::default().iter(),
        }
    }
}

impl<'a, T, R: Rng> Iterator for Shuffle<'a, T, R> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if let Some((seq, mut rng)) = self.pending.take() {
            seq.shuffle(&mut rng);
            let seq: &'a [T] = seq;
            self.iter = seq.iter();
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match &self.pending {
            Some((seq, _)) => seq.len(),
            None => self.iter.len(),
        };
        (n, Some(n))
    }
}

impl<'a, T, R: Rng> ExactSizeIterator for Shuffle<'a, T, R> {}

impl<'a, T, R: Rng> FusedIterator for Shuffle<'a, T, R> {}

impl<T: fmt::Debug, R> fmt::Debug for Shuffle<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shuffle")
            .field("shuffled", &self.pending.is_none())
            .field("iter", &self.iter)
            .finish()
    }
}

/// Shuffle `seq` in place with the thread-local generator and iterate over
/// the result.
///
/// No copy is made: `seq` itself ends up permuted. Clone it first if the
/// original order matters.
///
/// # Example
///
/// ```rust
/// use seqtools::shuffle;
///
/// let mut seq = vec![1, 2, 3, 7, 8, 9];
/// let mut out: Vec<i32> = shuffle(&mut seq).copied().collect();
///
/// // the caller's vector now holds the yielded order
/// assert_eq!(out, seq);
///
/// out.sort();
/// assert_eq!(out, vec![1, 2, 3, 7, 8, 9]);
/// ```
pub fn shuffle<T>(seq: &mut [T]) -> Shuffle<'_, T, ThreadRng> {
    Shuffle::new(seq, rand::thread_rng())
}

/// Like [`shuffle`], drawing randomness from `rng`.
///
/// Pass a seeded generator (see [`ShuffleConfig`](crate::permute::ShuffleConfig))
/// for reproducible permutations.
pub fn shuffle_with<T, R: Rng>(seq: &mut [T], rng: R) -> Shuffle<'_, T, R> {
    Shuffle::new(seq, rng)
}
