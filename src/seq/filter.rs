//! Predicate filtering over a materialized sequence.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// Iterator over the elements of a slice that satisfy a predicate.
///
/// Created by [`filter`].
pub struct Filter<'a, T, F> {
    iter: slice::Iter<'a, T>,
    pred: F,
}

impl<'a, T, F> Iterator for Filter<'a, T, F>
where
    T: PartialEq,
    F: FnMut(&T) -> bool,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        for v in self.iter.by_ref() {
            if (self.pred)(v) {
                return Some(v);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.iter.len()))
    }
}

impl<'a, T, F> FusedIterator for Filter<'a, T, F>
where
    T: PartialEq,
    F: FnMut(&T) -> bool,
{
}

impl<T: fmt::Debug, F> fmt::Debug for Filter<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("iter", &self.iter).finish()
    }
}

/// Iterate over the elements of `seq` for which `pred` returns true.
///
/// Order is preserved, and `pred` runs exactly once per element, in order,
/// as the iterator is pulled. The element type must be comparable.
///
/// # Example
///
/// ```rust
/// use seqtools::filter;
///
/// let evens: Vec<i32> = filter(&[1, 2, 3, 7, 8, 9], |v| v % 2 == 0)
///     .copied()
///     .collect();
/// assert_eq!(evens, vec![2, 8]);
/// ```
pub fn filter<T, F>(seq: &[T], pred: F) -> Filter<'_, T, F>
where
    T: PartialEq,
    F: FnMut(&T) -> bool,
{
    Filter {
        iter: seq.iter(),
        pred,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keeps_matching_elements_in_order() {
        let out: Vec<i32> = filter(&[1, 2, 3, 7, 8, 9], |v| v % 2 == 0)
            .copied()
            .collect();
        assert_eq!(out, vec![2, 8]);
    }

    #[test]
    fn filter_works_with_strings_and_floats() {
        let words: Vec<&str> = filter(&["hello", "world", "gophers"], |v| *v != "gophers")
            .copied()
            .collect();
        assert_eq!(words, vec!["hello", "world"]);

        let floats: Vec<f64> = filter(&[1.2, 10.44, 5.1], |v| *v != 1.2).copied().collect();
        assert_eq!(floats, vec![10.44, 5.1]);
    }

    #[test]
    fn always_true_keeps_everything() {
        let seq = [3, 1, 2];
        let out: Vec<i32> = filter(&seq, |_| true).copied().collect();
        assert_eq!(out, seq);
    }

    #[test]
    fn always_false_keeps_nothing() {
        assert_eq!(filter(&[3, 1, 2], |_| false).count(), 0);
    }

    #[test]
    fn predicate_runs_once_per_element() {
        let mut seen = Vec::new();
        let out: Vec<i32> = filter(&[5, 6, 7], |v| {
            seen.push(*v);
            *v != 6
        })
        .copied()
        .collect();

        assert_eq!(out, vec![5, 7]);
        assert_eq!(seen, vec![5, 6, 7]);
    }

    #[test]
    fn predicate_is_not_run_past_an_early_stop() {
        let mut calls = 0;
        let first = filter(&[1, 2, 3, 4], |v| {
            calls += 1;
            v % 2 == 0
        })
        .next()
        .copied();

        assert_eq!(first, Some(2));
        assert_eq!(calls, 2);
    }

    #[test]
    fn filter_leaves_input_untouched() {
        let seq = vec![1, 2, 3];
        let _ = filter(&seq, |v| *v > 1).count();
        assert_eq!(seq, vec![1, 2, 3]);
    }
}
