//! Drivers that consume a sequence.
//!
//! Adapters only describe a sequence; the functions here pull it. `drive`
//! is the push-style form where the consumer answers every element with a
//! continue/stop signal. `for_each` and `reduce` always run to the end.

/// How a [`drive`] call finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Every element was delivered to the step function
    Exhausted,

    /// The step function asked to stop before the sequence ended
    Stopped,
}

impl Completion {
    /// Check if the whole sequence was consumed.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Push each element of `seq` into `step` until it returns `false`.
///
/// Once `step` returns `false` nothing more is pulled from `seq`, so no
/// upstream closure runs for later elements.
///
/// # Example
///
/// ```rust
/// use seqtools::{concat, drive, Completion};
///
/// let mut seen = Vec::new();
/// let done = drive(concat(&[[1, 2], [3, 4]]), |v| {
///     seen.push(*v);
///     *v < 3
/// });
///
/// assert_eq!(done, Completion::Stopped);
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub fn drive<I, F>(seq: I, mut step: F) -> Completion
where
    I: IntoIterator,
    F: FnMut(I::Item) -> bool,
{
    for v in seq {
        if !step(v) {
            return Completion::Stopped;
        }
    }
    Completion::Exhausted
}

/// Call `f` with a zero-based index and each element of `seq`.
///
/// The index is counted here, independent of anything the elements carry.
///
/// # Example
///
/// ```rust
/// use seqtools::for_each;
///
/// let mut out = String::new();
/// for_each(["a", "b"], |i, v| out.push_str(&format!("{i}{v}")));
/// assert_eq!(out, "0a1b");
/// ```
pub fn for_each<I, F>(seq: I, mut f: F)
where
    I: IntoIterator,
    F: FnMut(usize, I::Item),
{
    for (i, v) in seq.into_iter().enumerate() {
        f(i, v);
    }
}

/// Fold `seq` left to right, starting from `init`.
///
/// Returns `init` unchanged for an empty sequence.
///
/// # Example
///
/// ```rust
/// use seqtools::reduce;
///
/// let total = reduce([1, 2, 3, 7, 8, 9], |acc, cur| acc + cur, 0);
/// assert_eq!(total, 30);
/// ```
pub fn reduce<I, B, F>(seq: I, mut reducer: F, init: B) -> B
where
    I: IntoIterator,
    F: FnMut(B, I::Item) -> B,
{
    let mut acc = init;
    for v in seq {
        acc = reducer(acc, v);
    }
    acc
}

/// Like [`for_each`], for callbacks that can fail.
///
/// The first error ends the drive and is returned as is.
pub fn try_for_each<I, F, E>(seq: I, mut f: F) -> Result<(), E>
where
    I: IntoIterator,
    F: FnMut(usize, I::Item) -> Result<(), E>,
{
    for (i, v) in seq.into_iter().enumerate() {
        f(i, v)?;
    }
    Ok(())
}

/// Like [`reduce`], for reducers that can fail.
///
/// The first error ends the fold and is returned as is; later elements are
/// never pulled.
pub fn try_reduce<I, B, F, E>(seq: I, mut reducer: F, init: B) -> Result<B, E>
where
    I: IntoIterator,
    F: FnMut(B, I::Item) -> Result<B, E>,
{
    let mut acc = init;
    for v in seq {
        acc = reducer(acc, v)?;
    }
    Ok(acc)
}
