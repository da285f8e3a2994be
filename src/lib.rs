//! Seqtools: lazy, composable sequence combinators
//!
//! Seqtools provides the small set of sequence helpers that application
//! code keeps rewriting as hand-written loops: concatenation, reversal,
//! shuffling, filtering, mapping, iteration and reduction.
//!
//! Every adapter returns an ordinary Rust iterator that produces nothing
//! until it is pulled, one element at a time. A consumer that stops pulling
//! (a `break`, `take`, `find`, or simply dropping the iterator) stops
//! production right there.
//!
//! # Modules
//!
//! - **seq**: Side-effect-free adapters and the drivers that consume them
//! - **permute**: In-place shuffling and its randomness configuration
//!
//! # Example
//!
//! ```rust
//! use seqtools::{concat, filter, map, reduce, reverse};
//!
//! let backwards: Vec<i32> = reverse(&[[1, 2, 3], [7, 8, 9]]).copied().collect();
//! assert_eq!(backwards, vec![9, 8, 7, 3, 2, 1]);
//!
//! let evens: Vec<i32> = filter(&[1, 2, 3, 7, 8, 9], |v| v % 2 == 0).copied().collect();
//! assert_eq!(evens, vec![2, 8]);
//!
//! let doubled: Vec<(usize, i32)> = map(&[1, 2, 3], |_, v| v * 2).collect();
//! assert_eq!(doubled, vec![(0, 2), (1, 4), (2, 6)]);
//!
//! let total = reduce(concat(&[[1, 2, 3], [7, 8, 9]]).copied(), |acc, cur| acc + cur, 0);
//! assert_eq!(total, 30);
//! ```

pub mod permute;
pub mod seq;

// Re-export commonly used items
pub use permute::{shuffle, shuffle_with, ConfigError, Shuffle, ShuffleConfig, ShuffleRng};
pub use seq::{
    concat, concat_iter, drive, filter, for_each, map, reduce, reverse, try_for_each, try_reduce,
    Completion, Concat, ConcatIter, Filter, Map, Reverse,
};
