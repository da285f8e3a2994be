//! Pure sequence combinators.
//!
//! This module contains the side-effect-free half of the library:
//! - Adapters over materialized sequences (`concat`, `reverse`, `filter`, `map`)
//! - An adapter over lazy sequences (`concat_iter`)
//! - Drivers that consume a sequence (`for_each`, `reduce`, `drive`)
//!
//! Every adapter is lazy. Nothing is produced until the returned iterator
//! is pulled, and a consumer that stops pulling stops production.

mod concat;
mod drive;
mod filter;
mod map;
mod reverse;

pub use concat::{concat, concat_iter, Concat, ConcatIter};
pub use drive::{drive, for_each, reduce, try_for_each, try_reduce, Completion};
pub use filter::{filter, Filter};
pub use map::{map, Map};
pub use reverse::{reverse, Reverse};
