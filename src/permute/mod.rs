//! In-place shuffling and its randomness configuration.
//!
//! This is the one part of the library that mutates caller-owned storage.
//! `shuffle` takes `&mut [T]`, permutes it where it lies and then yields
//! the permuted elements. Callers who need the original order clone first.
//!
//! # Key Concepts
//!
//! - **Shuffle**: Lazy iterator that permutes on first pull
//! - **ShuffleRng**: Thread-local or seeded randomness source
//! - **ShuffleConfig**: Serializable choice of randomness source
//!
//! # Example
//!
//! ```rust
//! use seqtools::permute::{shuffle_with, ShuffleConfig};
//!
//! let config = ShuffleConfig::new().seed(7);
//!
//! let mut a = vec![1, 2, 3, 4, 5];
//! let mut b = a.clone();
//! let first: Vec<i32> = shuffle_with(&mut a, config.rng()).copied().collect();
//! let second: Vec<i32> = shuffle_with(&mut b, config.rng()).copied().collect();
//!
//! assert_eq!(first, second);
//! assert_eq!(first, a);
//! ```

mod config;
mod error;
mod rng;
mod shuffle;

pub use config::{ShuffleConfig, SEED_ENV_VAR};
pub use error::ConfigError;
pub use rng::ShuffleRng;
pub use shuffle::{shuffle, shuffle_with, Shuffle};
