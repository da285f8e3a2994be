//! Configuration error types.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors that can occur while loading a [`ShuffleConfig`](crate::permute::ShuffleConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The seed environment variable is set but is not a `u64`
    #[error("Invalid shuffle seed {value:?}: {source}")]
    InvalidSeed {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The seed environment variable is set but is not valid Unicode
    #[error("Shuffle seed is not valid Unicode: {value:?}")]
    NonUnicodeSeed { value: String },

    /// The JSON document could not be parsed into a configuration
    #[error("Malformed shuffle configuration: {0}")]
    Json(#[from] serde_json::Error),
}
