//! Shuffle configuration.
//!
//! Selects where `shuffle_with` draws its randomness from. The default is
//! the thread-local generator; a seed switches to a deterministic one.

use super::error::ConfigError;
use super::rng::ShuffleRng;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};

/// Environment variable read by [`ShuffleConfig::from_env`]
pub const SEED_ENV_VAR: &str = "SEQTOOLS_SHUFFLE_SEED";

/// Serializable choice of randomness source for shuffling.
///
/// # Example
///
/// ```rust
/// use seqtools::permute::ShuffleConfig;
///
/// let config = ShuffleConfig::from_json(r#"{ "seed": 42 }"#).unwrap();
/// assert_eq!(config, ShuffleConfig::new().seed(42));
///
/// let default = ShuffleConfig::from_json("{}").unwrap();
/// assert_eq!(default.seed, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShuffleConfig {
    /// Seed for a deterministic generator; `None` means thread-local
    pub seed: Option<u64>,
}

impl ShuffleConfig {
    /// Create a configuration that uses the thread-local generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed for reproducible shuffles
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the seed from [`SEED_ENV_VAR`].
    ///
    /// An unset or blank variable yields the default configuration. A value
    /// that is not valid Unicode is an error, not an absent seed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var_lookup(env::var(SEED_ENV_VAR))
    }

    fn from_var_lookup(lookup: Result<String, VarError>) -> Result<Self, ConfigError> {
        match lookup {
            Ok(value) => Self::from_seed_var(Some(&value)),
            Err(VarError::NotPresent) => Self::from_seed_var(None),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::NonUnicodeSeed {
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    fn from_seed_var(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::default());
        };
        let seed = raw.parse().map_err(|source| ConfigError::InvalidSeed {
            value: raw.to_string(),
            source,
        })?;
        Ok(Self::new().seed(seed))
    }

    /// Build the generator this configuration describes
    pub fn rng(&self) -> ShuffleRng {
        match self.seed {
            Some(seed) => ShuffleRng::seeded(seed),
            None => ShuffleRng::thread(),
        }
    }
}
