//! Seeded Shuffle
//!
//! This example shows in-place shuffling and how configuration selects
//! the randomness source.
//!
//! Key concepts:
//! - `shuffle` permutes the caller's slice; clone first to keep the original
//! - A seed makes the permutation reproducible
//! - The seed can come from JSON or the environment
//!
//! Run with: SEQTOOLS_SHUFFLE_SEED=42 cargo run --example seeded_shuffle

use seqtools::permute::{shuffle_with, ConfigError, ShuffleConfig};
use seqtools::shuffle;

fn main() -> Result<(), ConfigError> {
    println!("=== Seeded Shuffle Example ===\n");

    let original = vec!["hello", "world", "gophers", "and", "crabs"];

    let mut deck = original.clone();
    let dealt: Vec<&str> = shuffle(&mut deck).copied().collect();
    println!("thread-local shuffle: {dealt:?}");
    println!("original kept intact: {original:?}");

    let config = ShuffleConfig::from_env()?;
    println!("\nconfiguration from environment: {config:?}");

    let mut deck = original.clone();
    let dealt: Vec<&str> = shuffle_with(&mut deck, config.rng()).copied().collect();
    println!("configured shuffle: {dealt:?}");

    let config = ShuffleConfig::from_json(r#"{ "seed": 7 }"#)?;
    let mut first = original.clone();
    let mut second = original.clone();
    shuffle_with(&mut first, config.rng()).for_each(drop);
    shuffle_with(&mut second, config.rng()).for_each(drop);
    println!("\nseed 7 twice: {first:?} == {second:?}");
    assert_eq!(first, second);

    println!("\n=== Example Complete ===");
    Ok(())
}
