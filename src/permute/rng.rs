//! Randomness source for shuffling.

use rand::rngs::ThreadRng;
use rand::{Error, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Generator handed to [`shuffle_with`](crate::permute::shuffle_with).
///
/// Built by [`ShuffleConfig::rng`](crate::permute::ShuffleConfig::rng).
#[derive(Clone, Debug)]
pub enum ShuffleRng {
    /// Thread-local generator, seeded by the operating system
    Thread(ThreadRng),

    /// Deterministic generator for reproducible permutations
    Seeded(Xoshiro256PlusPlus),
}

impl ShuffleRng {
    /// Use the thread-local generator
    pub fn thread() -> Self {
        Self::Thread(rand::thread_rng())
    }

    /// Use a Xoshiro generator seeded from `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl RngCore for ShuffleRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Thread(rng) => rng.next_u32(),
            Self::Seeded(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Thread(rng) => rng.next_u64(),
            Self::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Self::Thread(rng) => rng.fill_bytes(dest),
            Self::Seeded(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        match self {
            Self::Thread(rng) => rng.try_fill_bytes(dest),
            Self::Seeded(rng) => rng.try_fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_agree() {
        let mut a = ShuffleRng::seeded(3);
        let mut b = ShuffleRng::seeded(3);
        for _ in 0..8 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = ShuffleRng::seeded(3);
        let mut b = ShuffleRng::seeded(4);
        let from_a: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
        let from_b: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();
        assert_ne!(from_a, from_b);
    }

    #[test]
    fn thread_generator_fills_bytes() {
        let mut rng = ShuffleRng::thread();
        let mut buf = [0u8; 16];
        assert!(rng.try_fill_bytes(&mut buf).is_ok());
    }

    #[test]
    fn clones_continue_the_same_stream() {
        let mut a = ShuffleRng::seeded(11);
        a.next_u32();
        let mut b = a.clone();
        assert_eq!(a.next_u32(), b.next_u32());
    }
}
