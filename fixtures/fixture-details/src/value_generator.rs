// Copyright (c) The kmap-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use color_eyre::{eyre::eyre, Result};
use proptest::{
    strategy::{Strategy, ValueTree},
    test_runner::{Config, RngAlgorithm, TestRng, TestRunner},
};
use std::hash::{Hash, Hasher};
use twox_hash::XxHash64;

/// Generates values from proptest strategies with a deterministic RNG.
pub struct ValueGenerator {
    runner: TestRunner,
}

impl ValueGenerator {
    /// Creates a generator whose output depends only on `seed`.
    pub fn from_seed(seed: impl Hash) -> Self {
        // ChaCha takes a 32-byte seed: fill it from four differently seeded hashes.
        let mut bytes = [0u8; 32];
        for (ix, chunk) in bytes.chunks_exact_mut(8).enumerate() {
            let mut hasher = XxHash64::with_seed(ix as u64);
            seed.hash(&mut hasher);
            chunk.copy_from_slice(&hasher.finish().to_le_bytes());
        }
        let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &bytes);
        Self {
            runner: TestRunner::new_with_rng(Config::default(), rng),
        }
    }

    /// Forks off a generator with its own RNG, advancing this one.
    pub fn partial_clone(&mut self) -> Self {
        Self {
            runner: TestRunner::new_with_rng(Config::default(), self.runner.new_rng()),
        }
    }

    pub fn generate<S: Strategy>(&mut self, strategy: S) -> Result<S::Value> {
        let tree = strategy
            .new_tree(&mut self.runner)
            .map_err(|reason| eyre!("failed to generate value: {}", reason))?;
        Ok(tree.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_seed_same_values() {
        let values = |seed: &str| -> Vec<u16> {
            let mut gen = ValueGenerator::from_seed(seed);
            (0..16)
                .map(|_| gen.generate(any::<u16>()).unwrap())
                .collect()
        };
        assert_eq!(values("kmap-min"), values("kmap-min"));
        assert_ne!(values("kmap-min"), values("kmap-max"));
    }

    #[test]
    fn test_partial_clone_forks_deterministically() {
        let forks = |seed: &str| -> Vec<u64> {
            let mut gen = ValueGenerator::from_seed(seed);
            (0..8)
                .map(|_| gen.partial_clone().generate(any::<u64>()).unwrap())
                .collect()
        };
        let values = forks("kmap-min");
        assert_eq!(values, forks("kmap-min"));
        // Each fork advances the parent, so the forks do not repeat each other.
        assert!(values.iter().any(|&value| value != values[0]));
    }
}
