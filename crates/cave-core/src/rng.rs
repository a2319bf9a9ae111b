//! Random number generation for cave creation
//!
//! Uses a seeded ChaCha RNG so any run can be reproduced from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Cave random number generator
///
/// Wraps ChaCha8Rng and remembers the seed it was created with. The
/// automaton consumes exactly one draw per interior cell, all at grid
/// creation time.
#[derive(Debug, Clone)]
pub struct CaveRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Only the seed is serialized; the generator is recreated on deserialize.
impl Serialize for CaveRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CaveRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(CaveRng::new(seed))
    }
}

impl CaveRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw from [0, 1)
    pub fn fraction(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}
