use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of uniform draws in `[0, 1)` for random selection
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    fn uniform(&self) -> f64;
}

/// Random source backed by a standard RNG
pub struct StdRandom {
    /// Mutex so one source can serve concurrent requests
    rng: Mutex<StdRng>,
}

impl StdRandom {
    /// Creates a source seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a reproducible source
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for StdRandom {
    fn uniform(&self) -> f64 {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen::<f64>()
    }
}
