//! Random source for obstacle generation and the spawn gate

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform double generator over `[min, max)`
pub trait RandomSource {
    fn uniform(&mut self, min: f64, max: f64) -> f64;
}

/// PCG-backed random source
///
/// Seeded from OS entropy for normal play, or from an explicit seed when a
/// reproducible run is wanted.
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Seed this generator was created with (log it to replay a run)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..max)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Replays a fixed sequence of unit draws, scaled into each requested range.
    /// Repeats the last value once the script runs out.
    pub struct ScriptedRng {
        draws: Vec<f64>,
        next: usize,
        pub calls: usize,
    }

    impl ScriptedRng {
        pub fn new(draws: &[f64]) -> Self {
            Self {
                draws: draws.to_vec(),
                next: 0,
                calls: 0,
            }
        }

        /// Every draw lands at the top of the range, so the spawn gate never passes
        pub fn always_reject() -> Self {
            Self::new(&[0.999_999])
        }

        /// Every draw lands at the bottom of the range, so the spawn gate always passes
        pub fn always_accept() -> Self {
            Self::new(&[0.0])
        }
    }

    impl RandomSource for ScriptedRng {
        fn uniform(&mut self, min: f64, max: f64) -> f64 {
            self.calls += 1;
            let unit = self.draws.get(self.next).or(self.draws.last()).copied().unwrap_or(0.0);
            if self.next < self.draws.len() {
                self.next += 1;
            }
            min + unit * (max - min)
        }
    }
}
