//! Adaptive spawn probability
//!
//! Negative feedback: a successful spawn halves the probability, a rejected
//! attempt raises it by half, both clamped to the configured bounds.

use serde::{Deserialize, Serialize};

use super::obstacle::{ObstaclePool, SlotId};
use super::rng::RandomSource;
use crate::consts::*;

/// Result of one spawn attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnAttempt {
    Spawned(SlotId),
    /// Pool was full; no random draw was taken
    PoolFull,
    /// The spawn gate roll failed
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Difficulty {
    obstacle_gen_prob: f64,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            obstacle_gen_prob: INIT_OBSTACLE_GEN_PROBABILITY,
        }
    }
}

impl Difficulty {
    /// Current spawn probability per tick
    pub fn gen_prob(&self) -> f64 {
        self.obstacle_gen_prob
    }

    /// Roll the spawn gate once and adapt the probability to the outcome
    pub fn try_generate(
        &mut self,
        pool: &mut ObstaclePool,
        rng: &mut impl RandomSource,
    ) -> SpawnAttempt {
        // Capacity first: a full pool must not consume a draw
        if pool.is_full() {
            self.on_rejected();
            return SpawnAttempt::PoolFull;
        }
        if rng.uniform(0.0, 1.0) >= self.obstacle_gen_prob {
            self.on_rejected();
            return SpawnAttempt::Rejected;
        }

        match pool.create(rng) {
            Some(slot) => {
                self.on_spawned();
                SpawnAttempt::Spawned(slot)
            }
            None => {
                self.on_rejected();
                SpawnAttempt::PoolFull
            }
        }
    }

    pub fn reset(&mut self) {
        self.obstacle_gen_prob = INIT_OBSTACLE_GEN_PROBABILITY;
    }

    fn on_spawned(&mut self) {
        self.obstacle_gen_prob = (self.obstacle_gen_prob * OBSTACLE_GEN_PROB_DECR_MULT)
            .max(MIN_OBSTACLE_GEN_PROBABILITY);
    }

    fn on_rejected(&mut self) {
        self.obstacle_gen_prob = (self.obstacle_gen_prob * OBSTACLE_GEN_PROB_INCR_MULT)
            .min(MAX_OBSTACLE_GEN_PROBABILITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SimRng;
    use crate::sim::rng::testing::ScriptedRng;
    use proptest::prelude::*;

    #[test]
    fn test_rejection_raises_probability() {
        let mut difficulty = Difficulty::default();
        let mut pool = ObstaclePool::new();
        let mut rng = ScriptedRng::always_reject();

        let before = difficulty.gen_prob();
        assert_eq!(difficulty.try_generate(&mut pool, &mut rng), SpawnAttempt::Rejected);
        assert!(difficulty.gen_prob() > before);
        assert!((difficulty.gen_prob() - 0.0015).abs() < 1e-12);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_probability_caps_at_max() {
        let mut difficulty = Difficulty::default();
        let mut pool = ObstaclePool::new();
        let mut rng = ScriptedRng::always_reject();
        for _ in 0..100 {
            difficulty.try_generate(&mut pool, &mut rng);
        }
        assert_eq!(difficulty.gen_prob(), MAX_OBSTACLE_GEN_PROBABILITY);
    }

    #[test]
    fn test_spawn_lowers_probability() {
        let mut difficulty = Difficulty {
            obstacle_gen_prob: MAX_OBSTACLE_GEN_PROBABILITY,
        };
        let mut pool = ObstaclePool::new();
        let mut rng = ScriptedRng::always_accept();

        let attempt = difficulty.try_generate(&mut pool, &mut rng);
        assert_eq!(attempt, SpawnAttempt::Spawned(SlotId(0)));
        assert_eq!(pool.len(), 1);
        assert!((difficulty.gen_prob() - 0.025).abs() < 1e-12);

        // Repeated spawns floor at the minimum
        for _ in 0..20 {
            difficulty.try_generate(&mut pool, &mut rng);
        }
        assert_eq!(difficulty.gen_prob(), MIN_OBSTACLE_GEN_PROBABILITY);
    }

    #[test]
    fn test_full_pool_skips_the_draw() {
        let mut difficulty = Difficulty::default();
        let mut pool = ObstaclePool::new();
        let mut rng = ScriptedRng::always_accept();
        for _ in 0..MAX_NUM_OF_OBSTACLES {
            pool.create(&mut rng);
        }
        let calls = rng.calls;

        assert_eq!(difficulty.try_generate(&mut pool, &mut rng), SpawnAttempt::PoolFull);
        assert_eq!(rng.calls, calls);
        assert!((difficulty.gen_prob() - 0.0015).abs() < 1e-12);
    }

    #[test]
    fn test_gate_draw_precedes_obstacle_draws() {
        let mut difficulty = Difficulty {
            obstacle_gen_prob: 0.05,
        };
        let mut pool = ObstaclePool::new();
        // gate, x, size, speed
        let mut rng = ScriptedRng::new(&[0.01, 0.25, 0.5, 0.0]);

        difficulty.try_generate(&mut pool, &mut rng);
        let obstacle = pool.get(SlotId(0)).unwrap();
        assert_eq!(rng.calls, 4);
        assert!((obstacle.pos.x - 0.25).abs() < 1e-12);
        assert!((obstacle.size - 0.075).abs() < 1e-12);
        assert_eq!(obstacle.speed, MIN_OBSTACLE_SPEED);
    }

    #[test]
    fn test_reset() {
        let mut difficulty = Difficulty {
            obstacle_gen_prob: 0.03,
        };
        difficulty.reset();
        assert_eq!(difficulty.gen_prob(), INIT_OBSTACLE_GEN_PROBABILITY);
    }

    proptest! {
        #[test]
        fn prop_probability_stays_bounded(seed in any::<u64>(), ticks in 1usize..3000) {
            let mut difficulty = Difficulty::default();
            let mut pool = ObstaclePool::new();
            let mut rng = SimRng::from_seed(seed);
            for _ in 0..ticks {
                let before = difficulty.gen_prob();
                match difficulty.try_generate(&mut pool, &mut rng) {
                    SpawnAttempt::Spawned(_) => {
                        prop_assert!(difficulty.gen_prob() < before || before == MIN_OBSTACLE_GEN_PROBABILITY);
                    }
                    SpawnAttempt::PoolFull | SpawnAttempt::Rejected => {
                        prop_assert!(difficulty.gen_prob() > before || before == MAX_OBSTACLE_GEN_PROBABILITY);
                    }
                }
                prop_assert!(difficulty.gen_prob() >= MIN_OBSTACLE_GEN_PROBABILITY);
                prop_assert!(difficulty.gen_prob() <= MAX_OBSTACLE_GEN_PROBABILITY);
                pool.advance_all();
            }
        }
    }
}
