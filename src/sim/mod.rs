//! Simulation module
//!
//! All gameplay logic lives here:
//! - One `tick` per rendered frame, single-threaded
//! - Randomness only through `RandomSource`
//! - Stable iteration order (by slot)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod obstacle;
pub mod player;
pub mod rng;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{BoundingBox, Field, boxes_overlap, check_collision, collides};
pub use difficulty::{Difficulty, SpawnAttempt};
pub use obstacle::{Obstacle, ObstaclePool, SlotId};
pub use player::{InputFlags, Player};
pub use rng::{RandomSource, SimRng};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickOutcome, tick};
