//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in `GameState`; hosts read it
//! between ticks to render.

use serde::{Deserialize, Serialize};

use super::collision::Field;
use super::difficulty::Difficulty;
use super::obstacle::{ObstaclePool, SlotId};
use super::player::Player;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Player was hit; waiting for the host to confirm play-again or quit
    GameOver,
    /// Host chose to quit
    Terminated,
}

/// Things that happened during the last tick, for audio and UI feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ObstacleSpawned { slot: SlotId },
    /// Obstacle fell out the bottom and scored a point
    ObstacleCleared { slot: SlotId },
    Collision { slot: SlotId },
    NewTopScore { score: u64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub player: Player,
    pub obstacles: ObstaclePool,
    pub difficulty: Difficulty,
    /// One point per obstacle that left the field this session
    pub score: u64,
    pub phase: GamePhase,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Field::default())
    }
}

impl GameState {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            player: Player::default(),
            obstacles: ObstaclePool::new(),
            difficulty: Difficulty::default(),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Back to a fresh session on the same field
    pub fn reset(&mut self) {
        self.player.reset();
        self.obstacles.clear();
        self.difficulty.reset();
        self.score = 0;
        self.phase = GamePhase::Running;
        self.time_ticks = 0;
        self.events.clear();
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
