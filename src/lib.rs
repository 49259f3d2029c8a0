//! Dodger - A single-screen arcade dodging game
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (player, obstacles, difficulty, collisions)
//! - `session`: Score tracking and game-over / play-again transitions
//! - `highscores`: Top score persistence
//! - `host`: Headless round loop driven by the autopilot
//! - `settings`: Host configuration
//! - `audio`: Optional sound cues driven by game events

pub mod audio;
pub mod error;
pub mod highscores;
pub mod host;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::DodgerError;
pub use highscores::TopScoreStore;
pub use session::{Confirmation, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Obstacle pool capacity
    pub const MAX_NUM_OF_OBSTACLES: usize = 25;

    /// Spawn probability bounds and feedback multipliers
    pub const INIT_OBSTACLE_GEN_PROBABILITY: f64 = 0.001;
    pub const MIN_OBSTACLE_GEN_PROBABILITY: f64 = 0.001;
    pub const MAX_OBSTACLE_GEN_PROBABILITY: f64 = 0.05;
    pub const OBSTACLE_GEN_PROB_DECR_MULT: f64 = 0.50;
    pub const OBSTACLE_GEN_PROB_INCR_MULT: f64 = 1.50;

    /// Obstacle size, as a fraction of the average field dimension
    pub const MIN_OBSTACLE_SIZE: f64 = 0.05;
    pub const MAX_OBSTACLE_SIZE: f64 = 0.1;
    /// Obstacle fall speed (field heights per tick)
    pub const MIN_OBSTACLE_SPEED: f64 = 0.001;
    pub const MAX_OBSTACLE_SPEED: f64 = 0.01;

    /// Player defaults
    pub const PLAYER_WIDTH: f64 = 0.05;
    pub const PLAYER_HEIGHT: f64 = 0.05;
    pub const PLAYER_SPEED: f64 = 0.01;
    pub const PLAYER_START_X: f64 = 0.5;

    /// Default play-field size in pixels
    pub const FIELD_WIDTH: u32 = 800;
    pub const FIELD_HEIGHT: u32 = 600;

    /// Default top score file
    pub const TOP_SCORE_FILE: &str = "top_score";
}
