//! Player avatar and movement integration

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Direction flags delivered by the host before each tick
///
/// Opposing flags are independent; holding both cancels out on that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFlags {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputFlags {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Net direction per axis, each component in {-1, 0, 1} (y grows downward)
    pub fn direction(&self) -> DVec2 {
        DVec2::new(
            f64::from(self.right as u8) - f64::from(self.left as u8),
            f64::from(self.down as u8) - f64::from(self.up as u8),
        )
    }
}

/// The player's square avatar in unit-square coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: DVec2,
    pub width: f64,
    pub height: f64,
    /// Distance moved per tick along each held axis
    pub speed: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Self::start_position(),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
        }
    }
}

impl Player {
    /// Horizontally centred, resting on the bottom edge
    pub fn start_position() -> DVec2 {
        DVec2::new(PLAYER_START_X, 1.0 - PLAYER_HEIGHT)
    }

    /// Move by one tick of input, keeping the whole box inside the field
    pub fn advance(&mut self, flags: InputFlags) {
        self.pos += flags.direction() * self.speed;
        self.clamp_to_field();
    }

    /// Clamp each axis independently to `[0, 1 - extent]`
    pub fn clamp_to_field(&mut self) {
        self.pos.x = self.pos.x.clamp(0.0, 1.0 - self.width);
        self.pos.y = self.pos.y.clamp(0.0, 1.0 - self.height);
    }

    pub fn reset(&mut self) {
        self.pos = Self::start_position();
    }
}
