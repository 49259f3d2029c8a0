//! Axis-aligned bounding-box collision in pixel space
//!
//! Boxes are converted from unit-square coordinates to integer pixels before
//! testing, truncating toward zero. Obstacles are square on screen: their side
//! is scaled by the average of the field's width and height rather than per axis.

use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstaclePool, SlotId};
use super::player::Player;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Pixel dimensions of the play-field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: u32,
    pub height: u32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Uniform scale for obstacle sides
    #[inline]
    pub fn average_dimension(&self) -> f64 {
        (f64::from(self.width) + f64::from(self.height)) / 2.0
    }

    /// Pixel box of the player's avatar
    pub fn player_box(&self, player: &Player) -> BoundingBox {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        BoundingBox {
            top: (player.pos.y * h) as i32,
            bottom: (player.pos.y * h + player.height * h) as i32,
            left: (player.pos.x * w) as i32,
            right: (player.pos.x * w + player.width * w) as i32,
        }
    }

    /// Pixel box of an obstacle
    pub fn obstacle_box(&self, obstacle: &Obstacle) -> BoundingBox {
        let x = (obstacle.pos.x * f64::from(self.width)) as i32;
        let y = (obstacle.pos.y * f64::from(self.height)) as i32;
        let side = (obstacle.size * self.average_dimension()) as i32;
        BoundingBox {
            top: y,
            bottom: y + side,
            left: x,
            right: x + side,
        }
    }
}

/// Axis-aligned rectangle in pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl BoundingBox {
    pub fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    #[inline]
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        boxes_overlap(self, other)
    }
}

/// Strict overlap test: boxes that only share an edge do not collide
#[inline]
pub fn boxes_overlap(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.bottom > b.top && a.top < b.bottom && a.right > b.left && a.left < b.right
}

/// First obstacle (in slot order) whose box overlaps the player's
pub fn check_collision(player: &Player, pool: &ObstaclePool, field: &Field) -> Option<SlotId> {
    let player_box = field.player_box(player);
    pool.iter()
        .find(|(_, obstacle)| boxes_overlap(&player_box, &field.obstacle_box(obstacle)))
        .map(|(id, _)| id)
}

/// Boolean form of [`check_collision`]
#[inline]
pub fn collides(player: &Player, pool: &ObstaclePool, field: &Field) -> bool {
    check_collision(player, pool, field).is_some()
}
