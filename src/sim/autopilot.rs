//! Idle/demo mode - picks inputs so the game can play itself
//!
//! Only the host uses this; `tick` never consults it.

use super::player::{InputFlags, Player};
use super::state::GameState;

/// Extra horizontal margin, in player widths, when judging a threat
const THREAT_MARGIN: f64 = 1.0;
/// How close to the start column counts as "home"
const HOME_TOLERANCE: f64 = 0.01;

/// Choose this tick's input for the autopilot
///
/// Steers away from the lowest obstacle that is above the player and lined up
/// with it horizontally, toward whichever side has more room. With nothing in
/// the way, drifts back toward the start column.
pub fn autopilot_input(state: &GameState) -> InputFlags {
    let player = &state.player;
    let margin = player.width * THREAT_MARGIN;
    let left = player.pos.x - margin;
    let right = player.pos.x + player.width + margin;

    // Lowest (closest) threat wins
    let threat = state
        .obstacles
        .iter()
        .map(|(_, o)| o)
        .filter(|o| o.pos.y < player.pos.y + player.height)
        .filter(|o| o.pos.x < right && o.pos.x + o.size > left)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let mut input = InputFlags::NONE;
    match threat {
        Some(obstacle) => {
            let player_center = player.pos.x + player.width / 2.0;
            let obstacle_center = obstacle.pos.x + obstacle.size / 2.0;
            let room_left = obstacle.pos.x;
            let room_right = 1.0 - (obstacle.pos.x + obstacle.size);
            // Prefer dodging away from the obstacle's centre unless the wall is in the way
            let go_left = if (player_center - obstacle_center).abs() < player.width {
                room_left > room_right
            } else {
                player_center < obstacle_center && room_left >= player.width
            };
            input.left = go_left;
            input.right = !go_left;
        }
        None => {
            let home = Player::start_position().x;
            if player.pos.x < home - HOME_TOLERANCE {
                input.right = true;
            } else if player.pos.x > home + HOME_TOLERANCE {
                input.left = true;
            }
        }
    }
    input
}
