//! Per-frame simulation tick
//!
//! Order within a tick: move player, roll the spawn gate, advance obstacles
//! (scoring exits), then test the player against what is left.

use super::collision::check_collision;
use super::difficulty::SpawnAttempt;
use super::player::InputFlags;
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Simulation advanced; `points` obstacles left the field
    Advanced { points: u64 },
    /// Player was hit; state is now `GameOver`
    Collided,
    /// Not running, nothing changed
    Halted,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &InputFlags, rng: &mut impl RandomSource) -> TickOutcome {
    if state.phase != GamePhase::Running {
        return TickOutcome::Halted;
    }

    state.events.clear();
    state.time_ticks += 1;

    state.player.advance(*input);

    if let SpawnAttempt::Spawned(slot) = state.difficulty.try_generate(&mut state.obstacles, rng) {
        log::debug!("Spawned obstacle in {slot}");
        state.events.push(GameEvent::ObstacleSpawned { slot });
    }

    let events = &mut state.events;
    let points = state
        .obstacles
        .advance_all_with(|slot| events.push(GameEvent::ObstacleCleared { slot }));
    state.score += points;

    if let Some(slot) = check_collision(&state.player, &state.obstacles, &state.field) {
        log::info!(
            "Collision with {slot} after {} ticks, score {}",
            state.time_ticks,
            state.score
        );
        state.events.push(GameEvent::Collision { slot });
        state.phase = GamePhase::GameOver;
        return TickOutcome::Collided;
    }

    TickOutcome::Advanced { points }
}
