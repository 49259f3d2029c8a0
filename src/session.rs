//! Session and score management
//!
//! Wraps a `GameState` with the best-ever score and the game-over
//! confirmation flow: `Running -> GameOver -> Running | Terminated`.

use crate::sim::{
    Field, GameEvent, GamePhase, GameState, InputFlags, RandomSource, SimRng, TickOutcome, tick,
};

/// Host's answer to the game-over prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    PlayAgain,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session<R: RandomSource = SimRng> {
    state: GameState,
    top_score: u64,
    rng: R,
}

impl<R: RandomSource> Session<R> {
    /// Start a session; `top_score` is whatever the host loaded from storage
    pub fn new(field: Field, top_score: u64, rng: R) -> Self {
        Self {
            state: GameState::new(field),
            top_score,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios and debugging tools
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn top_score(&self) -> u64 {
        self.top_score
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.state.phase == GamePhase::Terminated
    }

    /// Run one tick; a collision records the score immediately
    pub fn tick(&mut self, input: &InputFlags) -> TickOutcome {
        let outcome = tick(&mut self.state, input, &mut self.rng);
        if outcome == TickOutcome::Collided {
            self.on_game_over();
        }
        outcome
    }

    /// Fold the current score into the best score. Returns true if it improved.
    pub fn on_game_over(&mut self) -> bool {
        if self.state.score <= self.top_score {
            return false;
        }
        log::info!(
            "New top score {} (previous {})",
            self.state.score,
            self.top_score
        );
        self.top_score = self.state.score;
        self.state.events.push(GameEvent::NewTopScore {
            score: self.top_score,
        });
        true
    }

    /// Fresh game: score, player, obstacles and difficulty back to their start
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Answer the game-over prompt. Ignored unless the game is over.
    pub fn confirm(&mut self, choice: Confirmation) -> GamePhase {
        if self.state.phase != GamePhase::GameOver {
            log::debug!("Ignoring {:?} in phase {:?}", choice, self.state.phase);
            return self.state.phase;
        }
        match choice {
            Confirmation::PlayAgain => self.reset(),
            Confirmation::Quit => self.state.phase = GamePhase::Terminated,
        }
        self.state.phase
    }

    /// Host is quitting: keep the best score and stop the simulation.
    /// Returns true if the top score improved.
    pub fn finish(&mut self) -> bool {
        let improved = self.on_game_over();
        self.state.phase = GamePhase::Terminated;
        improved
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::consts::*;
    use crate::sim::rng::testing::ScriptedRng;
    use crate::sim::{Obstacle, Player};

    fn crash(session: &mut Session<ScriptedRng>) {
        let x = session.state().player.pos.x;
        session
            .state_mut()
            .obstacles
            .insert(Obstacle::new(DVec2::new(x, 0.89), 0.1, MIN_OBSTACLE_SPEED));
        assert_eq!(session.tick(&InputFlags::NONE), TickOutcome::Collided);
    }

    #[test]
    fn test_game_over_updates_top_score() {
        let mut session = Session::new(Field::default(), 3, ScriptedRng::always_reject());
        session.state_mut().score = 5;
        crash(&mut session);

        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(session.top_score(), 5);
        assert!(
            session
                .state()
                .events
                .contains(&GameEvent::NewTopScore { score: 5 })
        );
    }

    #[test]
    fn test_lower_score_keeps_top_score() {
        let mut session = Session::new(Field::default(), 10, ScriptedRng::always_reject());
        session.state_mut().score = 4;
        crash(&mut session);
        assert_eq!(session.top_score(), 10);
        assert!(!session.on_game_over());
    }

    #[test]
    fn test_play_again_resets() {
        let mut session = Session::new(Field::default(), 0, ScriptedRng::always_reject());
        session.state_mut().score = 12;
        session.state_mut().player.pos = DVec2::new(0.1, 0.1);
        session.state_mut().player.clamp_to_field();
        let x = session.state().player.pos.x;
        let y = session.state().player.pos.y;
        session
            .state_mut()
            .obstacles
            .insert(Obstacle::new(DVec2::new(x, y), 0.1, MIN_OBSTACLE_SPEED));
        assert_eq!(session.tick(&InputFlags::NONE), TickOutcome::Collided);
        assert!(session.state().difficulty.gen_prob() > INIT_OBSTACLE_GEN_PROBABILITY);

        assert_eq!(session.confirm(Confirmation::PlayAgain), GamePhase::Running);
        let state = session.state();
        assert_eq!(state.score, 0);
        assert_eq!(state.player.pos, Player::start_position());
        assert!(state.obstacles.is_empty());
        assert_eq!(state.difficulty.gen_prob(), INIT_OBSTACLE_GEN_PROBABILITY);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(session.top_score(), 12);
    }

    #[test]
    fn test_quit_terminates() {
        let mut session = Session::new(Field::default(), 0, ScriptedRng::always_reject());
        crash(&mut session);
        assert_eq!(session.confirm(Confirmation::Quit), GamePhase::Terminated);
        assert!(session.is_terminated());
        assert_eq!(session.tick(&InputFlags::NONE), TickOutcome::Halted);
    }

    #[test]
    fn test_confirm_ignored_while_running() {
        let mut session = Session::new(Field::default(), 0, ScriptedRng::always_reject());
        assert_eq!(session.confirm(Confirmation::Quit), GamePhase::Running);
        assert_eq!(session.confirm(Confirmation::PlayAgain), GamePhase::Running);
    }

    #[test]
    fn test_finish_records_score() {
        let mut session = Session::new(Field::default(), 2, ScriptedRng::always_reject());
        session.state_mut().score = 9;
        assert!(session.finish());
        assert_eq!(session.top_score(), 9);
        assert!(session.is_terminated());
    }
}
