//! Headless round loop
//!
//! Plays a fixed number of games with the autopilot. A game ends on a
//! collision or when it reaches the tick cap; either way the best score is
//! recorded and the next game starts until the round budget is spent.

use crate::audio::{AudioManager, AudioSink};
use crate::session::{Confirmation, Session};
use crate::sim::{RandomSource, TickOutcome, autopilot_input};

/// Round budget for a headless run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// Games to play (at least one is always played)
    pub rounds: u32,
    /// Tick cap per game
    pub max_ticks: u64,
}

/// How one game went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub ticks: u64,
    pub score: u64,
    pub collided: bool,
}

/// Play every round, calling `on_new_top` each time the best score rises.
///
/// The session is `Terminated` when this returns.
pub fn play_rounds<R: RandomSource, S: AudioSink>(
    session: &mut Session<R>,
    audio: &mut AudioManager<S>,
    config: RoundConfig,
    mut on_new_top: impl FnMut(u64),
) -> Vec<RoundReport> {
    let rounds = config.rounds.max(1);
    let mut reports = Vec::with_capacity(rounds as usize);

    for round in 1..=rounds {
        let best_before = session.top_score();
        let mut ticks = 0;
        let mut collided = false;
        while ticks < config.max_ticks {
            let input = autopilot_input(session.state());
            let outcome = session.tick(&input);
            audio.handle_events(&session.state().events);
            ticks += 1;
            if outcome == TickOutcome::Collided {
                collided = true;
                break;
            }
        }

        let report = RoundReport {
            round,
            ticks,
            score: session.score(),
            collided,
        };
        if collided {
            log::info!(
                "Round {round}: game over after {ticks} ticks. Score {}, top score {}",
                report.score,
                session.top_score()
            );
        } else {
            log::info!("Round {round}: survived {ticks} ticks, score {}", report.score);
        }
        reports.push(report);

        let last_round = round == rounds;
        if !collided {
            // Tick cap: the game ends here without a game-over prompt
            if last_round {
                session.finish();
            } else {
                session.on_game_over();
            }
        }
        if session.top_score() > best_before {
            on_new_top(session.top_score());
        }

        if last_round {
            if collided {
                session.confirm(Confirmation::Quit);
            }
        } else if collided {
            session.confirm(Confirmation::PlayAgain);
        } else {
            session.reset();
        }
    }

    reports
}
