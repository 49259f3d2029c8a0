//! Dodger entry point
//!
//! Headless host: drives the simulation with the autopilot, plays audio cues
//! through a logging sink and keeps the top score file up to date.

use std::path::PathBuf;

use clap::Parser;

use dodger::audio::{AudioManager, LogAudio};
use dodger::host::{RoundConfig, play_rounds};
use dodger::sim::SimRng;
use dodger::{Session, Settings, TopScoreStore};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Settings file (JSON)
    #[arg(long, default_value = "dodger.json")]
    settings: PathBuf,
    /// Number of games to play before quitting
    #[arg(long, default_value_t = 3)]
    rounds: u32,
    /// Tick cap per game
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let settings = Settings::load_or_default(&cli.settings);
    let store = TopScoreStore::new(&settings.top_score_path);
    let rng = cli.seed.map_or_else(SimRng::from_entropy, SimRng::from_seed);
    log::info!("Dodger (headless) starting with seed {}", rng.seed());

    let mut session = Session::new(settings.field(), store.load(), rng);
    let mut audio = AudioManager::new(LogAudio, &settings);
    audio.start_music();

    let config = RoundConfig {
        rounds: cli.rounds,
        max_ticks: cli.max_ticks,
    };
    play_rounds(&mut session, &mut audio, config, |top_score| {
        // Write failures are reported but never end the game
        if let Err(e) = store.save(top_score) {
            log::warn!("{e}");
        }
    });

    log::info!("Final top score {}", session.top_score());
}
