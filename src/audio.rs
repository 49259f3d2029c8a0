//! Audio cues
//!
//! Sound is an optional host capability. The simulation emits `GameEvent`s;
//! this module maps them to effects and hands them to whatever sink the host
//! provides.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Looping background track, started with the game
    BackgroundMusic,
    /// Player hit an obstacle
    Collision,
    /// Best score beaten
    NewTopScore,
}

/// Something that can play sounds
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Effect for an event, if any
pub fn cue_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::Collision { .. } => Some(SoundEffect::Collision),
        GameEvent::NewTopScore { .. } => Some(SoundEffect::NewTopScore),
        GameEvent::ObstacleSpawned { .. } | GameEvent::ObstacleCleared { .. } => None,
    }
}

/// Audio manager for the game
///
/// Filters cues through the settings toggles before passing them on.
pub struct AudioManager<S: AudioSink> {
    sink: S,
    music: bool,
    sound_effects: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        Self {
            sink,
            music: settings.effective_music(),
            sound_effects: settings.effective_sound_effects(),
        }
    }

    pub fn start_music(&mut self) {
        if self.music {
            self.sink.play(SoundEffect::BackgroundMusic);
        }
    }

    /// Play cues for a tick's worth of events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        if !self.sound_effects {
            return;
        }
        for effect in events.iter().filter_map(cue_for) {
            self.sink.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Headless sink: logs each cue instead of playing it
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("Audio cue: {:?}", effect);
    }
}
