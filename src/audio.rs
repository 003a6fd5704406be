//! Audio boundary
//!
//! The simulation only records [`GameEvent`]s. This module turns them into
//! fire-and-forget sound cues on some [`AudioSink`] and keeps the background
//! track looping. Sink failures are logged and dropped; they never reach the
//! game loop.

use std::fmt;

use crate::sim::GameEvent;

/// Looping background track name
pub const MUSIC_TRACK: &str = "music";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Hero jumped
    Jump,
    /// Hero or enemy took damage
    Hit,
}

impl SoundEffect {
    /// Asset name of the clip
    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::Hit => "hit",
        }
    }

    /// Which cue (if any) an event should trigger
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jump => Some(SoundEffect::Jump),
            GameEvent::Hit => Some(SoundEffect::Hit),
            GameEvent::EnemyDefeated { .. } | GameEvent::PhaseChanged { .. } => None,
        }
    }
}

/// Why a sink couldn't play something
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// No clip/track loaded under that name
    Missing(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Missing(name) => write!(f, "sound not found: {name}"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Whatever actually makes noise
pub trait AudioSink {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError>;
    fn play_music(&mut self, track: &str, volume: f32) -> Result<(), AudioError>;
    fn stop_music(&mut self);
    fn is_music_playing(&self, track: &str) -> bool;
}

/// Sink for headless runs: logs cues at debug level
#[derive(Debug, Default)]
pub struct LogSink {
    playing: Option<String>,
}

impl AudioSink for LogSink {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
        log::debug!("sfx {} (vol {:.2})", effect.name(), volume);
        Ok(())
    }

    fn play_music(&mut self, track: &str, volume: f32) -> Result<(), AudioError> {
        log::debug!("music {} (vol {:.2})", track, volume);
        self.playing = Some(track.to_string());
        Ok(())
    }

    fn stop_music(&mut self) {
        self.playing = None;
    }

    fn is_music_playing(&self, track: &str) -> bool {
        self.playing.as_deref() == Some(track)
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Play a sound effect; failures are swallowed
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.master_volume * self.sfx_volume;
        if vol <= 0.0 {
            return;
        }
        if let Err(e) = self.sink.play_effect(effect, vol) {
            log::debug!("Skipping {}: {}", effect.name(), e);
        }
    }

    /// Keep the background track going while sound is on, stop it otherwise
    pub fn keep_music(&mut self, sound_enabled: bool) {
        if !sound_enabled {
            if self.sink.is_music_playing(MUSIC_TRACK) {
                self.sink.stop_music();
            }
            return;
        }
        if self.sink.is_music_playing(MUSIC_TRACK) {
            return;
        }
        let vol = self.master_volume * self.music_volume;
        if let Err(e) = self.sink.play_music(MUSIC_TRACK, vol) {
            log::debug!("Music unavailable: {}", e);
        }
    }

    /// Play cues for a tick's events and keep the music in sync
    pub fn process(&mut self, events: &[GameEvent], sound_enabled: bool) {
        self.keep_music(sound_enabled);
        if !sound_enabled {
            return;
        }
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}
