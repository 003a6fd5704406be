//! Galactic Knight headless runner
//!
//! Drives a session on the autopilot for a fixed stretch of simulated time,
//! clicking through the menus the way a player would, and logs what happens.
//! Run with `RUST_LOG=debug` to see every sound cue and the final frame.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use galactic_knight::audio::{AudioManager, LogSink};
use galactic_knight::consts::*;
use galactic_knight::sim::{GameEvent, GamePhase, Session, TickInput, new_session, tick};
use galactic_knight::ui::{self, UiAction};
use galactic_knight::{FrameSnapshot, Settings};

/// Host frame time; slower than the sim so the accumulator has work to do
const FRAME_DT: f32 = 1.0 / 30.0;

/// Game instance holding all state
struct Game {
    session: Session,
    settings: Settings,
    audio: AudioManager<LogSink>,
    accumulator: f32,
    input: TickInput,
    wins: u32,
    losses: u32,
}

impl Game {
    fn new(settings: Settings, seed: u64) -> Self {
        let mut session = new_session(seed);
        session.sound_enabled = settings.sound_enabled;

        let mut audio = AudioManager::new(LogSink::default());
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_music_volume(settings.music_volume);

        Self {
            session,
            settings,
            audio,
            accumulator: 0.0,
            input: TickInput {
                idle_mode: true,
                ..Default::default()
            },
            wins: 0,
            losses: 0,
        }
    }

    /// Click the first button that triggers `action`
    fn press(&mut self, action: UiAction) {
        let target = ui::buttons(self.session.phase, self.session.sound_enabled)
            .into_iter()
            .find(|b| b.action == action);
        if let Some(button) = target {
            ui::handle_click(&mut self.session, button.rect.center());
        }
    }

    /// Run simulation ticks for one host frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.session, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        let events = self.session.drain_events();
        self.audio.process(&events, self.session.sound_enabled);
        for event in &events {
            if let GameEvent::PhaseChanged { to, .. } = event {
                match to {
                    GamePhase::Win => self.wins += 1,
                    GamePhase::GameOver => self.losses += 1,
                    _ => {}
                }
            }
        }
    }

    /// Title screen -> play; end screens -> play again
    fn advance_screens(&mut self) {
        match self.session.phase {
            GamePhase::Menu => self.press(UiAction::StartGame),
            GamePhase::GameOver | GamePhase::Win => {
                log::info!(
                    "Round over: {:?} after {:.1}s",
                    self.session.phase,
                    self.session.time_ticks as f32 * SIM_DT
                );
                self.press(UiAction::Retry);
            }
            GamePhase::Playing => {}
        }
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Galactic Knight (headless) starting...");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("settings.json"));
    let settings = Settings::load_from(&path);
    let seed = settings.seed.unwrap_or_else(seed_from_clock);
    log::info!("Seed {}", seed);

    let mut game = Game::new(settings, seed);
    let frames = (game.settings.demo_seconds / FRAME_DT).ceil() as u64;
    for _ in 0..frames {
        game.advance_screens();
        game.update(FRAME_DT);
    }

    let snapshot = FrameSnapshot::capture(&game.session, game.settings.show_hitboxes);
    log::info!(
        "Done: {} wins, {} losses; now {:?} with {} lives and {} enemies left",
        game.wins,
        game.losses,
        snapshot.phase,
        snapshot.lives,
        snapshot.enemies_left
    );
    match serde_json::to_string(&snapshot) {
        Ok(json) => log::debug!("Final frame: {}", json),
        Err(e) => log::warn!("Couldn't serialize final frame: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
