//! Session state and core simulation types
//!
//! Everything that changes during play lives in [`Session`]. Nothing here is
//! global; the host owns the session and hands it to `tick` each frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::hero::Hero;
use super::level::Level;
use crate::consts::*;

/// Session-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen with start/sound/exit buttons
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Hero ran out of lives
    GameOver,
    /// Every enemy defeated
    Win,
}

/// Things that happened during a tick, for audio and effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Hero left the ground on purpose
    Jump,
    /// Someone took damage
    Hit,
    /// An enemy was removed from play
    EnemyDefeated { id: u32 },
    /// Session phase changed
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// RNG for the current stream; every reset bumps the stream
    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed ^ self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub level: Level,
    pub hero: Hero,
    /// Live enemies (removed the tick their hp reaches 0)
    pub enemies: Vec<Enemy>,
    pub phase: GamePhase,
    pub sound_enabled: bool,
    pub rng_state: RngState,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    /// Pending events, drained by the presentation layer
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

/// Fresh session on the title screen
pub fn new_session(seed: u64) -> Session {
    Session::with_level(seed, Level::dungeon())
}

impl Session {
    pub fn with_level(seed: u64, level: Level) -> Self {
        let hero = Hero::new(level.hero_spawn);
        let mut session = Self {
            level,
            hero,
            enemies: Vec::new(),
            phase: GamePhase::Menu,
            sound_enabled: true,
            rng_state: RngState::new(seed),
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };
        session.spawn_wave();
        session
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace the hero and the enemy batch with fresh ones
    fn spawn_wave(&mut self) {
        self.hero = Hero::new(self.level.hero_spawn);
        self.enemies.clear();

        let mut rng = self.rng_state.to_rng();
        let spawns = self.level.enemy_spawns.clone();
        for spawn in spawns {
            let speed = rng.random_range(ENEMY_SPEED_MIN..ENEMY_SPEED_MAX);
            let id = self.next_entity_id();
            self.enemies.push(Enemy::new(id, spawn.pos, speed, spawn.delay));
        }
    }

    /// Start a new run (from the menu, or retry after game over/win)
    pub fn reset(&mut self) {
        self.rng_state.stream += 1;
        self.spawn_wave();
        self.time_ticks = 0;
        log::info!(
            "Run {} started with {} enemies",
            self.rng_state.stream,
            self.enemies.len()
        );
        self.set_phase(GamePhase::Playing);
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase == phase {
            return;
        }
        log::info!("Phase {:?} -> {:?}", self.phase, phase);
        self.events.push(GameEvent::PhaseChanged {
            from: self.phase,
            to: phase,
        });
        self.phase = phase;
    }

    /// Back to the title screen; the run is abandoned
    pub fn back_to_menu(&mut self) {
        self.set_phase(GamePhase::Menu);
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        log::info!("Sound {}", if self.sound_enabled { "on" } else { "off" });
        self.sound_enabled
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Enemy closest to `from`, if any are left
    pub fn nearest_enemy(&self, from: Vec2) -> Option<&Enemy> {
        self.enemies.iter().min_by(|a, b| {
            a.pos()
                .distance_squared(from)
                .partial_cmp(&b.pos().distance_squared(from))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_on_menu() {
        let session = new_session(7);
        assert_eq!(session.phase, GamePhase::Menu);
        assert_eq!(session.enemies.len(), 5);
        assert_eq!(session.hero.hp, HERO_MAX_HP);
    }

    #[test]
    fn test_enemy_speeds_in_range_and_seeded() {
        let a = new_session(42);
        let b = new_session(42);
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert!(ea.speed >= ENEMY_SPEED_MIN && ea.speed < ENEMY_SPEED_MAX);
            assert_eq!(ea.speed, eb.speed);
        }
    }

    #[test]
    fn test_reset_rebuilds_run() {
        let mut session = new_session(1);
        session.reset();
        session.hero.hp = 1;
        session.enemies.truncate(2);
        session.time_ticks = 99;

        session.reset();
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.hero.hp, HERO_MAX_HP);
        assert_eq!(session.enemies.len(), 5);
        assert_eq!(session.time_ticks, 0);
        assert_eq!(session.rng_state.stream, 2);
    }

    #[test]
    fn test_ids_stay_unique_across_resets() {
        let mut session = new_session(3);
        let first: Vec<u32> = session.enemies.iter().map(|e| e.id).collect();
        session.reset();
        assert!(session.enemies.iter().all(|e| !first.contains(&e.id)));
    }

    #[test]
    fn test_phase_changes_are_reported() {
        let mut session = new_session(3);
        session.reset();
        session.back_to_menu();
        session.back_to_menu();
        let events = session.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::PhaseChanged {
                    from: GamePhase::Menu,
                    to: GamePhase::Playing
                },
                GameEvent::PhaseChanged {
                    from: GamePhase::Playing,
                    to: GamePhase::Menu
                },
            ]
        );
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_session_serializes() {
        let session = new_session(5);
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back.enemies.len(), session.enemies.len());
        assert_eq!(back.phase, session.phase);
    }
}
