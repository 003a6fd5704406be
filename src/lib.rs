//! Galactic Knight - a single-screen platform brawler
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, hero/enemy state machines)
//! - `snapshot`: Per-frame view of the simulation for a renderer
//! - `assets`: Animation key to asset handle lookup with fallbacks
//! - `audio`: Fire-and-forget sound cues gated by the sound flag
//! - `ui`: Menu buttons and pointer handling
//! - `settings`: Player preferences

pub mod assets;
pub mod audio;
pub mod settings;
pub mod sim;
pub mod snapshot;
pub mod ui;

pub use settings::Settings;
pub use snapshot::FrameSnapshot;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, motion constants are per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen/world dimensions (no camera, world == screen)
    pub const WIDTH: f32 = 1408.0;
    pub const HEIGHT: f32 = 768.0;

    /// Downward acceleration, units/tick²
    pub const GRAVITY: f32 = 1.0;
    /// Slack above a platform top that still counts as landing on it
    pub const LANDING_TOLERANCE: f32 = 20.0;

    /// Total hurtbox inset from the sprite bounds
    pub const HURTBOX_INSET_X: f32 = 60.0;
    pub const HURTBOX_INSET_Y: f32 = 20.0;

    /// Hero tuning
    pub const HERO_WIDTH: f32 = 120.0;
    pub const HERO_HEIGHT: f32 = 120.0;
    pub const HERO_SPEED: f32 = 7.0;
    pub const HERO_JUMP_STRENGTH: f32 = -22.0;
    pub const HERO_MAX_HP: i32 = 6;
    pub const HERO_SPAWN: (f32, f32) = (50.0, 660.0);
    /// Seconds the attack pose locks movement
    pub const HERO_ATTACK_COOLDOWN: f32 = 0.4;
    pub const HERO_HURT_TIME: f32 = 0.5;
    /// Invincibility after being hit
    pub const HERO_INV_TIME: f32 = 2.0;
    pub const HERO_KNOCKBACK_X: f32 = 10.0;
    pub const HERO_KNOCKBACK_Y: f32 = -12.0;

    /// Sword hitbox, relative to the hero anchor
    pub const ATTACK_BOX_SIZE: f32 = 80.0;
    pub const ATTACK_REACH: f32 = 60.0;
    pub const ATTACK_LIFT: f32 = 40.0;

    /// Enemy tuning
    pub const ENEMY_WIDTH: f32 = 110.0;
    pub const ENEMY_HEIGHT: f32 = 110.0;
    pub const ENEMY_SPEED_MIN: f32 = 2.5;
    pub const ENEMY_SPEED_MAX: f32 = 3.8;
    pub const ENEMY_JUMP_STRENGTH: f32 = -21.0;
    pub const ENEMY_MAX_HP: i32 = 3;
    pub const ENEMY_HURT_TIME: f32 = 0.4;
    pub const ENEMY_JUMP_COOLDOWN: f32 = 1.2;
    pub const ENEMY_KNOCKBACK_X: f32 = 8.0;
    pub const ENEMY_KNOCKBACK_Y: f32 = -8.0;
    /// Horizontal distance under which an enemy stops chasing
    pub const ENEMY_ENGAGE_X: f32 = 50.0;
    /// Vertical distance under which a close enemy attacks
    pub const ENEMY_ENGAGE_Y: f32 = 50.0;
    /// How far above an enemy the hero must be before it tries to jump up
    pub const ENEMY_ABOVE_MARGIN: f32 = 50.0;
    /// Per-tick push applied to overlapping enemies
    pub const ENEMY_SEPARATION_STEP: f32 = 2.0;

    /// Animation accumulator rates (per tick)
    pub const ANIM_RATE_IDLE: f32 = 0.05;
    pub const ANIM_RATE_ACTIVE: f32 = 0.2;
}
