//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (enemy list order)
//! - No rendering, audio or platform dependencies

pub mod anim;
pub mod enemy;
pub mod hero;
pub mod level;
pub mod motion;
pub mod rect;
pub mod state;
pub mod tick;

pub use anim::{Actor, AnimKey, Pose};
pub use enemy::Enemy;
pub use hero::Hero;
pub use level::{EnemySpawn, Level};
pub use motion::{Action, Body, Facing, apply_physics};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, RngState, Session, new_session};
pub use tick::{TickInput, tick};
