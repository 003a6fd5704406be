//! Animation keys
//!
//! The simulation never touches image names. Each character reports an
//! [`AnimKey`] derived from its action, facing and timers; the presentation
//! layer maps keys to whatever handles it loaded (see `crate::assets`).

use serde::{Deserialize, Serialize};

use super::motion::{Action, Facing};

/// Whose sprite sheet a key refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    Hero,
    Enemy,
}

/// Pose plus 1-based frame index within that pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pose {
    Idle(u8),
    Run(u8),
    Jump,
    Attack(u8),
    Hurt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimKey {
    pub actor: Actor,
    pub pose: Pose,
    pub facing: Facing,
}

impl AnimKey {
    pub fn new(actor: Actor, pose: Pose, facing: Facing) -> Self {
        Self {
            actor,
            pose,
            facing,
        }
    }

    /// Asset name in the sprite folder, e.g. `hero_run2_r`
    pub fn asset_name(&self) -> String {
        let actor = match self.actor {
            Actor::Hero => "hero",
            Actor::Enemy => "enemy",
        };
        let dir = match self.facing {
            Facing::Left => "l",
            Facing::Right => "r",
        };
        match self.pose {
            Pose::Idle(f) => format!("{actor}_idle{f}_{dir}"),
            Pose::Run(f) => format!("{actor}_run{f}_{dir}"),
            Pose::Jump => format!("{actor}_jump_{dir}"),
            Pose::Attack(f) => format!("{actor}_attack{f}_{dir}"),
            Pose::Hurt => format!("{actor}_hurt_{dir}"),
        }
    }

    /// The key the renderer falls back to when this one has no asset
    pub fn fallback(&self) -> AnimKey {
        AnimKey::new(self.actor, Pose::Idle(1), self.facing)
    }
}

/// Two-frame breathing/bobbing cycle
fn two_frame(anim_timer: f32) -> u8 {
    if (anim_timer as i64).rem_euclid(2) == 0 { 1 } else { 2 }
}

/// Three-frame run cycle
fn three_frame(anim_timer: f32) -> u8 {
    (anim_timer as i64).rem_euclid(3) as u8 + 1
}

/// Hero pose. The swing has a wind-up frame for the first half of the cooldown.
pub fn hero_pose(action: Action, anim_timer: f32, attack_cooldown: f32) -> Pose {
    match action {
        Action::Idle => Pose::Idle(two_frame(anim_timer)),
        Action::Run => Pose::Run(three_frame(anim_timer)),
        Action::Jump => Pose::Jump,
        Action::Attack => Pose::Attack(if attack_cooldown > 0.2 { 1 } else { 2 }),
        Action::Hurt => Pose::Hurt,
    }
}

/// Enemy pose. Enemies have no jump art and keep their idle frame mid-air.
pub fn enemy_pose(action: Action, anim_timer: f32) -> Pose {
    match action {
        Action::Idle => Pose::Idle(two_frame(anim_timer)),
        Action::Run => Pose::Run(three_frame(anim_timer)),
        Action::Jump => Pose::Idle(1),
        Action::Attack => Pose::Attack(two_frame(anim_timer)),
        Action::Hurt => Pose::Hurt,
    }
}

/// Invincibility flicker: hidden on alternating tenths of a second
pub fn flicker_hidden(inv_timer: f32) -> bool {
    inv_timer > 0.0 && ((inv_timer * 10.0) as i64) % 2 == 0
}
