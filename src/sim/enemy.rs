//! Monster AI
//!
//! Each enemy chases the hero, jumps when the hero is on a higher platform,
//! and stops to attack at close range. Snipers start dormant (`start_delay`)
//! and just watch the hero until the delay runs out or they get hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{self, Actor, AnimKey};
use super::motion::{Action, Body, Facing, advance_anim, apply_physics};
use super::rect::Rect;
use super::state::GameEvent;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub body: Body,
    pub facing: Facing,
    pub action: Action,
    pub anim_timer: f32,
    pub hurt_timer: f32,
    pub hp: i32,
    pub speed: f32,
    pub jump_strength: f32,
    /// Seconds until the next platform jump is allowed
    pub jump_cooldown: f32,
    /// Seconds of dormancy left
    pub start_delay: f32,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, speed: f32, start_delay: f32) -> Self {
        Self {
            id,
            body: Body::new(pos, Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT)),
            facing: Facing::Left,
            action: Action::Idle,
            anim_timer: 0.0,
            hurt_timer: 0.0,
            hp: ENEMY_MAX_HP,
            speed,
            jump_strength: ENEMY_JUMP_STRENGTH,
            jump_cooldown: 0.0,
            start_delay,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn bounds(&self) -> Rect {
        self.body.bounds()
    }

    pub fn hurtbox(&self) -> Rect {
        self.body.hurtbox()
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    pub fn is_dormant(&self) -> bool {
        self.start_delay > 0.0
    }

    /// Advance one tick. `neighbors` are the sprite bounds of every other
    /// live enemy.
    pub fn update(&mut self, hero_pos: Vec2, neighbors: &[Rect], platforms: &[Rect], dt: f32) {
        if self.action == Action::Hurt {
            self.hurt_timer -= dt;
            if self.hurt_timer <= 0.0 {
                self.action = Action::Idle;
                self.body.vel.x = 0.0;
            }
            self.step(platforms);
            return;
        }

        if self.start_delay > 0.0 {
            self.start_delay -= dt;
            self.body.vel.x = 0.0;
            self.action = Action::Idle;
            self.facing = Facing::toward(self.body.pos.x, hero_pos.x);
            self.step(platforms);
            return;
        }

        self.think(hero_pos, dt);

        for other in neighbors {
            if self.bounds().overlaps(other) {
                // Rough push apart; may take several ticks or jitter
                if self.body.pos.x < other.center().x {
                    self.body.pos.x -= ENEMY_SEPARATION_STEP;
                } else {
                    self.body.pos.x += ENEMY_SEPARATION_STEP;
                }
            }
        }

        self.step(platforms);
    }

    /// Pursuit, attack and platform-jump decisions
    fn think(&mut self, hero_pos: Vec2, dt: f32) {
        let pos = self.body.pos;
        let dist_x = (pos.x - hero_pos.x).abs();
        let dist_y = (pos.y - hero_pos.y).abs();
        let hero_is_above = hero_pos.y < pos.y - ENEMY_ABOVE_MARGIN;

        // Keep running when the hero is overhead so we find somewhere to jump
        if dist_x > ENEMY_ENGAGE_X || hero_is_above {
            self.facing = Facing::toward(pos.x, hero_pos.x);
            self.body.vel.x = self.speed * self.facing.sign();
            self.action = Action::Run;
        } else if dist_y < ENEMY_ENGAGE_Y {
            self.body.vel.x = 0.0;
            self.action = Action::Attack;
        } else {
            self.action = Action::Idle;
        }

        if hero_is_above && self.body.grounded && self.jump_cooldown <= 0.0 {
            self.body.vel.y = self.jump_strength;
            self.body.grounded = false;
            self.jump_cooldown = ENEMY_JUMP_COOLDOWN;
        }

        if self.jump_cooldown > 0.0 {
            self.jump_cooldown -= dt;
        }
    }

    fn step(&mut self, platforms: &[Rect]) {
        apply_physics(&mut self.body, platforms);
        advance_anim(&mut self.anim_timer, self.action);
    }

    /// Take a sword hit from a hero standing at `hero_x`. Wakes a dormant
    /// enemy. Ignored while already reeling from a previous hit.
    pub fn take_damage(&mut self, hero_x: f32, events: &mut Vec<GameEvent>) -> bool {
        if self.action == Action::Hurt {
            return false;
        }

        self.hp -= 1;
        self.action = Action::Hurt;
        self.hurt_timer = ENEMY_HURT_TIME;
        self.start_delay = 0.0;
        self.body.vel.y = ENEMY_KNOCKBACK_Y;
        self.body.vel.x = if hero_x < self.body.pos.x {
            ENEMY_KNOCKBACK_X
        } else {
            -ENEMY_KNOCKBACK_X
        };
        events.push(GameEvent::Hit);
        true
    }

    pub fn anim_key(&self) -> AnimKey {
        AnimKey::new(
            Actor::Enemy,
            anim::enemy_pose(self.action, self.anim_timer),
            self.facing,
        )
    }
}
