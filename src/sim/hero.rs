//! The player-controlled knight
//!
//! Input-driven state machine on top of the shared [`Body`]. Being hurt or
//! mid-swing locks out input until the relevant timer runs out.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{self, Actor, AnimKey};
use super::enemy::Enemy;
use super::motion::{Action, Body, Facing, advance_anim, apply_physics};
use super::rect::Rect;
use super::state::GameEvent;
use super::tick::TickInput;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub body: Body,
    pub facing: Facing,
    pub action: Action,
    pub anim_timer: f32,
    pub hurt_timer: f32,
    pub hp: i32,
    /// > 0 while the swing is in progress; gates the next attack
    pub attack_cooldown: f32,
    /// > 0 means immune to damage (and flickering)
    pub inv_timer: f32,
    pub speed: f32,
    pub jump_strength: f32,
    /// Sword box tested this tick, if a swing started
    #[serde(default)]
    pub swing: Option<Rect>,
}

impl Hero {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            body: Body::new(spawn, Vec2::new(HERO_WIDTH, HERO_HEIGHT)),
            facing: Facing::Right,
            action: Action::Idle,
            anim_timer: 0.0,
            hurt_timer: 0.0,
            hp: HERO_MAX_HP,
            attack_cooldown: 0.0,
            inv_timer: 0.0,
            speed: HERO_SPEED,
            jump_strength: HERO_JUMP_STRENGTH,
            swing: None,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn hurtbox(&self) -> Rect {
        self.body.hurtbox()
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    pub fn is_invincible(&self) -> bool {
        self.inv_timer > 0.0
    }

    /// Advance one tick
    pub fn update(
        &mut self,
        input: &TickInput,
        enemies: &mut [Enemy],
        platforms: &[Rect],
        dt: f32,
        events: &mut Vec<GameEvent>,
    ) {
        self.swing = None;
        if self.inv_timer > 0.0 {
            self.inv_timer -= dt;
        }

        if self.action == Action::Hurt {
            self.hurt_timer -= dt;
            if self.hurt_timer <= 0.0 {
                // Control returns this very tick
                self.action = Action::Idle;
            } else {
                self.step(platforms);
                return;
            }
        }

        if self.action == Action::Attack {
            self.attack_cooldown -= dt;
            if self.attack_cooldown <= 0.0 {
                self.action = Action::Idle;
            }
            self.body.vel.x = 0.0;
            self.step(platforms);
            return;
        }

        if input.left {
            self.body.vel.x = -self.speed;
            self.facing = Facing::Left;
            self.action = Action::Run;
        } else if input.right {
            self.body.vel.x = self.speed;
            self.facing = Facing::Right;
            self.action = Action::Run;
        } else {
            self.body.vel.x = 0.0;
            self.action = Action::Idle;
        }

        if input.jump && self.body.grounded {
            self.body.vel.y = self.jump_strength;
            self.body.grounded = false;
            events.push(GameEvent::Jump);
        }

        if !self.body.grounded {
            self.action = Action::Jump;
        }

        if input.attack {
            self.attack(enemies, events);
        }

        self.step(platforms);
    }

    fn step(&mut self, platforms: &[Rect]) {
        apply_physics(&mut self.body, platforms);
        advance_anim(&mut self.anim_timer, self.action);
    }

    /// Sword hitbox in front of the hero, at chest height
    pub fn attack_hitbox(&self) -> Rect {
        let center = Vec2::new(
            self.body.pos.x + ATTACK_REACH * self.facing.sign(),
            self.body.pos.y - ATTACK_LIFT,
        );
        Rect::from_center(center, Vec2::splat(ATTACK_BOX_SIZE))
    }

    /// Start a swing and damage everything it touches. Returns the number of
    /// enemies hit (0 when the swing couldn't start).
    pub fn attack(&mut self, enemies: &mut [Enemy], events: &mut Vec<GameEvent>) -> usize {
        if self.attack_cooldown > 0.0 || self.action == Action::Hurt {
            return 0;
        }

        self.action = Action::Attack;
        self.anim_timer = 0.0;
        self.attack_cooldown = HERO_ATTACK_COOLDOWN;

        let sword = self.attack_hitbox();
        self.swing = Some(sword);
        let mut hits = 0;
        for enemy in enemies.iter_mut() {
            if enemy.action != Action::Hurt
                && enemy.hurtbox().overlaps(&sword)
                && enemy.take_damage(self.body.pos.x, events)
            {
                hits += 1;
            }
        }
        hits
    }

    /// Lose a life and get knocked back. Ignored while invincible or swinging.
    /// Returns whether the hit landed.
    pub fn take_damage(&mut self, events: &mut Vec<GameEvent>) -> bool {
        if self.inv_timer > 0.0 || self.action == Action::Attack {
            return false;
        }

        self.hp -= 1;
        self.action = Action::Hurt;
        self.hurt_timer = HERO_HURT_TIME;
        self.inv_timer = HERO_INV_TIME;
        self.body.vel.y = HERO_KNOCKBACK_Y;
        // Knocked backwards, away from where we were looking
        self.body.vel.x = -HERO_KNOCKBACK_X * self.facing.sign();
        events.push(GameEvent::Hit);
        true
    }

    pub fn anim_key(&self) -> AnimKey {
        AnimKey::new(
            Actor::Hero,
            anim::hero_pose(self.action, self.anim_timer, self.attack_cooldown),
            self.facing,
        )
    }

    /// Whether the renderer should skip this frame (invincibility flicker)
    pub fn hidden(&self) -> bool {
        anim::flicker_hidden(self.inv_timer)
    }
}
