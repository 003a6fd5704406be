//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session deterministically.

use super::motion::Action;
use super::rect::Rect;
use super::state::{GameEvent, GamePhase, Session};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub attack: bool,
    /// Idle/demo mode - AI plays the hero
    pub idle_mode: bool,
}

/// Advance the session by one fixed timestep
///
/// `dt` drives the countdown timers (hurt, cooldowns, dormancy); motion is
/// integrated once per call.
pub fn tick(session: &mut Session, input: &TickInput, dt: f32) {
    if session.phase != GamePhase::Playing {
        return;
    }

    if session.enemies.is_empty() {
        session.set_phase(GamePhase::Win);
        return;
    }

    // A defeated hero is never updated again
    if session.hero.is_defeated() {
        session.set_phase(GamePhase::GameOver);
        return;
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(session, &mut input);
    }
    let input = &input;

    session.time_ticks += 1;

    session.hero.update(
        input,
        &mut session.enemies,
        &session.level.platforms,
        dt,
        &mut session.events,
    );

    // Index walk: removal happens right after an enemy's own update
    let mut i = 0;
    while i < session.enemies.len() {
        let neighbors: Vec<Rect> = session
            .enemies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, e)| e.bounds())
            .collect();

        let hero_pos = session.hero.pos();
        let enemy = &mut session.enemies[i];
        enemy.update(hero_pos, &neighbors, &session.level.platforms, dt);

        if enemy.is_defeated() {
            let id = enemy.id;
            session.enemies.remove(i);
            log::debug!("Enemy {} defeated, {} left", id, session.enemies.len());
            session.events.push(GameEvent::EnemyDefeated { id });
            continue;
        }

        // Touching any enemy that isn't reeling hurts the hero
        if enemy.action != Action::Hurt && session.hero.hurtbox().overlaps(&enemy.hurtbox()) {
            session.hero.take_damage(&mut session.events);
        }

        i += 1;
    }
}

/// Fill in hero input for demo mode: chase the nearest enemy, jump after it
/// when it's overhead, swing when it's in reach
fn autopilot(session: &Session, input: &mut TickInput) {
    let hero = &session.hero;
    let Some(target) = session.nearest_enemy(hero.pos()) else {
        return;
    };

    let dx = target.pos().x - hero.pos().x;
    let dy = target.pos().y - hero.pos().y;

    // Turning is free, so always face the target unless standing on it
    if dx.abs() > 10.0 {
        input.left = dx < 0.0;
        input.right = dx > 0.0;
    }

    let reach = ATTACK_REACH + ATTACK_BOX_SIZE / 2.0;
    if dx.abs() < reach && dy.abs() < ATTACK_BOX_SIZE {
        input.attack = true;
        // Close enough: hold position while swinging
        if dx.abs() < reach * 0.5 {
            input.left = false;
            input.right = false;
        }
    }

    if dy < -ENEMY_ABOVE_MARGIN && hero.body.grounded {
        input.jump = true;
    }
}
