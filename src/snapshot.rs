//! Per-frame view of a session for the presentation layer
//!
//! Captures what a renderer needs to draw one frame without holding a borrow
//! on the session: sprite keys and placement, HUD numbers, buttons and the
//! optional debug overlay.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{AnimKey, GamePhase, Rect, Session};
use crate::ui::{self, Button, TextLine, Veil};

/// One character sprite
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteView {
    pub key: AnimKey,
    /// Bottom-center anchor
    pub anchor: Vec2,
    /// Where the image is blitted
    pub bounds: Rect,
    pub hurtbox: Rect,
    /// Skipped this frame (invincibility flicker)
    pub hidden: bool,
}

/// Hitbox overlay, only filled in when enabled in settings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebugOverlay {
    pub platforms: Vec<Rect>,
    pub hurtboxes: Vec<Rect>,
    pub attack: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub sound_enabled: bool,
    pub lives: i32,
    pub enemies_left: usize,
    /// Characters in draw order: hero first, then enemies. Empty outside play.
    pub sprites: Vec<SpriteView>,
    #[serde(skip)]
    pub buttons: Vec<Button>,
    /// Title, HUD and end-screen text
    pub text: Vec<TextLine>,
    pub veil: Option<Veil>,
    pub debug: Option<DebugOverlay>,
}

impl FrameSnapshot {
    pub fn capture(session: &Session, show_hitboxes: bool) -> Self {
        let sprites = if session.phase == GamePhase::Playing {
            let hero = &session.hero;
            let mut sprites = Vec::with_capacity(session.enemies.len() + 1);
            sprites.push(SpriteView {
                key: hero.anim_key(),
                anchor: hero.pos(),
                bounds: hero.body.bounds(),
                hurtbox: hero.hurtbox(),
                hidden: hero.hidden(),
            });
            sprites.extend(session.enemies.iter().map(|e| SpriteView {
                key: e.anim_key(),
                anchor: e.pos(),
                bounds: e.bounds(),
                hurtbox: e.hurtbox(),
                hidden: false,
            }));
            sprites
        } else {
            Vec::new()
        };

        let debug = (show_hitboxes && session.phase == GamePhase::Playing).then(|| {
            DebugOverlay {
                platforms: session.level.platforms.clone(),
                hurtboxes: sprites.iter().map(|s| s.hurtbox).collect(),
                attack: session.hero.swing,
            }
        });

        Self {
            phase: session.phase,
            sound_enabled: session.sound_enabled,
            lives: session.hero.hp.max(0),
            enemies_left: session.enemies.len(),
            sprites,
            buttons: ui::buttons(session.phase, session.sound_enabled),
            text: ui::screen_text(session),
            veil: ui::veil(session.phase),
            debug,
        }
    }

    /// Sprites the renderer should actually draw this frame
    pub fn visible_sprites(&self) -> impl Iterator<Item = &SpriteView> {
        self.sprites.iter().filter(|s| !s.hidden)
    }
}
