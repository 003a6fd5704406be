//! Menu, HUD buttons and pointer handling
//!
//! Layout is fixed in screen space. Clicks are hit-tested against the buttons
//! visible in the current phase and applied to the session.

use glam::Vec2;
use serde::Serialize;

use crate::consts::{HEIGHT, WIDTH};
use crate::sim::{GamePhase, Rect, Session};

pub type Rgb = (u8, u8, u8);

pub const COLOR_BUTTON: Rgb = (50, 50, 200);
pub const COLOR_SOUND_ON: Rgb = (0, 180, 0);
pub const COLOR_SOUND_OFF: Rgb = (180, 0, 0);
pub const COLOR_EXIT: Rgb = (100, 100, 100);

const WHITE: Rgb = (255, 255, 255);
const RED: Rgb = (255, 0, 0);
const YELLOW: Rgb = (255, 255, 0);
const CYAN: Rgb = (0, 255, 255);

pub const TITLE: &str = "Galactic Knight: Monster Hunter";
pub const CONTROLS_HINT: &str = "Arrows: Move/Jump | Space: Attack";

/// Where a text line's `pos` sits relative to the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLine {
    pub text: String,
    pub pos: Vec2,
    pub anchor: TextAnchor,
    pub font_size: f32,
    pub color: Rgb,
}

impl TextLine {
    fn centered(text: impl Into<String>, y: f32, font_size: f32, color: Rgb) -> Self {
        Self {
            text: text.into(),
            pos: Vec2::new(WIDTH / 2.0, y),
            anchor: TextAnchor::Center,
            font_size,
            color,
        }
    }

    fn top_left(text: impl Into<String>, pos: Vec2, font_size: f32, color: Rgb) -> Self {
        Self {
            text: text.into(),
            pos,
            anchor: TextAnchor::TopLeft,
            font_size,
            color,
        }
    }
}

/// Translucent full-screen tint drawn under menu and end-screen text
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Veil {
    pub rect: Rect,
    pub color: Rgb,
    pub alpha: f32,
}

pub fn veil(phase: GamePhase) -> Option<Veil> {
    let (color, alpha) = match phase {
        GamePhase::Menu => ((0, 0, 0), 0.7),
        GamePhase::GameOver => ((50, 0, 0), 0.8),
        GamePhase::Win => ((0, 50, 0), 0.8),
        GamePhase::Playing => return None,
    };
    Some(Veil {
        rect: Rect::new(0.0, 0.0, WIDTH, HEIGHT),
        color,
        alpha,
    })
}

/// Every piece of text on screen in a phase, buttons excluded
pub fn screen_text(session: &Session) -> Vec<TextLine> {
    match session.phase {
        GamePhase::Menu => vec![
            TextLine::centered(TITLE, 120.0, 80.0, CYAN),
            TextLine::centered("CONTROLS:", 220.0, 40.0, YELLOW),
            TextLine::centered(CONTROLS_HINT, 260.0, 30.0, WHITE),
        ],
        GamePhase::Playing => {
            let [lives, enemies] = hud_lines(session);
            vec![
                TextLine::top_left(lives, Vec2::new(20.0, 20.0), 40.0, WHITE),
                TextLine::top_left(enemies, Vec2::new(20.0, 60.0), 40.0, RED),
            ]
        }
        GamePhase::GameOver => vec![TextLine::centered("GAME OVER", 300.0, 80.0, RED)],
        GamePhase::Win => vec![
            TextLine::centered("VICTORY!", 250.0, 100.0, YELLOW),
            TextLine::centered("Dungeon Cleared.", 350.0, 40.0, WHITE),
        ],
    }
}

/// What a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    StartGame,
    ToggleSound,
    Quit,
    BackToMenu,
    Retry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub color: Rgb,
    pub action: UiAction,
}

fn centered(y: f32) -> Rect {
    Rect::new(WIDTH / 2.0 - 150.0, y, 300.0, 60.0)
}

/// Buttons shown in a phase
pub fn buttons(phase: GamePhase, sound_enabled: bool) -> Vec<Button> {
    match phase {
        GamePhase::Menu => vec![
            Button {
                rect: centered(350.0),
                label: "START HUNT",
                color: COLOR_BUTTON,
                action: UiAction::StartGame,
            },
            Button {
                rect: centered(430.0),
                label: if sound_enabled { "SOUND: ON" } else { "SOUND: OFF" },
                color: if sound_enabled { COLOR_SOUND_ON } else { COLOR_SOUND_OFF },
                action: UiAction::ToggleSound,
            },
            Button {
                rect: centered(510.0),
                label: "EXIT",
                color: COLOR_EXIT,
                action: UiAction::Quit,
            },
        ],
        GamePhase::Playing => vec![Button {
            rect: Rect::new(WIDTH - 120.0, 20.0, 100.0, 40.0),
            label: "MENU",
            color: COLOR_SOUND_OFF,
            action: UiAction::BackToMenu,
        }],
        GamePhase::GameOver => vec![Button {
            rect: centered(450.0),
            label: "TRY AGAIN",
            color: COLOR_SOUND_ON,
            action: UiAction::Retry,
        }],
        GamePhase::Win => vec![Button {
            rect: centered(450.0),
            label: "PLAY AGAIN",
            color: COLOR_BUTTON,
            action: UiAction::Retry,
        }],
    }
}

/// Apply a click at `pos`. Returns the triggered action, if any button was hit.
/// `Quit` is left to the host.
pub fn handle_click(session: &mut Session, pos: Vec2) -> Option<UiAction> {
    let action = buttons(session.phase, session.sound_enabled)
        .into_iter()
        .find(|b| b.rect.contains_point(pos))
        .map(|b| b.action)?;

    match action {
        UiAction::StartGame | UiAction::Retry => session.reset(),
        UiAction::ToggleSound => {
            session.toggle_sound();
        }
        UiAction::BackToMenu => session.back_to_menu(),
        UiAction::Quit => log::info!("Quit requested"),
    }
    Some(action)
}

/// HUD lines while playing
pub fn hud_lines(session: &Session) -> [String; 2] {
    [
        format!("LIVES: {}", session.hero.hp.max(0)),
        format!("ENEMIES: {}", session.enemies.len()),
    ]
}
