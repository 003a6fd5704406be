//! Sprite lookup with fallbacks
//!
//! Hosts load images however they like and register the resulting handles
//! here under their animation key. Lookups never fail hard: a missing enemy
//! frame falls back to its first idle frame, a missing hero frame is simply
//! not drawn, and a missing background becomes a flat fill.

use std::collections::HashMap;

use crate::sim::{Actor, AnimKey, Facing, Pose};

/// Fill used when the background image is absent
pub const BACKGROUND_FILL: (u8, u8, u8) = (30, 30, 50);

/// Background to clear each frame with
#[derive(Debug, Clone, PartialEq)]
pub enum Background<H> {
    Image(H),
    Fill((u8, u8, u8)),
}

/// Every key the game can ask for, in a stable order
pub fn all_keys() -> Vec<AnimKey> {
    let mut keys = Vec::new();
    for actor in [Actor::Hero, Actor::Enemy] {
        for facing in [Facing::Left, Facing::Right] {
            let mut poses = vec![
                Pose::Idle(1),
                Pose::Idle(2),
                Pose::Run(1),
                Pose::Run(2),
                Pose::Run(3),
                Pose::Attack(1),
                Pose::Attack(2),
                Pose::Hurt,
            ];
            if actor == Actor::Hero {
                poses.push(Pose::Jump);
            }
            keys.extend(poses.into_iter().map(|pose| AnimKey::new(actor, pose, facing)));
        }
    }
    keys
}

/// Loaded sprite handles keyed by animation key
#[derive(Debug, Clone)]
pub struct AssetTable<H> {
    sprites: HashMap<AnimKey, H>,
    background: Option<H>,
}

impl<H> Default for AssetTable<H> {
    fn default() -> Self {
        Self {
            sprites: HashMap::new(),
            background: None,
        }
    }
}

impl<H> AssetTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every known key through `loader`; keys it can't produce are logged and left out
    pub fn load_with<E: std::fmt::Display>(
        mut loader: impl FnMut(&str) -> Result<H, E>,
    ) -> Self {
        let mut table = Self::new();
        for key in all_keys() {
            let name = key.asset_name();
            match loader(&name) {
                Ok(handle) => table.insert(key, handle),
                Err(e) => log::warn!("Missing sprite {}: {}", name, e),
            }
        }
        match loader("background") {
            Ok(handle) => table.background = Some(handle),
            Err(e) => log::warn!("Missing background: {}", e),
        }
        log::info!("Loaded {} sprites", table.len());
        table
    }

    pub fn insert(&mut self, key: AnimKey, handle: H) {
        self.sprites.insert(key, handle);
    }

    pub fn set_background(&mut self, handle: H) {
        self.background = Some(handle);
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Handle to draw for `key`, if any
    pub fn resolve(&self, key: &AnimKey) -> Option<&H> {
        self.sprites.get(key).or_else(|| match key.actor {
            Actor::Enemy => self.sprites.get(&key.fallback()),
            Actor::Hero => None,
        })
    }

    pub fn background(&self) -> Background<&H> {
        match &self.background {
            Some(handle) => Background::Image(handle),
            None => Background::Fill(BACKGROUND_FILL),
        }
    }
}
