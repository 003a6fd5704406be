//! Static level layout: platforms and the enemy spawn table

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Where an enemy appears and how long it waits before acting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub pos: Vec2,
    /// Seconds of dormancy (0 = active immediately)
    pub delay: f32,
}

/// The playfield. Platforms are read-only once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Rect>,
    pub hero_spawn: Vec2,
    pub enemy_spawns: Vec<EnemySpawn>,
}

impl Default for Level {
    fn default() -> Self {
        Self::dungeon()
    }
}

impl Level {
    /// The standard arena: ground floor, ledges, and two sniper perches up top
    pub fn dungeon() -> Self {
        let platforms = vec![
            Rect::new(0.0, 660.0, 1408.0, 48.0),  // Main ground
            Rect::new(5.0, 390.0, 350.0, 30.0),   // Left ledge
            Rect::new(1070.0, 390.0, 350.0, 30.0), // Right ledge
            Rect::new(495.0, 295.0, 415.0, 30.0), // Center isle
            Rect::new(210.0, 120.0, 280.0, 30.0), // Top left
            Rect::new(920.0, 115.0, 270.0, 30.0), // Top right
            Rect::new(945.0, 520.0, 120.0, 30.0), // Ruins right
            Rect::new(1300.0, 230.0, 150.0, 30.0), // Ruins left
        ];

        let spawn = |x: f32, y: f32, delay: f32| EnemySpawn {
            pos: Vec2::new(x, y),
            delay,
        };
        let enemy_spawns = vec![
            // Ground patrol
            spawn(600.0, 600.0, 0.0),
            spawn(1200.0, 600.0, 0.0),
            spawn(700.0, 250.0, 0.0),
            // Snipers on the top platforms
            spawn(300.0, 80.0, 5.0),
            spawn(1000.0, 80.0, 5.0),
        ];

        Self {
            platforms,
            hero_spawn: Vec2::new(crate::consts::HERO_SPAWN.0, crate::consts::HERO_SPAWN.1),
            enemy_spawns,
        }
    }

    /// A level with only the ground floor and no enemies (handy for tests)
    pub fn flat() -> Self {
        Self {
            platforms: vec![Rect::new(0.0, 660.0, crate::consts::WIDTH, 48.0)],
            hero_spawn: Vec2::new(crate::consts::HERO_SPAWN.0, crate::consts::HERO_SPAWN.1),
            enemy_spawns: Vec::new(),
        }
    }

    /// Top surface of the ground floor
    pub fn ground_top(&self) -> f32 {
        self.platforms
            .iter()
            .map(|p| p.top())
            .fold(f32::NEG_INFINITY, f32::max)
    }
}
