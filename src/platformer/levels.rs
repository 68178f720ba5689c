//! Baked level data for the platformer.
//!
//! Levels are authored as 14x8 row-major tile arrays with a small
//! palette: 0 is air, 160 is the boundary wall, 2 is walkable floor, and
//! 162 is below-floor filler. The right edge stays open on the walking row
//! so the player can leave the level past [`crate::LEVEL_RIGHT_EDGE`].

use bevy::prelude::*;

use crate::components::AiKind;

/// Grid width shared by every level.
pub const LEVEL_WIDTH: u32 = 14;
/// Grid height shared by every level.
pub const LEVEL_HEIGHT: u32 = 8;
/// Edge length of a level tile in world units.
pub const LEVEL_TILE_SIZE: f32 = 1.0;

/// Where and what kind of enemy a level spawns.
#[derive(Debug, Clone, Copy)]
pub struct EnemySpec {
    /// Spawn position in world units.
    pub position: Vec2,
    /// Behaviour archetype.
    pub kind: AiKind,
}

/// Static description of one level: its tile grid and enemy roster.
#[derive(Debug, Clone, Copy)]
pub struct LevelSpec {
    /// Row-major tile indices, `LEVEL_WIDTH * LEVEL_HEIGHT` entries.
    pub tiles: &'static [u32],
    /// Enemies to spawn when the level loads.
    pub enemies: &'static [EnemySpec],
}

const LEVEL_A_TILES: [u32; 112] = [
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 0, 0, 2, 2, 2, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    160, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, //
    160, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162, //
];

const LEVEL_B_TILES: [u32; 112] = [
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 2, 2, 2, 0, 0, 2, 2, 2, 0, 0, 160, //
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    160, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, //
    160, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162, //
];

const LEVEL_C_TILES: [u32; 112] = [
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 2, 2, 0, 0, 0, 0, 2, 2, 0, 0, 160, //
    160, 0, 0, 0, 0, 0, 2, 2, 0, 0, 0, 0, 0, 160, //
    160, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    160, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, //
    160, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162, 162, //
];

const LEVEL_A_ENEMIES: [EnemySpec; 1] = [EnemySpec {
    position: Vec2::new(8.0, -5.0),
    kind: AiKind::Guard,
}];

const LEVEL_B_ENEMIES: [EnemySpec; 1] = [EnemySpec {
    position: Vec2::new(12.0, -5.0),
    kind: AiKind::Guard,
}];

const LEVEL_C_ENEMIES: [EnemySpec; 2] = [
    EnemySpec {
        position: Vec2::new(6.0, -5.0),
        kind: AiKind::Wander,
    },
    EnemySpec {
        position: Vec2::new(12.0, -5.0),
        kind: AiKind::Guard,
    },
];

/// Level A: one guard, a single raised platform.
pub const LEVEL_A: LevelSpec = LevelSpec {
    tiles: &LEVEL_A_TILES,
    enemies: &LEVEL_A_ENEMIES,
};

/// Level B: two floating platforms, a guard near the exit.
pub const LEVEL_B: LevelSpec = LevelSpec {
    tiles: &LEVEL_B_TILES,
    enemies: &LEVEL_B_ENEMIES,
};

/// Level C: staggered platforms, a wanderer on the floor and a guard.
pub const LEVEL_C: LevelSpec = LevelSpec {
    tiles: &LEVEL_C_TILES,
    enemies: &LEVEL_C_ENEMIES,
};
