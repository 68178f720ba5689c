//! ECS component types shared between the mini-game simulations.
//! Includes motion state, collision descriptors, and entity role tags.
use bevy::prelude::*;
use serde::Serialize;

/// Current velocity in world units per second.
#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut, Serialize)]
pub struct Velocity(pub Vec2);

/// Constant acceleration applied each tick, typically the entity's gravity
/// vector. The platformer player and its enemies carry different values.
#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut, Serialize)]
pub struct Acceleration(pub Vec2);

/// Normalised movement direction chosen by input handling or AI this tick.
#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut, Serialize)]
pub struct MoveIntent(pub Vec2);

/// Horizontal movement speed in world units per second.
#[derive(Component, Debug, Clone, Copy, Serialize)]
pub struct Speed(pub f32);

/// Upward velocity added when a grounded entity jumps.
#[derive(Component, Debug, Clone, Copy, Serialize)]
pub struct JumpPower(pub f32);

/// Remaining lives; the platformer loop switches to the lose scene at zero.
#[derive(Component, Debug, Clone, Copy, Serialize)]
pub struct Lives(pub u8);

/// Axis-aligned bounding box extents used for collision testing.
#[derive(Component, Debug, Clone, Copy, Serialize)]
pub struct Collider {
    /// Full width of the box in world units.
    pub width: f32,
    /// Full height of the box in world units.
    pub height: f32,
}

impl Collider {
    /// Creates a collider from full extents.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Per-tick collision flags tagged from the sign of the resolved penetration.
///
/// Cleared at the start of each tick before resolution runs, so a flag is
/// only set while the entity is actually pressed against something.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Hit something above.
    pub top: bool,
    /// Standing on something.
    pub bottom: bool,
    /// Pressed against a wall on the left.
    pub left: bool,
    /// Pressed against a wall on the right.
    pub right: bool,
}

impl Contact {
    /// Resets all flags ahead of a new resolution pass.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Marker for the player-controlled entity.
#[derive(Component, Debug, Default, Serialize)]
pub struct Player;

/// Marker for platformer enemies.
#[derive(Component, Debug, Default, Serialize)]
pub struct Enemy;

/// Behaviour archetype for enemies.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AiKind {
    /// Holds position until the player comes near, then pursues.
    Guard,
    /// Paces back and forth, turning at walls.
    Wander,
}

/// Current state of the enemy finite-state machine.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AiState {
    /// Not moving.
    #[default]
    Idle,
    /// Moving under AI control.
    Walking,
    /// Engaging the player.
    Attacking,
}

/// What a lander touches when it comes down.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Surface {
    /// Safe to land on.
    Platform,
    /// Instantly fatal.
    Lava,
}

/// Remaining thruster fuel; each control tick burns one unit.
#[derive(Component, Debug, Clone, Copy, Serialize)]
pub struct Fuel(pub u32);

/// Court side a paddle defends.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    /// The left paddle, player one.
    Left,
    /// The right paddle, player two or the auto paddle.
    Right,
}

impl Side {
    /// The opposing court side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Marker for the pong ball.
#[derive(Component, Debug, Default, Serialize)]
pub struct Ball;

/// Caller-written input snapshot for the current tick.
///
/// This is the deterministic boundary of the simulation: the binary's
/// real-time loop (or a test) fills it in before each `app.update()`.
#[derive(Resource, Debug, Clone, Copy, Default, Serialize)]
pub struct InputState {
    /// Move left (platformer, lander).
    pub left: bool,
    /// Move right (platformer, lander).
    pub right: bool,
    /// Thrust upward (lander).
    pub up: bool,
    /// Jump (platformer); only honoured while grounded.
    pub jump: bool,
    /// Begin the game from the start scene (platformer).
    pub start: bool,
    /// Left paddle axis in `-1.0..=1.0` (pong).
    pub p1_axis: f32,
    /// Right paddle axis in `-1.0..=1.0` (pong, two-player mode).
    pub p2_axis: f32,
}
