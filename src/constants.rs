//! Simulation constants shared across the mini-games.
//!
//! Collected in one place so the systems and the tests agree on them.

/// Length of one simulation tick in seconds.
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

// Platformer.
/// Downward acceleration applied to the player.
pub const PLAYER_GRAVITY: f32 = -4.81;
/// Downward acceleration applied to enemies.
pub const ENEMY_GRAVITY: f32 = -9.81;
/// Player walking speed.
pub const PLAYER_SPEED: f32 = 2.5;
/// Enemy walking speed.
pub const ENEMY_SPEED: f32 = 1.0;
/// Jump impulse used inside the levels.
pub const LEVEL_JUMP_POWER: f32 = 4.0;
/// Crossing this x-coordinate completes the current level.
pub const LEVEL_RIGHT_EDGE: f32 = 14.0;
/// Distance at which a guard enemy notices the player.
pub const GUARD_ACTIVATION_RADIUS: f32 = 3.0;
/// Lives the player starts with.
pub const STARTING_LIVES: u8 = 3;
/// Where the player reappears after an enemy hit.
pub const RESPAWN_X: f32 = 2.0;
/// See [`RESPAWN_X`].
pub const RESPAWN_Y: f32 = 4.0;
/// Where the player enters each level.
pub const LEVEL_ENTRY_X: f32 = 1.0;
/// See [`LEVEL_ENTRY_X`].
pub const LEVEL_ENTRY_Y: f32 = 0.0;

// Pong.
/// Paddle travel speed.
pub const PADDLE_SPEED: f32 = 3.0;
/// Ball travel speed.
pub const BALL_SPEED: f32 = 3.0;
/// Paddles stop moving beyond this distance from the centre line.
pub const PADDLE_LIMIT: f32 = 2.75;
/// The ball bounces off the walls at this distance from the centre line.
pub const COURT_HALF_HEIGHT: f32 = 3.5;
/// Past this x-distance the ball is out and the match ends.
pub const COURT_HALF_WIDTH: f32 = 4.75;
/// The auto paddle reverses inside this band to stay in play.
pub const AUTO_PADDLE_TURN: f32 = 2.6;

// Lander.
/// Weak gravity pulling the lander down.
pub const LANDER_GRAVITY: f32 = -9.81 * 0.01;
/// Upward acceleration while the thruster fires.
pub const LANDER_THRUST: f32 = 9.81 * 0.01;
/// Lateral drift speed.
pub const LANDER_SPEED: f32 = 1.0;
/// Fuel units in a full tank.
pub const LANDER_FUEL: u32 = 800;
