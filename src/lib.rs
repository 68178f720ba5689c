//! Deterministic simulations of three arcade mini-games.
//!
//! `arcadia` models a tile-based platformer, a pong court, and a lunar
//! lander as headless Bevy apps. Each game ships as a plugin
//! ([`platformer::PlatformerPlugin`], [`pong::PongPlugin`],
//! [`lander::LanderPlugin`]) whose systems advance the world by exactly
//! [`FIXED_TIMESTEP`] seconds per `app.update()`.
//!
//! The deterministic boundary is the [`components::InputState`] resource:
//! the caller writes the tick's input before each update, and nothing in
//! the simulation reads a clock. Real time exists only in frontends, which
//! convert wall-clock deltas into ticks through [`time::TickAccumulator`].

pub mod ai;
pub mod components;
pub mod constants;
pub mod lander;
pub mod logging;
pub mod map;
pub mod numeric;
pub mod physics;
pub mod platformer;
pub mod pong;
pub mod time;

pub use constants::*;

/// Commonly used types for building on the simulations.
pub mod prelude {
    pub use crate::components::{
        Acceleration, AiKind, AiState, Ball, Collider, Contact, Enemy, Fuel, InputState,
        JumpPower, Lives, MoveIntent, Player, Side, Speed, Surface, Velocity,
    };
    pub use crate::constants::FIXED_TIMESTEP;
    pub use crate::lander::{LanderOutcome, LanderPlugin, Outcome};
    pub use crate::map::TileMap;
    pub use crate::platformer::{AudioCue, LevelId, PlatformerPlugin, Scene};
    pub use crate::pong::{MatchState, PongConfig, PongPlugin};
    pub use crate::time::TickAccumulator;
}
