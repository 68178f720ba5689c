//! Platformer simulation: levels, lives, and scene transitions.
//!
//! [`PlatformerPlugin`] wires the per-tick pipeline: read input intent,
//! run enemy AI, integrate and resolve physics, apply enemy contact
//! damage, then evaluate scene transitions. One `app.update()` advances
//! the simulation by exactly [`crate::FIXED_TIMESTEP`] seconds.
//!
//! Scenes are hand-written state: a [`Scene`] resource names the current
//! screen, and switching scenes despawns the outgoing level's entities and
//! spawns the next level's map and roster. The player entity persists
//! across levels, carrying its remaining lives.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, info};

use crate::ai::enemy_ai_system;
use crate::components::{
    Acceleration, AiState, Collider, Contact, Enemy, InputState, JumpPower, Lives, MoveIntent,
    Player, Speed, Velocity,
};
use crate::map::TileMap;
use crate::physics::{aabb_overlap, drive_horizontal, integrate, step_against_map, try_jump};
use crate::{
    ENEMY_GRAVITY, ENEMY_SPEED, FIXED_TIMESTEP, LEVEL_ENTRY_X, LEVEL_ENTRY_Y, LEVEL_JUMP_POWER,
    LEVEL_RIGHT_EDGE, PLAYER_GRAVITY, PLAYER_SPEED, RESPAWN_X, RESPAWN_Y, STARTING_LIVES,
};

pub mod levels;
use levels::{LevelSpec, LEVEL_A, LEVEL_B, LEVEL_C, LEVEL_HEIGHT, LEVEL_TILE_SIZE, LEVEL_WIDTH};

/// Identifies one of the three platformer levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelId {
    /// First level.
    A,
    /// Second level.
    B,
    /// Final level.
    C,
}

impl LevelId {
    /// The level after this one, or `None` past the final level.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::A => Some(Self::B),
            Self::B => Some(Self::C),
            Self::C => None,
        }
    }

    /// Static data for this level.
    #[must_use]
    pub const fn spec(self) -> LevelSpec {
        match self {
            Self::A => LEVEL_A,
            Self::B => LEVEL_B,
            Self::C => LEVEL_C,
        }
    }
}

/// Which screen the game currently shows.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    /// Waiting for the start input.
    #[default]
    Start,
    /// Playing a level.
    Level(LevelId),
    /// All three levels cleared.
    Win,
    /// Out of lives.
    Lose,
}

/// Sound effect moments a frontend would map to samples.
///
/// The simulation has no mixer; cues are observer events that the plugin
/// logs, and a frontend can observe to play audio.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// The player jumped.
    Jump,
    /// The player was hit by an enemy.
    Hit,
    /// A level was cleared.
    LevelClear,
}

/// Marker for entities owned by the current level, despawned on switch.
#[derive(Component, Debug, Default)]
pub struct LevelEntity;

/// Bevy plugin assembling the platformer simulation.
#[derive(Debug, Default)]
pub struct PlatformerPlugin;

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>();
        app.init_resource::<Scene>();
        app.insert_resource(TileMap::empty(LEVEL_WIDTH, LEVEL_HEIGHT, LEVEL_TILE_SIZE));
        app.add_observer(log_audio_cue);
        app.add_systems(Startup, spawn_player_system);
        app.add_systems(
            Update,
            (
                player_intent_system,
                enemy_ai_system,
                physics_system,
                enemy_contact_system,
                scene_transition_system,
            )
                .chain(),
        );
    }
}

fn log_audio_cue(event: On<AudioCue>) {
    debug!("audio cue: {:?}", event.event());
}

fn spawn_player_system(mut commands: Commands) {
    commands.spawn((
        Name::new("Player"),
        Player,
        Transform::from_xyz(LEVEL_ENTRY_X, LEVEL_ENTRY_Y, 0.0),
        Velocity::default(),
        Acceleration(Vec2::new(0.0, PLAYER_GRAVITY)),
        MoveIntent::default(),
        Speed(PLAYER_SPEED),
        JumpPower(LEVEL_JUMP_POWER),
        Lives(STARTING_LIVES),
        Collider::new(1.0, 0.8),
        Contact::default(),
    ));
    info!("player spawned with {STARTING_LIVES} lives");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn player_intent_system(
    input: Res<InputState>,
    scene: Res<Scene>,
    mut commands: Commands,
    mut players: Query<(&mut MoveIntent, &mut Velocity, &Contact, &JumpPower), With<Player>>,
) {
    if !matches!(*scene, Scene::Level(_)) {
        return;
    }
    for (mut intent, mut velocity, contact, jump_power) in &mut players {
        intent.0 = Vec2::ZERO;
        if input.left {
            intent.x = -1.0;
        } else if input.right {
            intent.x = 1.0;
        }
        // Jumps test last tick's ground contact; this tick's resolution
        // has not run yet.
        if input.jump && try_jump(&mut velocity, *contact, jump_power.0) {
            commands.trigger(AudioCue::Jump);
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn physics_system(
    map: Res<TileMap>,
    scene: Res<Scene>,
    mut bodies: Query<(
        &mut Transform,
        &mut Velocity,
        &Acceleration,
        &MoveIntent,
        &Speed,
        &Collider,
        &mut Contact,
    )>,
) {
    if !matches!(*scene, Scene::Level(_)) {
        return;
    }
    for (mut transform, mut velocity, acceleration, intent, speed, collider, mut contact) in
        &mut bodies
    {
        drive_horizontal(&mut velocity, intent.0, speed.0);
        integrate(&mut velocity, acceleration.0, FIXED_TIMESTEP);
        let mut position = transform.translation.truncate();
        *contact = step_against_map(
            &mut position,
            &mut velocity,
            *collider,
            &map,
            FIXED_TIMESTEP,
        );
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn enemy_contact_system(
    scene: Res<Scene>,
    mut commands: Commands,
    mut players: Query<(&mut Transform, &mut Velocity, &mut Lives, &Collider), With<Player>>,
    enemies: Query<(&Transform, &Collider), (With<Enemy>, Without<Player>)>,
) {
    if !matches!(*scene, Scene::Level(_)) {
        return;
    }
    for (mut transform, mut velocity, mut lives, collider) in &mut players {
        let player_pos = transform.translation.truncate();
        let hit = enemies.iter().any(|(enemy_transform, enemy_collider)| {
            aabb_overlap(
                player_pos,
                *collider,
                enemy_transform.translation.truncate(),
                *enemy_collider,
            )
        });
        if hit {
            lives.0 = lives.0.saturating_sub(1);
            info!("player hit, lives left: {}", lives.0);
            transform.translation.x = RESPAWN_X;
            transform.translation.y = RESPAWN_Y;
            velocity.0 = Vec2::ZERO;
            commands.trigger(AudioCue::Hit);
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn scene_transition_system(
    input: Res<InputState>,
    mut scene: ResMut<Scene>,
    mut commands: Commands,
    mut players: Query<
        (&mut Transform, &mut Velocity, &mut JumpPower, &Lives),
        With<Player>,
    >,
    level_entities: Query<Entity, With<LevelEntity>>,
) {
    match *scene {
        Scene::Start => {
            if input.start {
                *scene = Scene::Level(LevelId::A);
                load_level(&mut commands, LevelId::A, &level_entities);
                reset_player(&mut players);
                info!("game started");
            }
        }
        Scene::Level(level) => {
            let Some((transform, lives)) = players
                .iter()
                .map(|(t, _, _, l)| (*t, *l))
                .next()
            else {
                return;
            };
            if lives.0 == 0 {
                *scene = Scene::Lose;
                info!("out of lives");
                return;
            }
            if transform.translation.x > LEVEL_RIGHT_EDGE {
                commands.trigger(AudioCue::LevelClear);
                match level.next() {
                    Some(next_level) => {
                        *scene = Scene::Level(next_level);
                        load_level(&mut commands, next_level, &level_entities);
                        reset_player(&mut players);
                        info!("entering level {next_level:?}");
                    }
                    None => {
                        *scene = Scene::Win;
                        info!("all levels cleared");
                    }
                }
            }
        }
        Scene::Win | Scene::Lose => {}
    }
}

/// Replaces the active map and enemy roster with the given level's.
fn load_level(
    commands: &mut Commands,
    level: LevelId,
    level_entities: &Query<Entity, With<LevelEntity>>,
) {
    for entity in level_entities {
        commands.entity(entity).despawn();
    }

    let spec = level.spec();
    match TileMap::new(
        LEVEL_WIDTH,
        LEVEL_HEIGHT,
        spec.tiles.to_vec(),
        LEVEL_TILE_SIZE,
    ) {
        Ok(map) => commands.insert_resource(map),
        Err(err) => {
            // Baked data should never be malformed; keep the old map if so.
            log::error!("level {level:?} data rejected: {err}");
            return;
        }
    }

    for enemy in spec.enemies {
        commands.spawn((
            Name::new("Enemy"),
            LevelEntity,
            Enemy,
            enemy.kind,
            AiState::default(),
            Transform::from_xyz(enemy.position.x, enemy.position.y, 0.0),
            Velocity::default(),
            Acceleration(Vec2::new(0.0, ENEMY_GRAVITY)),
            MoveIntent::default(),
            Speed(ENEMY_SPEED),
            Collider::new(1.0, 1.0),
            Contact::default(),
        ));
    }
}

/// Puts the player at the level entry with level jump tuning.
fn reset_player(
    players: &mut Query<(&mut Transform, &mut Velocity, &mut JumpPower, &Lives), With<Player>>,
) {
    for (mut transform, mut velocity, mut jump_power, _) in players {
        transform.translation.x = LEVEL_ENTRY_X;
        transform.translation.y = LEVEL_ENTRY_Y;
        velocity.0 = Vec2::ZERO;
        jump_power.0 = LEVEL_JUMP_POWER;
    }
}
