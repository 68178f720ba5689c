//! Lunar lander simulation: fuel-metered thrust and a landing outcome.
//!
//! The craft drifts under weak gravity. Thrust and lateral nudges each
//! burn one fuel unit per tick; once the tank runs dry the controls go
//! dead and gravity does the rest. Coming down on a platform ends the run
//! with [`Outcome::Landed`]; touching lava ends it with
//! [`Outcome::Crashed`]. The outcome latches and the systems stop
//! mutating state, so the final pose survives for inspection.

use bevy::prelude::*;
use log::{debug, info};

use crate::components::{
    Acceleration, Collider, Contact, Fuel, InputState, MoveIntent, Player, Speed, Surface,
    Velocity,
};
use crate::physics::{
    aabb_overlap, drive_horizontal, integrate, resolve_vertical_against_body, VerticalHit,
};
use crate::{FIXED_TIMESTEP, LANDER_FUEL, LANDER_GRAVITY, LANDER_SPEED, LANDER_THRUST};

/// How the descent ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Touched down on a platform.
    Landed,
    /// Hit lava.
    Crashed,
}

/// Latched result of the run; `None` while still flying.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LanderOutcome(pub Option<Outcome>);

const LANDER_COLLIDER: Collider = Collider::new(1.0, 1.0);
const SURFACE_COLLIDER: Collider = Collider::new(0.8, 1.0);
const START_ALTITUDE: f32 = 4.0;
const PLATFORM_ROW_Y: f32 = -3.75;
const LAVA_ROW_Y: f32 = -3.25;
const PLATFORM_COLUMNS: [f32; 6] = [-4.5, -3.5, -2.5, 2.5, 3.5, 4.5];
const LAVA_COLUMNS: [f32; 4] = [-1.5, -0.5, 0.5, 1.5];

/// Bevy plugin assembling the lander simulation.
#[derive(Debug, Default)]
pub struct LanderPlugin;

impl Plugin for LanderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>();
        app.init_resource::<LanderOutcome>();
        app.add_systems(Startup, spawn_descent_system);
        app.add_systems(Update, (control_system, descent_system).chain());
    }
}

fn spawn_descent_system(mut commands: Commands) {
    commands.spawn((
        Name::new("Lander"),
        Player,
        Transform::from_xyz(0.0, START_ALTITUDE, 0.0),
        Velocity::default(),
        Acceleration(Vec2::new(0.0, LANDER_GRAVITY)),
        MoveIntent::default(),
        Speed(LANDER_SPEED),
        Fuel(LANDER_FUEL),
        LANDER_COLLIDER,
        Contact::default(),
    ));
    for x in PLATFORM_COLUMNS {
        commands.spawn((
            Name::new("Platform"),
            Surface::Platform,
            Transform::from_xyz(x, PLATFORM_ROW_Y, 0.0),
            SURFACE_COLLIDER,
        ));
    }
    for x in LAVA_COLUMNS {
        commands.spawn((
            Name::new("Lava"),
            Surface::Lava,
            Transform::from_xyz(x, LAVA_ROW_Y, 0.0),
            SURFACE_COLLIDER,
        ));
    }
    info!("descent started with {LANDER_FUEL} fuel");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn control_system(
    input: Res<InputState>,
    outcome: Res<LanderOutcome>,
    mut landers: Query<(&mut MoveIntent, &mut Acceleration, &mut Fuel), With<Player>>,
) {
    if outcome.0.is_some() {
        return;
    }
    for (mut intent, mut acceleration, mut fuel) in &mut landers {
        intent.0 = Vec2::ZERO;
        acceleration.y = LANDER_GRAVITY;
        if fuel.0 == 0 {
            continue;
        }
        if input.left {
            intent.x = -1.0;
            fuel.0 -= 1;
        } else if input.right {
            intent.x = 1.0;
            fuel.0 -= 1;
        }
        if input.up && fuel.0 > 0 {
            acceleration.y = LANDER_THRUST;
            fuel.0 -= 1;
        }
        if fuel.0 == 0 {
            debug!("fuel exhausted");
        }
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn descent_system(
    mut outcome: ResMut<LanderOutcome>,
    mut landers: Query<
        (
            &mut Transform,
            &mut Velocity,
            &Acceleration,
            &MoveIntent,
            &Speed,
            &Collider,
            &mut Contact,
        ),
        With<Player>,
    >,
    surfaces: Query<(&Transform, &Collider, &Surface), Without<Player>>,
) {
    if outcome.0.is_some() {
        return;
    }
    for (mut transform, mut velocity, acceleration, intent, speed, collider, mut contact) in
        &mut landers
    {
        contact.clear();
        drive_horizontal(&mut velocity, intent.0, speed.0);
        integrate(&mut velocity, acceleration.0, FIXED_TIMESTEP);

        let mut position = transform.translation.truncate();
        position.y += velocity.y * FIXED_TIMESTEP;
        position.x += velocity.x * FIXED_TIMESTEP;

        for (surface_transform, surface_collider, surface) in &surfaces {
            let surface_pos = surface_transform.translation.truncate();
            let hit = resolve_vertical_against_body(
                &mut position,
                &mut velocity,
                *collider,
                surface_pos,
                *surface_collider,
            );
            match (hit, surface) {
                (Some(VerticalHit::Bottom), Surface::Platform) => {
                    contact.bottom = true;
                    outcome.0 = Some(Outcome::Landed);
                    info!("touched down safely");
                }
                (Some(_), Surface::Lava) => {
                    outcome.0 = Some(Outcome::Crashed);
                    info!("came down in lava");
                }
                (None, Surface::Lava) => {
                    // A sideways brush with lava is just as fatal.
                    if aabb_overlap(position, *collider, surface_pos, *surface_collider) {
                        outcome.0 = Some(Outcome::Crashed);
                        info!("brushed the lava");
                    }
                }
                _ => {}
            }
        }

        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
