//! Player movement in a headless platformer app: gravity, landing,
//! walking, wall blocking, and jump gating.

use bevy::prelude::*;
use rstest::rstest;

use arcadia::components::{Contact, InputState, Player, Velocity};
use arcadia::platformer::PlatformerPlugin;
use arcadia::{FIXED_TIMESTEP, LEVEL_ENTRY_X, LEVEL_ENTRY_Y, PLAYER_GRAVITY};

/// Builds a platformer app and presses start so level A is live.
fn started_app() -> App {
    let mut app = App::new();
    app.add_plugins(PlatformerPlugin);
    app.insert_resource(InputState {
        start: true,
        ..InputState::default()
    });
    app.update();
    app
}

fn tick_with(app: &mut App, input: InputState, ticks: u32) {
    for _ in 0..ticks {
        app.insert_resource(input);
        app.update();
    }
}

fn player(app: &mut App) -> Entity {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<Player>>();
    query.single(world).expect("player is spawned at startup")
}

fn player_position(app: &mut App) -> Vec2 {
    let entity = player(app);
    app.world()
        .get::<Transform>(entity)
        .expect("player has a transform")
        .translation
        .truncate()
}

fn player_contact(app: &mut App) -> Contact {
    let entity = player(app);
    *app.world()
        .get::<Contact>(entity)
        .expect("player has contact flags")
}

#[test]
fn unsupported_player_accelerates_downward() {
    let mut app = started_app();
    tick_with(&mut app, InputState::default(), 1);

    let position = player_position(&mut app);
    let expected_y = LEVEL_ENTRY_Y + PLAYER_GRAVITY * FIXED_TIMESTEP * FIXED_TIMESTEP;
    assert!((position.x - LEVEL_ENTRY_X).abs() < 1e-6);
    assert!((position.y - expected_y).abs() < 1e-4);
}

#[test]
fn falling_player_comes_to_rest_on_the_floor() {
    let mut app = started_app();
    tick_with(&mut app, InputState::default(), 200);

    let position = player_position(&mut app);
    let contact = player_contact(&mut app);
    let entity = player(&mut app);
    let velocity = app
        .world()
        .get::<Velocity>(entity)
        .expect("player has velocity");

    // Floor top sits at y = -5.5 and the player's half height is 0.4.
    assert!((position.y + 5.1).abs() < 1e-3, "rested at {}", position.y);
    assert!(contact.bottom);
    assert!(velocity.y.abs() < f32::EPSILON);
}

#[rstest]
#[case::walk_right(
    InputState { right: true, ..InputState::default() },
    1.0
)]
#[case::walk_left(
    InputState { left: true, ..InputState::default() },
    -1.0
)]
fn held_direction_moves_the_player(#[case] input: InputState, #[case] direction: f32) {
    let mut app = started_app();
    // Settle on the floor, then walk clear of the left boundary wall.
    tick_with(&mut app, InputState::default(), 200);
    tick_with(
        &mut app,
        InputState {
            right: true,
            ..InputState::default()
        },
        60,
    );
    let before = player_position(&mut app);

    tick_with(&mut app, input, 10);
    let after = player_position(&mut app);

    assert!((after.x - before.x) * direction > 0.0);
}

#[test]
fn boundary_wall_stops_leftward_walking() {
    let mut app = started_app();
    tick_with(&mut app, InputState::default(), 200);
    tick_with(
        &mut app,
        InputState {
            left: true,
            ..InputState::default()
        },
        120,
    );

    let position = player_position(&mut app);
    let contact = player_contact(&mut app);
    // The wall column is centred at x = 0; the player stops flush at 1.0.
    assert!((position.x - 1.0).abs() < 1e-3, "stopped at {}", position.x);
    assert!(contact.left);
}

#[test]
fn jump_launches_only_from_the_ground() {
    let mut app = started_app();

    // Airborne on the first few ticks, so the jump input is ignored.
    tick_with(
        &mut app,
        InputState {
            jump: true,
            ..InputState::default()
        },
        1,
    );
    let entity = player(&mut app);
    let airborne = app
        .world()
        .get::<Velocity>(entity)
        .expect("player has velocity");
    assert!(airborne.y < 0.0);

    // Grounded after settling; the same input now launches upward.
    tick_with(&mut app, InputState::default(), 200);
    let rest_y = player_position(&mut app).y;
    tick_with(
        &mut app,
        InputState {
            jump: true,
            ..InputState::default()
        },
        1,
    );
    let launched = app
        .world()
        .get::<Velocity>(entity)
        .expect("player has velocity");
    assert!(launched.y > 0.0);
    assert!(player_position(&mut app).y > rest_y);
}
