//! Enemy state machines running inside a headless platformer app.

use bevy::prelude::*;

use arcadia::components::{
    Acceleration, AiKind, AiState, Collider, Contact, Enemy, InputState, MoveIntent, Player,
    Speed, Velocity,
};
use arcadia::platformer::PlatformerPlugin;
use arcadia::{ENEMY_GRAVITY, ENEMY_SPEED};

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

fn tick(app: &mut App, ticks: u32) {
    for _ in 0..ticks {
        app.insert_resource(InputState::default());
        app.update();
    }
}

fn teleport_player(app: &mut App, x: f32, y: f32) {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<Player>>();
    let entity = query.single(world).expect("player is spawned at startup");
    let mut transform = world
        .get_mut::<Transform>(entity)
        .expect("player has a transform");
    transform.translation.x = x;
    transform.translation.y = y;
}

fn guard(app: &mut App) -> (Vec2, AiState) {
    let world = app.world_mut();
    let mut query = world.query_filtered::<(&Transform, &AiState), With<Enemy>>();
    let (transform, state) = query.single(world).expect("level A spawns one guard");
    (transform.translation.truncate(), *state)
}

#[test]
fn guard_holds_post_until_the_player_closes_in() {
    let mut app = started_app();
    tick(&mut app, 10);

    // The player spawns far outside the activation radius.
    let (post, state) = guard(&mut app);
    assert_eq!(state, AiState::Idle);
    assert!((post.x - 8.0).abs() < f32::EPSILON);

    // Step inside the radius; the guard wakes and pursues.
    teleport_player(&mut app, 6.0, -5.0);
    tick(&mut app, 2);
    let (position, pursuing) = guard(&mut app);
    assert_eq!(pursuing, AiState::Walking);
    assert!(position.x < post.x, "guard should close on the player");
}

#[test]
fn wanderer_paces_and_turns_at_the_boundary_wall() {
    let mut app = started_app();
    // A fresh wanderer dropped onto the floor near the left wall.
    app.world_mut().spawn((
        Enemy,
        AiKind::Wander,
        AiState::default(),
        Transform::from_xyz(3.0, -5.0, 0.0),
        Velocity::default(),
        Acceleration(Vec2::new(0.0, ENEMY_GRAVITY)),
        MoveIntent::default(),
        Speed(ENEMY_SPEED),
        Collider::new(1.0, 1.0),
        Contact::default(),
    ));
    // Keep the player clear of the level A guard and the wanderer's path.
    teleport_player(&mut app, 13.0, 4.0);

    tick(&mut app, 10);
    let world = app.world_mut();
    let mut query = world.query_filtered::<(&Transform, &MoveIntent), With<AiKind>>();
    let wanderers: Vec<(f32, f32)> = query
        .iter(world)
        .filter(|(transform, _)| transform.translation.x < 8.0)
        .map(|(transform, intent)| (transform.translation.x, intent.x))
        .collect();
    let (x, intent_x) = wanderers.first().copied().expect("wanderer was spawned");
    assert!(x < 3.0, "wanderer walks left first, was at {x}");
    assert!((intent_x + 1.0).abs() < f32::EPSILON);

    // Long enough to reach the wall at x = 1.0 and turn around.
    tick(&mut app, 180);
    let world = app.world_mut();
    let mut query = world.query_filtered::<&MoveIntent, With<AiKind>>();
    let turned = query
        .iter(world)
        .any(|intent| (intent.x - 1.0).abs() < f32::EPSILON);
    assert!(turned, "wanderer should walk rightward after the wall");
}
