//! Pong court simulation: two paddles, a ball, and a match outcome.
//!
//! The ball carries its movement direction in [`MoveIntent`] and scales
//! it by [`crate::BALL_SPEED`] each tick. Paddle hits use a box distance
//! test: side hits reflect x, top/bottom hits reflect both axes, and the
//! ball is repositioned flush against the paddle so it cannot tunnel
//! through on the next tick.

use bevy::prelude::*;
use log::info;

use crate::components::{Ball, Collider, InputState, MoveIntent, Side};
use crate::{
    AUTO_PADDLE_TURN, BALL_SPEED, COURT_HALF_HEIGHT, COURT_HALF_WIDTH, FIXED_TIMESTEP,
    PADDLE_LIMIT, PADDLE_SPEED,
};

/// Marker for the two paddles; [`Side`] says which goal they defend.
#[derive(Component, Debug, Default)]
pub struct Paddle;

/// Self-steering state for the right paddle in single-player mode.
#[derive(Component, Debug, Default)]
pub struct AutoPaddle {
    direction: f32,
}

/// Match configuration chosen before the simulation starts.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PongConfig {
    /// When set, the right paddle steers itself.
    pub single_player: bool,
}

/// Whether the rally is still live and who won once it is not.
#[derive(Resource, Debug, Clone, Copy)]
pub struct MatchState {
    /// The ball is in play.
    pub running: bool,
    /// Set when the ball leaves the court.
    pub winner: Option<Side>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            running: true,
            winner: None,
        }
    }
}

const PADDLE_COLLIDER: Collider = Collider::new(0.5, 2.0);
const BALL_COLLIDER: Collider = Collider::new(0.5, 0.5);
const LEFT_PADDLE_X: f32 = -COURT_HALF_WIDTH;
const RIGHT_PADDLE_X: f32 = COURT_HALF_WIDTH;

/// Bevy plugin assembling the pong simulation.
#[derive(Debug, Default)]
pub struct PongPlugin;

impl Plugin for PongPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>();
        app.init_resource::<PongConfig>();
        app.init_resource::<MatchState>();
        app.add_systems(Startup, spawn_court_system);
        app.add_systems(
            Update,
            (
                paddle_intent_system,
                move_paddles_system,
                ball_system,
                scoring_system,
            )
                .chain(),
        );
    }
}

fn spawn_court_system(mut commands: Commands) {
    commands.spawn((
        Name::new("LeftPaddle"),
        Paddle,
        Side::Left,
        Transform::from_xyz(LEFT_PADDLE_X, 0.0, 0.0),
        MoveIntent::default(),
        PADDLE_COLLIDER,
    ));
    commands.spawn((
        Name::new("RightPaddle"),
        Paddle,
        Side::Right,
        Transform::from_xyz(RIGHT_PADDLE_X, 0.0, 0.0),
        MoveIntent::default(),
        AutoPaddle::default(),
        PADDLE_COLLIDER,
    ));
    commands.spawn((
        Name::new("Ball"),
        Ball,
        Transform::from_xyz(0.0, 0.0, 0.0),
        // Up-and-left serve, so the first pass goes to player one.
        MoveIntent(Vec2::new(-0.5, 0.5)),
        BALL_COLLIDER,
    ));
}

/// Clamps an axis so the paddle stops at the court limit instead of leaving.
fn limited_axis(axis: f32, paddle_y: f32) -> f32 {
    if paddle_y > PADDLE_LIMIT && axis > 0.0 {
        0.0
    } else if paddle_y < -PADDLE_LIMIT && axis < 0.0 {
        0.0
    } else {
        axis.clamp(-1.0, 1.0)
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn paddle_intent_system(
    input: Res<InputState>,
    config: Res<PongConfig>,
    state: Res<MatchState>,
    mut paddles: Query<(&Transform, &Side, &mut MoveIntent, Option<&mut AutoPaddle>), With<Paddle>>,
) {
    if !state.running {
        return;
    }
    for (transform, side, mut intent, auto) in &mut paddles {
        let paddle_y = transform.translation.y;
        intent.y = match side {
            Side::Left => limited_axis(input.p1_axis, paddle_y),
            Side::Right => {
                if config.single_player {
                    if let Some(mut auto) = auto {
                        // Bounce between the turn band edges, starting upward.
                        if paddle_y <= -AUTO_PADDLE_TURN || auto.direction == 0.0 {
                            auto.direction = 1.0;
                        } else if paddle_y >= AUTO_PADDLE_TURN {
                            auto.direction = -1.0;
                        }
                        auto.direction
                    } else {
                        0.0
                    }
                } else {
                    limited_axis(input.p2_axis, paddle_y)
                }
            }
        };
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn move_paddles_system(
    state: Res<MatchState>,
    mut paddles: Query<(&mut Transform, &MoveIntent), With<Paddle>>,
) {
    if !state.running {
        return;
    }
    for (mut transform, intent) in &mut paddles {
        transform.translation.y += intent.y * PADDLE_SPEED * FIXED_TIMESTEP;
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn ball_system(
    state: Res<MatchState>,
    mut balls: Query<(&mut Transform, &mut MoveIntent, &Collider), With<Ball>>,
    paddles: Query<(&Transform, &Collider), (With<Paddle>, Without<Ball>)>,
) {
    if !state.running {
        return;
    }
    for (mut transform, mut intent, collider) in &mut balls {
        transform.translation.x += intent.x * BALL_SPEED * FIXED_TIMESTEP;
        transform.translation.y += intent.y * BALL_SPEED * FIXED_TIMESTEP;

        // Wall bounce: send the ball back into the court.
        if transform.translation.y > COURT_HALF_HEIGHT {
            intent.y = -intent.y.abs();
        } else if transform.translation.y < -COURT_HALF_HEIGHT {
            intent.y = intent.y.abs();
        }

        for (paddle_transform, paddle_collider) in &paddles {
            deflect_off_paddle(
                &mut transform,
                &mut intent,
                *collider,
                paddle_transform.translation.truncate(),
                *paddle_collider,
            );
        }
    }
}

/// Deflects the ball off a paddle: reflect x on side hits, reflect both
/// axes on top/bottom hits, and push the ball flush.
fn deflect_off_paddle(
    ball: &mut Transform,
    intent: &mut MoveIntent,
    ball_collider: Collider,
    paddle_pos: Vec2,
    paddle_collider: Collider,
) {
    let half_widths = (ball_collider.width + paddle_collider.width) / 2.0;
    let half_heights = (ball_collider.height + paddle_collider.height) / 2.0;
    let x_distance = (ball.translation.x - paddle_pos.x).abs() - half_widths;
    let y_distance = (ball.translation.y - paddle_pos.y).abs() - half_heights;
    if x_distance >= 0.0 || y_distance > 0.0 {
        return;
    }

    if x_distance.abs() < y_distance.abs() {
        intent.x = -intent.x;
        let side = if ball.translation.x > paddle_pos.x {
            1.0
        } else {
            -1.0
        };
        ball.translation.x = paddle_pos.x + half_widths * side;
    } else {
        intent.y = -intent.y;
        intent.x = -intent.x;
        let side = if ball.translation.y > paddle_pos.y {
            1.0
        } else {
            -1.0
        };
        ball.translation.y = paddle_pos.y + half_heights * side;
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn scoring_system(mut state: ResMut<MatchState>, balls: Query<&Transform, With<Ball>>) {
    if !state.running {
        return;
    }
    for transform in &balls {
        let conceded = if transform.translation.x > COURT_HALF_WIDTH {
            Some(Side::Right)
        } else if transform.translation.x < -COURT_HALF_WIDTH {
            Some(Side::Left)
        } else {
            None
        };
        if let Some(goal_side) = conceded {
            let winner = goal_side.opposite();
            state.running = false;
            state.winner = Some(winner);
            info!("{winner:?} side wins");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn axis_stops_at_the_court_limit() {
        assert_relative_eq!(limited_axis(1.0, PADDLE_LIMIT + 0.1), 0.0);
        assert_relative_eq!(limited_axis(-1.0, PADDLE_LIMIT + 0.1), -1.0);
        assert_relative_eq!(limited_axis(-1.0, -PADDLE_LIMIT - 0.1), 0.0);
        assert_relative_eq!(limited_axis(0.5, 0.0), 0.5);
    }

    #[test]
    fn side_hit_reflects_x_and_repositions() {
        let mut ball = Transform::from_xyz(-4.4, 0.0, 0.0);
        let mut intent = MoveIntent(Vec2::new(-0.5, 0.2));
        deflect_off_paddle(
            &mut ball,
            &mut intent,
            BALL_COLLIDER,
            Vec2::new(LEFT_PADDLE_X, 0.0),
            PADDLE_COLLIDER,
        );
        assert_relative_eq!(intent.x, 0.5);
        assert_relative_eq!(intent.y, 0.2);
        assert_relative_eq!(ball.translation.x, LEFT_PADDLE_X + 0.5);
    }

    #[test]
    fn win_goes_to_the_side_opposite_the_conceded_goal() {
        assert_eq!(Side::Right.opposite(), Side::Left);
        assert_eq!(Side::Left.opposite(), Side::Right);
    }

    #[test]
    fn corner_hit_reflects_both_axes() {
        let mut ball = Transform::from_xyz(-4.7, 1.2, 0.0);
        let mut intent = MoveIntent(Vec2::new(-0.5, -0.5));
        deflect_off_paddle(
            &mut ball,
            &mut intent,
            BALL_COLLIDER,
            Vec2::new(LEFT_PADDLE_X, 0.0),
            PADDLE_COLLIDER,
        );
        assert_relative_eq!(intent.x, 0.5);
        assert_relative_eq!(intent.y, 0.5);
    }
}
