//! Minimal finite-state AI for platformer enemies.
//!
//! Two archetypes exist: guards hold their post until the player strays
//! close and then pursue, wanderers pace and turn at walls. Decisions are
//! pure functions over the current state so they can be table-tested; the
//! system wrapper feeds them from the ECS each tick before physics runs.

use bevy::prelude::*;
use log::debug;

use crate::components::{AiKind, AiState, Contact, Enemy, MoveIntent, Player};
use crate::GUARD_ACTIVATION_RADIUS;

/// Guard behaviour: idle until the player is inside the activation radius,
/// then walk toward the player's x position.
///
/// Returns the next state and the horizontal intent for this tick.
#[must_use]
pub fn guard_decision(state: AiState, enemy_pos: Vec2, player_pos: Vec2) -> (AiState, f32) {
    match state {
        AiState::Idle => {
            if enemy_pos.distance(player_pos) < GUARD_ACTIVATION_RADIUS {
                (AiState::Walking, 0.0)
            } else {
                (AiState::Idle, 0.0)
            }
        }
        AiState::Walking | AiState::Attacking => {
            let direction = if player_pos.x < enemy_pos.x { -1.0 } else { 1.0 };
            (AiState::Walking, direction)
        }
    }
}

/// Wander behaviour: keep walking in the current direction, turning around
/// when a side contact reports a wall. A fresh wanderer starts leftward.
#[must_use]
pub fn wander_decision(current_intent: f32, contact: Contact) -> f32 {
    if contact.left {
        1.0
    } else if contact.right {
        -1.0
    } else if current_intent == 0.0 {
        -1.0
    } else {
        current_intent
    }
}

/// Runs the enemy state machines, writing each enemy's movement intent.
pub fn enemy_ai_system(
    player: Query<&Transform, With<Player>>,
    mut enemies: Query<
        (&Transform, &AiKind, &mut AiState, &mut MoveIntent, &Contact),
        (With<Enemy>, Without<Player>),
    >,
) {
    let Ok(player_transform) = player.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (transform, kind, mut state, mut intent, contact) in &mut enemies {
        let enemy_pos = transform.translation.truncate();
        match kind {
            AiKind::Guard => {
                let (next, direction) = guard_decision(*state, enemy_pos, player_pos);
                if next != *state {
                    debug!("guard at {enemy_pos:?} -> {next:?}");
                    *state = next;
                }
                intent.x = direction;
            }
            AiKind::Wander => {
                intent.x = wander_decision(intent.x, *contact);
                if *state != AiState::Walking {
                    *state = AiState::Walking;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_wakes_inside_activation_radius() {
        let post = Vec2::new(10.0, -5.0);
        let (far, _) = guard_decision(AiState::Idle, post, Vec2::new(1.0, -5.0));
        assert_eq!(far, AiState::Idle);

        let (near, _) = guard_decision(AiState::Idle, post, Vec2::new(8.0, -5.0));
        assert_eq!(near, AiState::Walking);
    }

    #[test]
    fn walking_guard_heads_toward_player() {
        let post = Vec2::new(10.0, -5.0);
        let (_, leftward) = guard_decision(AiState::Walking, post, Vec2::new(2.0, -5.0));
        assert!((leftward + 1.0).abs() < f32::EPSILON);

        let (_, rightward) = guard_decision(AiState::Walking, post, Vec2::new(12.0, -5.0));
        assert!((rightward - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn wanderer_turns_at_walls() {
        let mut contact = Contact::default();
        assert!((wander_decision(0.0, contact) + 1.0).abs() < f32::EPSILON);
        assert!((wander_decision(-1.0, contact) + 1.0).abs() < f32::EPSILON);

        contact.left = true;
        assert!((wander_decision(-1.0, contact) - 1.0).abs() < f32::EPSILON);

        contact = Contact {
            right: true,
            ..Contact::default()
        };
        assert!((wander_decision(1.0, contact) + 1.0).abs() < f32::EPSILON);
    }
}
