//! Fixed-tick integration and axis-separated collision resolution.
//!
//! Provides the movement step shared by the mini-games. These functions
//! operate on plain vectors and colliders so they can be exercised in unit
//! tests without building an app; the game plugins wrap them in systems.
//!
//! The resolution order matches the axis-separated scheme: advance and test
//! the y-axis first, pushing out of any penetration and zeroing vertical
//! velocity, then do the same along x. Resolving each axis independently is
//! what keeps fast entities from tunnelling through tile corners.

use bevy::prelude::*;

use crate::components::{Collider, Contact};
use crate::map::TileMap;

/// Which face of another body an entity ran into vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalHit {
    /// Hit the underside of the other body while moving up.
    Top,
    /// Came down on the other body while falling.
    Bottom,
}

/// Drives horizontal velocity directly from movement intent.
///
/// Sideways movement has no acceleration: walking speed is reached
/// instantly and drops to zero the moment intent does.
///
/// # Examples
///
/// ```
/// use bevy::math::Vec2;
/// use arcadia::physics::drive_horizontal;
/// let mut velocity = Vec2::new(0.0, -1.0);
/// drive_horizontal(&mut velocity, Vec2::new(1.0, 0.0), 2.5);
/// assert!((velocity.x - 2.5).abs() < 1e-6);
/// assert!((velocity.y + 1.0).abs() < 1e-6);
/// ```
pub fn drive_horizontal(velocity: &mut Vec2, intent: Vec2, speed: f32) {
    velocity.x = intent.x * speed;
}

/// Integrates acceleration into velocity over one tick.
pub fn integrate(velocity: &mut Vec2, acceleration: Vec2, delta: f32) {
    *velocity += acceleration * delta;
}

/// Advances a body by its velocity and resolves it against the tile map.
///
/// Returns the contact flags tagged from the sign of each resolved
/// penetration. Vertical probes sample the collider's top and bottom
/// centres plus the adjacent corners; horizontal probes sample the side
/// centres.
pub fn step_against_map(
    position: &mut Vec2,
    velocity: &mut Vec2,
    collider: Collider,
    map: &TileMap,
    delta: f32,
) -> Contact {
    let mut contact = Contact::default();
    position.y += velocity.y * delta;
    resolve_vertical(position, velocity, collider, map, &mut contact);
    position.x += velocity.x * delta;
    resolve_horizontal(position, velocity, collider, map, &mut contact);
    contact
}

fn resolve_vertical(
    position: &mut Vec2,
    velocity: &mut Vec2,
    collider: Collider,
    map: &TileMap,
    contact: &mut Contact,
) {
    let half_w = collider.width / 2.0;
    let half_h = collider.height / 2.0;

    let top_probes = [
        Vec2::new(position.x, position.y + half_h),
        Vec2::new(position.x - half_w, position.y + half_h),
        Vec2::new(position.x + half_w, position.y + half_h),
    ];
    if velocity.y > 0.0 {
        if let Some(hit) = top_probes.iter().find_map(|p| map.probe(*p)) {
            position.y -= hit.y;
            velocity.y = 0.0;
            contact.top = true;
        }
    }

    let bottom_probes = [
        Vec2::new(position.x, position.y - half_h),
        Vec2::new(position.x - half_w, position.y - half_h),
        Vec2::new(position.x + half_w, position.y - half_h),
    ];
    if velocity.y < 0.0 {
        if let Some(hit) = bottom_probes.iter().find_map(|p| map.probe(*p)) {
            position.y += hit.y;
            velocity.y = 0.0;
            contact.bottom = true;
        }
    }
}

fn resolve_horizontal(
    position: &mut Vec2,
    velocity: &mut Vec2,
    collider: Collider,
    map: &TileMap,
    contact: &mut Contact,
) {
    let half_w = collider.width / 2.0;

    if velocity.x < 0.0 {
        if let Some(hit) = map.probe(Vec2::new(position.x - half_w, position.y)) {
            position.x += hit.x;
            velocity.x = 0.0;
            contact.left = true;
        }
    }
    if velocity.x > 0.0 {
        if let Some(hit) = map.probe(Vec2::new(position.x + half_w, position.y)) {
            position.x -= hit.x;
            velocity.x = 0.0;
            contact.right = true;
        }
    }
}

/// Box-versus-box overlap test using summed half-extents.
#[must_use]
pub fn aabb_overlap(a_pos: Vec2, a: Collider, b_pos: Vec2, b: Collider) -> bool {
    let x_distance = (a_pos.x - b_pos.x).abs() - (a.width + b.width) / 2.0;
    let y_distance = (a_pos.y - b_pos.y).abs() - (a.height + b.height) / 2.0;
    x_distance < 0.0 && y_distance < 0.0
}

/// Resolves a vertical collision against another body.
///
/// When the boxes overlap, the moving body is pushed out along y, its
/// vertical velocity is zeroed, and the touched face is reported. Used by
/// the lander to distinguish touching down from bumping its head.
pub fn resolve_vertical_against_body(
    position: &mut Vec2,
    velocity: &mut Vec2,
    collider: Collider,
    other_pos: Vec2,
    other: Collider,
) -> Option<VerticalHit> {
    if !aabb_overlap(*position, collider, other_pos, other) {
        return None;
    }
    let depth = (collider.height + other.height) / 2.0 - (position.y - other_pos.y).abs();
    if velocity.y < 0.0 {
        position.y += depth;
        velocity.y = 0.0;
        Some(VerticalHit::Bottom)
    } else if velocity.y > 0.0 {
        position.y -= depth;
        velocity.y = 0.0;
        Some(VerticalHit::Top)
    } else {
        None
    }
}

/// Applies a jump impulse when the body is grounded.
///
/// Returns whether the jump happened, so callers can emit the jump cue.
pub fn try_jump(velocity: &mut Vec2, contact: Contact, power: f32) -> bool {
    if contact.bottom {
        velocity.y += power;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: Collider = Collider::new(1.0, 1.0);

    #[test]
    fn overlap_requires_both_axes() {
        let origin = Vec2::ZERO;
        assert!(aabb_overlap(origin, UNIT, Vec2::new(0.9, 0.0), UNIT));
        assert!(!aabb_overlap(origin, UNIT, Vec2::new(1.1, 0.0), UNIT));
        assert!(!aabb_overlap(origin, UNIT, Vec2::new(0.9, 1.5), UNIT));
    }

    #[test]
    fn jump_only_fires_when_grounded() {
        let grounded = Contact {
            bottom: true,
            ..Contact::default()
        };
        let mut velocity = Vec2::ZERO;
        assert!(try_jump(&mut velocity, grounded, 4.0));
        assert!((velocity.y - 4.0).abs() < f32::EPSILON);

        let mut airborne_velocity = Vec2::ZERO;
        assert!(!try_jump(&mut airborne_velocity, Contact::default(), 4.0));
        assert_eq!(airborne_velocity, Vec2::ZERO);
    }

    #[test]
    fn falling_body_lands_on_other_body() {
        let mut position = Vec2::new(0.0, 0.8);
        let mut velocity = Vec2::new(0.0, -1.0);
        let hit = resolve_vertical_against_body(
            &mut position,
            &mut velocity,
            UNIT,
            Vec2::ZERO,
            UNIT,
        );
        assert_eq!(hit, Some(VerticalHit::Bottom));
        assert!((position.y - 1.0).abs() < 1e-6);
        assert!(velocity.y.abs() < f32::EPSILON);
    }
}
