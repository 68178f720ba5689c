//! Numeric conversion helpers used by the tile-map grid maths.
//!
//! These utilities guard conversions between floating-point world
//! coordinates and integer grid indices. They rely on debug assertions to
//! flag unexpected values while keeping the call-sites ergonomic.

/// Floor a world coordinate and clamp it into the `i32` domain.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn floor_to_i32(value: f32) -> i32 {
    let floored = value.floor();
    let clamped = floored.clamp(i32::MIN as f32, i32::MAX as f32);
    clamped as i32
}

/// Convert a non-negative grid index into `usize`, asserting it is in range.
#[expect(
    clippy::cast_sign_loss,
    reason = "Callers check the index is non-negative before converting."
)]
#[must_use]
pub fn expect_usize(value: i32) -> usize {
    debug_assert!(value >= 0, "expected non-negative index, got {value}");
    value.max(0) as usize
}
