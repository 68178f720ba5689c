//! Fixed-timestep accumulator for real-time frontends.
//!
//! The simulation itself only knows ticks; anything wall-clock lives here.
//! A frontend measures the real time elapsed since its last frame, feeds it
//! to [`TickAccumulator::advance`], and runs the returned number of whole
//! ticks. Leftover time is banked so no simulation time is ever lost.

use crate::FIXED_TIMESTEP;

/// Banks fractional frame time and converts it into whole simulation ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickAccumulator {
    accumulator: f32,
}

impl TickAccumulator {
    /// Creates an accumulator with no banked time.
    #[must_use]
    pub const fn new() -> Self {
        Self { accumulator: 0.0 }
    }

    /// Adds elapsed real time and returns how many whole ticks to run.
    ///
    /// The remainder below one tick stays banked for the next frame.
    /// Non-finite or negative deltas are ignored. The tick count divides
    /// out in one step rather than draining tick by tick, so even an
    /// absurdly large banked value (where an f32 subtraction of one tick
    /// would be a no-op) returns promptly; the count saturates at
    /// `u32::MAX`.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "The tick count is floored, non-negative, and saturates at the u32 bounds."
    )]
    pub fn advance(&mut self, delta_seconds: f32) -> u32 {
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            return 0;
        }
        self.accumulator += delta_seconds;
        let ticks = (self.accumulator / FIXED_TIMESTEP).floor();
        self.accumulator = (self.accumulator - ticks * FIXED_TIMESTEP).max(0.0);
        ticks as u32
    }

    /// Real time currently banked, below one tick after `advance` for any
    /// realistic frame delta.
    #[must_use]
    pub const fn banked(&self) -> f32 {
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn short_frames_bank_until_a_tick_accrues() {
        let mut acc = TickAccumulator::new();
        assert_eq!(acc.advance(FIXED_TIMESTEP * 0.6), 0);
        assert_eq!(acc.advance(FIXED_TIMESTEP * 0.6), 1);
        assert_relative_eq!(acc.banked(), FIXED_TIMESTEP * 0.2, epsilon = 1e-6);
    }

    #[test]
    fn long_frames_yield_multiple_ticks() {
        let mut acc = TickAccumulator::new();
        assert_eq!(acc.advance(FIXED_TIMESTEP * 3.5), 3);
        assert_relative_eq!(acc.banked(), FIXED_TIMESTEP * 0.5, epsilon = 1e-5);
    }

    #[test]
    fn huge_deltas_convert_without_stalling() {
        // At this magnitude subtracting one tick from an f32 is a no-op,
        // so the conversion must not drain the bank tick by tick.
        let mut acc = TickAccumulator::new();
        let ticks = acc.advance(1_048_576.0);
        assert!(ticks > 62_000_000);
        assert!(acc.banked() >= 0.0);
        assert!(acc.banked() < 1.0);
    }

    #[test]
    fn bogus_deltas_are_ignored() {
        let mut acc = TickAccumulator::new();
        assert_eq!(acc.advance(-1.0), 0);
        assert_eq!(acc.advance(f32::NAN), 0);
        assert_eq!(acc.advance(f32::INFINITY), 0);
        assert_relative_eq!(acc.banked(), 0.0);
    }
}
