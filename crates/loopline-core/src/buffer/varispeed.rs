//! Variable-speed playback.
//!
//! Speeds are signed: 1.0 = normal, 0.5 = half, -1.0 = reverse. The whole part
//! of `speed + phase` moves the cursor; the signed remainder is carried as the
//! interpolation phase for the next read.

use super::LoopBuffer;
use crate::sample::Sample;
use rand::Rng;

/// Split a phase position into a truncated whole step and its signed remainder.
///
/// `-1.25` splits into `(-1, -0.25)`. Non-finite positions give `(0, 0.0)`.
#[inline]
pub(crate) fn split_phase(position: f32) -> (i64, f32) {
    if !position.is_finite() {
        return (0, 0.0);
    }
    let whole = position.trunc();
    (whole as i64, position - whole)
}

/// Advance `pos` by `step` modulo `modulus`. A negative result wraps to `modulus - 1`.
#[inline]
pub(crate) fn wrap_step(pos: usize, step: i64, modulus: usize) -> usize {
    let next = (pos as i64).saturating_add(step) % modulus as i64;
    if next < 0 {
        modulus - 1
    } else {
        next as usize
    }
}

impl<T: Sample, const N: usize, R: Rng> LoopBuffer<T, N, R> {
    /// Loop the whole active length at `speed`, interpolating between the
    /// sample under the cursor and the next one.
    ///
    /// The cursor moves by `floor(speed + phase)`; the new phase is the
    /// truncation remainder of `speed + phase` and may be negative.
    pub fn read_speed(&mut self, speed: f32) -> T {
        let speed = if speed.is_finite() { speed } else { 0.0 };
        let position = speed + self.frac;

        self.read_pos = wrap_step(self.read_pos, position.floor() as i64, self.length);
        self.frac = position - position.trunc();

        let a = self.line[self.read_pos % self.length];
        let b = self.line[(self.read_pos + 1) % self.length];
        a.lerp(b, self.frac)
    }
}
