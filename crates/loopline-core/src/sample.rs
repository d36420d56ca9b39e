//! Sample value abstraction.

use std::fmt::Debug;

/// Numeric sample type stored in a [`LoopBuffer`](crate::LoopBuffer).
///
/// Gains and interpolation phases are always `f32`, whatever the storage type.
pub trait Sample: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    const ZERO: Self;

    /// Multiply by a gain factor.
    fn scale(self, gain: f32) -> Self;

    /// `self + (other - self) * t`. `t` may be negative or above 1.
    fn lerp(self, other: Self, t: f32) -> Self;

    /// Numeric conversion from an index or length.
    fn from_index(index: usize) -> Self;

    fn to_f32(self) -> f32;
}

impl Sample for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn scale(self, gain: f32) -> Self {
        self * gain
    }

    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        index as f32
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
}

impl Sample for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn scale(self, gain: f32) -> Self {
        self * gain as f64
    }

    #[inline]
    fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t as f64
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        index as f64
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }
}
