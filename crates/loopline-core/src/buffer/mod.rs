//! Fixed-capacity looping buffer.
//!
//! A producer writes one sample at a time; the active loop grows with the
//! writes until the storage is full, after which writes overwrite the oldest
//! samples. Reads come in several strategies (see the `clip`, `varispeed` and
//! `splice` submodules), all sharing the cursors and length state kept here.
//!
//! ## RT-Safety
//!
//! Storage is allocated once in the constructor. No method allocates, locks,
//! or panics on out-of-range input: lengths, positions and windows are clamped.

mod clip;
mod splice;
mod varispeed;

pub use clip::ClipWindow;

use crate::config::LoopConfig;
use crate::sample::Sample;
use rand::rngs::SmallRng;
use rand::Rng;
use std::fmt;

/// Looping sample buffer with capacity `N`.
///
/// `R` is the generator used to re-randomize clip windows on loop restart.
/// Seed it through [`LoopConfig::seed`] or inject one with [`LoopBuffer::with_rng`].
pub struct LoopBuffer<T: Sample, const N: usize, R = SmallRng> {
    line: Box<[T]>,
    write_pos: usize,
    read_pos: usize,
    /// Active loop length, always in `1..=N`.
    length: usize,
    /// Signed sub-sample phase carried between varispeed reads.
    frac: f32,
    window: ClipWindow,
    config: LoopConfig,
    rng: R,
}

impl<T: Sample, const N: usize> LoopBuffer<T, N> {
    pub fn new() -> Self {
        Self::with_config(LoopConfig::default())
    }

    /// Create a buffer whose clip generator is built from `config.seed`.
    pub fn with_config(config: LoopConfig) -> Self {
        let rng = config.rng();
        Self::with_rng(config, rng)
    }
}

impl<T: Sample, const N: usize> Default for LoopBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample, const N: usize, R: Rng> LoopBuffer<T, N, R> {
    const CAPACITY_CHECK: () = assert!(N > 0, "LoopBuffer capacity must be at least one sample");

    pub fn with_rng(config: LoopConfig, rng: R) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;

        Self {
            line: vec![T::ZERO; N].into_boxed_slice(),
            write_pos: 0,
            read_pos: 0,
            length: 1,
            frac: 0.0,
            window: ClipWindow::default(),
            config,
            rng,
        }
    }

    /// Zero every slot, then [`reset`](Self::reset).
    pub fn init(&mut self) {
        self.line.fill(T::ZERO);
        self.reset();
        tracing::debug!(capacity = N, "loop buffer initialized");
    }

    /// Rewind cursors and shrink the loop to one sample without erasing audio.
    pub fn reset(&mut self) {
        self.write_pos = 0;
        self.read_pos = 0;
        self.length = 1;
        self.frac = 0.0;
        self.window = ClipWindow::default();
    }

    /// Set the loop length in whole samples, clamped to `1..=N`. Clears the phase.
    pub fn set_length(&mut self, length: usize) {
        self.frac = 0.0;
        self.length = length.clamp(1, N);
        if self.length != length {
            tracing::trace!(requested = length, length = self.length, "loop length clamped");
        }
    }

    /// Set a fractional loop length.
    ///
    /// The whole part becomes the active length, clamped to `1..=N - 1` (one
    /// sample shorter than [`set_length`](Self::set_length) allows). The
    /// remainder becomes the interpolation phase. Non-finite or sub-sample
    /// lengths collapse to a one-sample loop with zero phase.
    pub fn set_length_frac(&mut self, length: f32) {
        if !length.is_finite() || length < 1.0 {
            self.length = 1;
            self.frac = 0.0;
            tracing::trace!(requested = length, "fractional loop length clamped to 1");
            return;
        }

        let whole = length.trunc();
        self.frac = length - whole;
        self.length = (whole as usize).min(N - 1).max(1);
    }

    /// Loop length including the fractional phase.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length as f32 + self.frac
    }

    #[inline]
    pub fn active_length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.frac
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        N
    }

    /// Move the read cursor to the last sample of the loop.
    ///
    /// The requested position is not honored: positions inside the loop and
    /// positions past its end both land on `active_length - 1`.
    pub fn set_read_position(&mut self, _position: usize) {
        self.read_pos = self.length.saturating_sub(1);
    }

    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_pos
    }

    #[inline]
    pub fn write_position(&self) -> usize {
        self.write_pos
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Whole storage, including slots beyond the active loop.
    pub fn as_slice(&self) -> &[T] {
        &self.line
    }

    /// The active loop region.
    pub fn loop_slice(&self) -> &[T] {
        &self.line[..self.length]
    }

    /// Store a sample and advance the write cursor.
    ///
    /// While the buffer has not wrapped yet the loop grows to cover the
    /// write cursor; once full it stays at `N` and writes overwrite the oldest audio.
    #[inline]
    pub fn write(&mut self, sample: T) {
        self.line[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % N;
        if self.write_pos >= self.length {
            self.length = self.write_pos + 1;
        }
    }

    /// Next sample of the loop; wraps at the active length.
    #[inline]
    pub fn read(&mut self) -> T {
        let a = self.line[self.read_pos % self.length];
        self.read_pos = (self.read_pos + 1) % self.length;
        a
    }

    /// Single-shot playback: stops advancing on the last sample of the loop.
    ///
    /// Returns zero if the cursor sits past the active length.
    #[inline]
    pub fn read_once(&mut self) -> T {
        let a = if self.read_pos < self.length {
            self.line[self.read_pos]
        } else {
            T::ZERO
        };
        if self.read_pos < self.length - 1 {
            self.read_pos += 1;
        }
        a
    }
}

impl<T: Sample, const N: usize, R> fmt::Debug for LoopBuffer<T, N, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoopBuffer")
            .field("capacity", &N)
            .field("length", &self.length)
            .field("frac", &self.frac)
            .field("write_pos", &self.write_pos)
            .field("read_pos", &self.read_pos)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}
