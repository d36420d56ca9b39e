//! Windowed ("clip") reads.
//!
//! A clip narrows playback to a sub-window of the loop. `clip_start` and
//! `clip_end` are fractions of the active length: the start becomes an offset
//! added to the read cursor, the end becomes the modulus the cursor wraps at.
//!
//! Randomized windows are redrawn only when the read cursor sits at 0, so one
//! pass through a clip is internally consistent and never jumps mid-window.

use super::varispeed::{split_phase, wrap_step};
use super::LoopBuffer;
use crate::config::ReverseNeighbor;
use crate::sample::Sample;
use rand::Rng;

/// Offset and end of the clip window most recently used by
/// [`LoopBuffer::read_clip_random`] or [`LoopBuffer::read_clip_speed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipWindow {
    /// Samples added to the read cursor before indexing the loop.
    pub offset: usize,
    /// Cursor modulus, in `1..=active_length` once evaluated.
    pub end: usize,
}

impl<T: Sample, const N: usize, R: Rng> LoopBuffer<T, N, R> {
    pub fn clip_window(&self) -> ClipWindow {
        self.window
    }

    /// `fraction * active_length`, truncated. Negative and NaN fractions give 0.
    #[inline]
    fn scaled(&self, fraction: f32) -> usize {
        (fraction * self.length as f32) as usize
    }

    /// `fraction * rand[0, active_length)`, truncated.
    #[inline]
    fn random_scaled(&mut self, fraction: f32) -> usize {
        let pick = self.rng.random_range(0..self.length);
        (fraction * pick as f32) as usize
    }

    /// Play only the first `clip_end` of the loop, never fewer than `min_clip` samples.
    ///
    /// The window is not limited to the active length, only to the storage capacity.
    pub fn read_clip_end(&mut self, clip_end: f32, min_clip: usize) -> T {
        let end = self.scaled(clip_end).max(min_clip.max(1)).min(N);

        let a = self.line[self.read_pos % end];
        self.read_pos = (self.read_pos + 1) % end;
        a
    }

    /// Play a window of the loop starting `clip_start` into it.
    ///
    /// The offset is added to the cursor and wrapped at the active length; the
    /// cursor itself wraps at the window end.
    pub fn read_clip(&mut self, clip_start: f32, clip_end: f32, min_clip: usize) -> T {
        let end = self.scaled(clip_end).max(min_clip.max(1)).min(N);
        let offset = self.scaled(clip_start);

        let a = self.line[self.read_pos.wrapping_add(offset) % self.length];
        self.read_pos = (self.read_pos + 1) % end;
        a
    }

    /// Windowed read with optionally randomized start and length.
    ///
    /// - `clip_start`: with `random_start`, scales how far a random start may
    ///   stray from the loop start.
    /// - `clip_end`: with `random_length`, scales the range of random window lengths.
    /// - `min_clip`: shortest allowed window in samples.
    pub fn read_clip_random(
        &mut self,
        clip_start: f32,
        clip_end: f32,
        min_clip: usize,
        random_length: bool,
        random_start: bool,
    ) -> T {
        self.update_window(clip_start, clip_end, min_clip, random_length, random_start, 0);

        let a = self.line[self.read_pos.wrapping_add(self.window.offset) % self.length];
        self.read_pos = (self.read_pos + 1) % self.window.end;
        a
    }

    /// Windowed, randomizable read at a variable speed with linear interpolation.
    ///
    /// `speed` is signed: negative values play the clip backwards. A loop of
    /// one sample or less outputs silence.
    pub fn read_clip_speed(
        &mut self,
        clip_start: f32,
        clip_end: f32,
        speed: f32,
        min_clip: usize,
        random_length: bool,
        random_start: bool,
    ) -> T {
        if self.length <= 1 {
            return T::ZERO;
        }

        let click_guard = self.config.click_guard;
        self.update_window(
            clip_start,
            clip_end,
            min_clip,
            random_length,
            random_start,
            click_guard,
        );

        let index = self.read_pos.wrapping_add(self.window.offset);
        let a = self.line[index % self.length];
        let b = if speed >= 0.0 {
            self.line[index.wrapping_add(1) % self.length]
        } else {
            self.reverse_neighbor(index)
        };

        let (step, frac) = split_phase(speed + self.frac);
        self.frac = frac;
        self.read_pos = wrap_step(self.read_pos, step, self.window.end);

        a.lerp(b, self.frac)
    }

    /// Re-evaluate the window. Random draws happen only at loop restart
    /// (cursor at 0); otherwise a random field keeps its previous value.
    fn update_window(
        &mut self,
        clip_start: f32,
        clip_end: f32,
        min_clip: usize,
        random_length: bool,
        random_start: bool,
        min_random_offset: usize,
    ) {
        let restart = self.read_pos == 0;

        if !random_start {
            self.window.offset = self.scaled(clip_start);
        } else if restart {
            self.window.offset = self.random_scaled(clip_start).max(min_random_offset);
        }

        if !random_length {
            self.window.end = self.scaled(clip_end);
        } else if restart {
            self.window.end = self.random_scaled(clip_end);
        }

        self.window.end = self.window.end.max(min_clip.max(1)).min(self.length);
    }

    fn reverse_neighbor(&self, index: usize) -> T {
        let length = self.length;
        let previous = self.line[(index % length + length - 1) % length];
        match self.config.reverse_neighbor {
            ReverseNeighbor::Legacy if index == 1 => T::from_index(length - 1),
            ReverseNeighbor::Legacy | ReverseNeighbor::Wrapped => previous,
        }
    }
}
