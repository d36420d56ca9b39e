//! Read strategy selection and block processing.

use crate::params::ClipParams;
use crate::sample::Sample;
use crate::LoopBuffer;
use rand::Rng;

/// Which read a block of output is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ReadMode {
    /// [`LoopBuffer::read`]
    #[default]
    Loop,
    /// [`LoopBuffer::read_once`]
    Once,
    /// [`LoopBuffer::read_clip_end`]
    ClipEnd { clip_end: f32, min_clip: usize },
    /// [`LoopBuffer::read_clip`]
    Clip {
        clip_start: f32,
        clip_end: f32,
        min_clip: usize,
    },
    /// [`LoopBuffer::read_clip_random`]; `speed` is ignored.
    ClipRandom(ClipParams),
    /// [`LoopBuffer::read_clip_speed`]
    ClipSpeed(ClipParams),
    /// [`LoopBuffer::read_speed`]
    Speed(f32),
}

impl<T: Sample, const N: usize, R: Rng> LoopBuffer<T, N, R> {
    /// One output sample using `mode`.
    #[inline]
    pub fn read_mode(&mut self, mode: ReadMode) -> T {
        match mode {
            ReadMode::Loop => self.read(),
            ReadMode::Once => self.read_once(),
            ReadMode::ClipEnd { clip_end, min_clip } => self.read_clip_end(clip_end, min_clip),
            ReadMode::Clip {
                clip_start,
                clip_end,
                min_clip,
            } => self.read_clip(clip_start, clip_end, min_clip),
            ReadMode::ClipRandom(p) => self.read_clip_random(
                p.clip_start,
                p.clip_end,
                p.min_clip,
                p.random_length,
                p.random_start,
            ),
            ReadMode::ClipSpeed(p) => self.read_clip_speed(
                p.clip_start,
                p.clip_end,
                p.speed,
                p.min_clip,
                p.random_length,
                p.random_start,
            ),
            ReadMode::Speed(speed) => self.read_speed(speed),
        }
    }

    pub fn write_block(&mut self, input: &[T]) {
        for &sample in input {
            self.write(sample);
        }
    }

    pub fn read_block(&mut self, output: &mut [T], mode: ReadMode) {
        for sample in output.iter_mut() {
            *sample = self.read_mode(mode);
        }
    }

    /// Record and play in one pass: each frame writes the input sample, then
    /// reads one output sample. Processes `min(input.len(), output.len())`
    /// frames and returns that count.
    pub fn process(&mut self, input: &[T], output: &mut [T], mode: ReadMode) -> usize {
        let frames = input.len().min(output.len());
        for (&sample, out) in input.iter().zip(output.iter_mut()) {
            self.write(sample);
            *out = self.read_mode(mode);
        }
        frames
    }
}
