//! Per-cycle clip parameters.

use serde::{Deserialize, Serialize};

/// Parameters of one windowed read, supplied by the caller each cycle.
///
/// No range checks happen here; the reads clamp whatever they are given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipParams {
    /// Window start as a fraction of the loop, `0.0..=1.0`.
    pub clip_start: f32,
    /// Window length as a fraction of the loop, `0.0..=1.0`.
    pub clip_end: f32,
    /// Signed playback speed (1.0 = normal).
    pub speed: f32,
    /// Shortest window in samples.
    pub min_clip: usize,
    pub random_length: bool,
    pub random_start: bool,
}

impl Default for ClipParams {
    fn default() -> Self {
        Self {
            clip_start: 0.0,
            clip_end: 1.0,
            speed: 1.0,
            min_clip: 1,
            random_length: false,
            random_start: false,
        }
    }
}
