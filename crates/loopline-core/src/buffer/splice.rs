//! Loop seam smoothing.
//!
//! A loop whose last sample differs greatly from its first clicks on every
//! wrap. Splicing tapers the audio around the seam with a linear ramp
//! (`i / fade_length`) so both sides meet at silence.

use super::LoopBuffer;
use crate::sample::Sample;
use rand::Rng;

impl<T: Sample, const N: usize, R: Rng> LoopBuffer<T, N, R> {
    /// Fade in the start and fade out the end of the active loop.
    ///
    /// Uses the configured splice fade (2048 samples by default), shortened
    /// to the loop length for loops shorter than that. The two ramps overlap
    /// on loops shorter than twice the fade.
    pub fn splice(&mut self) {
        let length = self.length;
        let fade = self.config.splice_fade.min(length);

        for i in 0..fade {
            let gain = i as f32 / fade as f32;
            self.line[i] = self.line[i].scale(gain);
            self.line[length - 1 - i] = self.line[length - 1 - i].scale(gain);
        }
    }

    /// Fade `fade_length` samples inward from `start_point` and from
    /// `end_point`, then silence everything from `end_point` to the loop end.
    ///
    /// Returns `false` without touching the audio when the geometry does not
    /// fit the active loop: both fades must fit inside it
    /// (`2 * fade_length < length`), the start fade must not run past the
    /// loop end, and the end fade must not run before sample 0.
    pub fn splice_window(
        &mut self,
        fade_length: usize,
        start_point: usize,
        end_point: usize,
    ) -> bool {
        let length = self.length;
        let fits = fade_length.saturating_mul(2) < length
            && start_point.saturating_add(fade_length) <= length
            && end_point < length
            && fade_length <= end_point + 1;

        if !fits {
            tracing::trace!(
                fade_length,
                start_point,
                end_point,
                length,
                "splice window does not fit the loop, skipped"
            );
            return false;
        }

        for i in 0..fade_length {
            let gain = i as f32 / fade_length as f32;
            self.line[start_point + i] = self.line[start_point + i].scale(gain);
            self.line[end_point - i] = self.line[end_point - i].scale(gain);
        }

        self.line[end_point..length].fill(T::ZERO);
        true
    }
}
