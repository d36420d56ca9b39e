//! Builder for configuring and constructing a `LoopBuffer`.

use crate::config::{LoopConfig, ReverseNeighbor};
use crate::sample::Sample;
use crate::{LoopBuffer, Result};
use rand::Rng;
use std::marker::PhantomData;

/// Validating builder for [`LoopBuffer`]. Capacity and sample type come from
/// the type parameters; everything else from [`LoopConfig`].
///
/// # Example
///
/// ```
/// use loopline_core::{LoopBuffer, ReverseNeighbor};
///
/// let looper = LoopBuffer::<f32, 48_000>::builder()
///     .splice_fade(1024)
///     .reverse_neighbor(ReverseNeighbor::Wrapped)
///     .seed(7)
///     .build()?;
/// assert_eq!(looper.capacity(), 48_000);
/// # Ok::<(), loopline_core::Error>(())
/// ```
pub struct LoopBufferBuilder<T: Sample, const N: usize> {
    config: LoopConfig,
    _marker: PhantomData<T>,
}

impl<T: Sample, const N: usize> Default for LoopBufferBuilder<T, N> {
    fn default() -> Self {
        Self {
            config: LoopConfig::default(),
            _marker: PhantomData,
        }
    }
}

impl<T: Sample, const N: usize> LoopBufferBuilder<T, N> {
    /// Replace the whole config.
    pub fn config(mut self, config: LoopConfig) -> Self {
        self.config = config;
        self
    }

    /// Default: 2048
    pub fn splice_fade(mut self, samples: usize) -> Self {
        self.config.splice_fade = samples;
        self
    }

    /// Default: 10
    pub fn click_guard(mut self, samples: usize) -> Self {
        self.config.click_guard = samples;
        self
    }

    /// Default: [`ReverseNeighbor::Legacy`]
    pub fn reverse_neighbor(mut self, policy: ReverseNeighbor) -> Self {
        self.config.reverse_neighbor = policy;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<LoopBuffer<T, N>> {
        self.config.validate()?;
        tracing::debug!(capacity = N, config = ?self.config, "building loop buffer");
        Ok(LoopBuffer::with_config(self.config))
    }

    /// Build with a caller-supplied generator; `seed` is ignored.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> Result<LoopBuffer<T, N, R>> {
        self.config.validate()?;
        tracing::debug!(
            capacity = N,
            config = ?self.config,
            "building loop buffer with injected rng"
        );
        Ok(LoopBuffer::with_rng(self.config, rng))
    }
}

impl<T: Sample, const N: usize> LoopBuffer<T, N> {
    pub fn builder() -> LoopBufferBuilder<T, N> {
        LoopBufferBuilder::default()
    }
}
