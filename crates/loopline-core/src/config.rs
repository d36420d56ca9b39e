//! Loop buffer configuration.

use crate::{Error, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Fade length of [`LoopBuffer::splice`](crate::LoopBuffer::splice) when none is configured.
pub const DEFAULT_SPLICE_FADE: usize = 2048;

/// Smallest randomized offset used by the varispeed clip read.
/// Offsets near the loop start click audibly.
pub const DEFAULT_CLICK_GUARD: usize = 10;

/// How the varispeed clip read picks its interpolation neighbor when playing backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReverseNeighbor {
    /// Previous sample, wrapping at the loop length, except at index 1 where
    /// the neighbor is the numeric value `length - 1` rather than a stored sample.
    #[default]
    Legacy,
    /// Sample at `(index + length - 1) % length`.
    Wrapped,
}

/// Configuration for a [`LoopBuffer`](crate::LoopBuffer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Fade length in samples for the fixed splice (default: 2048)
    pub splice_fade: usize,
    /// Minimum randomized clip offset in samples (default: 10)
    pub click_guard: usize,
    /// Reverse playback neighbor policy (default: Legacy)
    pub reverse_neighbor: ReverseNeighbor,
    /// RNG seed for clip randomization; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            splice_fade: DEFAULT_SPLICE_FADE,
            click_guard: DEFAULT_CLICK_GUARD,
            reverse_neighbor: ReverseNeighbor::Legacy,
            seed: None,
        }
    }
}

impl LoopConfig {
    /// Config with a fixed seed, for reproducible clip randomization.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.splice_fade == 0 {
            return Err(Error::InvalidConfig(
                "splice_fade must be at least 1 sample".into(),
            ));
        }
        Ok(())
    }

    /// Build the clip randomization generator described by `seed`.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}
