//! # loopline - Real-time Looping Buffer
//!
//! A fixed-capacity loop recorder for audio callbacks.
//!
//! ## Architecture
//!
//! loopline is an umbrella crate that re-exports:
//! - **loopline-core** - The loop buffer (storage, cursors, clip windows,
//!   varispeed reads, splice fades), its config and clip parameters
//!
//! ## Quick Start
//!
//! ```
//! use loopline::prelude::*;
//!
//! let mut looper = LoopBuffer::<f32, 48_000>::builder().seed(1).build()?;
//!
//! // Record
//! looper.write_block(&[0.5, 0.25, -0.25]);
//!
//! // Play a window of the loop at half speed
//! let params = ClipParams {
//!     speed: 0.5,
//!     ..Default::default()
//! };
//! let mut out = [0.0; 64];
//! looper.read_block(&mut out, ReadMode::ClipSpeed(params));
//! # Ok::<(), loopline::Error>(())
//! ```
//!
//! ## RT-Safety
//!
//! Construction allocates; nothing else does. Reads, writes and splices
//! clamp bad input instead of failing, so they are safe to call from the
//! audio thread. Only construction and validation return [`Result`].

/// Re-export of loopline-core for direct access
pub use loopline_core as core;

pub use loopline_core::{
    ClipParams, ClipWindow, LoopBuffer, LoopBufferBuilder, LoopConfig, ReadMode, ReverseNeighbor,
    Sample, DEFAULT_CLICK_GUARD, DEFAULT_SPLICE_FADE,
};

mod error;
pub use error::{Error, Result};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{
        ClipParams, LoopBuffer, LoopBufferBuilder, LoopConfig, ReadMode, ReverseNeighbor, Sample,
    };
    pub use crate::{Error, Result};
}
