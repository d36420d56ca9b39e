//! RT-safe looping buffer: a growing loop region with looping, single-shot,
//! windowed, randomized and varispeed reads, plus splice fades at the seams.
//!
//! # Example
//!
//! ```
//! use loopline_core::{LoopBuffer, LoopConfig, ReadMode};
//!
//! let mut looper: LoopBuffer<f32, 4096> = LoopBuffer::with_config(LoopConfig::seeded(1));
//! looper.write_block(&[0.1, 0.2, 0.3]);
//!
//! let mut out = [0.0; 8];
//! looper.read_block(&mut out, ReadMode::Loop);
//! assert_eq!(&out[..3], &[0.1, 0.2, 0.3]);
//! ```

mod error;
pub use error::{Error, Result};

mod sample;
pub use sample::Sample;

mod config;
pub use config::{LoopConfig, ReverseNeighbor, DEFAULT_CLICK_GUARD, DEFAULT_SPLICE_FADE};

mod buffer;
pub use buffer::{ClipWindow, LoopBuffer};

mod builder;
pub use builder::LoopBufferBuilder;

mod params;
pub use params::ClipParams;

mod mode;
pub use mode::ReadMode;
