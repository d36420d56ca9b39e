//! Centralized error type for the loopline umbrella crate.
//!
//! Wraps subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] loopline_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
