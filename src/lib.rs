//! praatfan-sampled: Praat's sampled-grid coordinate model in Rust
//!
//! Every Praat object with a regular axis (sounds, pitch and intensity
//! contours, spectra) shares one coordinate model: `nx` samples spaced `dx`
//! apart, the first centred at `x1`. This crate implements that model and the
//! single- and multi-channel data that live on it, producing the same sample
//! positions, cell edges and bins as Praat/parselmouth.
//!
//! # Core Types
//!
//! - [`SampledGrid`] - Sample positions, boundaries and bins from `(x1, dx, nx)`
//! - [`Sampled`] - Trait for anything laid out on a grid
//! - [`Vector`] - Channels of values on a grid, with interpolated lookup,
//!   extrema and windowed statistics
//! - [`Interpolation`] - Methods for reading between samples

pub mod sampled;
pub mod interpolation;
pub mod vector;

// Re-export main types at crate root
pub use sampled::{Bin, Sampled, SampledGrid};
pub use interpolation::Interpolation;
pub use vector::{ChannelSelection, Extremum, Vector};

use thiserror::Error;

/// Errors that can occur when building or querying sampled data
#[derive(Error, Debug)]
pub enum PraatError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Channel {channel} out of range (vector has {count} channels)")]
    ChannelOutOfRange { channel: usize, count: usize },

    #[error("Value undefined at x = {x}: {reason}")]
    UndefinedValue { x: f64, reason: String },
}

pub type Result<T> = std::result::Result<T, PraatError>;
