//! The Expand-Convolve code and its dual encoder.
//!
//! A dual encode compresses a length-`n` pseudorandom vector into `k` elements
//! with the transpose of the code's generator: a sparse forward expansion
//! followed by a backward convolution. The same [`Schedule`] drives every
//! element domain, so a block-valued buffer and a bit-valued buffer can be
//! compressed under the identical linear map.

mod accumulator;
mod config;
mod coordinates;
mod encoder;
mod expander;
mod schedule;

pub use accumulator::Accumulator;
pub use config::{
    CodeConfig, DEFAULT_ACCUMULATOR_SIZE, DEFAULT_EXPANDER_WEIGHT, DEFAULT_SEED, MAX_CODE_SIZE,
};
pub use coordinates::{Coordinates, Paired};
pub use encoder::ExConvCode;
pub use expander::Expander;
pub use schedule::Schedule;
