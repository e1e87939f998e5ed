//! Expand-Convolve (ExConv) dual encoder.
//!
//! Silent OT and other PCG constructions expand a short seed into a long, structured
//! pseudorandom vector and then compress it with the transpose of a linear code's
//! generator. This crate implements that compression step in place over GF(2)-linear
//! element domains: single bits, bytes of eight parallel bits, and 128-bit blocks.

pub mod codes;
pub mod error;
pub mod fields;
pub mod pseudorandom;

pub use codes::{CodeConfig, ExConvCode};
pub use error::{ConfigError, EncoderError, ParseBlockError};
pub use fields::{Block, ElementDomain, GF2};
