use std::fmt::{Debug, Formatter};

use log::trace;
use rayon::prelude::*;

use super::config::CodeConfig;
use super::coordinates::Paired;
use super::schedule::Schedule;
use crate::error::EncoderError;
use crate::fields::{Block, ElementDomain, GF2};

struct Configured {
    config: CodeConfig,
    schedule: Schedule,
}

/// Dual encoder for an Expand-Convolve code.
///
/// Created unconfigured; [`ExConvCode::configure`] derives the schedule. Encodes
/// take `&self` and only touch the buffers they are handed, so one configured
/// instance can be shared across threads.
///
/// After a successful encode the first `message_size` elements of the buffer hold
/// the result. The remaining elements are scratch.
#[derive(Default)]
pub struct ExConvCode {
    configured: Option<Configured>,
}

impl ExConvCode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodeConfig) -> Result<Self, EncoderError> {
        let mut code = Self::new();
        code.configure_with(config)?;
        Ok(code)
    }

    /// Validates the parameters and derives a fresh schedule. On error any
    /// previous configuration stays in place.
    pub fn configure(
        &mut self,
        message_size: u64,
        code_size: u64,
        expander_weight: u64,
        accumulator_size: u64,
    ) -> Result<(), EncoderError> {
        let config = CodeConfig::new(message_size, code_size, expander_weight, accumulator_size)?;
        self.configure_with(config)
    }

    pub fn configure_with(&mut self, config: CodeConfig) -> Result<(), EncoderError> {
        config.validate()?;
        let schedule = Schedule::derive(&config);
        self.configured = Some(Configured { config, schedule });
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.configured.is_some()
    }

    pub fn config(&self) -> Option<&CodeConfig> {
        self.configured.as_ref().map(|c| &c.config)
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.configured.as_ref().map(|c| &c.schedule)
    }

    pub fn message_size(&self) -> Option<usize> {
        self.config().map(CodeConfig::message_size)
    }

    pub fn code_size(&self) -> Option<usize> {
        self.config().map(CodeConfig::code_size)
    }

    fn configured(&self) -> Result<&Configured, EncoderError> {
        self.configured.as_ref().ok_or(EncoderError::NotConfigured)
    }

    fn check_length(expected: usize, actual: usize) -> Result<(), EncoderError> {
        if expected != actual {
            return Err(EncoderError::InvalidLength { expected, actual });
        }
        Ok(())
    }

    pub fn encode_single<F: ElementDomain>(&self, buffer: &mut [F]) -> Result<(), EncoderError> {
        let configured = self.configured()?;
        Self::check_length(configured.config.code_size(), buffer.len())?;
        trace!("Dual encoding {} elements", buffer.len());
        configured.schedule.apply(buffer);
        Ok(())
    }

    pub fn encode_single_bit(&self, buffer: &mut [GF2]) -> Result<(), EncoderError> {
        self.encode_single(buffer)
    }

    pub fn encode_single_block(&self, buffer: &mut [Block]) -> Result<(), EncoderError> {
        self.encode_single(buffer)
    }

    /// Each byte is eight independent bit lanes.
    pub fn encode_single_byte(&self, buffer: &mut [u8]) -> Result<(), EncoderError> {
        self.encode_single(buffer)
    }

    /// Encodes two co-indexed buffers in one pass over the schedule. Each result is
    /// identical to encoding that buffer alone.
    pub fn encode_dual<X: ElementDomain, Y: ElementDomain>(
        &self,
        left: &mut [X],
        right: &mut [Y],
    ) -> Result<(), EncoderError> {
        let configured = self.configured()?;
        let expected = configured.config.code_size();
        let mismatch = EncoderError::LengthMismatch {
            expected,
            left: left.len(),
            right: right.len(),
        };
        if left.len() != expected {
            return Err(mismatch);
        }
        let mut pair = Paired::new(left, right).ok_or(mismatch)?;
        trace!("Dual encoding {} paired elements", expected);
        configured.schedule.apply(&mut pair);
        Ok(())
    }

    pub fn encode_dual_block_bit(
        &self,
        blocks: &mut [Block],
        bits: &mut [GF2],
    ) -> Result<(), EncoderError> {
        self.encode_dual(blocks, bits)
    }

    /// Encodes independent buffers in parallel. All lengths are checked before any
    /// buffer is touched.
    pub fn encode_many<F: ElementDomain, B: AsMut<[F]> + Send>(
        &self,
        buffers: &mut [B],
    ) -> Result<(), EncoderError> {
        let configured = self.configured()?;
        let expected = configured.config.code_size();
        for buffer in buffers.iter_mut() {
            Self::check_length(expected, buffer.as_mut().len())?;
        }
        trace!("Dual encoding {} buffers", buffers.len());
        buffers
            .par_iter_mut()
            .for_each(|buffer| configured.schedule.apply(buffer.as_mut()));
        Ok(())
    }
}

impl Debug for ExConvCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExConvCode")
            .field("config", &self.config())
            .finish()
    }
}
