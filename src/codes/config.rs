use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fields::Block;

/// Seed both parties use unless they agree on another one.
pub const DEFAULT_SEED: Block = Block::from_words(9996754675674599, 56756745976768754);
/// Schedule indices are stored as `u32`.
pub const MAX_CODE_SIZE: u64 = u32::MAX as u64;
pub const DEFAULT_EXPANDER_WEIGHT: u64 = 7;
pub const DEFAULT_ACCUMULATOR_SIZE: u64 = 24;

/// Parameters of an Expand-Convolve code.
///
/// A dual encode maps `code_size` elements to `message_size` elements. Every
/// coordinate is mixed with `expander_weight` later coordinates, then a backward
/// convolution over a window of `accumulator_size` positions folds the tail into the
/// message prefix. Both phases draw their pattern from AES keyed by `seed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeConfig {
    message_size: u64,
    code_size: u64,
    expander_weight: u64,
    accumulator_size: u64,
    seed: Block,
}

impl CodeConfig {
    pub fn new(
        message_size: u64,
        code_size: u64,
        expander_weight: u64,
        accumulator_size: u64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            message_size,
            code_size,
            expander_weight,
            accumulator_size,
            seed: DEFAULT_SEED,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rate 1/2 code with the default weight and accumulator window.
    pub fn with_defaults(message_size: u64) -> Result<Self, ConfigError> {
        let code_size = message_size
            .checked_mul(2)
            .ok_or(ConfigError::CodeTooLarge(u64::MAX))?;
        Self::new(
            message_size,
            code_size,
            DEFAULT_EXPANDER_WEIGHT,
            DEFAULT_ACCUMULATOR_SIZE,
        )
    }

    pub fn with_seed(mut self, seed: Block) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the invariants. A deserialized config has not been through [`CodeConfig::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.message_size == 0 {
            return Err(ConfigError::EmptyMessage);
        }
        if self.code_size < self.message_size {
            return Err(ConfigError::CodeShorterThanMessage {
                message_size: self.message_size,
                code_size: self.code_size,
            });
        }
        if self.code_size > MAX_CODE_SIZE {
            return Err(ConfigError::CodeTooLarge(self.code_size));
        }
        if self.expander_weight == 0 {
            return Err(ConfigError::ZeroExpanderWeight);
        }
        if self.accumulator_size == 0 {
            return Err(ConfigError::ZeroAccumulatorSize);
        }
        Ok(())
    }

    pub fn message_size(&self) -> usize {
        self.message_size as usize
    }

    pub fn code_size(&self) -> usize {
        self.code_size as usize
    }

    /// Weights past the code size behave like the code size.
    pub fn expander_weight(&self) -> usize {
        self.expander_weight.min(self.code_size) as usize
    }

    /// Offsets past the last position never apply, so the window is capped there.
    pub fn accumulator_size(&self) -> usize {
        self.accumulator_size.min(self.code_size) as usize
    }

    pub fn seed(&self) -> Block {
        self.seed
    }

    pub(crate) fn expander_seed(&self) -> Block {
        self.seed
    }

    pub(crate) fn accumulator_seed(&self) -> Block {
        self.seed ^ Block::new(1)
    }
}
