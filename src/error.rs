use thiserror::Error;

/// A violated [`CodeConfig`](crate::CodeConfig) invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("message size must be at least 1")]
    EmptyMessage,
    #[error("code size {code_size} is smaller than message size {message_size}")]
    CodeShorterThanMessage { message_size: u64, code_size: u64 },
    #[error("expander weight must be at least 1")]
    ZeroExpanderWeight,
    #[error("accumulator size must be at least 1")]
    ZeroAccumulatorSize,
    #[error("code size {0} does not fit in a u32 schedule index")]
    CodeTooLarge(u64),
}

/// A [`Block`](crate::Block) that could not be read from hex text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed block {0:?}: expected at most 32 hex digits")]
pub struct ParseBlockError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncoderError {
    #[error("invalid code configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("buffer holds {actual} elements but the code size is {expected}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("dual buffers hold {left} and {right} elements but the code size is {expected}")]
    LengthMismatch {
        expected: usize,
        left: usize,
        right: usize,
    },
    #[error("encoder has not been configured")]
    NotConfigured,
}
