use std::time::Instant;

use log::debug;

use super::accumulator::Accumulator;
use super::config::CodeConfig;
use super::coordinates::Coordinates;
use super::expander::Expander;

/// Everything an encode needs besides the buffer. Read-only once derived, so
/// one schedule serves any number of concurrent encodes.
#[derive(Debug)]
pub struct Schedule {
    expander: Expander,
    accumulator: Accumulator,
}

impl Schedule {
    pub fn derive(config: &CodeConfig) -> Self {
        let time = Instant::now();
        let (expander, accumulator) = rayon::join(
            || Expander::derive(config),
            || Accumulator::derive(config),
        );
        debug!(
            "Derived ExConv schedule for k={} n={} w={} a={} in {}ms",
            config.message_size(),
            config.code_size(),
            expander.weight(),
            accumulator.width(),
            time.elapsed().as_millis()
        );
        Self {
            expander,
            accumulator,
        }
    }

    pub fn expander(&self) -> &Expander {
        &self.expander
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// Runs the expander then the accumulator. Afterwards the message occupies the
    /// prefix of `x` and the rest is scratch.
    pub fn apply<C: Coordinates + ?Sized>(&self, x: &mut C) {
        self.expander.apply(x);
        self.accumulator.apply(x);
    }
}
