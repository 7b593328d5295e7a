//! Injectable randomness for the engine

use rand::Rng;

/// Source of the two kinds of draws a tick makes
///
/// Every `rand::Rng` is a source; tests can supply scripted ones.
pub trait RandomSource {
    /// Uniform sample in [0, 1)
    fn unit(&mut self) -> f64;

    /// Uniform integer in [0, upper). `upper` is at least 1.
    fn below(&mut self, upper: u32) -> u32;
}

impl<R: Rng> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn below(&mut self, upper: u32) -> u32 {
        self.gen_range(0..upper)
    }
}
