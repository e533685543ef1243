//! RNG module - injected random source
//!
//! The simulation never touches a process-wide generator. Everything that
//! needs randomness takes a `&mut impl RandomSource`, so a fixed seed replays
//! the exact same rain.
//!
//! Also provides a simple LCG that the binary and the tests share.

/// Uniform random integer source.
pub trait RandomSource {
    /// Next value, uniform over the full `u32` range.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, max)`. Returns 0 when `max` is 0.
    fn next_range(&mut self, max: u32) -> u32 {
        // High bits: the low bits of an LCG cycle with a short period.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform value in `[0.0, 1.0]`.
    fn next_unit(&mut self) -> f32 {
        (self.next_u32() as f64 / u32::MAX as f64) as f32
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
