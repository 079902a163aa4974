//! # Seeded Stream
//! Reproducible stream of `f64` values in `[0, 1)` driven by a 32-bit state
//! (Mulberry32 mixing). Same seed, same infinite sequence; no external entropy.

/// Additive step applied to the state before each draw.
pub const STATE_INCREMENT: u32 = 0x6D2B79F5;

const TWO_POW_32: f64 = 4_294_967_296.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededStream {
    state: u32,
}

impl SeededStream {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current internal state (advances by [`STATE_INCREMENT`] per draw).
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the state and return the next value in `[0, 1)`.
    pub fn next_value(&mut self) -> f64 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / TWO_POW_32
    }
}

impl Iterator for SeededStream {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }
}
