//! Random sources for the sampler
//!
//! This module defines the `RandomSource` trait and its implementations. The
//! sampler never reaches for a global generator; the caller hands it a source,
//! which lets tests substitute fixed or scripted sequences.

pub mod fixed;
pub mod pseudo;

/// A source of independent uniform draws in [0.0, 1.0)
pub trait RandomSource: Send {
    /// Returns the source name (e.g., "pseudo", "fixed")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of this source
    fn description(&self) -> &'static str;

    /// Draw a single float uniformly distributed in [0.0, 1.0)
    fn float(&mut self) -> f64;

    /// Draw a pair of independent floats, x first
    fn point(&mut self) -> (f64, f64) {
        let u = self.float();
        let v = self.float();
        (u, v)
    }
}
