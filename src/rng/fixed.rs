//! Deterministic sources for boundary testing
//!
//! Values are returned as given, without clamping to [0, 1). A `FixedSource`
//! of 1.0 places every point on the far corner of the bounding square.

use crate::rng::RandomSource;

/// Returns the same value for every draw
pub struct FixedSource {
    value: f64,
}

impl FixedSource {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl RandomSource for FixedSource {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn description(&self) -> &'static str {
        "Constant value source (for testing)"
    }

    fn float(&mut self) -> f64 {
        self.value
    }
}

/// Cycles through a scripted list of values
pub struct SequenceSource {
    values: Vec<f64>,
    next: usize,
}

impl SequenceSource {
    /// Create a source that replays `values` in order, wrapping at the end
    ///
    /// An empty list behaves like a `FixedSource` of 0.0.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn name(&self) -> &'static str {
        "sequence"
    }

    fn description(&self) -> &'static str {
        "Scripted value sequence (for testing)"
    }

    fn float(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}
