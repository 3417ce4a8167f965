//! Monte Carlo sampling of one circle quadrant
//!
//! This module handles:
//! - Drawing points in the bounding square `[0, r] x [0, r]`
//! - Classifying them against the quarter-circle arc
//! - Deriving area and pi estimates from the inside count

pub mod sampler;

pub use sampler::{is_inside, simulate};

use serde::Serialize;

/// Outcome of a single simulation run
///
/// Only the sampler constructs this; both estimates derive from the same
/// `inside_count` and are not independent measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    radius: f64,
    iterations: u64,
    inside_count: u64,
    estimated_area: f64,
    estimated_pi: f64,
}

impl SimulationResult {
    /// Derive the estimates from a finished count
    pub(crate) fn from_count(radius: f64, iterations: u64, inside_count: u64) -> Self {
        debug_assert!(inside_count <= iterations);
        let ratio = inside_count as f64 / iterations as f64;

        Self {
            radius,
            iterations,
            inside_count,
            // area ~ inside / (inside + outside) * r^2
            estimated_area: ratio * radius.powi(2),
            // pi ~ 4 * quarter area / r^2
            estimated_pi: 4.0 * ratio,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Points that landed inside the quarter-circle
    pub fn inside_count(&self) -> u64 {
        self.inside_count
    }

    /// Points that landed outside the quarter-circle
    pub fn outside_count(&self) -> u64 {
        self.iterations - self.inside_count
    }

    /// Monte Carlo estimate of the quarter-circle area
    pub fn estimated_area(&self) -> f64 {
        self.estimated_area
    }

    /// Monte Carlo estimate of pi
    pub fn estimated_pi(&self) -> f64 {
        self.estimated_pi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_count_derivation() {
        let result = SimulationResult::from_count(2.0, 8, 6);

        assert_eq!(result.inside_count(), 6);
        assert_eq!(result.outside_count(), 2);
        assert_eq!(result.estimated_area(), 0.75 * 4.0);
        assert_eq!(result.estimated_pi(), 3.0);
    }

    #[test]
    fn test_from_count_zero_inside() {
        let result = SimulationResult::from_count(1.0, 10, 0);
        assert_eq!(result.estimated_area(), 0.0);
        assert_eq!(result.estimated_pi(), 0.0);
        assert_eq!(result.outside_count(), 10);
    }

    #[test]
    fn test_serialization_fields() {
        let result = SimulationResult::from_count(1.0, 4, 3);
        let value = serde_json::to_value(result).unwrap();

        assert_eq!(value["iterations"], 4);
        assert_eq!(value["inside_count"], 3);
        assert_eq!(value["estimated_pi"], 3.0);
    }
}
