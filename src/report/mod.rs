//! Comparison of simulation estimates against exact values

use crate::sim::SimulationResult;
use serde::Serialize;
use std::f64::consts::PI;

/// An estimate paired with its exact value and the deviations between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub estimate: f64,
    pub exact: f64,
    /// `|estimate - exact|`
    pub absolute_deviation: f64,
    /// Difference as a percentage of the larger of the two values
    pub relative_deviation_percent: f64,
}

impl Comparison {
    pub fn new(estimate: f64, exact: f64) -> Self {
        Self {
            estimate,
            exact,
            absolute_deviation: (estimate - exact).abs(),
            relative_deviation_percent: relative_deviation(estimate, exact),
        }
    }
}

/// Full report for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub simulation: SimulationResult,
    pub area: Comparison,
    pub pi: Comparison,
}

impl Report {
    /// Build the report for a finished simulation
    pub fn new(result: &SimulationResult) -> Self {
        Self {
            simulation: *result,
            area: Comparison::new(result.estimated_area(), exact_area(result.radius())),
            pi: Comparison::new(result.estimated_pi(), PI),
        }
    }

    pub fn inside_count(&self) -> u64 {
        self.simulation.inside_count()
    }

    pub fn outside_count(&self) -> u64 {
        self.simulation.outside_count()
    }
}

/// Exact area of a circle quadrant: `r^2 * pi / 4`
pub fn exact_area(radius: f64) -> f64 {
    radius.powi(2) * PI / 4.0
}

/// Symmetric relative deviation in percent
///
/// `(1 - min(a, b) / max(a, b)) * 100`. Equal values (including two zeros)
/// give 0; a zero estimate against a positive exact value gives 100.
pub fn relative_deviation(a: f64, b: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    (1.0 - a.min(b) / a.max(b)) * 100.0
}
