//! Point sampling in the bounding square of a circle quadrant

use crate::rng::RandomSource;
use crate::sim::SimulationResult;
use tracing::debug;

/// Run the simulation with the given parameters
///
/// # Arguments
/// * `radius` - Radius of the circle, must be > 0
/// * `iterations` - Number of points to sample, must be >= 1
/// * `rng` - Source of uniform [0, 1) draws
///
/// # Algorithm
/// Each trial scales two draws to a point `(radius*u, radius*v)` in the square
/// `[0, radius] x [0, radius]`. The fraction of points inside the quarter-disk
/// approximates the area ratio pi/4; scaling by the square's area `radius^2`
/// gives the quadrant area estimate.
///
/// # Panics
/// If `radius <= 0` or `iterations == 0`. Callers validate input first.
pub fn simulate(radius: f64, iterations: u64, rng: &mut dyn RandomSource) -> SimulationResult {
    assert!(radius > 0.0, "radius must be positive, got {}", radius);
    assert!(iterations >= 1, "iterations must be at least one");

    debug!(radius, iterations, source = rng.name(), "starting simulation");

    let mut inside_count = 0u64;
    for _ in 0..iterations {
        let (u, v) = rng.point();
        if is_inside(radius * u, radius * v, radius) {
            inside_count += 1;
        }
    }

    debug!(inside_count, "simulation finished");

    SimulationResult::from_count(radius, iterations, inside_count)
}

/// Check if a point lies within the quarter-circle of the given radius
///
/// Points exactly on the arc count as inside. Uses `hypot` so that the
/// distance stays finite for radii whose squares overflow or underflow.
pub fn is_inside(x: f64, y: f64, radius: f64) -> bool {
    x.hypot(y) <= radius
}
