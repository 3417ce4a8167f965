//! Run configuration
//!
//! Turns the raw command-line text into validated simulation parameters.
//! Checks run in a fixed order: radius first, then iterations, so the first
//! offending argument determines the message.

pub mod defaults;

use crate::error::{Error, Result};
use defaults::DEFAULT_FORMAT;

/// Validated parameters for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Circle radius, finite and > 0
    pub radius: f64,

    /// Number of sampled points, >= 1
    pub iterations: u64,

    /// Output format name
    pub format: String,
}

impl SimulationConfig {
    /// Validate raw arguments into a config
    ///
    /// Unparseable text is reported as a parse error rather than coerced to
    /// zero.
    pub fn from_args(radius: &str, iterations: &str, format: Option<&str>) -> Result<Self> {
        let radius = parse_radius(radius)?;
        let iterations = parse_iterations(iterations)?;

        Ok(Self {
            radius,
            iterations,
            format: format.unwrap_or(DEFAULT_FORMAT).to_string(),
        })
    }
}

/// Parse and validate the radius argument
pub fn parse_radius(text: &str) -> Result<f64> {
    let radius: f64 = text.trim().parse().map_err(|_| Error::Parse {
        name: "radius R",
        value: text.to_string(),
    })?;

    if !radius.is_finite() {
        return Err(Error::NonFiniteRadius);
    }
    if radius <= 0.0 {
        return Err(Error::InvalidRadius);
    }
    // exact area is r^2 * pi / 4
    if !radius.powi(2).is_finite() {
        return Err(Error::RadiusTooLarge);
    }

    Ok(radius)
}

/// Parse and validate the iteration count argument
///
/// Parsed as signed so that negative counts get the range message instead of
/// a parse error.
pub fn parse_iterations(text: &str) -> Result<u64> {
    let iterations: i64 = text.trim().parse().map_err(|_| Error::Parse {
        name: "iterations N",
        value: text.to_string(),
    })?;

    if iterations < 1 {
        return Err(Error::InvalidIterations);
    }

    Ok(iterations as u64)
}
