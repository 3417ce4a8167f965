//! quadrant-pi: Monte Carlo estimation of pi
//!
//! Samples uniformly random points in the bounding square of one circle
//! quadrant, counts how many land inside the quarter-circle, and compares the
//! resulting area and pi estimates against their exact values.
//!
//! ## Quick Start
//!
//! ```rust
//! use quadrant_pi::rng::pseudo::PseudoSource;
//! use quadrant_pi::report::Report;
//! use quadrant_pi::sim::simulate;
//!
//! let mut source = PseudoSource::seeded(42);
//! let result = simulate(5.0, 10_000, &mut source);
//! let report = Report::new(&result);
//!
//! println!("pi ~ {} (off by {:.4}%)", result.estimated_pi(), report.pi.relative_deviation_percent);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod report;
pub mod rng;
pub mod sim;

// Re-export commonly used types
pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use report::{Comparison, Report};
pub use rng::RandomSource;
pub use sim::SimulationResult;
