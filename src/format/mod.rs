//! Output formatters
//!
//! Provides trait-based output formatting for simulation reports.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::report::Report;
use serde::Serialize;

/// Information about an output format
#[derive(Debug, Clone, Serialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the simulation report
    fn format(&self, report: &Report) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable comparison".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "Full JSON report".to_string(),
        },
    ]
}
