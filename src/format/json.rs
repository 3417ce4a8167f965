//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::report::Report;

/// JSON formatter - outputs the full report as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON report"
    }

    fn format(&self, report: &Report) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::pseudo::PseudoSource;
    use crate::sim::simulate;

    #[test]
    fn test_json_format() {
        let result = simulate(5.0, 100, &mut PseudoSource::seeded(12345));
        let output = JsonFormatter.format(&Report::new(&result)).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["simulation"]["radius"], 5.0);
        assert_eq!(parsed["simulation"]["iterations"], 100);
        assert!(parsed["area"].get("relative_deviation_percent").is_some());
        assert!(parsed["pi"].get("absolute_deviation").is_some());
        assert_eq!(parsed["pi"]["exact"], std::f64::consts::PI);
    }

    #[test]
    fn test_json_formatter_info() {
        let formatter = JsonFormatter;
        assert_eq!(formatter.name(), "json");
        assert!(!formatter.description().is_empty());
    }
}
