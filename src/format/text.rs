//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::report::Report;

/// Text formatter - outputs the estimate vs. exact comparison
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable comparison"
    }

    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str("\t-- SIMULATION RESULTS --\n");
        output.push_str(&format!(
            "points inside circle: {}. outside: {}.\n",
            report.inside_count(),
            report.outside_count()
        ));

        output.push_str("\t-- AREA --\n");
        output.push_str(&format!(
            "area approximation: {:.6}. real area: {:.6}.\n",
            report.area.estimate, report.area.exact
        ));
        output.push_str(&format!(
            "absolute deviation: {:.6}. relative deviation: {:.6}%.\n",
            report.area.absolute_deviation, report.area.relative_deviation_percent
        ));

        output.push_str("\t-- PI --\n");
        output.push_str(&format!(
            "PI approximation: {:.6}. 'real' PI: {:.6}.\n",
            report.pi.estimate, report.pi.exact
        ));
        output.push_str(&format!(
            "absolute deviation: {:.6}. relative deviation: {:.6}%.\n",
            report.pi.absolute_deviation, report.pi.relative_deviation_percent
        ));

        Ok(output)
    }
}
