//! JSON reporter
//!
//! Outputs the full VitalityReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::VitalityReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &VitalityReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["current"], 25.0);
        assert_eq!(parsed["age_days"], 400);
        assert_eq!(
            parsed["series"].as_array().expect("series array").len(),
            report.days
        );
    }

    #[test]
    fn test_json_preserves_offset_order() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        let series = parsed["series"].as_array().expect("series array");
        assert_eq!(series[4], 38.0);
    }
}
