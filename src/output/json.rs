//! JSON output renderer.
//!
//! Outputs `{"evaluations": [...], "errors": [...], "summary": {...}}` format.

use crate::models::{BatchReport, Summary};
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, report: &BatchReport) -> String {
        let summary = Summary::from_report(report);

        let output = serde_json::json!({
            "evaluations": report.evaluations,
            "errors": report.errors,
            "summary": summary,
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Evaluation, LineError, Operation};

    #[test]
    fn render_json() {
        let report = BatchReport {
            evaluations: vec![Evaluation {
                operation: Operation::Sub,
                a: 2,
                b: 2,
                result: 0,
                line: Some(1),
            }],
            errors: vec![LineError {
                line: 3,
                input: "add 1".into(),
                message: "expected `<op> <a> <b>`, got 2 token(s)".into(),
            }],
        };

        let output = JsonRenderer.render(&report);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["evaluations"][0]["operation"], "sub");
        assert_eq!(parsed["evaluations"][0]["result"], 0);
        assert_eq!(parsed["errors"][0]["line"], 3);
        assert_eq!(parsed["summary"]["total"], 2);
        assert_eq!(parsed["summary"]["failed"], 1);
    }

    #[test]
    fn render_empty_json() {
        let output = JsonRenderer.render(&BatchReport::default());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["evaluations"].as_array().unwrap().len(), 0);
        assert_eq!(parsed["summary"]["total"], 0);
    }
}
