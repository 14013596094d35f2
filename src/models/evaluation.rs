//! Evaluation records produced by the eval layer.

use serde::{Deserialize, Serialize};

use super::Operation;

/// One applied operation with its operands and result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub operation: Operation,
    pub a: i64,
    pub b: i64,
    pub result: i64,
    /// 1-based line number when the expression came from batch input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// A batch line that could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineError {
    /// 1-based line number in the batch input.
    pub line: usize,
    /// The offending input, trimmed.
    pub input: String,
    pub message: String,
}

/// Outcome of evaluating one or more expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub evaluations: Vec<Evaluation>,
    pub errors: Vec<LineError>,
}

impl BatchReport {
    /// Report holding a single successful evaluation.
    pub fn single(evaluation: Evaluation) -> Self {
        Self {
            evaluations: vec![evaluation],
            errors: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Total number of expressions attempted.
    pub fn len(&self) -> usize {
        self.evaluations.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Summary statistics for a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub failed: usize,
}

impl Summary {
    /// Compute summary from a report.
    pub fn from_report(report: &BatchReport) -> Self {
        Summary {
            total: report.len(),
            failed: report.errors.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Evaluation {
        Evaluation {
            operation: Operation::Add,
            a: 2,
            b: 2,
            result: 4,
            line: None,
        }
    }

    #[test]
    fn single_report_has_no_errors() {
        let report = BatchReport::single(sample());
        assert_eq!(report.len(), 1);
        assert!(!report.has_errors());
        assert!(!report.is_empty());
    }

    #[test]
    fn summary_counts_failures() {
        let report = BatchReport {
            evaluations: vec![sample()],
            errors: vec![LineError {
                line: 2,
                input: "mul 1 2".into(),
                message: "unknown operation: mul".into(),
            }],
        };
        let summary = Summary::from_report(&report);
        assert_eq!(summary, Summary { total: 2, failed: 1 });
    }

    #[test]
    fn evaluation_serializes_lowercase_operation() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["operation"], "add");
        assert_eq!(json["result"], 4);
        assert!(json.get("line").is_none());
    }
}
