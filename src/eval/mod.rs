//! Evaluation layer around [`Calc`].
//!
//! Applies the configured overflow policy and turns textual expressions
//! (`add 2 2`, `- 10 3`) into [`Evaluation`] records. `Calc` stays pure;
//! everything that can fail lives here.

pub mod parser;

use thiserror::Error;

use crate::calc::Calc;
use crate::constants::COMMENT_PREFIX;
use crate::models::{BatchReport, Evaluation, LineError, Operation, OverflowMode};

pub use parser::parse_expression;

/// Errors from parsing or evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("expected `<op> <a> <b>`, got {found} token(s)")]
    Arity { found: usize },

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("invalid operand {value:?}: {reason}")]
    InvalidOperand { value: String, reason: String },

    #[error("{operation} {a} {b} overflows i64")]
    Overflow { operation: Operation, a: i64, b: i64 },
}

/// Applies operations through [`Calc`] under an [`OverflowMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    calc: Calc,
    mode: OverflowMode,
}

impl Evaluator {
    pub fn new(mode: OverflowMode) -> Self {
        Self { calc: Calc, mode }
    }

    pub fn mode(&self) -> OverflowMode {
        self.mode
    }

    /// Apply `op` to `a` and `b`.
    ///
    /// Never fails in [`OverflowMode::Wrapping`].
    pub fn apply(&self, operation: Operation, a: i64, b: i64) -> Result<Evaluation, EvalError> {
        let result = match (self.mode, operation) {
            (OverflowMode::Wrapping, Operation::Add) => Some(self.calc.add(a, b)),
            (OverflowMode::Wrapping, Operation::Sub) => Some(self.calc.sub(a, b)),
            (OverflowMode::Checked, Operation::Add) => self.calc.checked_add(a, b),
            (OverflowMode::Checked, Operation::Sub) => self.calc.checked_sub(a, b),
        };
        let result = result.ok_or(EvalError::Overflow { operation, a, b })?;

        tracing::debug!(%operation, a, b, result, "evaluated");
        Ok(Evaluation {
            operation,
            a,
            b,
            result,
            line: None,
        })
    }

    /// Parse and apply a single expression.
    pub fn evaluate_line(&self, line: &str) -> Result<Evaluation, EvalError> {
        let (operation, a, b) = parse_expression(line)?;
        self.apply(operation, a, b)
    }

    /// Evaluate every expression in `input`, one per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. A failing line
    /// is recorded in [`BatchReport::errors`] and evaluation continues.
    pub fn evaluate_batch(&self, input: &str) -> BatchReport {
        let mut report = BatchReport::default();

        for (idx, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            match self.evaluate_line(line) {
                Ok(evaluation) => report.evaluations.push(Evaluation {
                    line: Some(idx + 1),
                    ..evaluation
                }),
                Err(e) => {
                    tracing::warn!(line = idx + 1, error = %e, "skipping expression");
                    report.errors.push(LineError {
                        line: idx + 1,
                        input: line.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            evaluated = report.evaluations.len(),
            failed = report.errors.len(),
            "batch complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_apply_never_fails() {
        let ev = Evaluator::new(OverflowMode::Wrapping);
        let e = ev.apply(Operation::Add, i64::MAX, 1).unwrap();
        assert_eq!(e.result, i64::MIN);
        let e = ev.apply(Operation::Sub, i64::MIN, 1).unwrap();
        assert_eq!(e.result, i64::MAX);
    }

    #[test]
    fn checked_apply_reports_overflow() {
        let ev = Evaluator::new(OverflowMode::Checked);
        let err = ev.apply(Operation::Add, i64::MAX, 1).unwrap_err();
        assert_eq!(
            err,
            EvalError::Overflow {
                operation: Operation::Add,
                a: i64::MAX,
                b: 1
            }
        );
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn checked_apply_passes_in_range() {
        let ev = Evaluator::new(OverflowMode::Checked);
        assert_eq!(ev.apply(Operation::Add, 2, 2).unwrap().result, 4);
        assert_eq!(ev.apply(Operation::Sub, 2, 2).unwrap().result, 0);
    }

    #[test]
    fn evaluate_line_parses_and_applies() {
        let ev = Evaluator::default();
        let e = ev.evaluate_line("sub 10 -5").unwrap();
        assert_eq!(e.operation, Operation::Sub);
        assert_eq!(e.result, 15);
    }

    #[test]
    fn batch_skips_comments_and_blanks() {
        let ev = Evaluator::default();
        let report = ev.evaluate_batch("# header\n\nadd 1 2\n   \nsub 5 3\n");
        assert_eq!(report.evaluations.len(), 2);
        assert!(report.errors.is_empty());
        assert_eq!(report.evaluations[0].result, 3);
        assert_eq!(report.evaluations[1].result, 2);
        assert_eq!(report.evaluations[0].line, Some(3));
        assert_eq!(report.evaluations[1].line, Some(5));
    }

    #[test]
    fn batch_collects_errors_and_continues() {
        let ev = Evaluator::default();
        let report = ev.evaluate_batch("add 1 1\nmul 2 3\nadd x 1\nsub 9 4");
        assert_eq!(report.evaluations.len(), 2);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].line, 2);
        assert_eq!(report.errors[0].input, "mul 2 3");
        assert_eq!(report.errors[1].line, 3);
        assert_eq!(report.evaluations[1].result, 5);
    }

    #[test]
    fn batch_of_nothing_is_empty() {
        let report = Evaluator::default().evaluate_batch("");
        assert!(report.is_empty());
    }
}
