//! Terminal renderer: one styled line per expression.

use colored::Colorize;

use crate::models::{BatchReport, Summary};
use crate::output::OutputRenderer;

/// Terminal output renderer with coloured text.
///
/// Colour can be switched off globally via `colored::control::set_override`.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, report: &BatchReport) -> String {
        if report.is_empty() {
            return format!("{}\n", "  No expressions to evaluate.".dimmed());
        }

        // Rows keyed by input line; evaluations without one come first.
        let mut rows: Vec<(usize, String)> = Vec::with_capacity(report.len());

        for e in &report.evaluations {
            rows.push((
                e.line.unwrap_or(0),
                format!(
                    "{} {} {} = {}\n",
                    e.a,
                    e.operation.symbol(),
                    e.b,
                    e.result.to_string().green().bold()
                ),
            ));
        }

        for err in &report.errors {
            rows.push((
                err.line,
                format!(
                    " {} line {}: {} ({})\n",
                    "✖".red().bold(),
                    err.line,
                    err.input.bold(),
                    err.message.red()
                ),
            ));
        }

        rows.sort_by_key(|(line, _)| *line);
        let mut output: String = rows.into_iter().map(|(_, row)| row).collect();

        if report.len() > 1 {
            let summary = Summary::from_report(report);
            output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
            output.push_str(&format!(
                " {} expressions, {} failed\n",
                summary.total.to_string().bold(),
                if summary.failed > 0 {
                    summary.failed.to_string().red().bold()
                } else {
                    summary.failed.to_string().green().bold()
                },
            ));
        }

        output
    }
}
