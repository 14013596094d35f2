//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::models::{BatchReport, OutputFormat};

/// Trait for rendering evaluation results to an output format.
pub trait OutputRenderer {
    /// Render a report to a string.
    fn render(&self, report: &BatchReport) -> String;
}

/// Pick the renderer for a configured format.
pub fn renderer_for(format: OutputFormat) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Terminal => Box::new(terminal::TerminalRenderer),
        OutputFormat::Json => Box::new(json::JsonRenderer),
    }
}
