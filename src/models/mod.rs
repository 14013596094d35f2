//! Shared types used across all modules.
//!
//! Operations, overflow and output settings, and evaluation records.
//! Other modules import from here rather than reaching into each
//! other's internals.

pub mod evaluation;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use evaluation::{BatchReport, Evaluation, LineError, Summary};

/// An arithmetic operation supported by [`crate::calc::Calc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Sub,
}

impl Operation {
    /// Infix symbol used when rendering, e.g. `2 + 2`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Sub => write!(f, "sub"),
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "sub" | "-" => Ok(Operation::Sub),
            _ => Err(format!("unknown operation: {s}")),
        }
    }
}

/// What to do when a result does not fit in an `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverflowMode {
    /// Two's complement wraparound.
    #[default]
    Wrapping,
    /// Report an error instead of wrapping.
    Checked,
}

impl fmt::Display for OverflowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowMode::Wrapping => write!(f, "wrapping"),
            OverflowMode::Checked => write!(f, "checked"),
        }
    }
}

impl std::str::FromStr for OverflowMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wrapping" | "wrap" => Ok(OverflowMode::Wrapping),
            "checked" | "check" => Ok(OverflowMode::Checked),
            _ => Err(format!("unknown overflow mode: {s}")),
        }
    }
}

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured human-readable text.
    #[default]
    Terminal,
    /// Machine-readable JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "text" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}
