//! Configuration loading and layering.
//!
//! Handles `.srpcalc.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering.

pub mod loader;

pub use loader::{ArithmeticConfig, Config, ConfigError, OutputConfig};
