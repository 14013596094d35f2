//! App-wide constants.
//!
//! Centralises the tool name, config paths and environment variable names
//! so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "srpcalc";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was built for.
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.srpcalc.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".srpcalc.toml";

/// Directory name under the platform config dir for global config.
pub const CONFIG_DIR: &str = "srpcalc";

/// Lines starting with this marker are skipped in batch input.
pub const COMMENT_PREFIX: char = '#';

// ── Environment variable names ──────────────────────────────────────

pub const ENV_OVERFLOW: &str = "SRPCALC_OVERFLOW";
pub const ENV_FORMAT: &str = "SRPCALC_FORMAT";
pub const ENV_NO_COLOR: &str = "SRPCALC_NO_COLOR";
