//! CLI command definitions and process setup.
//!
//! Uses clap derive macros for argument definitions.

pub mod args;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` is honoured and
/// falls back to warnings only.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("srpcalc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
