// src/logger.rs
//! Diagnostic logging through `tracing`.
//!
//! The user-facing summary is printed directly; this covers debug output
//! from the loaders and the builder.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Safe to call more than once.
///
/// `verbose` enables debug output, `quiet` limits it to errors, otherwise
/// `RUST_LOG` is honored with `info` as the fallback.
pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("depgraph_core=debug")
    } else if quiet {
        EnvFilter::new("depgraph_core=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("depgraph_core=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
