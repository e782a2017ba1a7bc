//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so task results on stdout stay pipeable.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` for this
/// crate and the default is `warn`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "warn,lingo_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
