//! Diagnostic logging setup.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global `tracing` subscriber on stderr.
///
/// User-facing messages go through [`crate::ConsoleReporter`]; this only
/// carries diagnostics. `verbose` forces debug output, otherwise `RUST_LOG`
/// is honoured with a default of `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
