// src/logging.rs
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Filter used by the binaries: `debug` when verbose, otherwise `RUST_LOG`,
/// falling back to warnings only.
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a stderr `fmt` subscriber. Stdout stays reserved for results.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
