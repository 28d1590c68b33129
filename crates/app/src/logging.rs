use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Installs the global `tracing` subscriber.
///
/// Log output goes to stderr. The filter comes from `RUST_LOG` when it is set,
/// e.g. `RUST_LOG=sirview=debug` to see every recompute.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
