//! Log setup shared by the command-line tools.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Install a `tracing` subscriber writing to stderr.
///
/// The level comes from `RUST_LOG` (for example `RUST_LOG=question_assets=debug`),
/// falling back to [`DEFAULT_FILTER`]. Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
