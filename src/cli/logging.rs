//! stderr diagnostics; stdout is reserved for the histogram.

use tracing_subscriber::{EnvFilter, fmt};

/// `RUST_LOG` decides the level (default `warn`); `--debug` forces `debug`.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // a subscriber may already be installed (tests, embedding)
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
