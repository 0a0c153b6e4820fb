//! Diagnostic logging setup.
//!
//! Library code emits `tracing` events; the binary installs a stderr
//! subscriber here. `XCSYNC_LOG` takes a standard `EnvFilter` directive and
//! wins over the `-v` flag.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "XCSYNC_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "xcsync=debug" } else { "warn" }
}

pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
