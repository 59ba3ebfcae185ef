//! Tracing setup for the host binary

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "KOMODO_LOG";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Reads the filter from `KOMODO_LOG`, then `RUST_LOG`; installs nothing when
/// neither is set. Events go to stderr so stdout stays the program's.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(filter) = filter_from_env() else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

fn filter_from_env() -> Option<EnvFilter> {
    [LOG_ENV, EnvFilter::DEFAULT_ENV]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
}
