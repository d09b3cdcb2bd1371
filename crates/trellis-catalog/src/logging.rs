//! Diagnostic logging to stderr.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `TRELLIS_LOG=trellis=debug`.
pub const LOG_ENV: &str = "TRELLIS_LOG";

const DEFAULT_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Installs the global subscriber. Safe to call more than once.
///
/// Falls back to `warn` when `TRELLIS_LOG` is unset or invalid.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}
