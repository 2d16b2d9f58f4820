//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "ANTICOAG_LOG";

/// Filter used when `ANTICOAG_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "anticoag=info";

/// Initialize the tracing/logging system.
///
/// Reads `ANTICOAG_LOG` for per-crate log levels, e.g.
/// `ANTICOAG_LOG=anticoag_sem=debug,anticoag_paths=warn`.
///
/// Events go to stderr so the fitted table and sentences on stdout stay clean.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
