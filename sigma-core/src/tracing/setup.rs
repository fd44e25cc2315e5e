//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Sigma tracing/logging system.
///
/// Reads the `SIGMA_LOG` environment variable for log levels.
/// Format: `SIGMA_LOG=sigma_analysis=debug,sigma_ffi=info`
///
/// Falls back to `sigma=info` if `SIGMA_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SIGMA_LOG")
            .unwrap_or_else(|_| EnvFilter::new("sigma=info"));

        // try_init, not init: the host process may have installed its
        // own global subscriber before loading this library.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
