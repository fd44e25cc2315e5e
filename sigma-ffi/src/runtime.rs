//! SigmaRuntime — singleton via `OnceLock`, lock-free after initialization.
//!
//! The runtime owns the ambient configuration and performs the one-time
//! process setup the host never asks for: tracing subscription and,
//! when configured, the rayon global pool size. Hosts load the shared
//! library and call `detect_anomalies` directly; the first call pays for
//! initialization, every later call is a plain read of the `OnceLock`.

use std::sync::OnceLock;

use sigma_core::config::SigmaConfig;
use sigma_core::constants::VERSION;
use sigma_core::tracing::init_tracing;

static RUNTIME: OnceLock<SigmaRuntime> = OnceLock::new();

/// Process-wide state for the FFI surface.
pub struct SigmaRuntime {
    pub config: SigmaConfig,
}

impl SigmaRuntime {
    fn init() -> Self {
        init_tracing();

        let config = SigmaConfig::ambient();

        // Size the global pool only when explicitly configured; 0 keeps
        // rayon's default (available cores). A pool built earlier by the
        // host wins.
        let threads = config.runtime.effective_threads();
        if threads > 0 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .ok();
        }

        tracing::info!(
            version = VERSION,
            threads,
            min_split_len = config.runtime.effective_min_split_len(),
            "sigma runtime initialized"
        );

        Self { config }
    }

    /// Parallelism floor for the detection phases.
    pub fn min_split_len(&self) -> usize {
        self.config.runtime.effective_min_split_len()
    }
}

/// Get the runtime, initializing it on the first call.
pub fn get() -> &'static SigmaRuntime {
    RUNTIME.get_or_init(SigmaRuntime::init)
}
