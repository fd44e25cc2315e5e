//! # sigma-ffi
//!
//! C ABI boundary for the Sigma detection engine. Builds as a cdylib
//! exporting a single symbol, `detect_anomalies`, for hosts loading the
//! shared library through a foreign function interface.
//!
//! Architecture:
//! - `runtime` — `SigmaRuntime` singleton via `OnceLock`, initialized
//!   lazily on the first call (hosts perform no init call)
//! - `status` — `DetectError` → C status code mapping
//! - `bindings` — the exported `extern "C"` entry point

pub mod bindings;
pub mod runtime;
pub mod status;

pub use bindings::detect_anomalies;
