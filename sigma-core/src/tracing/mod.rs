//! Observability system for Sigma.
//! `tracing` crate with `EnvFilter`, env-controlled log levels.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;
