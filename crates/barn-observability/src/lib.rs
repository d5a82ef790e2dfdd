//! # barn-observability
//!
//! Tracing subscriber setup and named spans for engine operations.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter, resolve_filter, LOG_ENV_VAR};
