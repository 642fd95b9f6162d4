//! # Observability Infrastructure
//!
//! Structured logging for secret-access. The subscriber is installed once at
//! process start; components receive span handles instead of reaching for
//! global state.

pub mod logging;

pub use logging::{build_env_filter, init_logging, log_config_info};
