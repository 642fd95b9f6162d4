//! # Configuration Management
//!
//! Environment-driven configuration. With nothing set, the driver reads
//! `top-secret-info-xm9xlg77` in `us-east-1` twice, ten seconds apart.

pub mod settings;

pub use settings::{
    AppConfig, BackendConfig, DriverConfig, FetcherConfig, ObservabilityConfig, DEFAULT_REGION,
    DEFAULT_SECRET_NAME, ENV_PREFIX,
};
