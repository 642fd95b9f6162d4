//! # secret-access
//!
//! Retrieves a JSON secret from a cloud secrets store and logs repeated
//! access to it.
//!
//! ## Architecture
//!
//! ```text
//! main → Driver → SecretFetcher → SecretBackend → AWS Secrets Manager
//!                      ↓
//!              Secret (decoded JSON object)
//! ```
//!
//! ## Core Components
//!
//! - **Driver**: runs a fixed number of fetch attempts with a pause between them
//! - **SecretFetcher**: one request per call, JSON decoding, logging
//! - **Backends**: AWS Secrets Manager (`aws` feature) and environment variables
//! - **Configuration**: `SECRET_ACCESS_*` environment variables with defaults
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use secret_access::{config::AppConfig, secrets, Driver, Result, SecretFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let backend = secrets::backend_from_config(&config.backend)?;
//!     let fetcher = SecretFetcher::new(backend, config.fetcher.clone());
//!     Driver::new(fetcher, config.driver.clone()).run().await
//! }
//! ```

pub mod config;
pub mod driver;
pub mod errors;
pub mod observability;
pub mod secrets;

// Re-export commonly used types
pub use config::AppConfig;
pub use driver::Driver;
pub use errors::{RemoteFailureKind, Result, SecretAccessError};
pub use secrets::{Secret, SecretFetcher};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
