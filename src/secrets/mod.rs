//! Secret retrieval from a remote secrets store.
//!
//! # Architecture
//!
//! - [`SecretFetcher`] is the entry point: one call, one request, one decoded
//!   [`Secret`].
//! - [`backends::SecretBackend`] is the seam to the store. The AWS Secrets
//!   Manager backend is compiled with the `aws` feature; the environment
//!   backend is always available for development.
//! - [`SecretString`] keeps decoded values out of `Debug`, `Display` and
//!   serialized output.
//!
//! # Example
//!
//! ```rust,ignore
//! use secret_access::config::FetcherConfig;
//! use secret_access::secrets::{backends::EnvSecretBackend, SecretFetcher};
//! use std::sync::Arc;
//!
//! let fetcher = SecretFetcher::new(Arc::new(EnvSecretBackend::new()), FetcherConfig::default());
//! let secret = fetcher.fetch("top-secret-info-xm9xlg77", "us-east-1").await?;
//! let value = secret.get("secret").map(|v| v.expose_secret());
//! ```
//!
//! # Security Considerations
//!
//! - The logged field is redacted unless plaintext logging is configured
//! - Raw payloads are zeroed after decoding
//! - Nothing is cached between calls

pub mod backends;
pub mod fetcher;
pub mod secret;
pub mod types;

pub use backends::{backend_from_config, SecretBackend, SecretBackendType, SecretPayload};
pub use fetcher::SecretFetcher;
pub use secret::Secret;
pub use types::{SecretString, REDACTED};
