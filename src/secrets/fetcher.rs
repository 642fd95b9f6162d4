//! Secret retrieval with logging.
//!
//! [`SecretFetcher`] performs one backend request per call, decodes the JSON
//! payload into a [`Secret`] and logs the configured field. Failures are
//! logged once at error level and returned unchanged.

use std::sync::Arc;

use tracing::{debug, error, info, info_span, Instrument, Span};
use zeroize::Zeroizing;

use super::backends::SecretBackend;
use super::secret::Secret;
use super::types::REDACTED;
use crate::config::{FetcherConfig, DEFAULT_REGION};
use crate::errors::{Result, SecretAccessError};

/// Fetches and decodes secrets from a [`SecretBackend`].
///
/// Every call builds a fresh request; nothing is cached between calls, so two
/// fetches of an unchanged secret return equal values.
///
/// Log events are emitted inside the span handed to
/// [`SecretFetcher::with_span`] (or a `secret_fetcher` span created by
/// [`SecretFetcher::new`]).
#[derive(Debug, Clone)]
pub struct SecretFetcher {
    backend: Arc<dyn SecretBackend>,
    config: FetcherConfig,
    span: Span,
}

impl SecretFetcher {
    pub fn new(backend: Arc<dyn SecretBackend>, config: FetcherConfig) -> Self {
        let span = info_span!("secret_fetcher", backend = %backend.backend_type());
        Self::with_span(backend, config, span)
    }

    /// Create a fetcher that logs inside `span`
    pub fn with_span(backend: Arc<dyn SecretBackend>, config: FetcherConfig, span: Span) -> Self {
        Self { backend, config, span }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetch `secret_name` from the store in `region`.
    ///
    /// # Errors
    ///
    /// - [`SecretAccessError::InvalidRequest`] if the name or region is blank
    /// - [`SecretAccessError::RemoteAccess`] if the backend request fails
    /// - [`SecretAccessError::InvalidPayload`] if the payload is not a JSON
    ///   object containing the configured log field
    pub async fn fetch(&self, secret_name: &str, region: &str) -> Result<Secret> {
        async {
            let result = self.try_fetch(secret_name, region).await;
            if let Err(e) = &result {
                error!(
                    secret_name = %secret_name,
                    region = %region,
                    error = %e,
                    "Failed to retrieve secret"
                );
            }
            result
        }
        .instrument(self.span.clone())
        .await
    }

    /// Fetch `secret_name` from the default region (`us-east-1`)
    pub async fn fetch_default_region(&self, secret_name: &str) -> Result<Secret> {
        self.fetch(secret_name, DEFAULT_REGION).await
    }

    async fn try_fetch(&self, secret_name: &str, region: &str) -> Result<Secret> {
        if secret_name.trim().is_empty() {
            return Err(SecretAccessError::invalid_request("secret name cannot be empty"));
        }
        if region.trim().is_empty() {
            return Err(SecretAccessError::invalid_request("region cannot be empty"));
        }

        info!(secret_name = %secret_name, region = %region, "Attempting to retrieve secret");

        let mut payload = self.backend.get_secret_value(secret_name, region).await?;
        debug!(
            secret_name = %secret_name,
            arn = ?payload.arn,
            version_id = ?payload.version_id,
            "Received secret payload"
        );

        let raw = payload.secret_string.take().map(Zeroizing::new).ok_or_else(|| {
            SecretAccessError::invalid_payload(
                secret_name,
                "secret has no string payload (binary secrets are not supported)",
            )
        })?;
        let secret = Secret::from_json(secret_name, &raw)?;

        let field = self.config.log_field.as_str();
        let value = secret.get(field).ok_or_else(|| {
            SecretAccessError::invalid_payload(
                secret_name,
                format!("payload has no '{}' key", field),
            )
        })?;

        if self.config.log_secret_values {
            info!(
                secret_name = %secret_name,
                field = %field,
                "Secret retrieved successfully: {}",
                value.expose_secret()
            );
        } else {
            info!(
                secret_name = %secret_name,
                field = %field,
                value_len = value.len(),
                "Secret retrieved successfully: {}",
                REDACTED
            );
        }

        Ok(secret)
    }
}
