//! AWS Secrets Manager backend implementation
//!
//! Reads the current version of a secret with `GetSecretValue`.
//!
//! ## Configuration
//!
//! - Region: passed with every call; a client scoped to that region is built
//!   per request and dropped afterwards.
//! - Credentials: the standard AWS provider chain (environment, profile, IMDS,
//!   ...), unless explicit credentials are supplied.
//! - `SECRET_ACCESS_AWS_ENDPOINT_URL`: optional endpoint override, e.g. for
//!   LocalStack.
//!
//! The SDK retry layer is disabled: one fetch is one HTTP request.
//!
//! ## Secret Format in AWS
//!
//! The secret must be stored as a `SecretString` holding a JSON object:
//! ```json
//! { "secret": "hunter2" }
//! ```

use super::backend::{SecretBackend, SecretBackendType, SecretPayload};
use crate::errors::{RemoteFailureKind, Result, SecretAccessError};
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::config::Credentials;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::Client;
use tracing::{debug, info};

/// AWS Secrets Manager backend
#[derive(Clone, Default)]
pub struct AwsSecretsManagerBackend {
    endpoint_url: Option<String>,
    credentials: Option<Credentials>,
}

impl std::fmt::Debug for AwsSecretsManagerBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsManagerBackend")
            .field("endpoint_url", &self.endpoint_url)
            .field("credentials", &self.credentials.as_ref().map(|_| "[static]"))
            .finish()
    }
}

impl AwsSecretsManagerBackend {
    /// Create a backend using the default credential chain
    pub fn new(endpoint_url: Option<String>) -> Self {
        if let Some(endpoint) = &endpoint_url {
            info!(endpoint_url = %endpoint, "Using custom AWS Secrets Manager endpoint");
        }
        Self {
            endpoint_url,
            credentials: None,
        }
    }

    /// Use fixed credentials instead of the provider chain
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Build a client scoped to `region`
    async fn client(&self, region: &str) -> Client {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        if let Some(credentials) = &self.credentials {
            loader = loader.credentials_provider(credentials.clone());
        }

        Client::new(&loader.load().await)
    }
}

#[async_trait]
impl SecretBackend for AwsSecretsManagerBackend {
    async fn get_secret_value(&self, secret_id: &str, region: &str) -> Result<SecretPayload> {
        let client = self.client(region).await;

        debug!(
            secret_id = %secret_id,
            region = %region,
            "Requesting secret value from AWS Secrets Manager"
        );

        match client.get_secret_value().secret_id(secret_id).send().await {
            Ok(output) => Ok(SecretPayload {
                secret_string: output.secret_string().map(str::to_owned),
                arn: output.arn().map(str::to_owned),
                name: output.name().map(str::to_owned),
                version_id: output.version_id().map(str::to_owned),
            }),
            Err(err) => Err(SecretAccessError::remote_access(
                secret_id,
                region,
                failure_kind(&err),
                DisplayErrorContext(&err).to_string(),
            )),
        }
    }

    fn backend_type(&self) -> SecretBackendType {
        SecretBackendType::AwsSecretsManager
    }
}

/// Map an SDK failure onto a [`RemoteFailureKind`]
fn failure_kind<R>(err: &SdkError<GetSecretValueError, R>) -> RemoteFailureKind {
    match err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => RemoteFailureKind::Network,
        _ => match err.as_service_error() {
            Some(GetSecretValueError::ResourceNotFoundException(_)) => RemoteFailureKind::NotFound,
            Some(GetSecretValueError::DecryptionFailure(_)) => RemoteFailureKind::AccessDenied,
            Some(
                GetSecretValueError::InvalidParameterException(_)
                | GetSecretValueError::InvalidRequestException(_),
            ) => RemoteFailureKind::InvalidRequest,
            Some(GetSecretValueError::InternalServiceError(_)) => {
                RemoteFailureKind::ServiceUnavailable
            }
            // AccessDenied, throttling and auth errors are unmodeled; use the code
            Some(other) => RemoteFailureKind::from_error_code(other.code()),
            None => RemoteFailureKind::Other,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_secretsmanager::types::error::ResourceNotFoundException;

    #[test]
    fn test_timeout_is_network_failure() {
        let err: SdkError<GetSecretValueError, ()> = SdkError::timeout_error("timed out");
        assert_eq!(failure_kind(&err), RemoteFailureKind::Network);
    }

    #[test]
    fn test_resource_not_found_is_not_found() {
        let service_err = GetSecretValueError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Secrets Manager can't find the specified secret.")
                .build(),
        );
        let err: SdkError<GetSecretValueError, ()> = SdkError::service_error(service_err, ());
        assert_eq!(failure_kind(&err), RemoteFailureKind::NotFound);
    }

    #[test]
    fn test_debug_hides_credentials() {
        let backend = AwsSecretsManagerBackend::new(None).with_credentials(Credentials::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI",
            None,
            None,
            "test",
        ));
        let debug = format!("{:?}", backend);
        assert!(!debug.contains("wJalrXUtnFEMI"));
        assert!(debug.contains("[static]"));
    }

    #[test]
    fn test_backend_type() {
        assert_eq!(
            AwsSecretsManagerBackend::default().backend_type(),
            SecretBackendType::AwsSecretsManager
        );
    }
}
