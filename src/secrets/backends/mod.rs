//! Pluggable secret backends
//!
//! A backend performs the single remote request behind a fetch. Cloud
//! backends are compiled only with their cargo feature.

#[cfg(feature = "aws")]
pub mod aws;
pub mod backend;
pub mod env;

#[cfg(feature = "aws")]
pub use aws::AwsSecretsManagerBackend;
pub use backend::{SecretBackend, SecretBackendType, SecretPayload};
pub use env::EnvSecretBackend;

use crate::config::BackendConfig;
use crate::errors::Result;
use std::sync::Arc;
use tracing::info;

/// Build the backend selected by configuration
pub fn backend_from_config(config: &BackendConfig) -> Result<Arc<dyn SecretBackend>> {
    info!(backend_type = %config.backend_type, "Initializing secret backend");

    match config.backend_type {
        SecretBackendType::Env => Ok(Arc::new(EnvSecretBackend::new())),
        #[cfg(feature = "aws")]
        SecretBackendType::AwsSecretsManager => {
            Ok(Arc::new(AwsSecretsManagerBackend::new(config.aws_endpoint_url.clone())))
        }
        #[cfg(not(feature = "aws"))]
        SecretBackendType::AwsSecretsManager => Err(crate::errors::SecretAccessError::config(
            "AWS Secrets Manager backend requires the 'aws' feature",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_config_env() {
        let config = BackendConfig {
            backend_type: SecretBackendType::Env,
            aws_endpoint_url: None,
        };
        let backend = backend_from_config(&config).unwrap();
        assert_eq!(backend.backend_type(), SecretBackendType::Env);
    }

    #[cfg(feature = "aws")]
    #[test]
    fn test_backend_from_config_aws() {
        let backend = backend_from_config(&BackendConfig::default()).unwrap();
        assert_eq!(backend.backend_type(), SecretBackendType::AwsSecretsManager);
    }

    #[cfg(not(feature = "aws"))]
    #[test]
    fn test_backend_from_config_aws_without_feature() {
        let result = backend_from_config(&BackendConfig::default());
        assert!(matches!(result, Err(crate::errors::SecretAccessError::Config { .. })));
    }
}
