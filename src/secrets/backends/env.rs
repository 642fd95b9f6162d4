//! Environment variable secret backend.
//!
//! Intended for **development and testing only**. The payload of secret
//! `<name>` is read from `SECRET_ACCESS_VALUE_<NAME>`, with the name upper
//! cased and `-`, `/` and `.` replaced by `_`:
//!
//! ```bash
//! export SECRET_ACCESS_BACKEND=env
//! export SECRET_ACCESS_VALUE_TOP_SECRET_INFO_XM9XLG77='{"secret": "hunter2"}'
//! ```
//!
//! The region argument is accepted for interface parity and otherwise ignored.

use async_trait::async_trait;
use std::env;
use tracing::debug;

use super::backend::{SecretBackend, SecretBackendType, SecretPayload};
use crate::errors::{RemoteFailureKind, Result, SecretAccessError};

/// Environment variable prefix for secret payloads.
const VALUE_PREFIX: &str = "SECRET_ACCESS_VALUE_";

/// Environment variable secret backend (development only).
#[derive(Debug, Clone, Default)]
pub struct EnvSecretBackend {}

impl EnvSecretBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a secret id to the environment variable holding its payload.
    fn secret_id_to_env_var(secret_id: &str) -> String {
        let normalized: String = secret_id
            .chars()
            .map(|c| match c {
                '-' | '/' | '.' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();
        format!("{}{}", VALUE_PREFIX, normalized)
    }
}

#[async_trait]
impl SecretBackend for EnvSecretBackend {
    async fn get_secret_value(&self, secret_id: &str, region: &str) -> Result<SecretPayload> {
        let env_var = Self::secret_id_to_env_var(secret_id);
        debug!(secret_id = %secret_id, env_var = %env_var, "Reading secret from environment");

        env::var(&env_var).map(SecretPayload::from_string).map_err(|_| {
            SecretAccessError::remote_access(
                secret_id,
                region,
                RemoteFailureKind::NotFound,
                format!("environment variable {} is not set", env_var),
            )
        })
    }

    fn backend_type(&self) -> SecretBackendType {
        SecretBackendType::Env
    }
}
