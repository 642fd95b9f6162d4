//! Secret backend trait and types
//!
//! Defines the interface the fetcher uses to reach a secrets store.

use crate::errors::Result;
use crate::secrets::types::REDACTED;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of secret backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretBackendType {
    /// AWS Secrets Manager
    AwsSecretsManager,
    /// Environment variables (development only)
    Env,
}

impl SecretBackendType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwsSecretsManager => "aws_secrets_manager",
            Self::Env => "env",
        }
    }
}

impl FromStr for SecretBackendType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "aws_secrets_manager" | "aws" => Ok(Self::AwsSecretsManager),
            "env" => Ok(Self::Env),
            _ => Err(format!("Unknown secret backend type: {}", s)),
        }
    }
}

impl fmt::Display for SecretBackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw answer of a backend for one secret.
///
/// `secret_string` holds the payload before JSON decoding; it is never
/// printed by `Debug`.
#[derive(Clone, Default)]
pub struct SecretPayload {
    pub secret_string: Option<String>,
    pub arn: Option<String>,
    pub name: Option<String>,
    pub version_id: Option<String>,
}

impl SecretPayload {
    /// Payload carrying only a string value
    pub fn from_string(secret_string: impl Into<String>) -> Self {
        Self {
            secret_string: Some(secret_string.into()),
            ..Default::default()
        }
    }

    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}

impl fmt::Debug for SecretPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretPayload")
            .field("secret_string", &self.secret_string.as_ref().map(|_| REDACTED))
            .field("arn", &self.arn)
            .field("name", &self.name)
            .field("version_id", &self.version_id)
            .finish()
    }
}

/// Trait for secret backends
///
/// A backend performs exactly one request per call and reports failures as
/// [`crate::errors::SecretAccessError::RemoteAccess`]. It must not retry or
/// cache.
#[async_trait]
pub trait SecretBackend: Send + Sync + fmt::Debug {
    /// Fetch the current value of `secret_id` from the store in `region`
    async fn get_secret_value(&self, secret_id: &str, region: &str) -> Result<SecretPayload>;

    /// Get the backend type identifier
    fn backend_type(&self) -> SecretBackendType;
}
