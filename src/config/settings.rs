//! # Configuration Settings
//!
//! Defines the configuration structure for secret-access. Every value has a
//! default and can be overridden through `SECRET_ACCESS_*` environment
//! variables.

use crate::errors::{Result, SecretAccessError};
use crate::secrets::backends::SecretBackendType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

/// Prefix shared by all configuration environment variables
pub const ENV_PREFIX: &str = "SECRET_ACCESS_";

/// Region used when a caller does not name one
pub const DEFAULT_REGION: &str = "us-east-1";

/// Secret read by the driver when none is configured
pub const DEFAULT_SECRET_NAME: &str = "top-secret-info-xm9xlg77";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct AppConfig {
    #[validate(nested)]
    pub driver: DriverConfig,

    #[validate(nested)]
    pub fetcher: FetcherConfig,

    #[validate(nested)]
    pub backend: BackendConfig,

    #[validate(nested)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load every section from the environment and validate the result
    pub fn from_env() -> Result<Self> {
        let config = Self {
            driver: DriverConfig::from_env()?,
            fetcher: FetcherConfig::from_env()?,
            backend: BackendConfig::from_env()?,
            observability: ObservabilityConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(SecretAccessError::from)?;

        if self.driver.secret_name.trim().is_empty() {
            return Err(SecretAccessError::validation_field(
                "Secret name cannot be blank",
                "secret_name",
            ));
        }

        if let Some(endpoint) = &self.backend.aws_endpoint_url {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(SecretAccessError::validation_field(
                    "AWS endpoint URL must start with 'http://' or 'https://'",
                    "aws_endpoint_url",
                ));
            }
        }

        Ok(())
    }
}

/// Repeated-access loop configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DriverConfig {
    /// Secret identifier to fetch
    #[validate(length(min = 1, message = "Secret name cannot be empty"))]
    pub secret_name: String,

    /// Region of the secrets store
    #[validate(length(min = 1, message = "Region cannot be empty"))]
    pub region: String,

    /// Number of fetch attempts
    #[validate(range(min = 1, max = 100, message = "Attempts must be between 1 and 100"))]
    pub attempts: u32,

    /// Pause between attempts in seconds
    #[validate(range(max = 3600, message = "Pause must be at most 3600 seconds"))]
    pub pause_seconds: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            secret_name: DEFAULT_SECRET_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
            attempts: 2,
            pause_seconds: 10,
        }
    }
}

impl DriverConfig {
    /// Get pause between attempts as Duration
    pub fn pause(&self) -> Duration {
        Duration::from_secs(self.pause_seconds)
    }

    /// Create DriverConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            secret_name: env_or("SECRET_NAME", defaults.secret_name),
            region: env_or("REGION", defaults.region),
            attempts: env_parse("ATTEMPTS", defaults.attempts)?,
            pause_seconds: env_parse("PAUSE_SECONDS", defaults.pause_seconds)?,
        })
    }
}

/// Secret fetcher configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FetcherConfig {
    /// Key that must be present in every secret and is logged after retrieval
    #[validate(length(min = 1, message = "Log field cannot be empty"))]
    pub log_field: String,

    /// Log the value at `log_field` in plaintext instead of redacting it
    pub log_secret_values: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            log_field: "secret".to_string(),
            log_secret_values: false,
        }
    }
}

impl FetcherConfig {
    /// Create FetcherConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            log_field: env_or("LOG_FIELD", defaults.log_field),
            log_secret_values: env_flag("LOG_SECRET_VALUES", defaults.log_secret_values),
        })
    }
}

/// Secret backend selection
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BackendConfig {
    /// Which backend serves fetch requests
    pub backend_type: SecretBackendType,

    /// Endpoint override for AWS Secrets Manager (LocalStack, test doubles)
    pub aws_endpoint_url: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            backend_type: SecretBackendType::AwsSecretsManager,
            aws_endpoint_url: None,
        }
    }
}

impl BackendConfig {
    /// Create BackendConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let backend_type = match env_var("BACKEND") {
            Some(raw) => raw.parse::<SecretBackendType>().map_err(SecretAccessError::config)?,
            None => SecretBackendType::AwsSecretsManager,
        };

        Ok(Self {
            backend_type,
            aws_endpoint_url: env_var("AWS_ENDPOINT_URL"),
        })
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ObservabilityConfig {
    /// Service name attached to startup logs
    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service_name: String,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub log_level: String,

    /// Enable JSON structured logging
    pub json_logging: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: crate::APP_NAME.to_string(),
            log_level: "info".to_string(),
            json_logging: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create ObservabilityConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            service_name: defaults.service_name,
            log_level: env_or("LOG_LEVEL", defaults.log_level),
            json_logging: env_flag("JSON_LOGGING", defaults.json_logging),
        })
    }
}

fn env_var(suffix: &str) -> Option<String> {
    std::env::var(format!("{}{}", ENV_PREFIX, suffix)).ok().filter(|v| !v.is_empty())
}

fn env_or(suffix: &str, default: String) -> String {
    env_var(suffix).unwrap_or(default)
}

fn env_flag(suffix: &str, default: bool) -> bool {
    env_var(suffix).map(|s| s.to_lowercase() == "true" || s == "1").unwrap_or(default)
}

fn env_parse<T>(suffix: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_var(suffix) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| {
            SecretAccessError::config(format!("Invalid {}{} '{}': {}", ENV_PREFIX, suffix, raw, e))
        }),
        None => Ok(default),
    }
}
