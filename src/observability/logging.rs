//! # Structured Logging
//!
//! Installs the process-wide `tracing` subscriber. `RUST_LOG` takes
//! precedence over the configured log level.

use crate::config::{AppConfig, ObservabilityConfig};
use crate::errors::{Result, SecretAccessError};
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` if set, otherwise the configured level
pub fn build_env_filter(config: &ObservabilityConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            SecretAccessError::config(format!("Invalid log level '{}': {}", config.log_level, e))
        }),
    }
}

/// Install the global subscriber. Call once, before any other logging.
pub fn init_logging(config: &ObservabilityConfig) -> Result<()> {
    let filter = build_env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let result = if config.json_logging {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| SecretAccessError::internal(format!("Failed to initialize logging: {}", e)))
}

/// Log configuration at startup
pub fn log_config_info(config: &AppConfig) {
    tracing::info!(
        secret_name = %config.driver.secret_name,
        region = %config.driver.region,
        attempts = config.driver.attempts,
        pause_seconds = config.driver.pause_seconds,
        backend = %config.backend.backend_type,
        log_secret_values = config.fetcher.log_secret_values,
        "secret-access configuration"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_env_filter_rejects_garbage_level() {
        // Only meaningful when RUST_LOG is not set by the test runner
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = ObservabilityConfig {
            log_level: "secret_access=loud".to_string(),
            ..Default::default()
        };
        assert!(build_env_filter(&config).is_err());
    }

    #[test]
    fn test_build_env_filter_default_level() {
        assert!(build_env_filter(&ObservabilityConfig::default()).is_ok());
    }

    #[test]
    fn test_log_config_info() {
        // This should not panic
        log_config_info(&AppConfig::default());
    }
}
