//! # Repeated Access Driver
//!
//! Fetches the configured secret a fixed number of times, pausing between
//! attempts. Results are discarded; the first failure stops the loop.

use crate::config::DriverConfig;
use crate::errors::Result;
use crate::secrets::SecretFetcher;
use tracing::{debug, info};

pub struct Driver {
    fetcher: SecretFetcher,
    config: DriverConfig,
}

impl Driver {
    pub fn new(fetcher: SecretFetcher, config: DriverConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Run every attempt in sequence.
    ///
    /// `attempts` fetches with `attempts - 1` pauses between them. An error
    /// from any fetch is returned immediately and the remaining attempts are
    /// skipped.
    pub async fn run(&self) -> Result<()> {
        let attempts = self.config.attempts;

        for attempt in 1..=attempts {
            info!(attempt, attempts, "Access attempt {}", attempt);

            let _ = self.fetcher.fetch(&self.config.secret_name, &self.config.region).await?;

            if attempt < attempts {
                debug!(pause_seconds = self.config.pause_seconds, "Pausing before next attempt");
                tokio::time::sleep(self.config.pause()).await;
            }
        }

        info!(attempts, "All access attempts completed");
        Ok(())
    }
}
