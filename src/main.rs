use secret_access::{
    config::AppConfig,
    observability::{init_logging, log_config_info},
    secrets::backend_from_config,
    Driver, Result, SecretFetcher, APP_NAME, VERSION,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (optional - won't fail if missing)
    // This must happen before any config is read from environment
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }

    let config = AppConfig::from_env()?;
    init_logging(&config.observability)?;

    info!(app_name = APP_NAME, version = VERSION, "Starting secret access");
    log_config_info(&config);

    let backend = backend_from_config(&config.backend)?;
    let fetcher = SecretFetcher::new(backend, config.fetcher.clone());
    let driver = Driver::new(fetcher, config.driver.clone());

    if let Err(e) = driver.run().await {
        error!(error = %e, "Secret access terminated with error");
        return Err(e);
    }

    Ok(())
}
