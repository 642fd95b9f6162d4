//! Integration tests for secret retrieval through the public API

mod common;

use common::{MockBackend, HUNTER2_PAYLOAD, SECRET_NAME};
use secret_access::config::{BackendConfig, FetcherConfig};
use secret_access::secrets::{backend_from_config, SecretBackendType, SecretFetcher};
use secret_access::{RemoteFailureKind, SecretAccessError};
use tracing_test::traced_test;

fn plaintext_logging() -> FetcherConfig {
    FetcherConfig {
        log_secret_values: true,
        ..Default::default()
    }
}

#[traced_test]
#[tokio::test]
async fn test_fetch_logs_plaintext_when_enabled() {
    let backend = MockBackend::new().with_secret(SECRET_NAME, HUNTER2_PAYLOAD).into_arc();
    let fetcher = SecretFetcher::new(backend, plaintext_logging());

    let secret = fetcher.fetch(SECRET_NAME, "us-east-1").await.unwrap();

    assert_eq!(secret.len(), 1);
    assert_eq!(secret.get("secret").unwrap().expose_secret(), "hunter2");
    assert!(logs_contain("Attempting to retrieve secret"));
    assert!(logs_contain(SECRET_NAME));
    assert!(logs_contain("Secret retrieved successfully: hunter2"));
}

#[traced_test]
#[tokio::test]
async fn test_fetch_redacts_by_default() {
    let backend = MockBackend::new().with_secret(SECRET_NAME, HUNTER2_PAYLOAD).into_arc();
    let fetcher = SecretFetcher::new(backend, FetcherConfig::default());

    let secret = fetcher.fetch(SECRET_NAME, "us-east-1").await.unwrap();

    assert_eq!(secret.get("secret").unwrap().expose_secret(), "hunter2");
    assert!(logs_contain("Secret retrieved successfully: [REDACTED]"));
    assert!(!logs_contain("hunter2"));
}

#[traced_test]
#[tokio::test]
async fn test_fetch_nonexistent_secret() {
    let backend = MockBackend::new().with_secret(SECRET_NAME, HUNTER2_PAYLOAD).into_arc();
    let fetcher = SecretFetcher::new(backend, FetcherConfig::default());

    let err = fetcher.fetch("nonexistent", "us-east-1").await.unwrap_err();

    assert_eq!(err.remote_kind(), Some(RemoteFailureKind::NotFound));
    assert!(logs_contain("Failed to retrieve secret"));
    assert!(logs_contain("nonexistent"));
    assert!(!logs_contain("Secret retrieved successfully"));
}

#[tokio::test]
async fn test_repeated_fetches_are_independent() {
    let backend = MockBackend::new()
        .with_secret(SECRET_NAME, r#"{"secret": "hunter2", "port": 5432, "tls": true}"#)
        .into_arc();
    let fetcher = SecretFetcher::new(backend.clone(), FetcherConfig::default());

    let first = fetcher.fetch(SECRET_NAME, "us-east-1").await.unwrap();
    let second = fetcher.fetch(SECRET_NAME, "us-east-1").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.get("port").unwrap().expose_secret(), "5432");
    assert_eq!(first.get("tls").unwrap().expose_secret(), "true");
    assert_eq!(backend.calls(), 2);
}

#[tokio::test]
async fn test_fetch_rejects_non_object_payload() {
    let backend = MockBackend::new().with_secret("list", r#"["secret", "hunter2"]"#).into_arc();
    let fetcher = SecretFetcher::new(backend, FetcherConfig::default());

    let err = fetcher.fetch("list", "us-east-1").await.unwrap_err();

    match err {
        SecretAccessError::InvalidPayload { secret_id, reason } => {
            assert_eq!(secret_id, "list");
            assert!(reason.contains("JSON object"));
        }
        other => panic!("Expected InvalidPayload, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_rejects_malformed_json() {
    let backend = MockBackend::new().with_secret("broken", "{secret: hunter2").into_arc();
    let fetcher = SecretFetcher::new(backend, FetcherConfig::default());

    let err = fetcher.fetch("broken", "us-east-1").await.unwrap_err();

    assert!(matches!(err, SecretAccessError::InvalidPayload { .. }));
    assert!(!err.to_string().contains("hunter2"));
}

#[tokio::test]
async fn test_env_backend_end_to_end() {
    std::env::set_var("SECRET_ACCESS_VALUE_FETCHER_INTEGRATION_ENV", HUNTER2_PAYLOAD);

    let backend = backend_from_config(&BackendConfig {
        backend_type: SecretBackendType::Env,
        aws_endpoint_url: None,
    })
    .unwrap();
    let fetcher = SecretFetcher::new(backend, FetcherConfig::default());

    let secret = fetcher.fetch_default_region("fetcher-integration-env").await.unwrap();
    assert_eq!(secret.get("secret").unwrap().expose_secret(), "hunter2");

    std::env::remove_var("SECRET_ACCESS_VALUE_FETCHER_INTEGRATION_ENV");
}
