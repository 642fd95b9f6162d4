//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use secret_access::errors::{RemoteFailureKind, Result, SecretAccessError};
use secret_access::secrets::{SecretBackend, SecretBackendType, SecretPayload};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory secrets store that counts every request
#[derive(Debug, Default)]
pub struct MockBackend {
    secrets: HashMap<String, String>,
    calls: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(mut self, name: &str, payload: &str) -> Self {
        self.secrets.insert(name.to_string(), payload.to_string());
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretBackend for MockBackend {
    async fn get_secret_value(&self, secret_id: &str, region: &str) -> Result<SecretPayload> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.secrets
            .get(secret_id)
            .map(|payload| SecretPayload::from_string(payload.clone()).with_version_id("v1"))
            .ok_or_else(|| {
                SecretAccessError::remote_access(
                    secret_id,
                    region,
                    RemoteFailureKind::NotFound,
                    "Secrets Manager can't find the specified secret.",
                )
            })
    }

    fn backend_type(&self) -> SecretBackendType {
        SecretBackendType::Env
    }
}

pub const SECRET_NAME: &str = "top-secret-info-xm9xlg77";
pub const HUNTER2_PAYLOAD: &str = r#"{"secret": "hunter2"}"#;
