//! Tests for credential rotation and failover in the generation client.
//!
//! These use a scripted backend so rotation order and failover decisions
//! are observable without touching the network.

use async_trait::async_trait;
use scrivano_core::{GenerationRequest, RawResponse, SamplingConfig};
use scrivano_error::{
    GenerationError, GenerationErrorKind, ScrivanoErrorKind, ScrivanoResult,
};
use scrivano_gen::{CredentialPool, GenerationClient};
use scrivano_interface::{ApiCredential, GenerationBackend};
use std::collections::HashSet;
use std::sync::Mutex;

/// Backend that rate-limits or hard-fails configured credentials and
/// records the order credentials were tried in.
struct ScriptedBackend {
    rate_limited: HashSet<String>,
    fail_hard: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn new() -> Self {
        Self {
            rate_limited: HashSet::new(),
            fail_hard: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn rate_limit(mut self, key: &str) -> Self {
        self.rate_limited.insert(key.to_string());
        self
    }

    fn fail(mut self, key: &str) -> Self {
        self.fail_hard.insert(key.to_string());
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn dispatch(
        &self,
        _request: &GenerationRequest,
        credential: &ApiCredential,
    ) -> ScrivanoResult<RawResponse> {
        self.calls.lock().unwrap().push(credential.key().to_string());

        if self.rate_limited.contains(credential.key()) {
            return Err(GenerationError::new(GenerationErrorKind::RateLimited(
                "scripted rate limit".to_string(),
            )))?;
        }
        if self.fail_hard.contains(credential.key()) {
            return Err(GenerationError::new(GenerationErrorKind::RequestFailed {
                status: 400,
                message: "scripted invalid argument".to_string(),
            }))?;
        }
        Ok(RawResponse::from_text("ok"))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

fn pool(keys: &[&str]) -> CredentialPool {
    CredentialPool::new(keys.iter().map(|k| ApiCredential::new(*k)).collect())
}

fn client(backend: ScriptedBackend, keys: &[&str]) -> GenerationClient<ScriptedBackend> {
    GenerationClient::new(backend, pool(keys), SamplingConfig::default())
}

#[tokio::test]
async fn fails_over_on_rate_limits_and_continues_rotation() {
    let backend = ScriptedBackend::new().rate_limit("key-1").rate_limit("key-2");
    let client = client(backend, &["key-1", "key-2", "key-3"]);

    client.generate("prompt").await.unwrap();
    assert_eq!(
        client_calls(&client),
        vec!["key-1", "key-2", "key-3"],
        "should have tried the pool in order"
    );

    // The cursor is pinned past the succeeding credential: the fourth
    // attempt overall is credential 1 of the next rotation.
    client.generate("prompt").await.unwrap();
    assert_eq!(client_calls(&client)[3], "key-1");
}

#[tokio::test]
async fn exhausted_pool_reports_attempt_count_and_last_error() {
    let backend = ScriptedBackend::new()
        .rate_limit("key-1")
        .rate_limit("key-2")
        .rate_limit("key-3");
    let client = client(backend, &["key-1", "key-2", "key-3"]);

    let err = client.generate("prompt").await.unwrap_err();
    match err.kind() {
        ScrivanoErrorKind::Generation(generation) => match &generation.kind {
            GenerationErrorKind::AllCredentialsExhausted {
                attempts,
                last_error,
            } => {
                assert_eq!(*attempts, 3);
                assert!(last_error.contains("scripted rate limit"));
            }
            other => panic!("expected AllCredentialsExhausted, got {other}"),
        },
        other => panic!("expected generation error, got {other}"),
    }
}

#[tokio::test]
async fn non_rate_limit_failure_aborts_without_failover() {
    let backend = ScriptedBackend::new().fail("key-1");
    let client = client(backend, &["key-1", "key-2"]);

    let err = client.generate("prompt").await.unwrap_err();
    assert!(err.to_string().contains("invalid argument"));
    assert_eq!(
        client_calls(&client).len(),
        1,
        "hard failures must not rotate to the next credential"
    );
}

#[tokio::test]
async fn empty_pool_is_a_configuration_error() {
    let client = client(ScriptedBackend::new(), &[]);
    let err = client.generate("prompt").await.unwrap_err();
    assert!(err.to_string().contains("No generation credentials"));
}

#[tokio::test]
async fn pinned_credential_bypasses_rotation() {
    let backend = ScriptedBackend::new();
    let client = client(backend, &["key-1", "key-2"]);

    let pinned = ApiCredential::new("pinned-key");
    client
        .generate_with_credential("prompt", &pinned)
        .await
        .unwrap();
    assert_eq!(client_calls(&client), vec!["pinned-key"]);

    // Rotation state was untouched: the next pooled call starts at key-1.
    client.generate("prompt").await.unwrap();
    assert_eq!(client_calls(&client)[1], "key-1");
}

#[tokio::test]
async fn pinned_credential_rate_limit_surfaces_directly() {
    let backend = ScriptedBackend::new().rate_limit("pinned-key");
    let client = client(backend, &["key-1"]);

    let pinned = ApiCredential::new("pinned-key");
    let err = client
        .generate_with_credential("prompt", &pinned)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Rate limited"));
    assert_eq!(client_calls(&client).len(), 1);
}

/// Peek at the scripted backend's recorded calls through the client.
fn client_calls(client: &GenerationClient<ScriptedBackend>) -> Vec<String> {
    client.backend().calls()
}
