//! Generation client with credential failover.

use crate::rate_limit::is_rate_limit_error;
use crate::CredentialPool;
use scrivano_core::{GenerationRequest, RawResponse, SamplingConfig};
use scrivano_error::{GenerationError, GenerationErrorKind, ScrivanoResult};
use scrivano_interface::{ApiCredential, GenerationBackend};
use tracing::{debug, instrument, warn};

/// Client for the generation service, rotating a credential pool.
///
/// Each logical request claims a starting credential from the pool's
/// shared rotation cursor and tries up to pool-size credentials in order.
/// Rate-limit failures advance to the next credential; any other failure
/// aborts immediately. On success the cursor is fixed just past the
/// succeeding credential, so rotation continues from there.
///
/// The client returns the raw response unmodified; payload interpretation
/// belongs to [`crate::parse_response`].
///
/// # Examples
///
/// ```no_run
/// use scrivano_gen::{CredentialPool, GenerationClient, GenerationConfig, HttpBackend};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GenerationConfig::load()?;
/// let pool = CredentialPool::from_env(&config.credentials_var)?;
/// let client = GenerationClient::new(HttpBackend::new(&config), pool, config.sampling_config());
///
/// let raw = client.generate("write a post about tide pools").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GenerationClient<B: GenerationBackend> {
    backend: B,
    pool: CredentialPool,
    sampling: SamplingConfig,
}

impl<B: GenerationBackend> GenerationClient<B> {
    /// Build a client over a backend, a credential pool, and fixed
    /// sampling configuration.
    pub fn new(backend: B, pool: CredentialPool, sampling: SamplingConfig) -> Self {
        Self {
            backend,
            pool,
            sampling,
        }
    }

    /// The backend this client dispatches through.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Send one prompt, failing over across the credential pool on
    /// rate-limit signals.
    ///
    /// # Errors
    ///
    /// - `NoCredentials` when the pool is empty
    /// - `AllCredentialsExhausted` when every credential rate-limited
    /// - the underlying error, unmodified, on any non-rate-limit failure
    #[instrument(skip(self, prompt), fields(provider = self.backend.provider_name()))]
    pub async fn generate(&self, prompt: &str) -> ScrivanoResult<RawResponse> {
        if self.pool.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::NoCredentials))?;
        }

        let request = GenerationRequest::new(prompt, self.sampling.clone());
        let attempts = self.pool.len();
        let start = self.pool.begin_rotation();
        let mut last_error = String::new();

        for offset in 0..attempts {
            let index = (start + offset) % attempts;
            let credential = self.pool.get(index);

            match self.backend.dispatch(&request, credential).await {
                Ok(raw) => {
                    self.pool.pin_after(index);
                    debug!(credential_index = index, "Generation succeeded");
                    return Ok(raw);
                }
                Err(error) if is_rate_limit_error(&error) => {
                    warn!(
                        credential_index = index,
                        error = %error,
                        "Credential rate limited, rotating to next"
                    );
                    last_error = error.to_string();
                }
                // Failing over here would mask configuration or content
                // errors as a false retry.
                Err(error) => return Err(error),
            }
        }

        Err(GenerationError::new(
            GenerationErrorKind::AllCredentialsExhausted {
                attempts,
                last_error,
            },
        ))?
    }

    /// Send one prompt with a pinned credential: no rotation, no failover.
    ///
    /// For callers that must use a specific credential, e.g. when a key is
    /// bound to a billing account under test.
    #[instrument(skip(self, prompt, credential))]
    pub async fn generate_with_credential(
        &self,
        prompt: &str,
        credential: &ApiCredential,
    ) -> ScrivanoResult<RawResponse> {
        let request = GenerationRequest::new(prompt, self.sampling.clone());
        self.backend.dispatch(&request, credential).await
    }
}
