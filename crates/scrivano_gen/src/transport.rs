//! HTTP transport for the generation service.

use crate::config::GenerationConfig;
use crate::rate_limit::is_rate_limit_status;
use async_trait::async_trait;
use scrivano_core::{GenerationRequest, RawResponse};
use scrivano_error::{
    GenerationError, GenerationErrorKind, HttpError, JsonError, ScrivanoResult,
};
use scrivano_interface::{ApiCredential, GenerationBackend};
use tracing::{debug, instrument, warn};

/// Production [`GenerationBackend`] speaking the service's REST convention.
///
/// One request carries the prompt and sampling config as JSON; the
/// credential rides as a query parameter. The transport classifies
/// rate-limit responses into the typed error kind so the client above it
/// can fail over, and returns everything else unmodified.
///
/// No timeout is imposed here beyond reqwest's defaults; callers wrap
/// their own.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl HttpBackend {
    /// Build a backend from the generation configuration.
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerationBackend for HttpBackend {
    #[instrument(skip(self, request, credential), fields(model = %self.model))]
    async fn dispatch(
        &self,
        request: &GenerationRequest,
        credential: &ApiCredential,
    ) -> ScrivanoResult<RawResponse> {
        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", credential.key())])
            .json(request)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Generation request failed: {e}")))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            if is_rate_limit_status(status) || body.contains("RESOURCE_EXHAUSTED") {
                warn!(status, "Credential rate limited");
                return Err(GenerationError::new(GenerationErrorKind::RateLimited(
                    format!("status {status}: {body}"),
                )))?;
            }
            return Err(GenerationError::new(GenerationErrorKind::RequestFailed {
                status,
                message: body,
            }))?;
        }

        let raw: RawResponse = response
            .json()
            .await
            .map_err(|e| JsonError::new(format!("Malformed service response: {e}")))?;

        debug!(candidates = raw.candidates.len(), "Generation response received");
        Ok(raw)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
