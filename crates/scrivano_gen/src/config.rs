//! Generation client configuration.
//!
//! Bundled defaults ship with the crate (`include_str!` of scrivano.toml);
//! a `./scrivano.toml` in the working directory overrides them, with user
//! values taking precedence. Credentials never live in the file; only the
//! name of the environment variable that holds them.

use config::{Config, File, FileFormat};
use scrivano_core::SamplingConfig;
use scrivano_error::{ConfigError, ScrivanoResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bundled defaults, compiled into the crate.
const DEFAULT_CONFIG: &str = include_str!("../scrivano.toml");

/// Sampling settings as they appear in the config file (snake_case keys;
/// the wire type uses camelCase and is produced via `From`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingSettings {
    /// Sampling temperature
    pub temperature: f32,
    /// Top-k sampling cutoff
    pub top_k: u32,
    /// Top-p nucleus sampling cutoff
    pub top_p: f32,
    /// Output token cap
    pub max_output_tokens: u32,
    /// Directive to return JSON rather than prose
    pub response_mime_type: String,
}

impl From<SamplingSettings> for SamplingConfig {
    fn from(settings: SamplingSettings) -> Self {
        Self {
            temperature: settings.temperature,
            top_k: settings.top_k,
            top_p: settings.top_p,
            max_output_tokens: settings.max_output_tokens,
            response_mime_type: settings.response_mime_type,
        }
    }
}

/// Configuration for the generation client.
///
/// # Examples
///
/// ```
/// use scrivano_gen::GenerationConfig;
///
/// let config = GenerationConfig::load().unwrap();
/// assert_eq!(config.credentials_var, "SCRIVANO_API_KEYS");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the generation service
    pub base_url: String,
    /// Model identifier appended to the request path
    pub model: String,
    /// Environment variable holding the comma-separated credential pool
    pub credentials_var: String,
    /// Fixed sampling configuration sent with every request
    pub sampling: SamplingSettings,
}

impl GenerationConfig {
    /// Load configuration: bundled defaults merged with an optional
    /// `./scrivano.toml` override.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the merged configuration cannot be
    /// parsed into this shape.
    #[instrument]
    pub fn load() -> ScrivanoResult<Self> {
        let merged = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name("scrivano").required(false))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to merge configuration: {e}")))?;

        let config: GenerationConfig = merged
            .get("generation")
            .map_err(|e| ConfigError::new(format!("Invalid [generation] section: {e}")))?;

        debug!(model = %config.model, base_url = %config.base_url, "Loaded generation config");
        Ok(config)
    }

    /// The wire sampling config for this configuration.
    pub fn sampling_config(&self) -> SamplingConfig {
        self.sampling.clone().into()
    }
}
