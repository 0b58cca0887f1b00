//! Generation client error types.

/// Specific error conditions for generation service calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// No API credential configured for the generation service
    #[display("No generation credentials configured")]
    NoCredentials,
    /// The service signalled a rate limit for the credential used
    #[display("Rate limited: {}", _0)]
    RateLimited(String),
    /// Every credential in the pool was exhausted by rate-limit failures
    #[display(
        "All {} credentials exhausted by rate limits; last error: {}",
        attempts,
        last_error
    )]
    AllCredentialsExhausted {
        /// Number of credentials tried
        attempts: usize,
        /// Message from the last underlying failure
        last_error: String,
    },
    /// The service rejected the request for a non-rate-limit reason
    #[display("Generation request failed with status {}: {}", status, message)]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },
}

impl GenerationErrorKind {
    /// Whether this error should trigger failover to the next credential.
    ///
    /// Only rate-limit signals fail over; anything else would mask a
    /// configuration or content error as a false retry.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, GenerationErrorKind::RateLimited(_))
    }
}

/// Error type for generation service operations.
///
/// # Examples
///
/// ```
/// use scrivano_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::NoCredentials);
/// assert!(format!("{}", err).contains("No generation credentials"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError at the current source location.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
