//! Rate-limit signal classification.
//!
//! The generation service signals rate limiting two ways: an explicit 429
//! status on the response, or an application-level error payload whose
//! status or message indicates quota exhaustion. Only these signals
//! trigger credential failover; anything else surfaces immediately so a
//! configuration or content error is never masked as a false retry.

use scrivano_error::{ScrivanoError, ScrivanoErrorKind};

/// Whether an HTTP status code is a rate-limit signal.
pub(crate) fn is_rate_limit_status(status: u16) -> bool {
    status == 429
}

/// Whether an error message text indicates rate limiting.
///
/// # Examples
///
/// ```
/// use scrivano_gen::is_rate_limit_message;
///
/// assert!(is_rate_limit_message("Resource has been exhausted (RESOURCE_EXHAUSTED)"));
/// assert!(is_rate_limit_message("429 Too Many Requests"));
/// assert!(!is_rate_limit_message("invalid prompt"));
/// ```
pub fn is_rate_limit_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("rate limit")
        || lower.contains("resource_exhausted")
        || lower.contains("quota")
        || lower.contains("429")
}

/// Whether an error should trigger failover to the next credential.
///
/// Typed rate-limit kinds are checked first; untyped errors fall back to
/// message inspection, covering transports that surface the signal only as
/// text.
pub fn is_rate_limit_error(error: &ScrivanoError) -> bool {
    match error.kind() {
        ScrivanoErrorKind::Generation(generation) => {
            generation.kind.is_rate_limit() || is_rate_limit_message(&generation.kind.to_string())
        }
        ScrivanoErrorKind::Http(http) => is_rate_limit_message(&http.message),
        _ => false,
    }
}
