//! Generation-service client and response parsing.
//!
//! This crate owns the outbound half of the pipeline: a credential pool
//! with a shared rotation cursor, a client that fails over across the pool
//! on rate-limit signals only, the HTTP transport speaking the service's
//! REST wire format, and the tolerant parser that turns raw responses into
//! typed [`scrivano_core::DraftSuggestion`]s.
//!
//! The client does not impose timeouts beyond the transport's defaults and
//! never retries a request internally; a failed request is reported to its
//! caller. Credential failover on rate limits is the one exception, because
//! interchangeable credentials make a rate-limited attempt recoverable
//! without re-deciding anything.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod credentials;
mod extraction;
mod rate_limit;
mod transport;

pub use client::GenerationClient;
pub use config::{GenerationConfig, SamplingSettings};
pub use credentials::CredentialPool;
pub use extraction::parse_response;
pub use rate_limit::{is_rate_limit_error, is_rate_limit_message};
pub use transport::HttpBackend;
