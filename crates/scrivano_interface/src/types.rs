//! Shared types at the trait boundary.

use serde::{Deserialize, Serialize};

/// An API credential for the generation service.
///
/// Credentials are interchangeable members of a pool; the newtype keeps the
/// raw key out of `Debug` output and log lines.
///
/// # Examples
///
/// ```
/// use scrivano_interface::ApiCredential;
///
/// let credential = ApiCredential::new("sk-test-1234");
/// assert_eq!(credential.key(), "sk-test-1234");
/// assert!(!format!("{:?}", credential).contains("1234"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiCredential(String);

impl ApiCredential {
    /// Wrap a raw key string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for transport implementations only.
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.0.chars().take(4).collect();
        write!(f, "ApiCredential({}…)", prefix)
    }
}
