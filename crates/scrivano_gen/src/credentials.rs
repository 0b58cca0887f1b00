//! Credential pool with a shared rotation cursor.

use scrivano_error::{GenerationError, GenerationErrorKind, ScrivanoResult};
use scrivano_interface::ApiCredential;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Ordered set of interchangeable generation-service credentials.
///
/// The rotation cursor is owned by the pool and advanced atomically, so
/// concurrent callers get defined behavior: round-robin fairness over
/// time, not per-request determinism. The cursor moves on every logical
/// request regardless of outcome, spreading load even under light traffic.
///
/// # Examples
///
/// ```
/// use scrivano_gen::CredentialPool;
/// use scrivano_interface::ApiCredential;
///
/// let pool = CredentialPool::new(vec![
///     ApiCredential::new("key-a"),
///     ApiCredential::new("key-b"),
/// ]);
/// assert_eq!(pool.len(), 2);
/// ```
#[derive(Debug)]
pub struct CredentialPool {
    credentials: Vec<ApiCredential>,
    cursor: AtomicUsize,
}

impl CredentialPool {
    /// Build a pool from an ordered credential list.
    pub fn new(credentials: Vec<ApiCredential>) -> Self {
        Self {
            credentials,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Load the pool from a comma-separated environment variable.
    ///
    /// Reads `.env` via dotenvy first, so local development keys work
    /// without exporting. Blank entries are skipped.
    ///
    /// # Errors
    ///
    /// Fails with `NoCredentials` when the variable is unset or contains
    /// no non-blank entries.
    pub fn from_env(var: &str) -> ScrivanoResult<Self> {
        dotenvy::dotenv().ok();
        let raw = std::env::var(var).unwrap_or_default();
        let credentials: Vec<ApiCredential> = raw
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(ApiCredential::new)
            .collect();
        if credentials.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::NoCredentials))?;
        }
        debug!(count = credentials.len(), var, "Loaded credential pool");
        Ok(Self::new(credentials))
    }

    /// Number of credentials in the pool.
    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    /// Credential at a rotation index (wraps around the pool).
    pub fn get(&self, index: usize) -> &ApiCredential {
        &self.credentials[index % self.credentials.len()]
    }

    /// Claim a starting index for one logical request, advancing the
    /// shared cursor.
    pub fn begin_rotation(&self) -> usize {
        self.cursor.fetch_add(1, Ordering::Relaxed) % self.credentials.len()
    }

    /// Fix the cursor just past the credential that succeeded, so the next
    /// request continues the rotation from its successor.
    pub fn pin_after(&self, index: usize) {
        self.cursor.store(index + 1, Ordering::Relaxed);
    }
}
