//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, HttpError, JsonError, ParseError, ScheduleError};

/// This is the foundation error enum. Each Scrivano crate contributes the
/// variants for its own failure family.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ScrivanoError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ScrivanoError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScrivanoErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Generation service error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Suggestion parsing error
    #[from(ParseError)]
    Parse(ParseError),
    /// Slot scheduling error
    #[from(ScheduleError)]
    Schedule(ScheduleError),
}

/// Scrivano error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ScrivanoResult, ConfigError};
///
/// fn might_fail() -> ScrivanoResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scrivano Error: {}", _0)]
pub struct ScrivanoError(Box<ScrivanoErrorKind>);

impl ScrivanoError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivanoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivanoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScrivanoErrorKind
impl<T> From<T> for ScrivanoError
where
    T: Into<ScrivanoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivano operations.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ScrivanoResult, HttpError};
///
/// fn fetch_data() -> ScrivanoResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type ScrivanoResult<T> = std::result::Result<T, ScrivanoError>;
