//! Response parser error types.

/// Specific error conditions for suggestion parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ParseErrorKind {
    /// The raw response carried neither text nor a structured call
    #[display("Response contained no text or function-call payload")]
    EmptyResponse,
    /// The response text looks like JSON but no strategy could salvage it
    #[display("Response looks like JSON but could not be parsed: {}", _0)]
    MalformedJson(String),
}

/// Error type for response parsing.
///
/// Parsing either yields a complete suggestion or fails with one of these;
/// the parser never returns unparsed markup as content.
///
/// # Examples
///
/// ```
/// use scrivano_error::{ParseError, ParseErrorKind};
///
/// let err = ParseError::new(ParseErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no text"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Parse Error: {} at line {} in {}", kind, line, file)]
pub struct ParseError {
    /// The specific error condition
    pub kind: ParseErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ParseError {
    /// Create a new ParseError at the current source location.
    #[track_caller]
    pub fn new(kind: ParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
