//! Errors raised while asking the generative service for a post.

/// Broad failure classes of a generation call.
///
/// The form reduces all of them to one message, but logging and tests
/// distinguish them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FailureCategory {
    /// Required credential or setting is absent; no request was sent
    Configuration,
    /// The request failed in flight or the service rejected it
    Transport,
    /// The service answered, but not with a usable post
    Shape,
}

/// Generation-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Request could not be sent or its response could not be read
    #[display("Request to generation service failed: {}", _0)]
    Transport(String),
    /// Service returned a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message reported by the service
        message: String,
    },
    /// Service returned no text
    #[display("No content generated")]
    EmptyResponse,
    /// Service returned text that is not a post
    #[display("Malformed post in response: {}", _0)]
    MalformedResponse(String),
}

impl GenerationErrorKind {
    /// Which failure class this condition belongs to.
    pub fn category(&self) -> FailureCategory {
        match self {
            GenerationErrorKind::MissingApiKey => FailureCategory::Configuration,
            GenerationErrorKind::Transport(_) | GenerationErrorKind::Api { .. } => {
                FailureCategory::Transport
            }
            GenerationErrorKind::EmptyResponse | GenerationErrorKind::MalformedResponse(_) => {
                FailureCategory::Shape
            }
        }
    }
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use socialpulse_error::{FailureCategory, GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// assert_eq!(err.kind.category(), FailureCategory::Configuration);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for `self.kind.category()`.
    pub fn category(&self) -> FailureCategory {
        self.kind.category()
    }
}
