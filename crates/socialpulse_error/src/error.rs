//! Top-level error wrapper types.

use crate::{ClipboardError, ConfigError, GenerationError, TuiError};

/// Every error condition a SocialPulse crate can surface.
///
/// # Examples
///
/// ```
/// use socialpulse_error::{ClipboardError, SocialPulseError};
///
/// let err: SocialPulseError = ClipboardError::new("no display").into();
/// assert!(format!("{}", err).contains("Clipboard Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SocialPulseErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Post generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Clipboard write error
    #[from(ClipboardError)]
    Clipboard(ClipboardError),
    /// Terminal UI error
    #[from(TuiError)]
    Tui(TuiError),
}

/// SocialPulse error with kind discrimination.
///
/// # Examples
///
/// ```
/// use socialpulse_error::{ConfigError, SocialPulseErrorKind, SocialPulseResult};
///
/// fn might_fail() -> SocialPulseResult<()> {
///     Err(ConfigError::parse("missing field `model`"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), SocialPulseErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("SocialPulse Error: {}", _0)]
pub struct SocialPulseError(Box<SocialPulseErrorKind>);

impl SocialPulseError {
    /// Create a new error from a kind.
    pub fn new(kind: SocialPulseErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SocialPulseErrorKind {
        &self.0
    }

    /// The generation error inside this error, if that is what it wraps.
    pub fn as_generation(&self) -> Option<&GenerationError> {
        match self.kind() {
            SocialPulseErrorKind::Generation(err) => Some(err),
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to SocialPulseErrorKind
impl<T> From<T> for SocialPulseError
where
    T: Into<SocialPulseErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for SocialPulse operations.
pub type SocialPulseResult<T> = std::result::Result<T, SocialPulseError>;
