//! Configuration error types.

/// What went wrong while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Sources could not be read or merged
    #[display("Failed to load configuration: {}", _0)]
    Load(String),
    /// Merged sources do not deserialize into the settings struct
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// A setting parsed but holds an unusable value
    #[display("Invalid value for `{}`: {}", field, reason)]
    InvalidValue {
        /// Dotted path of the offending setting
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Configuration error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a [`ConfigErrorKind::Load`] error.
    #[track_caller]
    pub fn load(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Load(message.into()))
    }

    /// Shorthand for a [`ConfigErrorKind::Parse`] error.
    ///
    /// # Examples
    ///
    /// ```
    /// use socialpulse_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::parse("missing field `model`");
    /// assert!(matches!(err.kind, ConfigErrorKind::Parse(_)));
    /// ```
    #[track_caller]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Parse(message.into()))
    }

    /// Shorthand for a [`ConfigErrorKind::InvalidValue`] error.
    #[track_caller]
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        })
    }
}
