//! Clipboard error types.

/// Failure to place text on the system clipboard.
///
/// # Examples
///
/// ```
/// use socialpulse_error::ClipboardError;
///
/// let err = ClipboardError::new("X11 server connection timed out");
/// assert!(err.message.contains("X11"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Clipboard Error: {} at line {} in {}", message, line, file)]
pub struct ClipboardError {
    /// Message from the clipboard backend
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ClipboardError {
    /// Create a new ClipboardError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
