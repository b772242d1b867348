//! Terminal form error types.

/// Which part of driving the terminal went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TuiErrorKind {
    /// A step of taking over the terminal failed
    #[display("Could not open the form ({}): {}", step, reason)]
    EnterTerminal {
        /// Step that failed, such as `raw mode`
        step: &'static str,
        /// Underlying I/O error text
        reason: String,
    },
    /// A step of handing the terminal back failed
    #[display("Could not restore the terminal ({}): {}", step, reason)]
    LeaveTerminal {
        /// Step that failed, such as `alternate screen`
        step: &'static str,
        /// Underlying I/O error text
        reason: String,
    },
    /// Keyboard or paste input could not be read
    #[display("Could not read input: {}", _0)]
    Input(String),
    /// A frame could not be drawn
    #[display("Could not draw the form: {}", _0)]
    Draw(String),
}

/// Terminal error with source location tracking.
///
/// # Examples
///
/// ```
/// use socialpulse_error::TuiError;
///
/// let err = TuiError::enter("raw mode", "not a tty");
/// assert!(err.to_string().contains("Could not open the form (raw mode)"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("TUI Error: {} at line {} in {}", kind, line, file)]
pub struct TuiError {
    /// Error kind
    pub kind: TuiErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl TuiError {
    /// Create a new TuiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TuiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Failure while taking over the terminal.
    #[track_caller]
    pub fn enter(step: &'static str, reason: impl ToString) -> Self {
        Self::new(TuiErrorKind::EnterTerminal {
            step,
            reason: reason.to_string(),
        })
    }

    /// Failure while handing the terminal back.
    #[track_caller]
    pub fn leave(step: &'static str, reason: impl ToString) -> Self {
        Self::new(TuiErrorKind::LeaveTerminal {
            step,
            reason: reason.to_string(),
        })
    }
}

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;
