//! Error types for SocialPulse.
//!
//! This crate provides the error types shared by every SocialPulse crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use socialpulse_error::{GenerationError, GenerationErrorKind, SocialPulseResult};
//!
//! fn fetch_post() -> SocialPulseResult<String> {
//!     Err(GenerationError::new(GenerationErrorKind::EmptyResponse))?
//! }
//!
//! assert!(fetch_post().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clipboard;
mod config;
mod error;
mod generation;
mod tui;

pub use clipboard::ClipboardError;
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{SocialPulseError, SocialPulseErrorKind, SocialPulseResult};
pub use generation::{FailureCategory, GenerationError, GenerationErrorKind};
pub use tui::{TuiError, TuiErrorKind, TuiResult};
