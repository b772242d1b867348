//! Core data types for the SocialPulse post generator.
//!
//! This crate provides the request and response shapes exchanged with the
//! generation service, the platform and tone enums, the immutable style
//! tables built once at startup, and the character-limit arithmetic used by
//! the form.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod limit;
mod platform;
mod post;
mod style;
mod tone;

pub use limit::{CharLimit, LimitStatus, NEAR_LIMIT_THRESHOLD};
pub use platform::{Platform, PlatformProfile};
pub use post::{normalize_hashtag, GeneratedPost, PostRequest, DEFAULT_AUDIENCE};
pub use style::StyleTables;
pub use tone::{Tone, ToneProfile};
