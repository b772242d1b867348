//! Trait definitions for SocialPulse.
//!
//! The form talks to the generation service only through [`PostGenerator`],
//! so tests can substitute a scripted implementation for the real client.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::PostGenerator;
