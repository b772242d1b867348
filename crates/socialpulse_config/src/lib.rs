//! Layered configuration for SocialPulse.
//!
//! Settings are merged from, in increasing precedence:
//! 1. Bundled defaults (`socialpulse.toml` compiled into the crate)
//! 2. `~/.config/socialpulse/socialpulse.toml`
//! 3. `./socialpulse.toml`
//!
//! An explicit file passed on the command line replaces sources 2 and 3.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;

pub use settings::{FormSettings, GeminiSettings, SocialPulseConfig, TuiSettings};
