//! SocialPulse - AI social media post generator
//!
//! SocialPulse collects a topic, target platform, tone and audience in a
//! terminal form, asks Google Gemini for a schema-constrained post, and
//! renders the result as a platform-styled preview that can be copied to
//! the clipboard.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use socialpulse::{
//!     GeminiClient, Platform, PostGenerator, PostRequest, SocialPulseConfig, StyleTables, Tone,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SocialPulseConfig::load()?;
//!     let client = GeminiClient::from_env(&config.gemini, Arc::new(StyleTables::new()));
//!
//!     let request = PostRequest {
//!         topic: "Launch of our new product".to_string(),
//!         platform: Platform::Twitter,
//!         tone: Tone::Viral,
//!         audience: config.form.default_audience.clone(),
//!     };
//!
//!     let post = client.generate_post(&request).await?;
//!     println!("{}", post.clipboard_text());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `socialpulse_error` - Error types
//! - `socialpulse_core` - Platforms, tones, style tables, posts, character limits
//! - `socialpulse_interface` - `PostGenerator` trait
//! - `socialpulse_config` - Layered TOML configuration
//! - `socialpulse_models` - Gemini client, prompt and response schema
//! - `socialpulse_tui` - Terminal form and preview card
//!
//! This crate re-exports everything for convenience and provides the
//! `socialpulse` binary.

mod telemetry;

pub use telemetry::{default_log_path, init_file_logging, log_filter};

pub use socialpulse_config::*;
pub use socialpulse_core::*;
pub use socialpulse_error::*;
pub use socialpulse_interface::*;
pub use socialpulse_models::*;
pub use socialpulse_tui::*;
