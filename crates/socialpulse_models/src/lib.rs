//! Generative model clients for SocialPulse.
//!
//! The only provider is Google Gemini, called through its REST
//! `generateContent` endpoint with a response schema so the model answers
//! with a post object instead of free text.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use socialpulse_config::SocialPulseConfig;
//! use socialpulse_core::{Platform, PostRequest, StyleTables, Tone};
//! use socialpulse_interface::PostGenerator;
//! use socialpulse_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SocialPulseConfig::load()?;
//! let client = GeminiClient::from_env(&config.gemini, Arc::new(StyleTables::new()));
//! let request = PostRequest {
//!     topic: "Launch of our new product".to_string(),
//!     platform: Platform::Twitter,
//!     tone: Tone::Viral,
//!     audience: "Early adopters".to_string(),
//! };
//! let post = client.generate_post(&request).await?;
//! println!("{}", post.clipboard_text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod prompt;
mod schema;

pub use gemini::{
    api_key_from_env, Candidate, Content, GeminiClient, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, Part, PromptFeedback, UsageMetadata,
    API_KEY_ENV_VARS,
};
pub use prompt::{system_instruction, user_prompt};
pub use schema::post_response_schema;
