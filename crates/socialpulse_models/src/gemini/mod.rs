//! Google Gemini REST client.
//!
//! - [`GeminiClient`] sends one `generateContent` call per post
//! - the `wire` types mirror the JSON bodies of that endpoint

mod client;
mod wire;

pub use client::{api_key_from_env, GeminiClient, API_KEY_ENV_VARS};
pub use wire::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PromptFeedback, UsageMetadata,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, socialpulse_error::GenerationError>;
