//! Google Gemini `generateContent` client for structured post generation.
//!
//! Each call sends the system instruction, one user turn and a response
//! schema, then parses the answer text as a [`GeneratedPost`]. There is no
//! retry, no caching and no timeout beyond what reqwest applies.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use socialpulse_config::SocialPulseConfig;
//! use socialpulse_core::StyleTables;
//! use socialpulse_models::GeminiClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SocialPulseConfig::defaults()?;
//! let client = GeminiClient::new(
//!     Some("my-key".to_string()),
//!     &config.gemini,
//!     Arc::new(StyleTables::new()),
//! );
//! assert!(client.has_api_key());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use socialpulse_config::GeminiSettings;
use socialpulse_core::{GeneratedPost, PostRequest, StyleTables};
use socialpulse_error::{GenerationError, GenerationErrorKind, SocialPulseResult};
use socialpulse_interface::PostGenerator;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

use super::GeminiResult;
use super::wire::{
    ApiErrorEnvelope, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::{post_response_schema, system_instruction, user_prompt};

/// Environment variables checked for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Read the API key from the environment.
///
/// Blank values count as absent.
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .filter(|value| !value.trim().is_empty())
    })
}

/// Client for the Gemini REST API.
///
/// The API key is optional at construction time. A client without one is
/// still usable as a [`PostGenerator`]; every call then fails with
/// [`GenerationErrorKind::MissingApiKey`] before touching the network.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    temperature: f32,
    tables: Arc<StyleTables>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with an explicit (possibly absent) API key.
    #[instrument(
        name = "gemini_client_new",
        skip(api_key, tables),
        fields(model = %settings.model)
    )]
    pub fn new(
        api_key: Option<String>,
        settings: &GeminiSettings,
        tables: Arc<StyleTables>,
    ) -> Self {
        debug!(has_api_key = api_key.is_some(), "Creating Gemini client");
        Self {
            client: Client::new(),
            api_key,
            model: settings.model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            temperature: settings.temperature,
            tables,
        }
    }

    /// Create a client reading the API key from `GEMINI_API_KEY` or `API_KEY`.
    pub fn from_env(settings: &GeminiSettings, tables: Arc<StyleTables>) -> Self {
        let api_key = api_key_from_env();
        if api_key.is_none() {
            warn!("No Gemini API key in environment; generation will fail until one is set");
        }
        Self::new(api_key, settings, tables)
    }

    /// Whether an API key was supplied.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL of the `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Build the request body for a post.
    pub fn build_request(&self, request: &PostRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: Content::instruction(system_instruction(&self.tables)),
            contents: vec![Content::user(user_prompt(request))],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: post_response_schema(),
            },
        }
    }

    /// Send the request and return the raw response body.
    #[instrument(skip(self, api_key, body), fields(model = %self.model))]
    async fn send(&self, api_key: &str, body: &GenerateContentRequest) -> GeminiResult<String> {
        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                GenerationError::new(GenerationErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read Gemini response body");
            GenerationError::new(GenerationErrorKind::Transport(e.to_string()))
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&text)
                .map(|envelope| match envelope.error.status {
                    Some(code) => format!("{}: {}", code, envelope.error.message),
                    None => envelope.error.message,
                })
                .unwrap_or(text);
            error!(status = %status, message = %message, "Gemini API returned error");
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status_code: status.as_u16(),
                message,
            }));
        }

        Ok(text)
    }

    /// Turn a successful response body into a post.
    fn parse_post(body: &str) -> GeminiResult<GeneratedPost> {
        let response: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
            error!(error = %e, "Gemini response is not a generateContent body");
            GenerationError::new(GenerationErrorKind::MalformedResponse(e.to_string()))
        })?;

        if let Some(usage) = &response.usage_metadata {
            debug!(
                prompt_tokens = ?usage.prompt_token_count,
                answer_tokens = ?usage.candidates_token_count,
                "Gemini token usage"
            );
        }

        let text = response.text();
        if text.trim().is_empty() {
            let block_reason = response
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.as_deref());
            warn!(
                finish_reason = ?response.finish_reason(),
                block_reason = ?block_reason,
                "Gemini returned no text"
            );
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse));
        }

        serde_json::from_str::<GeneratedPost>(&text).map_err(|e| {
            error!(error = %e, "Gemini answer does not match the post schema");
            GenerationError::new(GenerationErrorKind::MalformedResponse(e.to_string()))
        })
    }

    /// Generate a post, returning Gemini-specific errors.
    #[instrument(skip(self, request), fields(platform = %request.platform, tone = %request.tone))]
    pub async fn generate_gemini(&self, request: &PostRequest) -> GeminiResult<GeneratedPost> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey))?;

        let body = self.build_request(request);
        let text = self.send(api_key, &body).await?;
        let post = Self::parse_post(&text)?;

        debug!(
            content_chars = post.content_length(),
            hashtags = post.hashtags.len(),
            "Received post from Gemini"
        );
        Ok(post)
    }
}

#[async_trait]
impl PostGenerator for GeminiClient {
    async fn generate_post(&self, request: &PostRequest) -> SocialPulseResult<GeneratedPost> {
        Ok(self.generate_gemini(request).await?)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
