//! Trait definitions for post generation backends.

use async_trait::async_trait;
use socialpulse_core::{GeneratedPost, PostRequest};
use socialpulse_error::SocialPulseResult;

/// A backend that turns a [`PostRequest`] into a [`GeneratedPost`].
///
/// Implementations make at most one outbound call per invocation and do not
/// retry. Every failure is returned as a value; a missing credential must be
/// reported before any network I/O.
#[async_trait]
pub trait PostGenerator: Send + Sync {
    /// Generate one post.
    async fn generate_post(&self, request: &PostRequest) -> SocialPulseResult<GeneratedPost>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}
