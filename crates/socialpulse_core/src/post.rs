//! Request and response shapes exchanged with the generation service.

use crate::{Platform, PlatformProfile, Tone};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Audience label substituted when the form's audience field is blank.
pub const DEFAULT_AUDIENCE: &str = "General Professional Audience";

/// Everything the generation service needs to write one post.
///
/// # Examples
///
/// ```
/// use socialpulse_core::{Platform, PostRequest, Tone};
///
/// let request = PostRequest {
///     topic: "Launch of our new product".to_string(),
///     platform: Platform::Twitter,
///     tone: Tone::Viral,
///     audience: "Early adopters".to_string(),
/// };
///
/// assert_eq!(request.platform, Platform::Twitter);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRequest {
    /// What the post is about
    pub topic: String,
    /// Network the post targets
    pub platform: Platform,
    /// Requested tone of voice
    pub tone: Tone,
    /// Intended readers
    pub audience: String,
}

/// Structured post returned by the generation service.
///
/// Field names on the wire are camelCase to match the response schema.
/// Hashtag count is not checked; 3 to 7 are requested but anything parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPost {
    /// Body text of the post
    pub content: String,
    /// Hashtags, with or without a leading `#`
    pub hashtags: Vec<String>,
    /// Prompt for an image to accompany the post
    pub image_suggestion: String,
    /// Qualitative engagement estimate such as `High`
    pub estimated_reach: String,
}

impl GeneratedPost {
    /// Hashtags normalized to carry a leading `#`, joined by single spaces.
    pub fn hashtag_line(&self) -> String {
        self.hashtags
            .iter()
            .map(|tag| normalize_hashtag(tag))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Full text placed on the clipboard: body, blank line, hashtag line.
    ///
    /// # Examples
    ///
    /// ```
    /// use socialpulse_core::GeneratedPost;
    ///
    /// let post = GeneratedPost {
    ///     content: "Big news!".to_string(),
    ///     hashtags: vec!["launch".to_string(), "#startup".to_string()],
    ///     image_suggestion: "A rocket".to_string(),
    ///     estimated_reach: "High".to_string(),
    /// };
    ///
    /// assert_eq!(post.clipboard_text(), "Big news!\n\n#launch #startup");
    /// ```
    pub fn clipboard_text(&self) -> String {
        format!("{}\n\n{}", self.content, self.hashtag_line())
    }

    /// Length of the body in characters.
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the body is longer than the platform allows.
    pub fn exceeds(&self, profile: &PlatformProfile) -> bool {
        self.content_length() > profile.max_length
    }
}

/// Prefix `#` to a hashtag unless it already starts with one.
pub fn normalize_hashtag(tag: &str) -> Cow<'_, str> {
    if tag.starts_with('#') {
        Cow::Borrowed(tag)
    } else {
        Cow::Owned(format!("#{tag}"))
    }
}
