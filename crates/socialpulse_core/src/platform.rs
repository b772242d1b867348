//! Target social networks and their static profiles.

use serde::{Deserialize, Serialize};

/// Social network a post is written for.
///
/// # Examples
///
/// ```
/// use socialpulse_core::Platform;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(Platform::LinkedIn.to_string(), "LinkedIn");
/// assert_eq!(Platform::iter().count(), 3);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Platform {
    /// LinkedIn
    #[default]
    LinkedIn,
    /// Twitter / X
    Twitter,
    /// Facebook
    Facebook,
}

impl Platform {
    /// The platform after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Platform::LinkedIn => Platform::Twitter,
            Platform::Twitter => Platform::Facebook,
            Platform::Facebook => Platform::LinkedIn,
        }
    }

    /// The platform before this one, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Platform::LinkedIn => Platform::Facebook,
            Platform::Twitter => Platform::LinkedIn,
            Platform::Facebook => Platform::Twitter,
        }
    }
}

/// Read-only display and prompting configuration for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Soft character limit for a post
    pub max_length: usize,
    /// Hint shown in the empty topic field
    pub placeholder: &'static str,
    /// Writing rule embedded in the system instruction
    pub style_rule: &'static str,
    /// Author handle shown in the preview header, if the platform shows one
    pub handle: Option<&'static str>,
    /// Second header line of the preview (role, time, audience marker)
    pub header_line: &'static str,
    /// Engagement buttons along the bottom of the preview
    pub engagement_actions: &'static [&'static str],
}

impl PlatformProfile {
    pub(crate) fn linkedin() -> Self {
        Self {
            max_length: 3000,
            placeholder: "Share professional insights, industry news, or company updates...",
            style_rule: "Professional, spaced out for readability, insightful, use bullet points if needed. No more than 3-5 hashtags.",
            handle: None,
            header_line: "Product Architect • Just now • 🌐",
            engagement_actions: &["Like", "Comment", "Repost", "Send"],
        }
    }

    pub(crate) fn twitter() -> Self {
        Self {
            max_length: 280,
            placeholder: "What's happening? Share a quick thought or thread...",
            style_rule: "Punchy, under 280 characters (unless a thread is implied, but strictly keep this single response under 280 chars for now). High energy.",
            handle: Some("@alex_creates"),
            header_line: "Just now",
            engagement_actions: &["Reply", "Repost", "Like", "Share"],
        }
    }

    pub(crate) fn facebook() -> Self {
        Self {
            max_length: 63206,
            placeholder: "What's on your mind? Share with your community...",
            style_rule: "Community-focused, conversational, encourages comments.",
            handle: None,
            header_line: "Just now • 🌎",
            engagement_actions: &["Like", "Comment", "Share"],
        }
    }
}
