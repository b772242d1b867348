//! Prompt text sent with every generation request.

use socialpulse_core::{Platform, PostRequest, StyleTables, Tone};
use std::borrow::Cow;
use std::fmt::Write;
use strum::IntoEnumIterator;

/// System instruction with platform rules and tone guidance from `tables`.
pub fn system_instruction(tables: &StyleTables) -> String {
    let mut text = String::from(
        "You are an expert Social Media Strategist and Copywriter.\n\
         Your goal is to write high-engagement posts tailored to specific platforms and audiences.\n\
         \n\
         Platform Rules:\n",
    );

    for platform in Platform::iter() {
        let label = match platform {
            Platform::Twitter => Cow::Borrowed("Twitter/X"),
            other => Cow::Owned(other.to_string()),
        };
        let _ = writeln!(text, "- {label}: {}", tables.platform(platform).style_rule);
    }

    text.push_str(
        "\nTone Guidelines:\n\
         - Adjust vocabulary and sentence structure strictly based on the requested tone.\n",
    );
    for tone in Tone::iter() {
        let _ = writeln!(text, "- {tone}: {}", tables.tone(tone).description);
    }

    text.push_str(
        "\nGeneral:\n\
         - Do not include the hashtags inside the 'content' field unless they are naturally woven into sentences.\n\
         - The 'hashtags' array will be appended separately in the UI.\n\
         - Ensure the content is ready-to-post.\n",
    );
    text
}

/// User turn describing the post to write.
///
/// # Examples
///
/// ```
/// use socialpulse_core::{Platform, PostRequest, Tone};
/// use socialpulse_models::user_prompt;
///
/// let request = PostRequest {
///     topic: "Quarterly results".to_string(),
///     platform: Platform::LinkedIn,
///     tone: Tone::Professional,
///     audience: "Investors".to_string(),
/// };
///
/// let prompt = user_prompt(&request);
/// assert!(prompt.starts_with("Create a LinkedIn post."));
/// assert!(prompt.contains("Target Audience: Investors"));
/// ```
pub fn user_prompt(request: &PostRequest) -> String {
    format!(
        "Create a {} post.\nTopic: {}\nTone: {}\nTarget Audience: {}",
        request.platform, request.topic, request.tone, request.audience
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_lists_every_platform_rule() {
        let tables = StyleTables::new();
        let text = system_instruction(&tables);
        assert!(text.contains("- LinkedIn: Professional, spaced out"));
        assert!(text.contains("- Twitter/X: Punchy, under 280 characters"));
        assert!(text.contains("- Facebook: Community-focused"));
    }

    #[test]
    fn system_instruction_lists_tone_vocabulary() {
        let tables = StyleTables::new();
        let text = system_instruction(&tables);
        assert!(text.contains("- Viral/Hype: Punchy, exciting, and designed for shares."));
        assert!(text.contains("- Witty: Clever, humorous, and entertaining."));
    }

    #[test]
    fn system_instruction_keeps_hashtags_out_of_content() {
        let text = system_instruction(&StyleTables::new());
        assert!(text.contains("appended separately"));
    }

    #[test]
    fn user_prompt_uses_tone_display_name() {
        let request = PostRequest {
            topic: "Launch of our new product".to_string(),
            platform: Platform::Twitter,
            tone: Tone::Viral,
            audience: "General Professional Audience".to_string(),
        };
        assert_eq!(
            user_prompt(&request),
            "Create a Twitter post.\nTopic: Launch of our new product\nTone: Viral/Hype\nTarget Audience: General Professional Audience"
        );
    }
}
