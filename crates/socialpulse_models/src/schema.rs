//! Response schema constraining the model to a post object.

use serde_json::{json, Value};

/// Four-field schema every generated post must follow.
///
/// Uses the OpenAPI subset accepted by Gemini's `responseSchema`
/// (upper-case type names).
pub fn post_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "content": {
                "type": "STRING",
                "description": "The main body text of the social media post. Include emojis where appropriate for the requested tone."
            },
            "hashtags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of 3-7 relevant hashtags."
            },
            "imageSuggestion": {
                "type": "STRING",
                "description": "A short, descriptive prompt for an image that would go well with this post."
            },
            "estimatedReach": {
                "type": "STRING",
                "description": "A fictional prediction of engagement (e.g., 'High', 'Moderate') based on the content quality."
            }
        },
        "required": ["content", "hashtags", "imageSuggestion", "estimatedReach"]
    })
}
