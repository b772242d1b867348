//! Stylistic registers a post can be written in.

use serde::{Deserialize, Serialize};

/// Requested tone of voice.
///
/// The display form is what gets interpolated into the prompt, so
/// [`Tone::Viral`] renders as `Viral/Hype`.
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
pub enum Tone {
    /// Authoritative and clear
    #[default]
    Professional,
    /// Friendly and relaxed
    Casual,
    /// Punchy and built to be shared
    #[display("Viral/Hype")]
    #[serde(alias = "Viral/Hype")]
    Viral,
    /// Supportive and emotional
    Empathetic,
    /// Persuasive and action-oriented
    Promotional,
    /// Clever and humorous
    Witty,
}

impl Tone {
    /// The tone after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Tone::Professional => Tone::Casual,
            Tone::Casual => Tone::Viral,
            Tone::Viral => Tone::Empathetic,
            Tone::Empathetic => Tone::Promotional,
            Tone::Promotional => Tone::Witty,
            Tone::Witty => Tone::Professional,
        }
    }

    /// The tone before this one, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            Tone::Professional => Tone::Witty,
            Tone::Casual => Tone::Professional,
            Tone::Viral => Tone::Casual,
            Tone::Empathetic => Tone::Viral,
            Tone::Promotional => Tone::Empathetic,
            Tone::Witty => Tone::Promotional,
        }
    }
}

/// Read-only description of one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneProfile {
    /// Short description, used in the selector and as vocabulary guidance
    pub description: &'static str,
}

impl ToneProfile {
    pub(crate) fn for_tone(tone: Tone) -> Self {
        let description = match tone {
            Tone::Professional => "Authoritative, clear, and respectful.",
            Tone::Casual => "Friendly, relaxed, and conversational.",
            Tone::Viral => "Punchy, exciting, and designed for shares.",
            Tone::Empathetic => "Understanding, supportive, and emotional.",
            Tone::Promotional => "Persuasive, action-oriented, and direct.",
            Tone::Witty => "Clever, humorous, and entertaining.",
        };
        Self { description }
    }
}
