//! Immutable platform and tone lookup tables.

use crate::{CharLimit, Platform, PlatformProfile, Tone, ToneProfile};

/// Platform and tone profiles, built once at startup and shared by reference.
///
/// Every platform and every tone has an entry, so lookups cannot fail.
///
/// # Examples
///
/// ```
/// use socialpulse_core::{Platform, StyleTables, Tone};
///
/// let tables = StyleTables::new();
/// assert_eq!(tables.platform(Platform::Twitter).max_length, 280);
/// assert!(tables.tone(Tone::Witty).description.contains("humorous"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTables {
    linkedin: PlatformProfile,
    twitter: PlatformProfile,
    facebook: PlatformProfile,
    tones: [ToneProfile; 6],
}

impl StyleTables {
    /// Build the tables.
    pub fn new() -> Self {
        Self {
            linkedin: PlatformProfile::linkedin(),
            twitter: PlatformProfile::twitter(),
            facebook: PlatformProfile::facebook(),
            tones: [
                ToneProfile::for_tone(Tone::Professional),
                ToneProfile::for_tone(Tone::Casual),
                ToneProfile::for_tone(Tone::Viral),
                ToneProfile::for_tone(Tone::Empathetic),
                ToneProfile::for_tone(Tone::Promotional),
                ToneProfile::for_tone(Tone::Witty),
            ],
        }
    }

    /// Profile for a platform.
    pub fn platform(&self, platform: Platform) -> &PlatformProfile {
        match platform {
            Platform::LinkedIn => &self.linkedin,
            Platform::Twitter => &self.twitter,
            Platform::Facebook => &self.facebook,
        }
    }

    /// Profile for a tone.
    pub fn tone(&self, tone: Tone) -> &ToneProfile {
        let index = match tone {
            Tone::Professional => 0,
            Tone::Casual => 1,
            Tone::Viral => 2,
            Tone::Empathetic => 3,
            Tone::Promotional => 4,
            Tone::Witty => 5,
        };
        &self.tones[index]
    }

    /// Measure `text` against the platform's limit.
    pub fn char_limit(&self, text: &str, platform: Platform) -> CharLimit {
        CharLimit::measure(text, self.platform(platform).max_length)
    }
}

impl Default for StyleTables {
    fn default() -> Self {
        Self::new()
    }
}
