//! Configuration structures and loading.

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use socialpulse_core::{Platform, Tone};
use socialpulse_error::{ConfigError, SocialPulseResult};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../socialpulse.toml");

/// Settings for the Gemini generation client.
///
/// ```toml
/// [gemini]
/// model = "gemini-2.5-flash"
/// base_url = "https://generativelanguage.googleapis.com"
/// temperature = 0.7
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeminiSettings {
    /// Model identifier sent in the request path
    pub model: String,
    /// Scheme and host of the API, without a trailing path
    pub base_url: String,
    /// Sampling temperature
    pub temperature: f32,
}

/// Initial values of the form.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FormSettings {
    /// Audience label used when the audience field is left blank
    pub default_audience: String,
    /// Platform selected at startup
    pub default_platform: Platform,
    /// Tone selected at startup
    pub default_tone: Tone,
}

/// Terminal loop timing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TuiSettings {
    /// How long the loop waits for input before redrawing
    pub tick_rate_ms: u64,
    /// How long the "Copied!" confirmation stays visible
    pub copy_confirmation_ms: u64,
}

impl TuiSettings {
    /// Tick rate as a duration.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Copy confirmation window as a duration.
    pub fn copy_confirmation(&self) -> Duration {
        Duration::from_millis(self.copy_confirmation_ms)
    }
}

/// Complete SocialPulse configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SocialPulseConfig {
    /// Generation client settings
    pub gemini: GeminiSettings,
    /// Form defaults
    pub form: FormSettings,
    /// Terminal settings
    pub tui: TuiSettings,
}

impl SocialPulseConfig {
    /// The bundled defaults alone, ignoring any user files.
    ///
    /// # Example
    ///
    /// ```
    /// use socialpulse_config::SocialPulseConfig;
    ///
    /// let config = SocialPulseConfig::defaults().unwrap();
    /// assert_eq!(config.gemini.model, "gemini-2.5-flash");
    /// assert_eq!(config.tui.copy_confirmation_ms, 2000);
    /// ```
    pub fn defaults() -> SocialPulseResult<Self> {
        Self::build(Self::bundled())
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if absent.
    #[instrument]
    pub fn load() -> SocialPulseResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder = Self::bundled();

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("socialpulse").join("socialpulse.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("socialpulse").required(false));

        Self::build(builder)
    }

    /// Load the bundled defaults overlaid with one specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or leaves the
    /// merged settings invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> SocialPulseResult<Self> {
        debug!("Loading configuration from file");

        let builder = Self::bundled().add_source(File::from(path.as_ref()).required(true));
        Self::build(builder)
    }

    /// Replace the model name, e.g. from a command-line flag.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.gemini.model = model.into();
        self
    }

    /// Reject settings that parse but cannot work.
    pub fn validate(&self) -> SocialPulseResult<()> {
        if self.gemini.model.trim().is_empty() {
            return Err(ConfigError::invalid("gemini.model", "must not be empty").into());
        }
        if !self.gemini.base_url.starts_with("http://")
            && !self.gemini.base_url.starts_with("https://")
        {
            return Err(ConfigError::invalid(
                "gemini.base_url",
                format!("`{}` is not an http(s) URL", self.gemini.base_url),
            )
            .into());
        }
        if !(0.0..=2.0).contains(&self.gemini.temperature) {
            return Err(ConfigError::invalid(
                "gemini.temperature",
                format!("{} is outside 0.0..=2.0", self.gemini.temperature),
            )
            .into());
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::invalid("tui.tick_rate_ms", "must be positive").into());
        }
        Ok(())
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> SocialPulseResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::load(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfigError::parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_match_form_defaults() {
        let config = SocialPulseConfig::defaults().unwrap();
        assert_eq!(config.form.default_platform, Platform::LinkedIn);
        assert_eq!(config.form.default_tone, Tone::Professional);
        assert_eq!(config.form.default_audience, socialpulse_core::DEFAULT_AUDIENCE);
        assert!((config.gemini.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn with_model_overrides_only_model() {
        let base = SocialPulseConfig::defaults().unwrap();
        let config = base.clone().with_model("gemini-2.5-pro");
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.base_url, base.gemini.base_url);
    }

    #[test]
    fn validate_rejects_out_of_range_temperature() {
        let mut config = SocialPulseConfig::defaults().unwrap();
        config.gemini.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_base_url() {
        let mut config = SocialPulseConfig::defaults().unwrap();
        config.gemini.base_url = "generativelanguage.googleapis.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn durations_convert_from_millis() {
        let config = SocialPulseConfig::defaults().unwrap();
        assert_eq!(config.tui.copy_confirmation(), Duration::from_millis(2000));
        assert_eq!(config.tui.tick_rate(), Duration::from_millis(100));
    }
}
